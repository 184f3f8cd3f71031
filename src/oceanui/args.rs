use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "oceanui", bin_name = "oceanui", version = get_version())]
#[command(about = "Browse the Ocean UI component catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load a catalog JSON file instead of the bundled data
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List components, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Free-text search over names, categories and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Only show one category ("All" clears the filter)
        #[arg(short, long)]
        category: Option<String>,

        /// Require a tag; repeat the flag to require several
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Restore filters from a shared query string (overrides the flags above)
        #[arg(long, value_name = "QUERYSTRING")]
        url: Option<String>,

        /// Print the shareable query string for these filters instead of listing
        #[arg(long)]
        share: bool,
    },

    /// View one component in full: fields, props, snippets and demo
    #[command(alias = "v")]
    View {
        /// Component id (e.g. button-primary)
        id: String,
    },

    /// Show a component's demo preview
    Demo {
        /// Component id (e.g. ui-modal)
        id: String,
    },

    /// Copy a component snippet to the clipboard
    #[command(alias = "cp")]
    Copy {
        /// Component id
        id: String,

        /// Which snippet to copy
        #[arg(long, value_enum, default_value_t = SnippetFormat::Jsx)]
        format: SnippetFormat,
    },

    /// List catalog categories
    Categories,

    /// List catalog tags
    Tags,

    /// Get or set the color theme
    Theme {
        /// "light" or "dark"; omit to print the active theme
        value: Option<ThemeArg>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SnippetFormat {
    Jsx,
    Html,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}
