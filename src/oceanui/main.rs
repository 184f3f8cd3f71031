use clap::Parser;
use colored::*;
use oceanui::api::{CatalogApi, CmdMessage, MessageLevel};
use oceanui::clipboard::copy_to_clipboard;
use oceanui::config::{self, OceanConfig, Theme};
use oceanui::demos;
use oceanui::error::{CatalogError, Result};
use oceanui::filter::{FilterState, ALL_CATEGORIES};
use oceanui::highlight::{self, Segment};
use oceanui::model::{ComponentRecord, PropDoc, SnippetKind};
use oceanui::query;
use oceanui::store::bundled::BundledSource;
use oceanui::store::fs::FileSource;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, SnippetFormat, ThemeArg};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CatalogApi,
    theme: Theme,
    config_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            query,
            category,
            tags,
            url,
            share,
        }) => handle_list(&ctx, query, category, tags, url, share),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Demo { id }) => handle_demo(&ctx, &id),
        Some(Commands::Copy { id, format }) => handle_copy(&ctx, &id, format),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Theme { value }) => handle_theme(&ctx, value),
        None => handle_list(&ctx, None, None, Vec::new(), None, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let api = match &cli.catalog {
        Some(path) => CatalogApi::open(&FileSource::new(path))?,
        None => CatalogApi::open(&BundledSource)?,
    };

    let config_dir = config_dir()?;
    let theme = config::resolve_theme(&config_dir);

    Ok(AppContext {
        api,
        theme,
        config_dir,
    })
}

fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("OCEANUI_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    directories::ProjectDirs::from("dev", "oceanui", "oceanui")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Api("Could not determine config directory".into()))
}

fn handle_list(
    ctx: &AppContext,
    query: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    url: Option<String>,
    share: bool,
) -> Result<()> {
    let state = match url {
        Some(raw) => query::decode(&raw),
        None => FilterState {
            query: query.unwrap_or_default(),
            category,
            tags,
        },
    };

    if share {
        println!("{}", query::encode(&state));
        return Ok(());
    }

    let result = ctx.api.browse(&state)?;
    print_components(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show(id)?;
    if let Some(record) = &result.record {
        print_record(ctx, record);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_demo(ctx: &AppContext, id: &str) -> Result<()> {
    if let Some(demo) = demos::demo_for_id(id) {
        print_demo(demo);
        return Ok(());
    }

    // No demo mapped; say whether the component itself exists.
    let result = ctx.api.show(id)?;
    if result.record.is_some() {
        println!("{}", format!("No demo available for \"{}\".", id).dimmed());
    } else {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_copy(ctx: &AppContext, id: &str, format: SnippetFormat) -> Result<()> {
    let kind = match format {
        SnippetFormat::Jsx => SnippetKind::Jsx,
        SnippetFormat::Html => SnippetKind::Html,
    };

    let result = ctx.api.snippet(id, kind)?;
    if let Some(snippet) = &result.snippet {
        if copy_to_clipboard(&snippet.code) {
            println!(
                "{}",
                format!(
                    "Copied the {} {} snippet to the clipboard.",
                    snippet.component,
                    snippet.kind.label()
                )
                .green()
            );
        } else {
            println!(
                "{}",
                "Clipboard unavailable; nothing was copied.".yellow()
            );
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.facets()?;
    // The sentinel heads the list, exactly as the filter control shows it.
    println!("{}", ALL_CATEGORIES.bold());
    for category in &result.categories {
        println!("{}", category);
    }
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.facets()?;
    for tag in &result.tags {
        println!("#{}", tag);
    }
    Ok(())
}

fn handle_theme(ctx: &AppContext, value: Option<ThemeArg>) -> Result<()> {
    let value = match value {
        None => {
            println!("{}", ctx.theme);
            return Ok(());
        }
        Some(ThemeArg::Light) => Theme::Light,
        Some(ThemeArg::Dark) => Theme::Dark,
    };

    let mut cfg = OceanConfig::load(&ctx.config_dir).unwrap_or_default();
    cfg.theme = Some(value);
    match cfg.save(&ctx.config_dir) {
        Ok(()) => println!("{}", format!("Theme set to {}.", value).green()),
        // Preference storage is best-effort; the session still uses the value
        Err(_) => println!(
            "{}",
            format!("Could not save the theme preference; using {} for now.", value).yellow()
        ),
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;

fn print_components(records: &[ComponentRecord]) {
    if records.is_empty() {
        return;
    }

    let id_width = records.iter().map(|r| r.id.width()).max().unwrap_or(0);
    let cat_width = records.iter().map(|r| r.category.width()).max().unwrap_or(0);
    let name_space = LINE_WIDTH.saturating_sub(id_width + cat_width + 8);
    let name_width = records
        .iter()
        .map(|r| r.name.width())
        .max()
        .unwrap_or(0)
        .min(name_space);

    for record in records {
        let name = truncate_to_width(&record.name, name_space);

        let id_pad = " ".repeat(id_width.saturating_sub(record.id.width()));
        let name_pad = " ".repeat(name_width.saturating_sub(name.width()));
        let cat_pad = " ".repeat(cat_width.saturating_sub(record.category.width()));

        let tags = record
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "  {}{}  {}{}  {}{}  {}",
            record.id.yellow(),
            id_pad,
            name.bold(),
            name_pad,
            record.category.cyan(),
            cat_pad,
            tags.dimmed()
        );
    }

    println!();
    println!("{}", format!("{} components", records.len()).dimmed());
}

fn print_record(ctx: &AppContext, record: &ComponentRecord) {
    let tags = record
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");

    println!("{} {}", record.name.bold(), format!("({})", record.id).yellow());
    println!("{}  {}", record.category.cyan(), tags.dimmed());
    if !record.description.is_empty() {
        println!();
        println!("{}", record.description);
    }

    if !record.props.is_empty() {
        println!();
        println!("{}", "Props".bold());
        print_props(&record.props);
    }

    if !record.jsx.is_empty() {
        print_snippet(ctx, "JSX", &record.jsx);
    }
    if !record.html.is_empty() {
        print_snippet(ctx, "HTML", &record.html);
    }

    println!();
    match demos::demo_for_id(&record.id) {
        Some(demo) => print_demo(demo),
        None => println!("{}", "No demo available.".dimmed()),
    }
}

fn print_props(props: &[PropDoc]) {
    let name_width = props.iter().map(|p| p.name.width()).max().unwrap_or(0);
    let type_width = props.iter().map(|p| p.type_name.width()).max().unwrap_or(0);

    for prop in props {
        let name_pad = " ".repeat(name_width.saturating_sub(prop.name.width()));
        let type_pad = " ".repeat(type_width.saturating_sub(prop.type_name.width()));
        let default = prop
            .default
            .as_deref()
            .map(|d| format!("= {}", d))
            .unwrap_or_default();
        let description = prop.description.as_deref().unwrap_or("");

        println!(
            "  {}{}  {}{}  {:<10}  {}",
            prop.name.bold(),
            name_pad,
            prop.type_name.cyan(),
            type_pad,
            default,
            description.dimmed()
        );
    }
}

fn print_snippet(ctx: &AppContext, label: &str, code: &str) {
    println!();
    println!("{}", label.bold());
    println!("--------------------------------");
    for line in code.lines() {
        println!("{}", render_line(line, ctx.theme));
    }
}

/// Maps highlighter segments to the active palette: keywords blue,
/// string literals green, brighter variants on a dark background.
fn render_line(line: &str, theme: Theme) -> String {
    highlight::highlight(line)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.normal().to_string(),
            Segment::Keyword(text) => match theme {
                Theme::Light => text.blue().to_string(),
                Theme::Dark => text.bright_blue().to_string(),
            },
            Segment::Literal(text) => match theme {
                Theme::Light => text.green().to_string(),
                Theme::Dark => text.bright_green().to_string(),
            },
        })
        .collect()
}

fn print_demo(demo: demos::Demo) {
    println!("{}", demo.title().bold());
    for line in demo.preview() {
        println!("  {}", line);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
