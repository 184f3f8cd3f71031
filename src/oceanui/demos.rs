//! # Demo registry
//!
//! Maps component ids to static terminal previews. A few components have
//! carried more than one id over time; the aliases resolve to the same demo
//! so old links keep working. Records with no mapping get a defined
//! "no demo available" fallback from the CLI layer, never an error.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    PrimaryButton,
    StatsCard,
    FloatingLabelInput,
    Tabs,
    Stepper,
    Pagination,
    Carousel,
    Dropdown,
    Tooltip,
    Modal,
    Accordion,
    Toast,
    DataTable,
    CommandPalette,
}

/// Resolves a component id (or one of its historical aliases) to its demo.
pub fn demo_for_id(id: &str) -> Option<Demo> {
    match id {
        "button-primary" => Some(Demo::PrimaryButton),
        "card-stats" => Some(Demo::StatsCard),
        "input-floating-label" => Some(Demo::FloatingLabelInput),

        "nav-tabs" => Some(Demo::Tabs),
        "nav-stepper" => Some(Demo::Stepper),
        "nav-pagination" => Some(Demo::Pagination),

        "int-carousel" => Some(Demo::Carousel),
        "ui-dropdown" => Some(Demo::Dropdown),
        "ui-tooltip" => Some(Demo::Tooltip),
        "ui-modal" => Some(Demo::Modal),
        "int-accordion" => Some(Demo::Accordion),
        "ui-toast" | "int-toast" => Some(Demo::Toast),
        "data-data-table" | "data-table" => Some(Demo::DataTable),

        "layout-command-palette" | "int-command-palette" => Some(Demo::CommandPalette),

        _ => None,
    }
}

impl Demo {
    pub fn title(&self) -> &'static str {
        match self {
            Demo::PrimaryButton => "Primary Button",
            Demo::StatsCard => "Stats Card",
            Demo::FloatingLabelInput => "Floating Label Input",
            Demo::Tabs => "Tabs",
            Demo::Stepper => "Stepper",
            Demo::Pagination => "Pagination",
            Demo::Carousel => "Carousel",
            Demo::Dropdown => "Dropdown",
            Demo::Tooltip => "Tooltip",
            Demo::Modal => "Modal",
            Demo::Accordion => "Accordion",
            Demo::Toast => "Toast",
            Demo::DataTable => "Data Table",
            Demo::CommandPalette => "Command Palette",
        }
    }

    /// A static preview of the widget, one string per terminal line.
    pub fn preview(&self) -> Vec<&'static str> {
        match self {
            Demo::PrimaryButton => vec!["( Get Started )"],
            Demo::StatsCard => vec![
                "Active Users",
                "12,451  +3.2%",
                "[ Refresh ]",
            ],
            Demo::FloatingLabelInput => vec![
                " Email",
                "[ you@example.com     ]",
                "Please enter a valid email.",
            ],
            Demo::Tabs => vec![
                "[Overview] Details  Reviews",
                "Summary content...",
            ],
            Demo::Stepper => vec![
                "(1) Cart -- (2) Shipping -- (3) Payment",
                "[ Back ]  [ Next ]",
            ],
            Demo::Pagination => vec!["< Prev  [1] 2 3  Next >"],
            Demo::Carousel => vec![
                "Slide 1: One",
                "< Prev  Next >",
            ],
            Demo::Dropdown => vec![
                "[ Menu v ]",
                "  Item A",
                "  Item B",
            ],
            Demo::Tooltip => vec![
                "[ Hover or focus me ]",
                "  (Tooltip text)",
            ],
            Demo::Modal => vec![
                "+--------------------------+",
                "| Modal title              |",
                "| This is a modal preview. |",
                "|      [ Cancel ] [ OK ]   |",
                "+--------------------------+",
            ],
            Demo::Accordion => vec![
                "v Section 1",
                "  Content",
                "> Section 2",
            ],
            Demo::Toast => vec![
                "[ Show Toast ]  [ Queue Another ]",
                "  Saved successfully",
            ],
            Demo::DataTable => vec![
                "Name ^   Role",
                "Alex     Engineer",
                "Chris    Support",
                "Page 1 of 2   < Prev  Next >",
            ],
            Demo::CommandPalette => vec![
                "Run a command",
                "> Type...",
                "Press Ctrl+K to open",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_the_same_demo() {
        assert_eq!(demo_for_id("ui-toast"), demo_for_id("int-toast"));
        assert_eq!(demo_for_id("data-data-table"), demo_for_id("data-table"));
        assert_eq!(
            demo_for_id("layout-command-palette"),
            demo_for_id("int-command-palette")
        );
    }

    #[test]
    fn unknown_ids_have_no_demo() {
        assert_eq!(demo_for_id("layout-hero"), None);
        assert_eq!(demo_for_id(""), None);
    }

    #[test]
    fn every_demo_has_a_preview() {
        let demos = [
            Demo::PrimaryButton,
            Demo::StatsCard,
            Demo::FloatingLabelInput,
            Demo::Tabs,
            Demo::Stepper,
            Demo::Pagination,
            Demo::Carousel,
            Demo::Dropdown,
            Demo::Tooltip,
            Demo::Modal,
            Demo::Accordion,
            Demo::Toast,
            Demo::DataTable,
            Demo::CommandPalette,
        ];
        for demo in demos {
            assert!(!demo.preview().is_empty());
            assert!(!demo.title().is_empty());
        }
    }
}
