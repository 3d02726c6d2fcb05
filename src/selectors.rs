/// CSS selectors for the Suwayomi library view
///
/// These track the host UI's markup and need updating whenever the
/// library page is restyled. Nothing here checks whether they still match.
use serde::{Deserialize, Serialize};

/// Label of the injected sort control
pub const BUTTON_LABEL: &str = "Sort: Recently Published";

/// Logical page roles mapped to CSS selectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub grid_items: String,
    pub title_link: String,
    pub chapter_date: String,
    pub toolbar: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            grid_items: r#"[data-testid="library-grid"] .MuiGrid2-root"#.to_string(),
            title_link: r#"a[href*="/manga/"]"#.to_string(),
            chapter_date: r#"[data-testid="chapter-date"], [class*="ChapterDate"], time"#.to_string(),
            toolbar: r#"[data-testid="library-toolbar"], header, .MuiToolbar-root"#.to_string(),
        }
    }
}
