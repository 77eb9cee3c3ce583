//! Text rendering of the show list
//!
//! Turns the controller's current [`ListView`] into a plain-text table with a
//! footer, a loading placeholder, an error notice or an empty state.

use crate::catalog::Show;
use crate::controller::{ListView, ShowListController};
use std::fmt;

/// Number of placeholder rows drawn while a page is loading
const PLACEHOLDER_ROWS: usize = 5;

/// Column headers and widths (in characters)
const COLUMNS: [(&str, usize); 6] = [
    ("SHOW NAME", 28),
    ("TYPE", 12),
    ("LANGUAGE", 10),
    ("STATUS", 14),
    ("GENRES", 30),
    ("OFFICIAL SITE", 10),
];

/// Truncates `text` to at most `width` characters, marking cut text with '…'
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return format!("{text:<width$}");
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn row(cells: [&str; 6]) -> String {
    cells
        .iter()
        .zip(COLUMNS)
        .map(|(cell, (_, width))| fit(cell, width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Formats one table row for a show
pub fn show_row(show: &Show) -> String {
    let status = if show.is_running() {
        format!("● {}", show.status)
    } else {
        format!("○ {}", show.status)
    };
    let site = if show.official_site.is_some() {
        "Visit Site"
    } else {
        ""
    };
    let genres = show.genres.join(", ");
    row([
        show.name.as_str(),
        show.kind.as_str(),
        show.language.as_str(),
        status.as_str(),
        genres.as_str(),
        site,
    ])
}

/// Page number as shown to the user (one-based)
pub(crate) fn display_page(page: u32) -> u64 {
    u64::from(page) + 1
}

/// Catalog page index for a one-based page number entered by the user
pub(crate) fn page_from_display(number: u64) -> Option<u32> {
    number.checked_sub(1).and_then(|page| u32::try_from(page).ok())
}

/// Display adapter drawing the list area for the controller's current state
pub struct ListRender<'a>(pub &'a ShowListController);

impl fmt::Display for ListRender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controller = self.0;
        let header = row(COLUMNS.map(|(title, _)| title));
        let rule = "─".repeat(header.chars().count());

        writeln!(f, "TV Shows · page {}", display_page(controller.page()))?;
        if !controller.search_query().is_empty() {
            writeln!(f, "Search: \"{}\"", controller.search_query())?;
        }
        writeln!(f, "{header}\n{rule}")?;

        match controller.view() {
            ListView::Loading => {
                let skeleton = COLUMNS.map(|(_, width)| "░".repeat(width / 2));
                let placeholder = row(skeleton.each_ref().map(String::as_str));
                for _ in 0..PLACEHOLDER_ROWS {
                    writeln!(f, "{placeholder}")?;
                }
                writeln!(f, "{rule}\nLoading shows…")
            }
            ListView::Failed { message } => {
                writeln!(f, "\n  {message}\n  Choose \"Retry\" to load the page again.\n")?;
                writeln!(f, "{rule}\nShowing 0 results")
            }
            ListView::Empty => {
                writeln!(f, "\n  No shows found")?;
                writeln!(
                    f,
                    "  Try adjusting your search or filters to find what you're looking for.\n"
                )?;
                writeln!(f, "{rule}\nShowing 0 results")
            }
            ListView::Rows(shows) => {
                for show in &shows {
                    writeln!(f, "{}", show_row(show))?;
                }
                writeln!(f, "{rule}\nShowing {} results", shows.len())
            }
        }
    }
}

/// Renders the list area for the controller's current state
pub fn render_list(controller: &ShowListController) -> String {
    ListRender(controller).to_string()
}
