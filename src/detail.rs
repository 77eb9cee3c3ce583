//! Read-only show details
//!
//! Formats every field of one show for display. Whether details are shown at
//! all is decided by the controller's view selection; this module only turns a
//! `Show` (or nothing) into presentable text.

use crate::catalog::Show;
use std::fmt;

const NOT_AVAILABLE: &str = "N/A";

/// Formatted, read-only view of a single show
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDetails {
    pub name: String,
    pub genres: Vec<String>,
    pub status: String,
    /// Whether the status badge marks the show as running
    pub running: bool,
    pub kind: String,
    pub language: String,
    /// Rating formatted as "x/10", absent when unrated
    pub rating: Option<String>,
    /// Airing days and time, e.g. "Monday, Tuesday at 21:00"
    pub schedule: String,
    /// Network and country, e.g. "CBS (United States)"
    pub network: String,
    pub premiered: String,
    /// Summary with HTML markup converted to plain text
    pub summary: String,
    pub official_site: Option<String>,
    pub image: Option<String>,
}

/// Builds the details for the designated show, or nothing when none is designated
pub fn render_details(show: Option<&Show>) -> Option<ShowDetails> {
    show.map(ShowDetails::from_show)
}

impl ShowDetails {
    pub fn from_show(show: &Show) -> Self {
        let time = show.schedule.time.trim();
        let schedule = match (show.schedule.days.is_empty(), time.is_empty()) {
            (true, true) => NOT_AVAILABLE.to_string(),
            (true, false) => time.to_string(),
            (false, true) => format!("{} at {NOT_AVAILABLE}", show.schedule.days.join(", ")),
            (false, false) => format!("{} at {time}", show.schedule.days.join(", ")),
        };

        let network = match &show.network {
            Some(network) => match &network.country {
                Some(country) => format!("{} ({})", network.name, country.name),
                None => network.name.clone(),
            },
            None => "Not available".to_string(),
        };

        Self {
            name: show.name.clone(),
            genres: show.genres.clone(),
            status: show.status.clone(),
            running: show.is_running(),
            kind: show.kind.clone(),
            language: show.language.clone(),
            rating: show.rating.average.map(|average| format!("{average}/10")),
            schedule,
            network,
            premiered: show
                .premiered
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            summary: show
                .summary
                .as_deref()
                .map(|s| nanohtml2text::html2text(s).trim().to_string())
                .unwrap_or_default(),
            official_site: show.official_site.clone(),
            image: show.image.as_ref().map(|image| image.original.clone()),
        }
    }
}

impl fmt::Display for ShowDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.name)?;
        if !self.genres.is_empty() {
            writeln!(f, "{}", self.genres.join(" | "))?;
        }
        writeln!(f)?;

        let badge = if self.running { "●" } else { "○" };
        write!(f, "Status:     {} {}", badge, self.status)?;
        if let Some(rating) = &self.rating {
            write!(f, "  ★ {rating}")?;
        }
        writeln!(f)?;
        writeln!(f, "Type:       {}", self.kind)?;
        writeln!(f, "Language:   {}", self.language)?;
        writeln!(f, "Schedule:   {}", self.schedule)?;
        writeln!(f, "Network:    {}", self.network)?;
        writeln!(f, "Premiered:  {}", self.premiered)?;
        if let Some(image) = &self.image {
            writeln!(f, "Image:      {image}")?;
        }
        if let Some(site) = &self.official_site {
            writeln!(f, "Website:    {site}")?;
        }

        if !self.summary.is_empty() {
            writeln!(f, "\nSummary\n{}", self.summary)?;
        }
        Ok(())
    }
}
