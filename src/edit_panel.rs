//! Show editing
//!
//! An `EditDraft` is a local, unsaved copy of the editable fields of one show.
//! Changes only touch the draft; submitting merges the draft over the original
//! record and yields the updated show for the list owner to apply.

use crate::catalog::{Show, ShowId};
use std::fmt;
use thiserror::Error;

/// Text fields of a draft that can be edited directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Type,
    Language,
    Status,
}

impl DraftField {
    /// All fields that must be non-empty before a draft can be submitted
    pub const REQUIRED: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Type,
        DraftField::Language,
        DraftField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Show Name",
            DraftField::Type => "Type",
            DraftField::Language => "Language",
            DraftField::Status => "Status",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that prevent a draft from being submitted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// A required field is empty
    #[error("{0} is required")]
    MissingField(DraftField),

    /// The draft belongs to a different show than the one it is merged into
    #[error("Draft for show {draft} cannot be applied to show {original}")]
    ShowMismatch { draft: ShowId, original: ShowId },
}

/// Local, unsaved copy of a show's editable fields
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    show_id: ShowId,
    name: String,
    kind: String,
    language: String,
    status: String,
    genres: Vec<String>,
    official_site: Option<String>,
}

impl EditDraft {
    /// Initializes a draft from the current values of `show`
    pub fn from_show(show: &Show) -> Self {
        Self {
            show_id: show.id,
            name: show.name.clone(),
            kind: show.kind.clone(),
            language: show.language.clone(),
            status: show.status.clone(),
            genres: show.genres.clone(),
            official_site: show.official_site.clone(),
        }
    }

    pub fn show_id(&self) -> ShowId {
        self.show_id
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Type => &self.kind,
            DraftField::Language => &self.language,
            DraftField::Status => &self.status,
        }
    }

    /// Sets a text field; surrounding whitespace of the input is dropped
    pub fn set_field(&mut self, field: DraftField, value: &str) {
        let value = value.trim().to_string();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Type => self.kind = value,
            DraftField::Language => self.language = value,
            DraftField::Status => self.status = value,
        }
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Appends a genre
    ///
    /// Blank input and genres already present (compared case-sensitively)
    /// are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the genre was added
    pub fn add_genre(&mut self, genre: &str) -> bool {
        let genre = genre.trim();
        if genre.is_empty() || self.genres.iter().any(|g| g == genre) {
            return false;
        }
        self.genres.push(genre.to_string());
        true
    }

    /// Removes the genre exactly matching `genre`
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed
    pub fn remove_genre(&mut self, genre: &str) -> bool {
        let before = self.genres.len();
        self.genres.retain(|g| g != genre);
        self.genres.len() != before
    }

    pub fn official_site(&self) -> Option<&str> {
        self.official_site.as_deref()
    }

    /// Sets the official site; blank input clears it
    pub fn set_official_site(&mut self, site: &str) {
        let site = site.trim();
        self.official_site = (!site.is_empty()).then(|| site.to_string());
    }

    /// Required fields that are currently empty, in form order
    pub fn validate(&self) -> Vec<DraftField> {
        DraftField::REQUIRED
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    /// Merges the draft over `original`
    ///
    /// Only the editable fields are taken from the draft; everything else,
    /// including `id`, is carried over from `original` unchanged.
    pub fn submit(&self, original: &Show) -> Result<Show, SubmitError> {
        if original.id != self.show_id {
            return Err(SubmitError::ShowMismatch {
                draft: self.show_id,
                original: original.id,
            });
        }
        if let Some(field) = self.validate().into_iter().next() {
            return Err(SubmitError::MissingField(field));
        }

        Ok(Show {
            name: self.name.clone(),
            kind: self.kind.clone(),
            language: self.language.clone(),
            status: self.status.clone(),
            genres: self.genres.clone(),
            official_site: self.official_site.clone(),
            ..original.clone()
        })
    }
}
