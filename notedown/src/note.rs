//! Core types of Notedown.
use crate::render;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// ID of notes.
///
/// In a given note store ([`crate::notestore`]),
/// [`NoteID`] uniquely identifies a note.
/// IDs are assigned by the store when a note is created and are never reused.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(into = "i64", from = "i64")]
pub struct NoteID {
    id: i64,
}

impl From<NoteID> for i64 {
    fn from(id: NoteID) -> i64 {
        id.id
    }
}

impl From<i64> for NoteID {
    fn from(id: i64) -> NoteID {
        NoteID::new(id)
    }
}

impl NoteID {
    pub fn new(id: i64) -> Self {
        NoteID { id }
    }

    pub fn as_i64(&self) -> i64 {
        self.id
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A complete note entity for downstream consumption.
///
/// The title and content are stored verbatim by the storage backend.
/// The HTML form of the content is not a stored property,
/// it is computed on every read through [`Note::content_html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteID,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Render the Markdown content of this note into an HTML fragment.
    pub fn content_html(&self) -> String {
        render::render_html(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noteid_serializes_as_integer() {
        let ser = serde_json::to_string(&NoteID::new(42)).unwrap();
        assert_eq!(ser, "42");
    }

    #[test]
    fn noteid_deserializes_from_integer() {
        let id: NoteID = serde_json::from_str("42").unwrap();
        assert_eq!(id, NoteID::new(42));
    }

    #[test]
    fn content_html_is_derived() {
        let note = Note {
            id: NoteID::new(1),
            title: "Heading".to_owned(),
            content: "# Hello".to_owned(),
        };
        assert_eq!(note.content_html(), "<h1>Hello</h1>\n");
        // rendering leaves the stored content untouched
        assert_eq!(note.content, "# Hello");
    }
}
