//! Notedown: a minimal Markdown note-taking service.
pub mod errors;
pub mod note;
pub mod notestore;
pub mod render;

pub use note::{Note, NoteID};
pub use notestore::{
    BoxedNoteStore, InMemoryStore, NoteStore, PostgreSQLStore, PostgreSQLStoreBuilder,
};
pub use render::{escape_html, render_html};
