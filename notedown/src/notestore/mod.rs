//! Storage backends of notes.
use crate::errors::NoteStoreError;
use crate::note::{Note, NoteID};
use futures::future::BoxFuture;

mod in_memory;
mod postgresql;
pub mod util;


pub use in_memory::InMemoryStore;
pub use postgresql::{PostgreSQLStore, PostgreSQLStoreBuilder};

pub type BoxedNoteStore = Box<dyn NoteStore + Send + Sync>;

/// An abstraction for storage backends.
pub trait NoteStore {
    /// Create a new note.
    ///
    /// The storage backend assigns a fresh [`NoteID`], distinct from the ID
    /// of every note it has created before, and returns the complete note.
    /// The note is durable before this resolves: a subsequent
    /// [`NoteStore::get_note`] or [`NoteStore::list_notes`] observes it.
    fn new_note(&self, title: String, content: String)
        -> BoxFuture<Result<Note, NoteStoreError>>;
    /// Get a note by its ID.
    ///
    /// An unknown ID is a normal negative outcome,
    /// reported as [`NoteStoreError::NoteNotExist`] rather than a backend fault.
    fn get_note(&self, id: NoteID) -> BoxFuture<Result<Note, NoteStoreError>>;
    /// Get every stored note, in creation order.
    ///
    /// Both backends allocate IDs monotonically, so ascending ID order
    /// is creation order.
    fn list_notes(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>>;
}
