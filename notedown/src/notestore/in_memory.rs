//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::{Note, NoteID, NoteStore};
use futures::future::BoxFuture;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory storage.
///
/// This is mostly designed for development use, because there is no
/// persistence layer.
#[derive(Debug)]
struct InMemoryStoreInner {
    notes: BTreeMap<NoteID, Note>,
    next_id: i64,
}

impl Default for InMemoryStoreInner {
    fn default() -> Self {
        InMemoryStoreInner {
            notes: Default::default(),
            next_id: 1,
        }
    }
}

impl InMemoryStoreInner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Allocate a new [`NoteID`].
    ///
    /// The counter only ever moves forward, so IDs are never reused.
    /// Callers hold the store's write lock, which serializes allocation.
    fn get_new_noteid(&mut self) -> NoteID {
        let id = NoteID::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn new_note(&mut self, title: String, content: String) -> Result<Note, NoteStoreError> {
        let id = self.get_new_noteid();
        let note = Note { id, title, content };
        // sanity check
        assert!(!self.notes.contains_key(&id));
        self.notes.insert(id, note.clone());
        Ok(note)
    }

    fn get_note(&self, id: NoteID) -> Result<Note, NoteStoreError> {
        self.notes
            .get(&id)
            .cloned()
            .ok_or(NoteStoreError::NoteNotExist(id))
    }

    fn list_notes(&self) -> Result<Vec<Note>, NoteStoreError> {
        // BTreeMap iterates in ascending ID order, which is creation order
        Ok(self.notes.values().cloned().collect())
    }
}

pub struct InMemoryStore {
    ims: RwLock<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            ims: RwLock::new(InMemoryStoreInner::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for InMemoryStore {
    fn new_note(
        &self,
        title: String,
        content: String,
    ) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.new_note(title, content)
        })
    }

    fn get_note(&self, id: NoteID) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            ims.get_note(id)
        })
    }

    fn list_notes(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            ims.list_notes()
        })
    }
}
