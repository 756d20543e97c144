use crate::notestore::BoxedNoteStore;

/// Seed a store with a few Markdown notes.
///
/// Used by the web frontend when `populateinmemorystore` is enabled, so a
/// development server has something to show.
pub async fn populate_demo_notes(store: &BoxedNoteStore) {
    store
        .new_note(
            "Welcome".to_owned(),
            "# Welcome to Notedown\nWrite notes in *Markdown*, view them rendered.\n".to_owned(),
        )
        .await
        .unwrap();
    store
        .new_note(
            "Code testing".to_owned(),
            "## Code testing\n`inline code`\n```python\na = [1, 2, 3, 4]\nfor n in a:\n    print(n)\n```\n"
                .to_owned(),
        )
        .await
        .unwrap();
    store
        .new_note(
            "Groceries".to_owned(),
            "- milk\n- eggs\n- ~~flour~~\n".to_owned(),
        )
        .await
        .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryStore;

    #[tokio::test]
    async fn demo_notes_populated() {
        let store: BoxedNoteStore = Box::new(InMemoryStore::new());
        populate_demo_notes(&store).await;
        let notes = store.list_notes().await.unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].title, "Welcome");
    }
}
