use thiserror::Error;

use crate::NoteID;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("note `{0}` doesn't exist")]
    NoteNotExist(NoteID),
    #[error("PostgreSQL error")]
    PostgreSQLError(#[from] sqlx::Error),
}
