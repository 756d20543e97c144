//! PostgreSQL-backed storage of notes.
use crate::errors::NoteStoreError;
use crate::{Note, NoteID, NoteStore};
use futures::future::BoxFuture;
use sqlx::postgres::PgConnectOptions;
use sqlx::{query_as, PgPool};

#[derive(sqlx::FromRow)]
struct PostgreSQLNoteRow {
    id: i64,
    title: String,
    content: String,
}

impl PostgreSQLNoteRow {
    fn into_note(self) -> Note {
        Note {
            id: NoteID::new(self.id),
            title: self.title,
            content: self.content,
        }
    }
}

pub struct PostgreSQLStoreBuilder {
    db_options: PgConnectOptions,
}

impl PostgreSQLStoreBuilder {
    pub fn new(db_options: PgConnectOptions) -> Self {
        Self { db_options }
    }

    pub async fn build(self) -> PostgreSQLStore {
        let connection_pool = PgPool::connect_with(self.db_options)
            .await
            .expect("Failed to connect to Postgres.");
        sqlx::migrate!("./migrations")
            .run(&connection_pool)
            .await
            .expect("Failed to migrate the database");
        PostgreSQLStore {
            db_pool: connection_pool,
        }
    }
}

pub struct PostgreSQLStore {
    db_pool: PgPool,
}

impl NoteStore for PostgreSQLStore {
    fn new_note(
        &self,
        title: String,
        content: String,
    ) -> BoxFuture<Result<Note, NoteStoreError>> {
        // ID allocation is delegated to the BIGSERIAL column, so the insert
        // is atomic and concurrent creates cannot collide
        Box::pin(async move {
            let row = query_as::<_, PostgreSQLNoteRow>(
                r#"INSERT INTO note(title, content) VALUES ($1, $2) RETURNING id, title, content"#,
            )
            .bind(title)
            .bind(content)
            .fetch_one(&self.db_pool)
            .await?;
            Ok(row.into_note())
        })
    }

    fn get_note(&self, id: NoteID) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let row = query_as::<_, PostgreSQLNoteRow>(
                r#"SELECT id, title, content FROM note WHERE id = $1"#,
            )
            .bind(id.as_i64())
            .fetch_optional(&self.db_pool)
            .await?;
            row.map(PostgreSQLNoteRow::into_note)
                .ok_or(NoteStoreError::NoteNotExist(id))
        })
    }

    fn list_notes(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move {
            let rows = query_as::<_, PostgreSQLNoteRow>(
                r#"SELECT id, title, content FROM note ORDER BY id"#,
            )
            .fetch_all(&self.db_pool)
            .await?;
            Ok(rows.into_iter().map(PostgreSQLNoteRow::into_note).collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notestore::tests as common_tests;
    use sqlx::{Connection, Executor, PgConnection};
    use std::env;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Configure the connect options with the following environment variables
    ///
    /// NOTEDOWN_DATABASE_HOST: default "localhost"
    /// NOTEDOWN_DATABASE_PORT: default "5432"
    /// NOTEDOWN_DATABASE_USERNAME: default not set
    /// NOTEDOWN_DATABASE_PASSWORD: default not set
    fn get_connect_options() -> PgConnectOptions {
        let host = env::var("NOTEDOWN_DATABASE_HOST").unwrap_or("localhost".to_owned());
        let port = env::var("NOTEDOWN_DATABASE_PORT").unwrap_or("5432".to_owned());
        let username = env::var("NOTEDOWN_DATABASE_USERNAME");
        let password = env::var("NOTEDOWN_DATABASE_PASSWORD");
        let options = PgConnectOptions::new()
            .host(&host)
            .port(port.parse().expect("Failed to parse port number"));
        if let Ok(ref u) = username {
            let p = password
                .as_ref()
                .expect("Password expected when a username is set");
            options.username(u).password(p)
        } else {
            options
        }
    }

    fn fresh_db_name() -> String {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before the epoch")
            .as_nanos();
        format!(
            "notedown_test_{}_{}",
            nanos,
            COUNTER.fetch_add(1, Ordering::Relaxed)
        )
    }

    async fn get_store() -> PostgreSQLStore {
        let options = get_connect_options();
        let mut connection = PgConnection::connect_with(&options)
            .await
            .expect("Failed to connect to Postgres");
        let db_name = fresh_db_name();
        connection
            .execute(&*format!(r#"CREATE DATABASE "{db_name}";"#))
            .await
            .expect("Failed to create database.");
        PostgreSQLStoreBuilder::new(options.database(&db_name))
            .build()
            .await
    }

    #[tokio::test]
    #[ignore = "requires a local PostgreSQL server"]
    async fn unique_id() {
        common_tests::unique_id(get_store().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a local PostgreSQL server"]
    async fn new_note_retrieve() {
        common_tests::new_note_retrieve(get_store().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a local PostgreSQL server"]
    async fn list_in_creation_order() {
        common_tests::list_in_creation_order(get_store().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a local PostgreSQL server"]
    async fn unknown_id_not_found() {
        common_tests::unknown_id_not_found(get_store().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a local PostgreSQL server"]
    async fn empty_title_permitted() {
        common_tests::empty_title_permitted(get_store().await).await;
    }
}
