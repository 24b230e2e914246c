use crate::db::schema::SQLITE_INIT;
use crate::error::GateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool against `database_url`, creating the database file if it is missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, GateError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(connect_opts)
        .await?;
    debug!(database_url, max_connections, "sqlite pool opened");
    Ok(pool)
}

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), GateError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new user row. Returns the row id, or `None` when the
    /// username is already taken.
    pub async fn insert(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<i64>, GateError> {
        let res = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await;

        match res {
            Ok(done) => Ok(Some(done.last_insert_rowid())),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// True iff a row matches both `username` and `password_hash` exactly.
    pub async fn matches(&self, username: &str, password_hash: &str) -> Result<bool, GateError> {
        let rec: (i64,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ? AND password_hash = ?)",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(rec.0 != 0)
    }

    pub async fn count(&self) -> Result<i64, GateError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    #[cfg(test)]
    pub(crate) async fn stored_hash(&self, username: &str) -> Result<Option<String>, GateError> {
        let rec: Option<(String,)> =
            sqlx::query_as("SELECT password_hash FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(rec.map(|r| r.0))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Throwaway database file under the system temp dir.
    pub(crate) fn temp_database(tag: &str) -> (String, PathBuf) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "fitgate-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        (format!("sqlite:{}", path.display()), path)
    }

    async fn fresh_storage(tag: &str) -> (UserStorage, PathBuf) {
        let (url, path) = temp_database(tag);
        let pool = connect(&url, 1).await.expect("open pool");
        let storage = UserStorage::new(pool);
        storage.init_schema().await.expect("init schema");
        (storage, path)
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let (storage, path) = fresh_storage("ids").await;

        let first = storage.insert("alice", "h1").await.unwrap();
        let second = storage.insert("bob", "h2").await.unwrap();
        assert!(matches!((first, second), (Some(a), Some(b)) if b > a));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn duplicate_username_is_not_an_error() {
        let (storage, path) = fresh_storage("dup").await;

        assert!(storage.insert("alice", "h1").await.unwrap().is_some());
        assert_eq!(storage.insert("alice", "h2").await.unwrap(), None);

        let hash = storage.stored_hash("alice").await.unwrap();
        assert_eq!(hash.as_deref(), Some("h1"));
        assert_eq!(storage.count().await.unwrap(), 1);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn usernames_are_case_sensitive() {
        let (storage, path) = fresh_storage("case").await;

        assert!(storage.insert("Alice", "h1").await.unwrap().is_some());
        assert!(storage.insert("alice", "h2").await.unwrap().is_some());
        assert!(storage.matches("Alice", "h1").await.unwrap());
        assert!(!storage.matches("alice", "h1").await.unwrap());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let (storage, path) = fresh_storage("schema").await;

        storage.insert("alice", "h1").await.unwrap();
        storage.init_schema().await.unwrap();
        storage.init_schema().await.unwrap();

        assert_eq!(storage.count().await.unwrap(), 1);
        assert!(storage.matches("alice", "h1").await.unwrap());

        let _ = std::fs::remove_file(path);
    }
}
