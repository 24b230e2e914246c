use crate::db::sqlite::{UserStorage, connect};
use crate::error::GateError;
use crate::service::digest::digest_password;
use tracing::{debug, info};

/// Username/password store backed by the `users` table.
///
/// Cheap to clone; every clone shares the same pool. Duplicate usernames and
/// bad credentials come back as `Ok(false)`; only storage failures are `Err`.
#[derive(Clone)]
pub struct CredentialStore {
    storage: UserStorage,
}

impl CredentialStore {
    pub fn new(storage: UserStorage) -> Self {
        Self { storage }
    }

    /// Open (creating if absent) the database at `database_url` and make sure
    /// the schema exists.
    pub async fn open(database_url: &str, max_connections: u32) -> Result<Self, GateError> {
        let pool = connect(database_url, max_connections).await?;
        let store = Self::new(UserStorage::new(pool));
        store.ensure_schema().await?;
        let users = store.storage.count().await?;
        info!(users, "credential store ready");
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &UserStorage {
        &self.storage
    }

    pub async fn ensure_schema(&self) -> Result<(), GateError> {
        self.storage.init_schema().await
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<bool, GateError> {
        let password_hash = digest_password(password);
        match self.storage.insert(username, &password_hash).await? {
            Some(id) => {
                info!(id, username, "user registered");
                Ok(true)
            }
            None => {
                debug!(username, "registration rejected: username taken");
                Ok(false)
            }
        }
    }

    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, GateError> {
        let password_hash = digest_password(password);
        self.storage.matches(username, &password_hash).await
    }
}
