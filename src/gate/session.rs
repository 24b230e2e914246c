/// Per-session login flag plus the username it was set for.
///
/// Owned by whoever drives the gate; nothing here is global or persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    logged_in: bool,
    username: String,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn sign_in(&mut self, username: impl Into<String>) {
        self.logged_in = true;
        self.username = username.into();
    }
}
