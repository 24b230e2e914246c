use tracing::info;

/// Entry point of the application sitting behind the login gate.
pub trait MainApp: Send + Sync {
    fn enter(&self, username: &str);
}

/// Stand-in used by the binary until the tracker itself is wired in.
pub struct TrackerPlaceholder;

impl MainApp for TrackerPlaceholder {
    fn enter(&self, username: &str) {
        info!(username, "entering fitness tracker");
    }
}
