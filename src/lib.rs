pub mod config;
pub mod db;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod router;
pub mod service;

pub use error::GateError;
pub use gate::{LoginGate, SessionContext};
pub use service::CredentialStore;
