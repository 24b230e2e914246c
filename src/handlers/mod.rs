pub mod auth;

pub use auth::{handle_login, handle_register};
