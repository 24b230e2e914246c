pub mod credential_store;
pub mod digest;

pub use credential_store::CredentialStore;
pub use digest::digest_password;
