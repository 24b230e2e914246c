//! Login/registration flow: forms in, outcomes out, and the session flag
//! that decides whether the main application is reachable.

pub mod flow;
pub mod forms;
pub mod main_app;
pub mod session;

pub use flow::{LoginGate, LoginOutcome, RegisterOutcome, Screen};
pub use forms::{LoginForm, RegisterForm};
pub use main_app::{MainApp, TrackerPlaceholder};
pub use session::SessionContext;
