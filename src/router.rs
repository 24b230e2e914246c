use crate::gate::LoginGate;
use crate::handlers::auth::{handle_login, handle_register};
use axum::{Router, routing::post};
use std::sync::Arc;

#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<LoginGate>,
}

impl GateState {
    pub fn new(gate: LoginGate) -> Self {
        Self {
            gate: Arc::new(gate),
        }
    }
}

pub fn gate_router(state: GateState) -> Router {
    Router::new()
        .route("/register", post(handle_register))
        .route("/login", post(handle_login))
        .with_state(state)
}
