//! Game Session Controller: the view-model state machine driven by agent replies.
//!
//! [`GameSessionController`] owns a [`GameSession`] and awaits each request
//! itself. A UI that stores the session in a reactive cell drives the same
//! `begin_*` / [`send_pending`] / `complete` steps so no borrow is held
//! across an await.

mod controller;
mod session;

pub use controller::{GameSessionController, send_pending};
pub use session::{GameSession, PendingRequest, RequestKind};
