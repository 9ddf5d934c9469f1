pub mod models;
pub mod selector;
pub mod session;
pub mod service;

pub use models::{SpinOutcome, SpinPick, SpinRequest, SpinSession, SpinTarget};
pub use selector::{select, Selection};
pub use session::SessionStore;
pub use service::SpinService;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SpinError {
    #[error("No destinations match your filters")]
    NoMatches,

    #[error("Session not found: {0}")]
    SessionNotFound(uuid::Uuid),
}
