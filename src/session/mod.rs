//! Session and query client
//!
//! - `SessionContext`: the user id plus the one session currently held
//! - `ChatDisplay`: the single response currently on screen
//! - `ChatController`: drives catalog, session creation and queries

pub mod context;
pub mod controller;
pub mod display;

pub use context::{MissingSessionPolicy, Session, SessionContext};
pub use controller::{ChatController, QueryOutcome};
pub use display::ChatDisplay;
