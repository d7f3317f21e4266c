//! Session module - who is signed in, shared explicitly with the components that need it.

mod session_model;

pub use session_model::{SessionContext, SessionState, UserSession};
