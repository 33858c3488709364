//! Request handler module
//!
//! Responsible for request routing dispatch and the three endpoint handlers.

mod info;
pub mod router;
mod wake;

// Re-export main entry point
pub use router::{handle_request, AVAILABLE_ENDPOINTS};
