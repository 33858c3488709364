//! HTTP protocol layer module
//!
//! JSON response builders shared by every endpoint, decoupled from the
//! Wake-on-LAN logic.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_500_response, build_options_response,
    json_response,
};
