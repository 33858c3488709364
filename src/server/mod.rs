// Server module entry
// Listener setup, connection serving and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), use server_loop instead
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::run_server;
pub use signal::start_signal_handler;
