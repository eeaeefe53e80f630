// Request handling module entry point
// Dispatches requests to static file serving and listing generation

pub mod listing;
pub mod router;
pub mod static_files;

pub use router::handle_request;
