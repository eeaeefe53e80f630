//! HTTP building blocks: MIME detection, response builders, and
//! conditional request support.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export common builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_options_response,
};
