//! CLI library components for the FAANG checks tool.

pub mod logging;
pub mod pipeline;
pub mod summary;
