//! Utility modules for the page builder.

pub mod minify;
pub mod slug;
