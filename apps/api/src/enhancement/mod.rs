// Section enhancement: static templates, the pluggable Enhancer trait, and its HTTP handler.

pub mod engine;
pub mod handlers;
pub mod templates;
