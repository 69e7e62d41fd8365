pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod session;
// cmd and reports belong to the binary (see main.rs).
