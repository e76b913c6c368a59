pub mod api;
pub mod config;
pub mod embed;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod resolver;
pub mod runtime;
// cmd and reports belong to the binary (see main.rs).
