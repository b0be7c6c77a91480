//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod rewrite;
pub mod routes;

pub use rewrite::{rewrite_layer, rewrite_request};
pub use routes::register_routes;
