//! HTTP layer — endpoint table and `StorefrontHttp`.

pub mod client;
pub mod endpoint;

pub use client::StorefrontHttp;
pub use endpoint::{Access, Endpoint, RequestDescriptor};
