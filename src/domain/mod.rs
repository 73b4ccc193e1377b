//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend requests and responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod address;
pub mod catalog;
pub mod checkout;
pub mod order;
pub mod payment;
