//! Core domain entities.
//!
//! The service has a single entity, [`Link`], plus the [`NewLink`] input used
//! to create one. Entities are plain data; the JSON shape exposed over HTTP
//! lives in [`crate::api::dto`].

pub mod link;

pub use link::{Link, NewLink};
