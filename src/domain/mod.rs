//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! `Link` rows map straight from sqlx and the repository contract reports
//! [`AppError`](crate::error::AppError). Business rules live in
//! [`crate::application::services`], concrete stores in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
