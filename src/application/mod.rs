//! Application layer services implementing business logic.
//!
//! Services consume the [`LinkRepository`](crate::domain::repositories::LinkRepository)
//! trait and provide the operations HTTP handlers and the admin CLI call.
//!
//! - [`services::link_service::LinkService`] - Code allocation, lookup, listing and deletion
//! - [`services::redirect_service::RedirectService`] - Redirect resolution with click counting

pub mod services;
