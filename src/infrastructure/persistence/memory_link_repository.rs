//! In-process link repository.
//!
//! Keeps links in a `HashMap` behind a tokio `RwLock`. Check-and-insert and
//! the click read-modify-write both run under the write lock, which gives the
//! same uniqueness and no-lost-update guarantees as the PostgreSQL store.
//! Nothing is persisted across restarts.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: HashMap<String, Link>,
    next_id: i64,
}

/// Memory-backed [`LinkRepository`].
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first; ids break ties between links created in the same instant.
fn newest_first(mut links: Vec<Link>) -> Vec<Link> {
    links.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    links
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_code_key" }),
            ));
        }

        inner.next_id += 1;
        let link = Link::new(inner.next_id, new_link.code, new_link.target_url, Utc::now());
        inner.links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.inner.read().await.links.get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.links.get_mut(code).map(|link| {
            link.record_click(Utc::now());
            link.clone()
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.inner.write().await.links.remove(code).is_some())
    }

    async fn search(&self, term: &str) -> Result<Vec<Link>, AppError> {
        let needle = term.to_lowercase();
        let inner = self.inner.read().await;

        let matches = inner
            .links
            .values()
            .filter(|link| {
                link.code.to_lowercase().contains(&needle)
                    || link.target_url.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        Ok(newest_first(matches))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(newest_first(inner.links.values().cloned().collect()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
