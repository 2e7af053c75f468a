#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use shortlink::domain::entities::{Link, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use shortlink::routes::router;
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, target_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}

pub fn memory_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone());
    (TestServer::new(router(state)).unwrap(), repo)
}

pub fn server_with(repo: Arc<dyn LinkRepository>) -> TestServer {
    TestServer::new(router(AppState::new(repo))).unwrap()
}

pub async fn seed(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.create(NewLink {
        code: code.to_string(),
        target_url: url.to_string(),
    })
    .await
    .unwrap()
}

/// Store whose reads work but whose writes fail, as if the database went away
/// between lookup and update.
#[derive(Default)]
pub struct FailingWritesRepository {
    pub inner: InMemoryLinkRepository,
}

fn unreachable_store() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl LinkRepository for FailingWritesRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(unreachable_store())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.inner.find_by_code(code).await
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(unreachable_store())
    }

    async fn delete(&self, _code: &str) -> Result<bool, AppError> {
        Err(unreachable_store())
    }

    async fn search(&self, term: &str) -> Result<Vec<Link>, AppError> {
        self.inner.search(term).await
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.inner.list_all().await
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable_store())
    }
}
