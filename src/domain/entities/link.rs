//! Link entity representing a short code and its click counter.

use chrono::{DateTime, Utc};

/// A short link with its click metadata.
///
/// `total_clicks` and `last_clicked` are only changed together by
/// [`LinkRepository::increment_clicks`](crate::domain::repositories::LinkRepository::increment_clicks),
/// so `last_clicked` is `None` exactly when `total_clicks` is zero.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link that has never been clicked.
    pub fn new(id: i64, code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            target_url,
            total_clicks: 0,
            last_clicked: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns true if the link has been followed at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }

    /// Records one click at `at`.
    pub(crate) fn record_click(&mut self, at: DateTime<Utc>) {
        self.total_clicks += 1;
        self.last_clicked = Some(at);
        self.updated_at = at;
    }
}

/// Input data for creating a new link.
///
/// Both fields are expected to be validated already.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc123");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.total_clicks, 0);
        assert!(link.last_clicked.is_none());
        assert_eq!(link.created_at, now);
        assert_eq!(link.updated_at, now);
        assert!(!link.was_clicked());
    }

    #[test]
    fn test_record_click_updates_counter_and_timestamp() {
        let created = Utc::now();
        let mut link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            created,
        );

        let first = created + Duration::seconds(5);
        let second = created + Duration::seconds(10);
        link.record_click(first);
        link.record_click(second);

        assert_eq!(link.total_clicks, 2);
        assert_eq!(link.last_clicked, Some(second));
        assert_eq!(link.updated_at, second);
        assert_eq!(link.created_at, created);
        assert!(link.was_clicked());
    }
}
