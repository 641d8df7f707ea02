use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// An admin notice pending display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub source: String,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(source: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Process-local notification store.
///
/// The surrounding host feeds notices in; dismissal clears the whole set,
/// matching the single dismiss-all endpoint it backs.
pub struct NotificationRepo {
    notifications: RwLock<HashMap<Uuid, Notification>>,
}

impl NotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: RwLock::new(HashMap::new()),
        }
    }

    pub async fn push(&self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.notifications.write().await.insert(id, notification);
        id
    }

    /// Current notices, oldest first.
    pub async fn list(&self) -> Vec<Notification> {
        let mut all: Vec<Notification> =
            self.notifications.read().await.values().cloned().collect();
        all.sort_by_key(|n| n.created_at);
        all
    }

    /// Clear every notice, returning how many were dismissed.
    pub async fn dismiss_all(&self) -> usize {
        let mut notifications = self.notifications.write().await;
        let dismissed = notifications.len();
        notifications.clear();
        dismissed
    }

    pub async fn count(&self) -> usize {
        self.notifications.read().await.len()
    }
}

impl Default for NotificationRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_push_and_list() {
        let repo = NotificationRepo::new();
        repo.push(Notification::new("modula", "Update available", "2.0 is out")).await;
        repo.push(Notification::new("modula", "Review request", "Enjoying Modula?")).await;

        let all = repo.list().await;
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_dismiss_all_clears_and_counts() {
        let repo = NotificationRepo::new();
        repo.push(Notification::new("modula", "a", "a")).await;
        repo.push(Notification::new("modula", "b", "b")).await;

        assert_eq!(repo.dismiss_all().await, 2);
        assert_eq!(repo.count().await, 0);

        // Dismissing again is a no-op.
        assert_eq!(repo.dismiss_all().await, 0);
    }
}
