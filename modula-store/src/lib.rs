pub mod app_config;
pub mod notification_repo;

pub use notification_repo::{Notification, NotificationRepo};
