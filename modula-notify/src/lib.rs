pub mod client;
pub mod mutation;

pub use client::{DismissError, NotificationsClient, NOTIFICATIONS_PATH};
pub use mutation::{DismissMutation, MutationStatus};
