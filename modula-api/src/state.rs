use modula_offer::OfferEngine;
use modula_store::NotificationRepo;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub notifications: Arc<NotificationRepo>,
    pub offers: Arc<OfferEngine>,
}
