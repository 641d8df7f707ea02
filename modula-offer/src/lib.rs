pub mod models;
pub mod timezone;
pub mod windows;
pub mod rewrite;
pub mod styles;
pub mod engine;

pub use models::{Campaign, OfferWindow};
pub use engine::{OfferEngine, UpsellTransform};
pub use rewrite::RewriteError;
