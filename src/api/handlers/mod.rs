//! HTTP request handlers.

pub mod card;
pub mod health;

pub use card::card_handler;
pub use health::health_handler;
