//! Business logic services for the application layer.

pub mod card_service;

pub use card_service::CardService;
