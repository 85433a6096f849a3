//! Promo Codes

pub mod data;
pub mod dates;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod validity;

pub use errors::PromoCodesServiceError;
pub use service::*;
