//! Establishments

pub mod errors;
pub mod models;
pub mod records;
mod repository;
pub mod service;

pub use errors::EstablishmentsServiceError;
pub use service::*;
