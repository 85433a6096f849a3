//! Restodocks Domain Concerns

pub mod establishments;
pub mod promo_codes;
