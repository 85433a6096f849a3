//! Establishment Handlers

pub(crate) mod index;
pub(crate) mod summary;
