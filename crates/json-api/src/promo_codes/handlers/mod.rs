//! Promo Code Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod summary;
pub(crate) mod toggle;
pub(crate) mod update;
