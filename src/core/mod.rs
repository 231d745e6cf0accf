pub mod cache;
pub mod classify;
pub mod clock;
pub mod decoder;
pub mod error;
pub mod format;
pub mod label;
pub mod reconcile;
