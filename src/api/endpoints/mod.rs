//! API endpoint handlers.
//!
//! Handlers only translate HTTP to advisor calls; the logic lives in
//! `crate::advisor`.

pub mod diseases;
pub mod health;
pub mod history;
pub mod predict;
pub mod symptoms;
