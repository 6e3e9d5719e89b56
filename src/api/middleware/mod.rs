//! API middleware stack.
//!
//! Only access logging today; it wraps every route.

pub mod audit;
