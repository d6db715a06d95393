//! Domain layer: jobs, reports, the payout engine and the storage port.
//!
//! Everything in here except `ports` is synchronous and side-effect free.

pub mod arith;
pub mod format;
pub mod job;
pub mod parse;
pub mod payout;
pub mod ports;
