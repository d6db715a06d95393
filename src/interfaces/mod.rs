//! Adapters between the outside world and the application.

pub mod csv;
