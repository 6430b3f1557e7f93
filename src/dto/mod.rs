//! Data transfer objects crossing the service boundary.

pub mod categories;
