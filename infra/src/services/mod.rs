//! Infrastructure service implementations

pub mod rate_limit;
