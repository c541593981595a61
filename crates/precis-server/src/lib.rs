//! Precis server library (used by the `precis` binary and integration tests).

pub mod gateway;
