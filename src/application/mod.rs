//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `Terminal`, the stateless request handler that
//! authorizes cards against an `AccountDirectory` and carries out balance,
//! deposit, and withdrawal requests.

pub mod terminal;
