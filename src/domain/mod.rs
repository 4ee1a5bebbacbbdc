//! Domain types and the bank-side port.

pub mod account;
pub mod card;
pub mod outcome;
pub mod ports;
pub mod request;
