//! Infrastructure adapters implementing the bank-side port.
//!
//! Currently a single in-memory directory, which doubles as the test bank.

pub mod in_memory;
