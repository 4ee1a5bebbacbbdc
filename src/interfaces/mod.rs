//! Presentation-layer adapters: CSV session scripts and JSON profiles.

pub mod csv;
pub mod json;
