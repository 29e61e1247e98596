//! JSON config types for the demo binaries.

pub mod place_demo;
