//! Entity and DTO definitions.

pub mod dog;
