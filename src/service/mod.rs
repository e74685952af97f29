//! # Services
//!
//! Higher-level owners built on top of the codec.

pub mod collection;
