//! Domain layer - Core business entities
//!
//! Domain models represent business concepts independent of
//! infrastructure concerns.

pub mod user;

pub use user::{User, UserInput};
