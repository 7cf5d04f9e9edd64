//! Application services layer - Use cases.
//!
//! Services sit between the HTTP handlers and the repositories. They
//! depend on abstractions (traits) for dependency inversion.

mod user_service;

pub use user_service::{UserManager, UserService};
