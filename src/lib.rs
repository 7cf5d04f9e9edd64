//! User API - CRUD HTTP service for user records.
//!
//! Requests flow through thin layers:
//!
//! - **api**: HTTP handlers, request bodies, extractors, routes
//! - **services**: Use cases, forwarding to repositories
//! - **infra**: Database connection, migrations, SeaORM repositories
//! - **domain**: Core entities
//! - **config**: Application configuration and constants
//! - **errors**: Centralized error handling
//! - **cli** / **commands**: Command-line interface
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserInput};
pub use errors::{AppError, AppResult};
