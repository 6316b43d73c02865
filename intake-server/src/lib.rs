//! Order Intake Server
//!
//! A minimal backend for tracking retail orders: records payments and
//! lifecycle events against an order code, extracts order codes from free
//! text (deterministic pattern scan with an optional AI-assisted pass), and
//! exports recorded activity as a flat CSV.
//!
//! # Module structure
//!
//! ```text
//! intake-server/src/
//! ├── core/      # configuration, state, HTTP server
//! ├── api/       # routes and handlers
//! ├── db/        # SQLite pool, row types, repositories
//! ├── extract/   # order-code extraction strategies
//! └── utils/     # errors, logging, time helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod extract;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::extract::CodeExtractor;
pub use crate::utils::logger::init_logger;
pub use crate::utils::{AppError, AppResult};

/// Load `.env` and initialize logging. Call once at process start.
pub fn setup_environment() -> Result<(), AppError> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}
