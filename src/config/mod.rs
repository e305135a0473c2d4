//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables / CLI flags
//!     → settings.rs (clap parse, defaults for everything)
//!     → Settings (immutable for process lifetime)
//!     → shared via Arc to the HTTP server and handlers
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; there is no reload path
//! - Every field has a default so the service starts with zero configuration
//! - List-valued variables (origins, hosts) are comma-delimited

pub mod settings;

pub use settings::Settings;
