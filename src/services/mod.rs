//! Business logic and service layer modules.
//!
//! Storage traits and their MongoDB / in-memory implementations, password
//! hashing, token issuance, and the metrics collector.

pub mod auth;
pub mod memory;
pub mod metrics;
pub mod mongo;
pub mod password;
pub mod state;
pub mod store;
pub mod token;

pub use auth::*;
pub use memory::*;
pub use metrics::*;
pub use mongo::*;
pub use password::*;
pub use state::*;
pub use store::*;
pub use token::*;
