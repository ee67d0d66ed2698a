//! Infrastructure layer - database, caching, state management, and error handling.

pub mod db;
pub mod db_errors;
pub mod scratch_cache;
pub mod state;
