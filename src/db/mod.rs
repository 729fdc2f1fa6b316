//! Database module for SQLite operations.
//!
//! This module provides:
//! - Store initialization and the additive schema migration
//! - SQLite pragma configuration
//! - Repository layer for item operations

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;
