//! SQLite store for the facultad electoral model.
//!
//! This crate owns everything the rule layer treats as an external
//! collaborator:
//! - opening an in-memory or on-disk database through a `sqlx` pool
//! - applying the fixed schema (tables, unique and foreign-key constraints)
//! - classifying constraint failures so callers can tell a duplicate from a
//!   dangling reference
//!
//! The schema is the source of truth for uniqueness and referential
//! integrity; the rule layer only adds checks the schema cannot express.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod config;
mod error;
mod sqlite;

pub use config::StoreConfig;
pub use error::{classify, Constraint, StoreError, StoreResult};
pub use sqlite::{FacultadStore, SCHEMA};

pub use sqlx::{Sqlite, SqlitePool, Transaction};
