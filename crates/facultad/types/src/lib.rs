//! # facultad-types
//!
//! Shared vocabulary of the facultad electoral model:
//!
//! - natural identifiers ([`Dni`], [`Periodo`], [`AgrupacionId`])
//! - the three mutually exclusive constituencies ([`Claustro`])
//! - elective offices ([`Office`]) and the five vote relations ([`VoteKind`])
//! - read-back records returned by the registry
//!
//! Table and column names live here next to the enums that select them, so
//! the SQL built by the registry is always drawn from a closed set.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod claustro;
mod ids;
mod model;
mod office;

pub use claustro::{Claustro, ParseClaustroError};
pub use ids::{AgrupacionId, Dni, Periodo};
pub use model::{Ballot, CensusEntry, CouncilSeat, FacultyUnit, Grouping, SuperiorCouncilSeat, Tenure};
pub use office::{Office, VoteKind};
