//! # facultad-electoral
//!
//! Rule layer of the facultad electoral model.
//!
//! - **Census registrar** ([`CensusRegistrar`]): enrolls a person under exactly
//!   one constituency and stamps the constituency detail row.
//! - **Electoral registry** ([`ElectoralRegistry`]): political groupings and
//!   their per-period vote counts, directive and higher council seats, dean
//!   and rector candidacies, and the five vote relations between office
//!   holders.
//!
//! [`Facultad`] implements both over a [`facultad_store::FacultadStore`].
//! Uniqueness and references are left to the schema; the registry adds the
//! checks the schema cannot express and translates constraint failures into
//! [`ElectoralError`] kinds.
//!
//! ```no_run
//! # async fn demo() -> facultad_electoral::ElectoralResult<()> {
//! use facultad_electoral::{CensusRegistrar, ElectoralRegistry, Facultad};
//! use facultad_types::{Ballot, Dni, Periodo, Tenure, VoteKind};
//!
//! let model = Facultad::in_memory().await?;
//! model.register_faculty(Dni(123), "Rectora").await?;
//! model.create_rector(Dni(123), Periodo(2014)).await?;
//!
//! model.register_student(Dni(456), "Consejero").await?;
//! let agrupacion = model.create_grouping("G").await?;
//! model.create_council_seat(Dni(456), Periodo(2014), agrupacion).await?;
//!
//! let ballot = Ballot::new(Tenure::new(456, 2014), Tenure::new(123, 2014));
//! model.record_vote(VoteKind::DirectiveToRector, ballot).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod census;
mod config;
mod error;
mod facultad;
mod registry;
mod traits;
mod votes;

pub use config::RegistrarDefaults;
pub use error::{ElectoralError, ElectoralResult};
pub use facultad::Facultad;
pub use traits::{CensusRegistrar, ElectoralModel, ElectoralRegistry};
