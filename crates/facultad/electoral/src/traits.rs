use crate::ElectoralResult;
use async_trait::async_trait;
use facultad_types::{
    AgrupacionId, Ballot, CensusEntry, Claustro, CouncilSeat, Dni, FacultyUnit, Grouping, Office,
    Periodo, SuperiorCouncilSeat, Tenure, VoteKind,
};

/// Enrolls persons into exactly one constituency.
#[async_trait]
pub trait CensusRegistrar: Send + Sync {
    /// Register `dni` under `claustro`, creating the assignment row, the
    /// constituency detail row and, if absent, the faculty-unit singleton.
    ///
    /// Fails with `DuplicateIdentity` if `dni` is already registered under
    /// any constituency.
    async fn register(&self, dni: Dni, nombre: &str, claustro: Claustro) -> ElectoralResult<()>;

    async fn register_student(&self, dni: Dni, nombre: &str) -> ElectoralResult<()> {
        self.register(dni, nombre, Claustro::Estudiantes).await
    }

    async fn register_graduate(&self, dni: Dni, nombre: &str) -> ElectoralResult<()> {
        self.register(dni, nombre, Claustro::Graduados).await
    }

    async fn register_faculty(&self, dni: Dni, nombre: &str) -> ElectoralResult<()> {
        self.register(dni, nombre, Claustro::Profesores).await
    }

    /// Census registration of `dni`, if any.
    async fn census_entry(&self, dni: Dni) -> ElectoralResult<Option<CensusEntry>>;

    /// The faculty-unit singleton, once the first person was registered.
    async fn faculty_unit(&self) -> ElectoralResult<Option<FacultyUnit>>;
}

/// Groupings, offices and votes. Append-only: nothing here updates or
/// deletes an existing row.
#[async_trait]
pub trait ElectoralRegistry: Send + Sync {
    /// Create a political grouping and return its store-assigned id.
    async fn create_grouping(&self, nombre: &str) -> ElectoralResult<AgrupacionId>;

    /// Record the votes a grouping received in `periodo`. Once per
    /// (grouping, period); the period is created if absent.
    async fn record_grouping_votes(
        &self,
        agrupacion: AgrupacionId,
        periodo: Periodo,
        votos: u32,
    ) -> ElectoralResult<()>;

    /// Seat `dni` on the directive council for `periodo` under `agrupacion`.
    ///
    /// An unregistered person fails with `EligibilityViolation` before the
    /// grouping is looked at.
    async fn create_council_seat(
        &self,
        dni: Dni,
        periodo: Periodo,
        agrupacion: AgrupacionId,
    ) -> ElectoralResult<()>;

    /// Seat `dni` on the higher council for `periodo`.
    async fn create_council_seat_superior(&self, dni: Dni, periodo: Periodo) -> ElectoralResult<()>;

    /// Make `dni` a dean candidate for `periodo`. Faculty only.
    async fn create_dean(&self, dni: Dni, periodo: Periodo) -> ElectoralResult<()>;

    /// Make `dni` a rector candidate for `periodo`. Faculty only.
    async fn create_rector(&self, dni: Dni, periodo: Periodo) -> ElectoralResult<()>;

    /// Record one vote of the relation selected by `kind`.
    async fn record_vote(&self, kind: VoteKind, ballot: Ballot) -> ElectoralResult<()>;

    async fn grouping(&self, agrupacion: AgrupacionId) -> ElectoralResult<Option<Grouping>>;

    async fn grouping_votes(
        &self,
        agrupacion: AgrupacionId,
        periodo: Periodo,
    ) -> ElectoralResult<Option<u32>>;

    async fn council_seat(&self, dni: Dni, periodo: Periodo) -> ElectoralResult<Option<CouncilSeat>>;

    async fn superior_council_seat(
        &self,
        dni: Dni,
        periodo: Periodo,
    ) -> ElectoralResult<Option<SuperiorCouncilSeat>>;

    async fn holds_office(&self, office: Office, tenure: Tenure) -> ElectoralResult<bool>;

    async fn vote_exists(&self, kind: VoteKind, ballot: Ballot) -> ElectoralResult<bool>;

    /// Known electoral periods, ascending.
    async fn periods(&self) -> ElectoralResult<Vec<Periodo>>;
}

/// Census and registry over the same store.
pub trait ElectoralModel: CensusRegistrar + ElectoralRegistry + Send + Sync {}

impl<T> ElectoralModel for T where T: CensusRegistrar + ElectoralRegistry + Send + Sync {}
