use crate::{ElectoralError, ElectoralResult, RegistrarDefaults};
use facultad_store::{FacultadStore, StoreConfig};
use facultad_types::{Claustro, Dni, Periodo};
use sqlx::{Row, SqliteConnection};

/// Primary key of the faculty-unit singleton.
pub(crate) const FACULTY_UNIT_ID: i64 = 1;

/// Census registrar and electoral registry over one [`FacultadStore`].
///
/// Every public operation runs in its own transaction: either all of its
/// rows are written or none are.
#[derive(Debug, Clone)]
pub struct Facultad {
    pub(crate) store: FacultadStore,
    pub(crate) defaults: RegistrarDefaults,
}

impl Facultad {
    pub fn new(store: FacultadStore) -> Self {
        Self::with_defaults(store, RegistrarDefaults::default())
    }

    pub fn with_defaults(store: FacultadStore, defaults: RegistrarDefaults) -> Self {
        Self { store, defaults }
    }

    /// Open the configured store and wrap it.
    pub async fn open(config: &StoreConfig, defaults: RegistrarDefaults) -> ElectoralResult<Self> {
        let store = FacultadStore::from_config(config).await?;
        Ok(Self::with_defaults(store, defaults))
    }

    /// Fresh in-memory model with default registrar attributes.
    pub async fn in_memory() -> ElectoralResult<Self> {
        Ok(Self::new(FacultadStore::in_memory().await?))
    }

    pub fn store(&self) -> &FacultadStore {
        &self.store
    }

    pub fn defaults(&self) -> &RegistrarDefaults {
        &self.defaults
    }
}

pub(crate) fn require_name<'a>(nombre: &'a str, what: &str) -> ElectoralResult<&'a str> {
    if nombre.trim().is_empty() {
        return Err(ElectoralError::InvalidInput(format!("{what} name must not be empty")));
    }
    Ok(nombre)
}

/// Create the period row if it does not exist yet.
pub(crate) async fn ensure_period(conn: &mut SqliteConnection, periodo: Periodo) -> ElectoralResult<()> {
    sqlx::query("INSERT OR IGNORE INTO calendario_electoral (periodo) VALUES (?)")
        .bind(periodo.get())
        .execute(conn)
        .await?;
    Ok(())
}

/// Constituency `dni` is registered under, if registered at all.
pub(crate) async fn census_claustro(
    conn: &mut SqliteConnection,
    dni: Dni,
) -> ElectoralResult<Option<Claustro>> {
    let row = sqlx::query("SELECT claustro FROM empadronado WHERE dni = ?")
        .bind(dni.get())
        .fetch_optional(conn)
        .await?;
    row.map(|row| decode_claustro(&row, "claustro")).transpose()
}

pub(crate) fn decode_claustro(row: &sqlx::sqlite::SqliteRow, column: &str) -> ElectoralResult<Claustro> {
    let raw: String = row.try_get(column)?;
    raw.parse::<Claustro>()
        .map_err(|e| ElectoralError::Store(e.to_string()))
}
