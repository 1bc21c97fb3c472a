//! Census registrar: one constituency per person, for good.

use crate::facultad::{decode_claustro, require_name, Facultad, FACULTY_UNIT_ID};
use crate::{CensusRegistrar, ElectoralError, ElectoralResult};
use async_trait::async_trait;
use facultad_types::{CensusEntry, Claustro, Dni, FacultyUnit};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use tracing::{debug, instrument};

impl Facultad {
    /// Materialize the faculty-unit singleton if this is the first registration.
    async fn ensure_faculty_unit(&self, conn: &mut SqliteConnection) -> ElectoralResult<()> {
        let inserted = sqlx::query("INSERT OR IGNORE INTO facultad (id, nombre) VALUES (?, ?)")
            .bind(FACULTY_UNIT_ID)
            .bind(&self.defaults.nombre_facultad)
            .execute(conn)
            .await?
            .rows_affected();
        if inserted > 0 {
            debug!(nombre = %self.defaults.nombre_facultad, "faculty unit created");
        }
        Ok(())
    }

    async fn insert_detail(
        &self,
        conn: &mut SqliteConnection,
        dni: Dni,
        claustro: Claustro,
    ) -> Result<(), sqlx::Error> {
        match claustro {
            Claustro::Estudiantes => {
                sqlx::query("INSERT INTO estudiante (dni) VALUES (?)")
                    .bind(dni.get())
                    .execute(conn)
                    .await?;
            }
            Claustro::Graduados => {
                sqlx::query("INSERT INTO graduado (dni, universidad) VALUES (?, ?)")
                    .bind(dni.get())
                    .bind(&self.defaults.universidad_graduado)
                    .execute(conn)
                    .await?;
            }
            Claustro::Profesores => {
                sqlx::query(
                    "INSERT INTO profesor (dni, nacionalidad_universidad, cargo) VALUES (?, ?, ?)",
                )
                .bind(dni.get())
                .bind(&self.defaults.nacionalidad_universidad_profesor)
                .bind(&self.defaults.cargo_profesor)
                .execute(conn)
                .await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CensusRegistrar for Facultad {
    #[instrument(skip(self, nombre), fields(dni = %dni, claustro = %claustro))]
    async fn register(&self, dni: Dni, nombre: &str, claustro: Claustro) -> ElectoralResult<()> {
        let nombre = require_name(nombre, "census")?;
        let mut tx = self.store.begin().await?;

        self.ensure_faculty_unit(&mut *tx).await?;

        sqlx::query("INSERT INTO empadronado (dni, nombre, claustro, id_facultad) VALUES (?, ?, ?, ?)")
            .bind(dni.get())
            .bind(nombre)
            .bind(claustro.as_str())
            .bind(FACULTY_UNIT_ID)
            .execute(&mut *tx)
            .await
            .map_err(|e| ElectoralError::insert_failed(e, format!("census entry for {dni}")))?;

        self.insert_detail(&mut *tx, dni, claustro)
            .await
            .map_err(|e| {
                ElectoralError::insert_failed(e, format!("{} record for {dni}", claustro.detail_table()))
            })?;

        tx.commit().await?;
        debug!("registered in census");
        Ok(())
    }

    async fn census_entry(&self, dni: Dni) -> ElectoralResult<Option<CensusEntry>> {
        let row = sqlx::query("SELECT dni, nombre, claustro FROM empadronado WHERE dni = ?")
            .bind(dni.get())
            .fetch_optional(self.store.pool())
            .await?;

        row.map(census_row_to_entry).transpose()
    }

    async fn faculty_unit(&self) -> ElectoralResult<Option<FacultyUnit>> {
        let row = sqlx::query("SELECT id, nombre FROM facultad WHERE id = ?")
            .bind(FACULTY_UNIT_ID)
            .fetch_optional(self.store.pool())
            .await?;

        row.map(faculty_row_to_unit).transpose()
    }
}

fn census_row_to_entry(row: SqliteRow) -> ElectoralResult<CensusEntry> {
    Ok(CensusEntry {
        dni: Dni(row.try_get("dni")?),
        nombre: row.try_get("nombre")?,
        claustro: decode_claustro(&row, "claustro")?,
    })
}

fn faculty_row_to_unit(row: SqliteRow) -> ElectoralResult<FacultyUnit> {
    Ok(FacultyUnit {
        id: row.try_get("id")?,
        nombre: row.try_get("nombre")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegistrarDefaults;
    use facultad_store::FacultadStore;

    async fn count(model: &Facultad, sql: &str) -> i64 {
        sqlx::query(sql)
            .fetch_one(model.store().pool())
            .await
            .unwrap()
            .get(0)
    }

    #[tokio::test]
    async fn first_registration_creates_the_faculty_unit() {
        let model = Facultad::in_memory().await.unwrap();
        assert!(model.faculty_unit().await.unwrap().is_none());

        model.register_student(Dni(123), "Alumno").await.unwrap();

        let unit = model.faculty_unit().await.unwrap().unwrap();
        assert_eq!(unit.id, 1);
        assert_eq!(unit.nombre, RegistrarDefaults::default().nombre_facultad);
    }

    #[tokio::test]
    async fn later_registrations_reuse_the_faculty_unit() {
        let model = Facultad::in_memory().await.unwrap();
        model.register_student(Dni(1), "Uno").await.unwrap();
        model.register_graduate(Dni(2), "Dos").await.unwrap();
        model.register_faculty(Dni(3), "Tres").await.unwrap();

        assert_eq!(count(&model, "SELECT count(*) FROM facultad").await, 1);
    }

    #[tokio::test]
    async fn register_student_writes_assignment_and_detail() {
        let model = Facultad::in_memory().await.unwrap();
        model.register_student(Dni(123), "Alumno").await.unwrap();

        let entry = model.census_entry(Dni(123)).await.unwrap().unwrap();
        assert_eq!(entry.nombre, "Alumno");
        assert_eq!(entry.claustro, Claustro::Estudiantes);
        assert_eq!(count(&model, "SELECT count(*) FROM estudiante WHERE dni = 123").await, 1);
    }

    #[tokio::test]
    async fn register_graduate_stamps_university() {
        let model = Facultad::in_memory().await.unwrap();
        model.register_graduate(Dni(123), "Graduado").await.unwrap();

        let universidad: String = sqlx::query("SELECT universidad FROM graduado WHERE dni = 123")
            .fetch_one(model.store().pool())
            .await
            .unwrap()
            .get(0);
        assert_eq!(universidad, "UBA");
    }

    #[tokio::test]
    async fn register_faculty_stamps_configured_defaults() {
        let store = FacultadStore::in_memory().await.unwrap();
        let defaults = RegistrarDefaults {
            cargo_profesor: "Titular".to_string(),
            ..RegistrarDefaults::default()
        };
        let model = Facultad::with_defaults(store, defaults);
        model.register_faculty(Dni(123), "Profesor").await.unwrap();

        let row = sqlx::query("SELECT nacionalidad_universidad, cargo FROM profesor WHERE dni = 123")
            .fetch_one(model.store().pool())
            .await
            .unwrap();
        assert_eq!(row.get::<String, _>("nacionalidad_universidad"), "Argentina");
        assert_eq!(row.get::<String, _>("cargo"), "Titular");
    }

    #[tokio::test]
    async fn reregistering_fails_and_keeps_first_entry() {
        let model = Facultad::in_memory().await.unwrap();
        model.register_graduate(Dni(123), "Primero").await.unwrap();

        let err = model.register_faculty(Dni(123), "Segundo").await.unwrap_err();
        assert!(matches!(err, ElectoralError::DuplicateIdentity(_)), "{err}");

        let entry = model.census_entry(Dni(123)).await.unwrap().unwrap();
        assert_eq!(entry.nombre, "Primero");
        assert_eq!(entry.claustro, Claustro::Graduados);
        assert_eq!(count(&model, "SELECT count(*) FROM profesor").await, 0);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_the_store() {
        let model = Facultad::in_memory().await.unwrap();
        let err = model.register_student(Dni(123), "   ").await.unwrap_err();
        assert!(matches!(err, ElectoralError::InvalidInput(_)));
        assert!(model.faculty_unit().await.unwrap().is_none());
    }
}
