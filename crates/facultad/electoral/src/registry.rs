//! Electoral registry: groupings, seats and faculty-only offices.
//!
//! The store enforces uniqueness and references; the only explicit check
//! here is the census lookup that gates council seats.

use crate::facultad::{census_claustro, decode_claustro, ensure_period, require_name, Facultad};
use crate::votes;
use crate::{ElectoralError, ElectoralRegistry, ElectoralResult};
use async_trait::async_trait;
use facultad_types::{
    AgrupacionId, Ballot, CouncilSeat, Dni, Grouping, Office, Periodo, SuperiorCouncilSeat, Tenure,
    VoteKind,
};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::{debug, instrument};

impl Facultad {
    /// Insert a dean or rector tenure. The `profesor` foreign key is what
    /// keeps students, graduates and unregistered persons out.
    async fn create_faculty_office(&self, office: Office, dni: Dni, periodo: Periodo) -> ElectoralResult<()> {
        debug_assert!(office.requires_faculty());
        let mut tx = self.store.begin().await?;
        ensure_period(&mut *tx, periodo).await?;

        let sql = format!("INSERT INTO {} (dni, periodo) VALUES (?, ?)", office.table());
        sqlx::query(&sql)
            .bind(dni.get())
            .bind(periodo.get())
            .execute(&mut *tx)
            .await
            .map_err(|e| ElectoralError::insert_failed(e, format!("{office} {dni} for {periodo}")))?;

        tx.commit().await?;
        debug!(%office, %dni, %periodo, "office created");
        Ok(())
    }
}

#[async_trait]
impl ElectoralRegistry for Facultad {
    #[instrument(skip(self))]
    async fn create_grouping(&self, nombre: &str) -> ElectoralResult<AgrupacionId> {
        let nombre = require_name(nombre, "grouping")?;
        let mut tx = self.store.begin().await?;

        let id = sqlx::query("INSERT INTO agrupacion_politica (nombre) VALUES (?)")
            .bind(nombre)
            .execute(&mut *tx)
            .await
            .map_err(|e| ElectoralError::insert_failed(e, "grouping"))?
            .last_insert_rowid();

        tx.commit().await?;
        let id = AgrupacionId(id);
        debug!(%id, "grouping created");
        Ok(id)
    }

    #[instrument(skip(self), fields(agrupacion = %agrupacion, periodo = %periodo))]
    async fn record_grouping_votes(
        &self,
        agrupacion: AgrupacionId,
        periodo: Periodo,
        votos: u32,
    ) -> ElectoralResult<()> {
        let mut tx = self.store.begin().await?;
        ensure_period(&mut *tx, periodo).await?;

        sqlx::query(
            r#"
            INSERT INTO agrupacion_politica_se_presenta_durante_calendario_electoral
                (id_agrupacion_politica, periodo, votos_recibidos)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(agrupacion.get())
        .bind(periodo.get())
        .bind(i64::from(votos))
        .execute(&mut *tx)
        .await
        .map_err(|e| ElectoralError::insert_failed(e, format!("votes of {agrupacion} in {periodo}")))?;

        tx.commit().await?;
        debug!(votos, "grouping votes recorded");
        Ok(())
    }

    #[instrument(skip(self), fields(dni = %dni, periodo = %periodo, agrupacion = %agrupacion))]
    async fn create_council_seat(
        &self,
        dni: Dni,
        periodo: Periodo,
        agrupacion: AgrupacionId,
    ) -> ElectoralResult<()> {
        let mut tx = self.store.begin().await?;

        let claustro = census_claustro(&mut *tx, dni).await?.ok_or_else(|| {
            ElectoralError::EligibilityViolation(format!(
                "{dni} is not registered in the census and cannot hold a directive council seat"
            ))
        })?;
        ensure_period(&mut *tx, periodo).await?;

        sqlx::query(
            r#"
            INSERT INTO consejero_directivo (dni, periodo, id_agrupacion_politica, claustro)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(dni.get())
        .bind(periodo.get())
        .bind(agrupacion.get())
        .bind(claustro.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            ElectoralError::insert_failed(
                e,
                format!("directive council seat of {dni} for {periodo} under {agrupacion}"),
            )
        })?;

        tx.commit().await?;
        debug!(%claustro, "directive council seat created");
        Ok(())
    }

    #[instrument(skip(self), fields(dni = %dni, periodo = %periodo))]
    async fn create_council_seat_superior(&self, dni: Dni, periodo: Periodo) -> ElectoralResult<()> {
        let mut tx = self.store.begin().await?;

        let claustro = census_claustro(&mut *tx, dni).await?.ok_or_else(|| {
            ElectoralError::EligibilityViolation(format!(
                "{dni} is not registered in the census and cannot hold a higher council seat"
            ))
        })?;
        ensure_period(&mut *tx, periodo).await?;

        sqlx::query("INSERT INTO consejero_superior (dni, periodo, claustro) VALUES (?, ?, ?)")
            .bind(dni.get())
            .bind(periodo.get())
            .bind(claustro.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                ElectoralError::insert_failed(e, format!("higher council seat of {dni} for {periodo}"))
            })?;

        tx.commit().await?;
        debug!(%claustro, "higher council seat created");
        Ok(())
    }

    #[instrument(skip(self), fields(dni = %dni, periodo = %periodo))]
    async fn create_dean(&self, dni: Dni, periodo: Periodo) -> ElectoralResult<()> {
        self.create_faculty_office(Office::Decano, dni, periodo).await
    }

    #[instrument(skip(self), fields(dni = %dni, periodo = %periodo))]
    async fn create_rector(&self, dni: Dni, periodo: Periodo) -> ElectoralResult<()> {
        self.create_faculty_office(Office::Rector, dni, periodo).await
    }

    #[instrument(skip(self, ballot), fields(kind = %kind))]
    async fn record_vote(&self, kind: VoteKind, ballot: Ballot) -> ElectoralResult<()> {
        let mut tx = self.store.begin().await?;
        votes::insert(&mut *tx, kind, ballot).await?;
        tx.commit().await?;
        debug!(
            elector = %ballot.elector.dni,
            target = %ballot.target.dni,
            "vote recorded"
        );
        Ok(())
    }

    async fn grouping(&self, agrupacion: AgrupacionId) -> ElectoralResult<Option<Grouping>> {
        let row = sqlx::query("SELECT id, nombre FROM agrupacion_politica WHERE id = ?")
            .bind(agrupacion.get())
            .fetch_optional(self.store.pool())
            .await?;
        row.map(grouping_row_to_record).transpose()
    }

    async fn grouping_votes(
        &self,
        agrupacion: AgrupacionId,
        periodo: Periodo,
    ) -> ElectoralResult<Option<u32>> {
        let row = sqlx::query(
            r#"
            SELECT votos_recibidos
              FROM agrupacion_politica_se_presenta_durante_calendario_electoral
             WHERE id_agrupacion_politica = ? AND periodo = ?
            "#,
        )
        .bind(agrupacion.get())
        .bind(periodo.get())
        .fetch_optional(self.store.pool())
        .await?;

        row.map(|row| {
            let votos: i64 = row.try_get("votos_recibidos")?;
            u32::try_from(votos)
                .map_err(|_| ElectoralError::Store(format!("vote count out of range: {votos}")))
        })
        .transpose()
    }

    async fn council_seat(&self, dni: Dni, periodo: Periodo) -> ElectoralResult<Option<CouncilSeat>> {
        let row = sqlx::query(
            r#"
            SELECT dni, periodo, id_agrupacion_politica, claustro
              FROM consejero_directivo
             WHERE dni = ? AND periodo = ?
            "#,
        )
        .bind(dni.get())
        .bind(periodo.get())
        .fetch_optional(self.store.pool())
        .await?;
        row.map(council_row_to_seat).transpose()
    }

    async fn superior_council_seat(
        &self,
        dni: Dni,
        periodo: Periodo,
    ) -> ElectoralResult<Option<SuperiorCouncilSeat>> {
        let row = sqlx::query(
            "SELECT dni, periodo, claustro FROM consejero_superior WHERE dni = ? AND periodo = ?",
        )
        .bind(dni.get())
        .bind(periodo.get())
        .fetch_optional(self.store.pool())
        .await?;
        row.map(superior_row_to_seat).transpose()
    }

    async fn holds_office(&self, office: Office, tenure: Tenure) -> ElectoralResult<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE dni = ? AND periodo = ?", office.table());
        let row = sqlx::query(&sql)
            .bind(tenure.dni.get())
            .bind(tenure.periodo.get())
            .fetch_optional(self.store.pool())
            .await?;
        Ok(row.is_some())
    }

    async fn vote_exists(&self, kind: VoteKind, ballot: Ballot) -> ElectoralResult<bool> {
        let mut conn = self.store.pool().acquire().await?;
        votes::exists(&mut *conn, kind, ballot).await
    }

    async fn periods(&self) -> ElectoralResult<Vec<Periodo>> {
        let rows = sqlx::query("SELECT periodo FROM calendario_electoral ORDER BY periodo")
            .fetch_all(self.store.pool())
            .await?;
        rows.iter()
            .map(|row| -> ElectoralResult<Periodo> { Ok(Periodo(row.try_get("periodo")?)) })
            .collect()
    }
}

fn grouping_row_to_record(row: SqliteRow) -> ElectoralResult<Grouping> {
    Ok(Grouping {
        id: AgrupacionId(row.try_get("id")?),
        nombre: row.try_get("nombre")?,
    })
}

fn council_row_to_seat(row: SqliteRow) -> ElectoralResult<CouncilSeat> {
    Ok(CouncilSeat {
        dni: Dni(row.try_get("dni")?),
        periodo: Periodo(row.try_get("periodo")?),
        agrupacion: AgrupacionId(row.try_get("id_agrupacion_politica")?),
        claustro: decode_claustro(&row, "claustro")?,
    })
}

fn superior_row_to_seat(row: SqliteRow) -> ElectoralResult<SuperiorCouncilSeat> {
    Ok(SuperiorCouncilSeat {
        dni: Dni(row.try_get("dni")?),
        periodo: Periodo(row.try_get("periodo")?),
        claustro: decode_claustro(&row, "claustro")?,
    })
}
