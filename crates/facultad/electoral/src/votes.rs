//! The five vote relations behind one operation.
//!
//! Each [`VoteKind`] names its own table, but all share the column layout
//! `(dni_<target>, periodo_<target>, dni_<elector>, periodo_<elector>)` with
//! composite foreign keys to both office relations. Table and column names
//! come from the closed enums in `facultad-types`, never from callers.

use crate::{ElectoralError, ElectoralResult};
use facultad_store::{classify, Constraint};
use facultad_types::{Ballot, Office, Tenure, VoteKind};
use sqlx::SqliteConnection;

fn insert_sql(kind: VoteKind) -> String {
    let (elector, target) = (kind.elector(), kind.target());
    format!(
        "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
        kind.table(),
        target.dni_column(),
        target.periodo_column(),
        elector.dni_column(),
        elector.periodo_column(),
    )
}

fn exists_sql(kind: VoteKind) -> String {
    let (elector, target) = (kind.elector(), kind.target());
    format!(
        "SELECT 1 FROM {} WHERE {} = ? AND {} = ? AND {} = ? AND {} = ?",
        kind.table(),
        target.dni_column(),
        target.periodo_column(),
        elector.dni_column(),
        elector.periodo_column(),
    )
}

pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    kind: VoteKind,
    ballot: Ballot,
) -> ElectoralResult<()> {
    let result = sqlx::query(&insert_sql(kind))
        .bind(ballot.target.dni.get())
        .bind(ballot.target.periodo.get())
        .bind(ballot.elector.dni.get())
        .bind(ballot.elector.periodo.get())
        .execute(&mut *conn)
        .await;

    let Err(err) = result else {
        return Ok(());
    };

    if classify(&err) == Some(Constraint::ForeignKey) {
        // SQLite does not say which reference failed; look both up.
        if !holds(conn, kind.elector(), ballot.elector).await? {
            return Err(ElectoralError::ReferentialViolation(format!(
                "elector {} is not a {} for {}",
                ballot.elector.dni,
                kind.elector(),
                ballot.elector.periodo
            )));
        }
        if !holds(conn, kind.target(), ballot.target).await? {
            return Err(ElectoralError::ReferentialViolation(format!(
                "target {} is not a {} for {}",
                ballot.target.dni,
                kind.target(),
                ballot.target.periodo
            )));
        }
    }

    Err(ElectoralError::insert_failed(
        err,
        format!(
            "vote {kind} from {}/{} to {}/{}",
            ballot.elector.dni, ballot.elector.periodo, ballot.target.dni, ballot.target.periodo
        ),
    ))
}

pub(crate) async fn exists(
    conn: &mut SqliteConnection,
    kind: VoteKind,
    ballot: Ballot,
) -> ElectoralResult<bool> {
    let row = sqlx::query(&exists_sql(kind))
        .bind(ballot.target.dni.get())
        .bind(ballot.target.periodo.get())
        .bind(ballot.elector.dni.get())
        .bind(ballot.elector.periodo.get())
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}

async fn holds(conn: &mut SqliteConnection, office: Office, tenure: Tenure) -> ElectoralResult<bool> {
    let sql = format!("SELECT 1 FROM {} WHERE dni = ? AND periodo = ?", office.table());
    let row = sqlx::query(&sql)
        .bind(tenure.dni.get())
        .bind(tenure.periodo.get())
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}
