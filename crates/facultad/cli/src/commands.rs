//! Dispatch of parsed subcommands onto the electoral model.

use crate::cli::{Command, GroupingCommand, SeatCommand, ShowCommand};
use anyhow::{Context, Result};
use facultad_electoral::{CensusRegistrar, ElectoralModel, ElectoralRegistry};
use facultad_types::{AgrupacionId, Ballot, Claustro, Dni, Periodo, Tenure, VoteKind};
use serde_json::json;

/// Run one command and return what should be printed.
pub async fn run<M: ElectoralModel>(model: &M, command: Command) -> Result<String> {
    match command {
        Command::Init => Ok("schema ready".to_string()),

        Command::Register { claustro, dni, name } => {
            let claustro = Claustro::from(claustro);
            model
                .register(Dni(dni), &name, claustro)
                .await
                .with_context(|| format!("registering dni {dni} as {claustro}"))?;
            Ok(format!("registered dni {dni} in {claustro}"))
        }

        Command::Grouping { command } => match command {
            GroupingCommand::Create { name } => {
                let id = model
                    .create_grouping(&name)
                    .await
                    .with_context(|| format!("creating grouping {name:?}"))?;
                Ok(id.get().to_string())
            }
            GroupingCommand::Votes { id, period, votes } => {
                model
                    .record_grouping_votes(AgrupacionId(id), Periodo(period), votes)
                    .await
                    .with_context(|| format!("recording votes of grouping {id} in {period}"))?;
                Ok(format!("grouping {id} received {votes} votes in {period}"))
            }
        },

        Command::Seat { command } => match command {
            SeatCommand::Directive { tenure, grouping } => {
                model
                    .create_council_seat(Dni(tenure.dni), Periodo(tenure.period), AgrupacionId(grouping))
                    .await
                    .with_context(|| format!("seating dni {} on the directive council", tenure.dni))?;
                Ok(format!(
                    "dni {} holds a directive council seat for {}",
                    tenure.dni, tenure.period
                ))
            }
            SeatCommand::Superior(tenure) => {
                model
                    .create_council_seat_superior(Dni(tenure.dni), Periodo(tenure.period))
                    .await
                    .with_context(|| format!("seating dni {} on the higher council", tenure.dni))?;
                Ok(format!(
                    "dni {} holds a higher council seat for {}",
                    tenure.dni, tenure.period
                ))
            }
        },

        Command::Dean(tenure) => {
            model
                .create_dean(Dni(tenure.dni), Periodo(tenure.period))
                .await
                .with_context(|| format!("registering dni {} as dean", tenure.dni))?;
            Ok(format!("dni {} is a dean candidate for {}", tenure.dni, tenure.period))
        }

        Command::Rector(tenure) => {
            model
                .create_rector(Dni(tenure.dni), Periodo(tenure.period))
                .await
                .with_context(|| format!("registering dni {} as rector", tenure.dni))?;
            Ok(format!("dni {} is a rector candidate for {}", tenure.dni, tenure.period))
        }

        Command::Vote {
            kind,
            elector_dni,
            elector_period,
            target_dni,
            target_period,
        } => {
            let kind = VoteKind::from(kind);
            let ballot = Ballot::new(
                Tenure::new(elector_dni, elector_period),
                Tenure::new(target_dni, target_period),
            );
            model
                .record_vote(kind, ballot)
                .await
                .with_context(|| format!("recording vote {kind}"))?;
            Ok(format!(
                "vote recorded: {elector_dni}/{elector_period} -> {target_dni}/{target_period} ({kind})"
            ))
        }

        Command::Show { command } => show(model, command).await,
    }
}

async fn show<M: ElectoralModel>(model: &M, command: ShowCommand) -> Result<String> {
    let value = match command {
        ShowCommand::Person { dni } => {
            let entry = model.census_entry(Dni(dni)).await?;
            serde_json::to_value(entry)?
        }
        ShowCommand::Grouping { id, period } => {
            let grouping = model.grouping(AgrupacionId(id)).await?;
            let votes = match period {
                Some(period) => model.grouping_votes(AgrupacionId(id), Periodo(period)).await?,
                None => None,
            };
            json!({ "grouping": grouping, "period": period, "votes": votes })
        }
        ShowCommand::Periods => serde_json::to_value(model.periods().await?)?,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ClaustroArg, TenureArgs, VoteArg};
    use facultad_electoral::Facultad;

    async fn exec(model: &Facultad, command: Command) -> Result<String> {
        run(model, command).await
    }

    #[tokio::test]
    async fn walks_through_a_rector_election() {
        let model = Facultad::in_memory().await.unwrap();

        exec(&model, Command::Register { claustro: ClaustroArg::Faculty, dni: 123, name: "Rector".into() })
            .await
            .unwrap();
        exec(&model, Command::Rector(TenureArgs { dni: 123, period: 2014 }))
            .await
            .unwrap();
        exec(&model, Command::Register { claustro: ClaustroArg::Student, dni: 456, name: "Consejero".into() })
            .await
            .unwrap();

        let id = exec(&model, Command::Grouping { command: GroupingCommand::Create { name: "G".into() } })
            .await
            .unwrap();
        let id: i64 = id.parse().unwrap();

        exec(
            &model,
            Command::Seat {
                command: SeatCommand::Directive {
                    tenure: TenureArgs { dni: 456, period: 2014 },
                    grouping: id,
                },
            },
        )
        .await
        .unwrap();

        let vote = || Command::Vote {
            kind: VoteArg::DirectiveToRector,
            elector_dni: 456,
            elector_period: 2014,
            target_dni: 123,
            target_period: 2014,
        };
        exec(&model, vote()).await.unwrap();
        let err = exec(&model, vote()).await.unwrap_err();
        assert!(format!("{err:#}").contains("duplicate identity"), "{err:#}");
    }

    #[tokio::test]
    async fn show_person_prints_json() {
        let model = Facultad::in_memory().await.unwrap();
        exec(&model, Command::Register { claustro: ClaustroArg::Graduate, dni: 7, name: "Grad".into() })
            .await
            .unwrap();

        let out = exec(&model, Command::Show { command: ShowCommand::Person { dni: 7 } })
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["claustro"], "graduados");
        assert_eq!(value["dni"], 7);
    }

    #[tokio::test]
    async fn ineligible_dean_reports_context() {
        let model = Facultad::in_memory().await.unwrap();
        let err = exec(&model, Command::Dean(TenureArgs { dni: 1, period: 2014 }))
            .await
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("registering dni 1 as dean"), "{message}");
        assert!(message.contains("referential violation"), "{message}");
    }
}
