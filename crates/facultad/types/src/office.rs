use serde::{Deserialize, Serialize};
use std::fmt;

/// An elective office held by a person for one period.
///
/// Each office is its own relation keyed by `(dni, periodo)`; the variant
/// name doubles as the table name and as the column stem used by the vote
/// relations (`dni_<stem>`, `periodo_<stem>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Office {
    ConsejeroDirectivo,
    ConsejeroSuperior,
    Decano,
    Rector,
}

impl Office {
    pub const ALL: [Office; 4] = [
        Office::ConsejeroDirectivo,
        Office::ConsejeroSuperior,
        Office::Decano,
        Office::Rector,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Office::ConsejeroDirectivo => "consejero_directivo",
            Office::ConsejeroSuperior => "consejero_superior",
            Office::Decano => "decano",
            Office::Rector => "rector",
        }
    }

    pub fn dni_column(self) -> &'static str {
        match self {
            Office::ConsejeroDirectivo => "dni_consejero_directivo",
            Office::ConsejeroSuperior => "dni_consejero_superior",
            Office::Decano => "dni_decano",
            Office::Rector => "dni_rector",
        }
    }

    pub fn periodo_column(self) -> &'static str {
        match self {
            Office::ConsejeroDirectivo => "periodo_consejero_directivo",
            Office::ConsejeroSuperior => "periodo_consejero_superior",
            Office::Decano => "periodo_decano",
            Office::Rector => "periodo_rector",
        }
    }

    /// Dean and rector are restricted to the faculty constituency.
    pub fn requires_faculty(self) -> bool {
        matches!(self, Office::Decano | Office::Rector)
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// The five vote relations, tagged by (elector office, target office).
///
/// Every relation is stored in its own table but shares one shape, so the
/// registry records all of them through a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoteKind {
    /// Directive council member votes for a dean.
    DirectiveToDean,
    /// Directive council member votes for a higher-council member.
    DirectiveToSuperior,
    /// Directive council member votes for a rector.
    DirectiveToRector,
    /// Higher-council member votes for a rector.
    SuperiorToRector,
    /// Dean votes for a rector.
    DeanToRector,
}

impl VoteKind {
    pub const ALL: [VoteKind; 5] = [
        VoteKind::DirectiveToDean,
        VoteKind::DirectiveToSuperior,
        VoteKind::DirectiveToRector,
        VoteKind::SuperiorToRector,
        VoteKind::DeanToRector,
    ];

    pub fn elector(self) -> Office {
        match self {
            VoteKind::DirectiveToDean
            | VoteKind::DirectiveToSuperior
            | VoteKind::DirectiveToRector => Office::ConsejeroDirectivo,
            VoteKind::SuperiorToRector => Office::ConsejeroSuperior,
            VoteKind::DeanToRector => Office::Decano,
        }
    }

    pub fn target(self) -> Office {
        match self {
            VoteKind::DirectiveToDean => Office::Decano,
            VoteKind::DirectiveToSuperior => Office::ConsejeroSuperior,
            VoteKind::DirectiveToRector
            | VoteKind::SuperiorToRector
            | VoteKind::DeanToRector => Office::Rector,
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            VoteKind::DirectiveToDean => "voto_a_decano",
            VoteKind::DirectiveToSuperior => "voto_a_consejero_superior",
            VoteKind::DirectiveToRector => "rector_fue_votado_por_consejero_directivo",
            VoteKind::SuperiorToRector => "rector_fue_votado_por_consejero_superior",
            VoteKind::DeanToRector => "rector_fue_votado_por_decano",
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.elector(), self.target())
    }
}
