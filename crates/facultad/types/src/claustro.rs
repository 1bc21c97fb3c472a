use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Constituency a person is registered under. A person has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Claustro {
    /// Student body (`estudiantes`).
    Estudiantes,
    /// Graduates (`graduados`).
    Graduados,
    /// Faculty members (`profesores`). The only constituency eligible for
    /// dean and rector.
    Profesores,
}

impl Claustro {
    pub const ALL: [Claustro; 3] = [Claustro::Estudiantes, Claustro::Graduados, Claustro::Profesores];

    /// Tag stored in `empadronado.claustro`.
    pub fn as_str(self) -> &'static str {
        match self {
            Claustro::Estudiantes => "estudiantes",
            Claustro::Graduados => "graduados",
            Claustro::Profesores => "profesores",
        }
    }

    /// Table holding the constituency-specific detail row.
    pub fn detail_table(self) -> &'static str {
        match self {
            Claustro::Estudiantes => "estudiante",
            Claustro::Graduados => "graduado",
            Claustro::Profesores => "profesor",
        }
    }

    pub fn is_faculty(self) -> bool {
        matches!(self, Claustro::Profesores)
    }
}

impl fmt::Display for Claustro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown claustro: {0}")]
pub struct ParseClaustroError(pub String);

impl FromStr for Claustro {
    type Err = ParseClaustroError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "estudiantes" => Ok(Claustro::Estudiantes),
            "graduados" => Ok(Claustro::Graduados),
            "profesores" => Ok(Claustro::Profesores),
            other => Err(ParseClaustroError(other.to_string())),
        }
    }
}
