use crate::{AgrupacionId, Claustro, Dni, Periodo};
use serde::{Deserialize, Serialize};

/// The singleton organizational unit row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyUnit {
    pub id: i64,
    pub nombre: String,
}

/// A person's census registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusEntry {
    pub dni: Dni,
    pub nombre: String,
    pub claustro: Claustro,
}

/// A political grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    pub id: AgrupacionId,
    pub nombre: String,
}

/// A directive council seat for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilSeat {
    pub dni: Dni,
    pub periodo: Periodo,
    pub agrupacion: AgrupacionId,
    pub claustro: Claustro,
}

/// A higher-council seat for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperiorCouncilSeat {
    pub dni: Dni,
    pub periodo: Periodo,
    pub claustro: Claustro,
}

/// Key of any office holder: who, and for which period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenure {
    pub dni: Dni,
    pub periodo: Periodo,
}

impl Tenure {
    pub fn new(dni: i64, periodo: i64) -> Self {
        Self {
            dni: Dni(dni),
            periodo: Periodo(periodo),
        }
    }
}

/// One vote: an elector tenure casting onto a target tenure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ballot {
    pub elector: Tenure,
    pub target: Tenure,
}

impl Ballot {
    pub fn new(elector: Tenure, target: Tenure) -> Self {
        Self { elector, target }
    }
}
