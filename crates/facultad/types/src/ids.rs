use serde::{Deserialize, Serialize};
use std::fmt;

/// National identity number of a person. Unique across all constituencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dni(pub i64);

impl Dni {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dni:{}", self.0)
    }
}

impl From<i64> for Dni {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Electoral cycle identifier, usually a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Periodo(pub i64);

impl Periodo {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Periodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Periodo {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Store-assigned identifier of a political grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgrupacionId(pub i64);

impl AgrupacionId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AgrupacionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agrupacion:{}", self.0)
    }
}

impl From<i64> for AgrupacionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
