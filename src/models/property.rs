use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "letting_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LettingStatus {
    Let,
    Vacant,
}

impl LettingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LettingStatus::Let => "let",
            LettingStatus::Vacant => "vacant",
        }
    }
}

impl fmt::Display for LettingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LettingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "let" => Ok(LettingStatus::Let),
            "vacant" => Ok(LettingStatus::Vacant),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "compliance_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Pending,
    Complete,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Pending => "pending",
            ComplianceStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ComplianceStatus::Pending),
            "complete" => Ok(ComplianceStatus::Complete),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub address: String,
    pub image_url: String,
    /// Stored in integer cents.
    pub monthly_rent: i64,
    pub tenants: i32,
    pub letting_status: LettingStatus,
    pub compliance_status: ComplianceStatus,
}
