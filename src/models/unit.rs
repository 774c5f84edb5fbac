use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitStatus {
    Available,
    Sold,
    Maintenance,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Available => "AVAILABLE",
            UnitStatus::Sold => "SOLD",
            UnitStatus::Maintenance => "MAINTENANCE",
        }
    }

    pub fn parse(s: &str) -> Option<UnitStatus> {
        match s {
            "AVAILABLE" => Some(UnitStatus::Available),
            "SOLD" => Some(UnitStatus::Sold),
            "MAINTENANCE" => Some(UnitStatus::Maintenance),
            _ => None,
        }
    }
}

// A vehicle asset owned by exactly one investor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Unit {
    pub id: uuid::Uuid,
    pub investor_id: uuid::Uuid,
    pub name: String,
    pub brand: String,
    pub year: i32,
    pub plate_number: String,
    pub status: String, // Will be converted to/from UnitStatus
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUnit {
    pub investor_id: uuid::Uuid,
    pub name: String,
    pub brand: String,
    pub year: i32,
    pub plate_number: String,
    pub status: Option<UnitStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUnit {
    pub name: String,
    pub brand: String,
    pub year: i32,
    pub plate_number: String,
    pub status: UnitStatus,
}

impl Unit {
    pub fn new(data: CreateUnit) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            investor_id: data.investor_id,
            name: data.name,
            brand: data.brand,
            year: data.year,
            plate_number: data.plate_number,
            status: data.status.unwrap_or(UnitStatus::Available).as_str().to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}
