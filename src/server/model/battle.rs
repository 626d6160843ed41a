//! Battle domain model and lifecycle status.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::{battle::BattleDto, formation::Formation},
    server::error::AppError,
};

/// Lifecycle status of a battle.
///
/// Transitions are strictly monotonic: `Open → Closed → Published →
/// Confirmed`. There is no regression; reopening means creating a new battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Open,
    Closed,
    Published,
    Confirmed,
}

impl BattleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Published => "published",
            Self::Confirmed => "confirmed",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "published" => Ok(Self::Published),
            "confirmed" => Ok(Self::Confirmed),
            other => Err(AppError::InternalError(format!(
                "Unknown battle status '{}' in database",
                other
            ))),
        }
    }

    /// The only status this one may advance to, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Open => Some(Self::Closed),
            Self::Closed => Some(Self::Published),
            Self::Published => Some(Self::Confirmed),
            Self::Confirmed => None,
        }
    }
}

impl fmt::Display for BattleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Battle with parsed status, group labels, and formation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub status: BattleStatus,
    pub groups: Vec<String>,
    pub formation: Option<Formation>,
    pub created_at: DateTime<Utc>,
}

impl Battle {
    /// Converts an entity model to a battle domain model at the repository
    /// boundary, parsing the status string and the JSON payloads.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Battle)` - The converted battle domain model
    /// - `Err(AppError::InternalError)` - Stored status or payload failed to parse
    pub fn from_entity(entity: entity::battle::Model) -> Result<Self, AppError> {
        let status = BattleStatus::parse(&entity.status)?;

        let groups: Vec<String> = serde_json::from_value(entity.groups).map_err(|e| {
            AppError::InternalError(format!("Malformed group list for battle {}: {}", entity.id, e))
        })?;

        let formation = entity
            .formation
            .map(|value| {
                serde_json::from_value::<Formation>(value).map_err(|e| {
                    AppError::InternalError(format!(
                        "Malformed formation payload for battle {}: {}",
                        entity.id, e
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            id: entity.id,
            date: entity.date,
            deadline: entity.deadline,
            status,
            groups,
            formation,
            created_at: entity.created_at,
        })
    }

    /// Converts the battle domain model to a DTO for API responses.
    pub fn into_dto(self) -> BattleDto {
        BattleDto {
            id: self.id,
            date: self.date,
            deadline: self.deadline,
            status: self.status.as_str().to_string(),
            groups: self.groups,
        }
    }

    /// Whether the registration deadline has passed at the given instant.
    pub fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        now > self.deadline
    }

    /// Short human-readable label used in attendance history and log lines.
    pub fn label(&self) -> String {
        format!("幫戰 {}", self.date.format("%Y-%m-%d"))
    }
}
