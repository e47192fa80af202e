use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Description stored for diseases first seen through a prediction rather than
/// the administrative catalog.
pub const AUTO_GENERATED_DESCRIPTION: &str = "Auto-generated from rule set";

/// Catalog key form for disease and symptom names.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

/// Registered account as seen by the prediction core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserAccount {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Persisted disease record shared by the administrative and prediction paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
    pub id: DiseaseId,
    #[serde(rename = "diseaseName")]
    pub name: String,
    pub description: String,
    pub precautions: String,
}

/// Insert or update payload for a disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDisease {
    #[serde(rename = "diseaseName")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub precautions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    pub id: SymptomId,
    #[serde(rename = "symptomName")]
    pub name: String,
}

/// Immutable record of one completed prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionEvent {
    pub id: PredictionId,
    pub user_id: UserId,
    pub disease_id: DiseaseId,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPredictionEvent {
    pub user_id: UserId,
    pub disease_id: DiseaseId,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

/// Prediction event joined with the disease it references.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPrediction {
    pub event: PredictionEvent,
    pub disease: Disease,
}
