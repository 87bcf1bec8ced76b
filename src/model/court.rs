use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CourtDto {
    pub id: i32,
    pub name: String,
    pub court_type: String,
}

/// Body for creating or renaming a court.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CourtInputDto {
    pub name: String,
    pub court_type: String,
}
