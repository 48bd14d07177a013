//! City model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// City model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
}

/// Create city request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCity {
    pub name: String,
}

/// Update city request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCity {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}
