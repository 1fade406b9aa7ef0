use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{
    validate_department, validate_email, validate_person_name, validate_status_code,
    validate_user_name,
};

/// Account status, stored as a single-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserStatus {
    #[serde(rename = "A")]
    Active,
    #[serde(rename = "I")]
    Inactive,
    #[serde(rename = "T")]
    Terminated,
}

impl UserStatus {
    /// The closed set of accepted status codes.
    pub const CODES: [&'static str; 3] = ["A", "I", "T"];

    pub fn as_code(&self) -> &'static str {
        match self {
            UserStatus::Active => "A",
            UserStatus::Inactive => "I",
            UserStatus::Terminated => "T",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(UserStatus::Active),
            "I" => Ok(UserStatus::Inactive),
            "T" => Ok(UserStatus::Terminated),
            _ => Err(format!("Unknown user status: {}", s)),
        }
    }
}

/// User entity - matches SQL schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (database assigned, monotonically increasing)
    pub id: i64,
    /// Unique username (4-255 alphanumeric characters)
    pub user_name: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address (unique)
    pub email: String,
    /// Account status
    pub status: UserStatus,
    /// Optional department
    pub department: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(custom(function = "validate_user_name"))]
    pub user_name: String,
    #[validate(custom(function = "validate_person_name"))]
    pub first_name: String,
    #[validate(custom(function = "validate_person_name"))]
    pub last_name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    /// Status code; checked again at the service layer before any write
    #[validate(custom(function = "validate_status_code"))]
    pub status: String,
    #[validate(custom(function = "validate_department"))]
    pub department: Option<String>,
}

/// DTO for replacing an existing user (PUT semantics: every field required,
/// every stored field overwritten)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(custom(function = "validate_user_name"))]
    pub user_name: String,
    #[validate(custom(function = "validate_person_name"))]
    pub first_name: String,
    #[validate(custom(function = "validate_person_name"))]
    pub last_name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_status_code"))]
    pub status: String,
    #[validate(custom(function = "validate_department"))]
    pub department: Option<String>,
}

impl User {
    /// Build a new entity from a create payload. The id stays unassigned
    /// until the repository persists the row.
    pub fn from_create(input: CreateUser, status: UserStatus) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_name: input.user_name,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            status,
            department: input.department,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a full-replacement update: every mutable field is overwritten
    /// and `updated_at` is refreshed. `id` and `created_at` never change.
    pub fn apply_update(&mut self, update: UpdateUser, status: UserStatus) {
        self.user_name = update.user_name;
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.email = update.email;
        self.status = status;
        self.department = update.department;
        self.updated_at = Utc::now();
    }
}
