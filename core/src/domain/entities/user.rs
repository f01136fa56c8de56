//! User entity representing a collection agent or manager account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user within the collection organisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Collection agent handling assigned case files
    Agent,
    /// Agency manager
    ChefAgence,
    /// Regional manager
    ChefRegional,
    /// Deputy general director
    #[serde(rename = "DGA")]
    Dga,
    /// Platform administrator
    Admin,
}

impl Role {
    /// String representation used on the wire and in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::ChefAgence => "ChefAgence",
            Self::ChefRegional => "ChefRegional",
            Self::Dga => "DGA",
            Self::Admin => "Admin",
        }
    }

    /// Parse from the wire/database representation
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "Agent" => Some(Self::Agent),
            "ChefAgence" => Some(Self::ChefAgence),
            "ChefRegional" => Some(Self::ChefRegional),
            "DGA" => Some(Self::Dga),
            "Admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// User entity backing authentication and identity claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Login email address (unique)
    pub email: String,

    /// Bcrypt digest of the user's password
    pub password_hash: String,

    /// Role within the organisation
    pub role: Role,

    /// Contact phone number
    pub phone: Option<String>,

    /// Agency the user is attached to, if any
    pub agency_id: Option<i64>,

    /// Whether the account may authenticate
    pub is_active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            phone: None,
            agency_id: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the user to an agency
    pub fn with_agency(mut self, agency_id: i64) -> Self {
        self.agency_id = Some(agency_id);
        self
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Deactivates the account, preventing further authentication
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivates the account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is a platform administrator
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}
