//! Lead records and the storage they live in.
//!
//! The service talks to storage exclusively through the [`LeadStorage`] and
//! [`UserStorage`] traits; the Postgres implementation is the system of
//! record and the in-memory implementation keeps the stack runnable with no
//! database configured.

mod memory;
mod pgsql;
mod requests;
mod samples;
mod storage;
mod tech_stack;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use memory::MemoryLeadStore;
pub use pgsql::PgLeadStore;
pub use requests::{CreateLeadRequest, LeadValidationError};
pub use samples::sample_leads;
pub use storage::{LeadStorage, Storage, StoreError, UserStorage};
pub use tech_stack::{decode_tech_stack, encode_tech_stack};

/// The SQL migrations for the lead store, embedded so binaries can apply
/// them at startup without shipping loose files.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// An authenticated principal. Sessions are issued by the external login
/// portal; this row is the ownership anchor for [`Lead`]s.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_signed_in: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LeadStatus {
    Enriched,
    Processing,
    Failed,
    Pending,
}

/// A prospective contact, owned by exactly one user.
///
/// `tech_stack` is persisted as JSON text and presented to callers as a
/// native list; unreadable stored text reads back as `None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub company: String,
    pub company_logo: Option<String>,
    pub avatar: Option<String>,
    pub status: LeadStatus,
    /// Enrichment confidence, 0-100
    pub confidence: i32,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    /// Externally produced insight text, opaque to this service
    pub ai_insight: Option<String>,
    pub mutual_connection: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
}

/// The fields of a lead to be inserted. The store assigns id and
/// timestamps; `status` and `confidence` default when unset.
#[derive(Debug, Clone, Default)]
pub struct NewLead {
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub company: String,
    pub company_logo: Option<String>,
    pub avatar: Option<String>,
    pub status: Option<LeadStatus>,
    pub confidence: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub ai_insight: Option<String>,
    pub mutual_connection: Option<String>,
    pub user_id: i64,
}

/// A partial update. Absent fields are left untouched; the owner,
/// creation timestamp, and id are not part of the editable set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub company_logo: Option<String>,
    pub avatar: Option<String>,
    pub status: Option<LeadStatus>,
    pub confidence: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub ai_insight: Option<String>,
    pub mutual_connection: Option<String>,
}
