use async_trait::async_trait;
use thiserror::Error;

use crate::{Lead, LeadPatch, NewLead, User};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Nonexistent and foreign-owned rows are deliberately the same
    /// outcome so callers cannot probe for existence across owners.
    #[error("lead not found or access denied")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations for leads. Every operation takes the calling
/// user's id as an access-control parameter; ownership is checked before
/// any row is returned or touched.
#[async_trait]
pub trait LeadStorage: Send + Sync + 'static {
    /// All leads belonging to `user_id`, in insertion order
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Lead>, StoreError>;
    /// A single lead, only if it exists and is owned by `user_id`
    async fn get_by_id(&self, lead_id: i64, user_id: i64) -> Result<Option<Lead>, StoreError>;
    /// Insert a new lead and return the stored row
    async fn create(&self, lead: NewLead) -> Result<Lead, StoreError>;
    /// Merge `patch` over an owned lead and return the post-update row
    async fn update(
        &self,
        lead_id: i64,
        user_id: i64,
        patch: LeadPatch,
    ) -> Result<Lead, StoreError>;
    /// Hard-delete an owned lead
    async fn delete(&self, lead_id: i64, user_id: i64) -> Result<(), StoreError>;
}

/// User lookup for session resolution.
#[async_trait]
pub trait UserStorage: Send + Sync + 'static {
    async fn user_by_open_id(&self, open_id: &str) -> Result<Option<User>, StoreError>;
}

/// The full store surface the service is wired against.
pub trait Storage: LeadStorage + UserStorage {}

impl<T: LeadStorage + UserStorage> Storage for T {}
