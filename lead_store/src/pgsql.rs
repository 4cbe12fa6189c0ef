use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::storage::{LeadStorage, StoreError, UserStorage};
use crate::{decode_tech_stack, encode_tech_stack, Lead, LeadPatch, LeadStatus, NewLead, User};

/// Lead storage backed by the Postgres system of record.
pub struct PgLeadStore {
    pool: PgPool,
}

impl PgLeadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const LEAD_COLUMNS: &str = "id, name, first_name, last_name, title, company, company_logo, \
     avatar, status, confidence, email, phone, linkedin, location, tech_stack, ai_insight, \
     mutual_connection, created_at, updated_at, user_id";

/// A lead as it sits in the table: tech stack still serialized.
#[derive(sqlx::FromRow)]
struct LeadRow {
    id: i64,
    name: String,
    first_name: Option<String>,
    last_name: Option<String>,
    title: Option<String>,
    company: String,
    company_logo: Option<String>,
    avatar: Option<String>,
    status: LeadStatus,
    confidence: i32,
    email: Option<String>,
    phone: Option<String>,
    linkedin: Option<String>,
    location: Option<String>,
    tech_stack: Option<String>,
    ai_insight: Option<String>,
    mutual_connection: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: i64,
}

impl LeadRow {
    fn into_lead(self) -> Lead {
        Lead {
            id: self.id,
            name: self.name,
            first_name: self.first_name,
            last_name: self.last_name,
            title: self.title,
            company: self.company,
            company_logo: self.company_logo,
            avatar: self.avatar,
            status: self.status,
            confidence: self.confidence,
            email: self.email,
            phone: self.phone,
            linkedin: self.linkedin,
            location: self.location,
            tech_stack: decode_tech_stack(self.tech_stack.as_deref()),
            ai_insight: self.ai_insight,
            mutual_connection: self.mutual_connection,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user_id: self.user_id,
        }
    }
}

impl PgLeadStore {
    /// The ownership guard: resolves a lead only when `user_id` owns it,
    /// reused by get, update, and delete.
    async fn fetch_owned(&self, lead_id: i64, user_id: i64) -> Result<Option<LeadRow>, StoreError> {
        let sql = format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1 AND user_id = $2");
        let row = sqlx::query_as::<_, LeadRow>(&sql)
            .bind(lead_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl LeadStorage for PgLeadStore {
    #[tracing::instrument(skip(self), err)]
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Lead>, StoreError> {
        let sql = format!("SELECT {LEAD_COLUMNS} FROM leads WHERE user_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, LeadRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(LeadRow::into_lead).collect())
    }

    #[tracing::instrument(skip(self), err)]
    async fn get_by_id(&self, lead_id: i64, user_id: i64) -> Result<Option<Lead>, StoreError> {
        Ok(self
            .fetch_owned(lead_id, user_id)
            .await?
            .map(LeadRow::into_lead))
    }

    #[tracing::instrument(skip(self, lead), err)]
    async fn create(&self, lead: NewLead) -> Result<Lead, StoreError> {
        let sql = format!(
            "INSERT INTO leads (name, first_name, last_name, title, company, company_logo, \
             avatar, status, confidence, email, phone, linkedin, location, tech_stack, \
             ai_insight, mutual_connection, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {LEAD_COLUMNS}"
        );
        let row = sqlx::query_as::<_, LeadRow>(&sql)
            .bind(&lead.name)
            .bind(&lead.first_name)
            .bind(&lead.last_name)
            .bind(&lead.title)
            .bind(&lead.company)
            .bind(&lead.company_logo)
            .bind(&lead.avatar)
            .bind(lead.status.unwrap_or(LeadStatus::Pending))
            .bind(lead.confidence.unwrap_or(0))
            .bind(&lead.email)
            .bind(&lead.phone)
            .bind(&lead.linkedin)
            .bind(&lead.location)
            .bind(encode_tech_stack(lead.tech_stack.as_deref()))
            .bind(&lead.ai_insight)
            .bind(&lead.mutual_connection)
            .bind(lead.user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into_lead())
    }

    #[tracing::instrument(skip(self, patch), err)]
    async fn update(
        &self,
        lead_id: i64,
        user_id: i64,
        patch: LeadPatch,
    ) -> Result<Lead, StoreError> {
        if self.fetch_owned(lead_id, user_id).await?.is_none() {
            return Err(StoreError::NotFound);
        }

        let sql = format!(
            "UPDATE leads SET \
             name = COALESCE($2, name), \
             first_name = COALESCE($3, first_name), \
             last_name = COALESCE($4, last_name), \
             title = COALESCE($5, title), \
             company = COALESCE($6, company), \
             company_logo = COALESCE($7, company_logo), \
             avatar = COALESCE($8, avatar), \
             status = COALESCE($9, status), \
             confidence = COALESCE($10, confidence), \
             email = COALESCE($11, email), \
             phone = COALESCE($12, phone), \
             linkedin = COALESCE($13, linkedin), \
             location = COALESCE($14, location), \
             tech_stack = COALESCE($15, tech_stack), \
             ai_insight = COALESCE($16, ai_insight), \
             mutual_connection = COALESCE($17, mutual_connection), \
             updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {LEAD_COLUMNS}"
        );
        let row = sqlx::query_as::<_, LeadRow>(&sql)
            .bind(lead_id)
            .bind(&patch.name)
            .bind(&patch.first_name)
            .bind(&patch.last_name)
            .bind(&patch.title)
            .bind(&patch.company)
            .bind(&patch.company_logo)
            .bind(&patch.avatar)
            .bind(patch.status)
            .bind(patch.confidence)
            .bind(&patch.email)
            .bind(&patch.phone)
            .bind(&patch.linkedin)
            .bind(&patch.location)
            .bind(encode_tech_stack(patch.tech_stack.as_deref()))
            .bind(&patch.ai_insight)
            .bind(&patch.mutual_connection)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into_lead())
    }

    #[tracing::instrument(skip(self), err)]
    async fn delete(&self, lead_id: i64, user_id: i64) -> Result<(), StoreError> {
        if self.fetch_owned(lead_id, user_id).await?.is_none() {
            return Err(StoreError::NotFound);
        }

        sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(lead_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UserStorage for PgLeadStore {
    #[tracing::instrument(skip(self), err)]
    async fn user_by_open_id(&self, open_id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, open_id, name, email, login_method, role, created_at, updated_at, \
             last_signed_in FROM users WHERE open_id = $1",
        )
        .bind(open_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

// Integration tests using an actual database.
// Skipped by default because you have to spin up a db,
// Run with: `cargo test -p lead_store -- --ignored`
#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    async fn seed_user(pool: &PgPool, open_id: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO users (open_id) VALUES ($1) RETURNING id")
            .bind(open_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    #[ignore]
    async fn create_then_get_respects_ownership(pool: PgPool) -> sqlx::Result<()> {
        let store = PgLeadStore::new(pool.clone());
        let owner = seed_user(&pool, "owner").await;
        let stranger = seed_user(&pool, "stranger").await;

        let created = store
            .create(NewLead {
                name: "Test Lead".to_string(),
                company: "Test Company".to_string(),
                tech_stack: Some(vec!["a".to_string(), "b".to_string()]),
                user_id: owner,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.status, LeadStatus::Pending);
        assert_eq!(created.confidence, 0);
        assert_eq!(
            created.tech_stack,
            Some(vec!["a".to_string(), "b".to_string()])
        );

        assert!(store.get_by_id(created.id, owner).await.unwrap().is_some());
        assert!(store.get_by_id(created.id, stranger).await.unwrap().is_none());

        Ok(())
    }

    #[sqlx::test]
    #[ignore]
    async fn update_merges_without_touching_the_owner(pool: PgPool) -> sqlx::Result<()> {
        let store = PgLeadStore::new(pool.clone());
        let owner = seed_user(&pool, "owner").await;

        let created = store
            .create(NewLead {
                name: "Before".to_string(),
                company: "Co".to_string(),
                user_id: owner,
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = store
            .update(
                created.id,
                owner,
                LeadPatch {
                    confidence: Some(99),
                    status: Some(LeadStatus::Enriched),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.confidence, 99);
        assert_eq!(updated.status, LeadStatus::Enriched);
        assert_eq!(updated.name, "Before");
        assert_eq!(updated.user_id, owner);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        Ok(())
    }

    #[sqlx::test]
    #[ignore]
    async fn delete_is_guarded_and_hard(pool: PgPool) -> sqlx::Result<()> {
        let store = PgLeadStore::new(pool.clone());
        let owner = seed_user(&pool, "owner").await;
        let stranger = seed_user(&pool, "stranger").await;

        let created = store
            .create(NewLead {
                name: "Doomed".to_string(),
                company: "Co".to_string(),
                user_id: owner,
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(matches!(
            store.delete(created.id, stranger).await,
            Err(StoreError::NotFound)
        ));

        store.delete(created.id, owner).await.unwrap();
        assert!(store.get_by_id(created.id, owner).await.unwrap().is_none());

        Ok(())
    }
}
