use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::samples::sample_leads;
use crate::storage::{LeadStorage, StoreError, UserStorage};
use crate::{decode_tech_stack, encode_tech_stack, Lead, LeadPatch, LeadStatus, NewLead, Role, User};

/// In-process store used when no database is configured.
///
/// This is the full system of record in that mode, not a cache: state lives
/// in one mutex-guarded map, ids are synthetic and sequential, nothing
/// survives a restart, and a single process is assumed. Each user id is
/// lazily seeded with the fixed sample leads the first time it is touched,
/// and any session subject resolves to a synthesized user row, so the stack
/// is fully usable with zero infrastructure.
#[derive(Default)]
pub struct MemoryLeadStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    leads: BTreeMap<i64, Lead>,
    users: Vec<User>,
    seeded: HashSet<i64>,
    next_lead_id: i64,
    next_user_id: i64,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn seed_user(&mut self, user_id: i64) {
        if !self.seeded.insert(user_id) {
            return;
        }
        for lead in sample_leads(user_id) {
            self.insert(lead);
        }
    }

    fn insert(&mut self, lead: NewLead) -> Lead {
        self.next_lead_id += 1;
        let now = Utc::now();
        // Round-trip through the stored representation so the fallback has
        // the same serialization behavior as the real store.
        let tech_stack = encode_tech_stack(lead.tech_stack.as_deref());
        let lead = Lead {
            id: self.next_lead_id,
            name: lead.name,
            first_name: lead.first_name,
            last_name: lead.last_name,
            title: lead.title,
            company: lead.company,
            company_logo: lead.company_logo,
            avatar: lead.avatar,
            status: lead.status.unwrap_or(LeadStatus::Pending),
            confidence: lead.confidence.unwrap_or(0),
            email: lead.email,
            phone: lead.phone,
            linkedin: lead.linkedin,
            location: lead.location,
            tech_stack: decode_tech_stack(tech_stack.as_deref()),
            ai_insight: lead.ai_insight,
            mutual_connection: lead.mutual_connection,
            created_at: now,
            updated_at: now,
            user_id: lead.user_id,
        };
        self.leads.insert(lead.id, lead.clone());
        lead
    }

    /// The ownership guard: a lead is only visible to its owner.
    fn fetch_owned(&self, lead_id: i64, user_id: i64) -> Option<&Lead> {
        self.leads
            .get(&lead_id)
            .filter(|lead| lead.user_id == user_id)
    }
}

#[async_trait]
impl LeadStorage for MemoryLeadStore {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Lead>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.seed_user(user_id);
        Ok(inner
            .leads
            .values()
            .filter(|lead| lead.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, lead_id: i64, user_id: i64) -> Result<Option<Lead>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.seed_user(user_id);
        Ok(inner.fetch_owned(lead_id, user_id).cloned())
    }

    async fn create(&self, lead: NewLead) -> Result<Lead, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.seed_user(lead.user_id);
        Ok(inner.insert(lead))
    }

    async fn update(
        &self,
        lead_id: i64,
        user_id: i64,
        patch: LeadPatch,
    ) -> Result<Lead, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.seed_user(user_id);
        if inner.fetch_owned(lead_id, user_id).is_none() {
            return Err(StoreError::NotFound);
        }

        let lead = inner.leads.get_mut(&lead_id).ok_or(StoreError::NotFound)?;
        if let Some(name) = patch.name {
            lead.name = name;
        }
        if let Some(first_name) = patch.first_name {
            lead.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            lead.last_name = Some(last_name);
        }
        if let Some(title) = patch.title {
            lead.title = Some(title);
        }
        if let Some(company) = patch.company {
            lead.company = company;
        }
        if let Some(company_logo) = patch.company_logo {
            lead.company_logo = Some(company_logo);
        }
        if let Some(avatar) = patch.avatar {
            lead.avatar = Some(avatar);
        }
        if let Some(status) = patch.status {
            lead.status = status;
        }
        if let Some(confidence) = patch.confidence {
            lead.confidence = confidence;
        }
        if let Some(email) = patch.email {
            lead.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            lead.phone = Some(phone);
        }
        if let Some(linkedin) = patch.linkedin {
            lead.linkedin = Some(linkedin);
        }
        if let Some(location) = patch.location {
            lead.location = Some(location);
        }
        if let Some(tech_stack) = patch.tech_stack {
            let encoded = encode_tech_stack(Some(&tech_stack));
            lead.tech_stack = decode_tech_stack(encoded.as_deref());
        }
        if let Some(ai_insight) = patch.ai_insight {
            lead.ai_insight = Some(ai_insight);
        }
        if let Some(mutual_connection) = patch.mutual_connection {
            lead.mutual_connection = Some(mutual_connection);
        }
        lead.updated_at = Utc::now();

        Ok(lead.clone())
    }

    async fn delete(&self, lead_id: i64, user_id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.seed_user(user_id);
        if inner.fetch_owned(lead_id, user_id).is_none() {
            return Err(StoreError::NotFound);
        }
        inner.leads.remove(&lead_id);
        Ok(())
    }
}

#[async_trait]
impl UserStorage for MemoryLeadStore {
    /// Any subject resolves to a user in fallback mode; unknown open ids
    /// get a synthesized row with the next sequential id.
    async fn user_by_open_id(&self, open_id: &str) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.iter().find(|user| user.open_id == open_id) {
            return Ok(Some(user.clone()));
        }

        inner.next_user_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_user_id,
            open_id: open_id.to_string(),
            name: None,
            email: None,
            login_method: Some("fallback".to_string()),
            role: Role::User,
            created_at: now,
            updated_at: now,
            last_signed_in: now,
        };
        inner.users.push(user.clone());
        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_lead(name: &str, company: &str, user_id: i64) -> NewLead {
        NewLead {
            name: name.to_string(),
            company: company.to_string(),
            user_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn seeds_a_user_on_first_touch() {
        let store = MemoryLeadStore::new();

        let leads = store.list_for_user(1).await.unwrap();
        assert_eq!(leads.len(), 8);
        assert!(leads.iter().all(|lead| lead.user_id == 1));

        // Seeding happens once
        let again = store.list_for_user(1).await.unwrap();
        assert_eq!(again.len(), 8);
    }

    #[tokio::test]
    async fn create_applies_defaults_and_returns_the_row() {
        let store = MemoryLeadStore::new();

        let lead = store.create(new_lead("Test Lead", "Test Company", 1)).await.unwrap();
        assert_eq!(lead.status, LeadStatus::Pending);
        assert_eq!(lead.confidence, 0);
        assert_eq!(lead.user_id, 1);

        let listed = store.list_for_user(1).await.unwrap();
        assert!(listed.iter().any(|l| l.id == lead.id));
    }

    #[tokio::test]
    async fn leads_are_listed_in_insertion_order() {
        let store = MemoryLeadStore::new();
        let first = store.create(new_lead("A", "A Co", 1)).await.unwrap();
        let second = store.create(new_lead("B", "B Co", 1)).await.unwrap();

        let ids: Vec<i64> = store
            .list_for_user(1)
            .await
            .unwrap()
            .iter()
            .map(|lead| lead.id)
            .collect();
        let a = ids.iter().position(|id| *id == first.id).unwrap();
        let b = ids.iter().position(|id| *id == second.id).unwrap();
        assert!(a < b);
    }

    #[tokio::test]
    async fn ownership_is_enforced_on_reads() {
        let store = MemoryLeadStore::new();
        let lead = store.create(new_lead("Mine", "Co", 1)).await.unwrap();

        assert!(store.get_by_id(lead.id, 1).await.unwrap().is_some());
        assert!(store.get_by_id(lead.id, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn tech_stack_round_trips_through_storage() {
        let store = MemoryLeadStore::new();
        let mut lead = new_lead("Stacked", "Co", 1);
        lead.tech_stack = Some(vec!["a".to_string(), "b".to_string()]);

        let created = store.create(lead).await.unwrap();
        assert_eq!(
            created.tech_stack,
            Some(vec!["a".to_string(), "b".to_string()])
        );

        let bare = store.create(new_lead("Bare", "Co", 1)).await.unwrap();
        assert_eq!(bare.tech_stack, None);
    }

    #[tokio::test]
    async fn update_merges_and_refreshes_updated_at() {
        let store = MemoryLeadStore::new();
        let created = store.create(new_lead("Before", "Co", 1)).await.unwrap();

        let patch = LeadPatch {
            confidence: Some(99),
            status: Some(LeadStatus::Enriched),
            ..Default::default()
        };
        let updated = store.update(created.id, 1, patch).await.unwrap();

        assert_eq!(updated.confidence, 99);
        assert_eq!(updated.status, LeadStatus::Enriched);
        assert_eq!(updated.name, "Before");
        assert_eq!(updated.user_id, created.user_id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_rejects_foreign_owners() {
        let store = MemoryLeadStore::new();
        let created = store.create(new_lead("Guarded", "Co", 1)).await.unwrap();

        let result = store.update(created.id, 2, LeadPatch::default()).await;
        assert!(matches!(result, Err(StoreError::NotFound)));

        // Nothing changed for the real owner
        let unchanged = store.get_by_id(created.id, 1).await.unwrap().unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn delete_removes_only_owned_rows() {
        let store = MemoryLeadStore::new();
        let created = store.create(new_lead("Doomed", "Co", 1)).await.unwrap();

        let result = store.delete(created.id, 2).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
        assert!(store.get_by_id(created.id, 1).await.unwrap().is_some());

        store.delete(created.id, 1).await.unwrap();
        assert!(store.get_by_id(created.id, 1).await.unwrap().is_none());

        let result = store.delete(created.id, 1).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn synthesizes_users_by_open_id() {
        let store = MemoryLeadStore::new();

        let first = store.user_by_open_id("abc").await.unwrap().unwrap();
        let again = store.user_by_open_id("abc").await.unwrap().unwrap();
        assert_eq!(first.id, again.id);

        let other = store.user_by_open_id("def").await.unwrap().unwrap();
        assert_ne!(first.id, other.id);
    }
}
