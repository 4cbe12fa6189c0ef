use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::{LeadPatch, LeadStatus, NewLead};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("company must not be empty")]
    EmptyCompany,
    #[error("confidence must be between 0 and 100, got {0}")]
    ConfidenceOutOfRange(i32),
}

/// Body of a create call: the lead fields minus id, owner, and timestamps.
/// The owner is always the authenticated caller; the shape has no field for
/// it, so a client-supplied owner cannot exist.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
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
}

impl CreateLeadRequest {
    /// Validate all lead creation constraints
    pub fn validate(&self) -> Result<(), LeadValidationError> {
        if self.name.trim().is_empty() {
            return Err(LeadValidationError::EmptyName);
        }
        if self.company.trim().is_empty() {
            return Err(LeadValidationError::EmptyCompany);
        }
        if let Some(confidence) = self.confidence {
            if !(0..=100).contains(&confidence) {
                return Err(LeadValidationError::ConfidenceOutOfRange(confidence));
            }
        }
        Ok(())
    }

    /// Stamp the authenticated owner onto the validated fields.
    pub fn into_new_lead(self, user_id: i64) -> NewLead {
        NewLead {
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
            tech_stack: self.tech_stack,
            ai_insight: self.ai_insight,
            mutual_connection: self.mutual_connection,
            user_id,
        }
    }
}

impl LeadPatch {
    /// Validate the supplied subset of fields; absent fields have nothing
    /// to check.
    pub fn validate(&self) -> Result<(), LeadValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(LeadValidationError::EmptyName);
            }
        }
        if let Some(company) = &self.company {
            if company.trim().is_empty() {
                return Err(LeadValidationError::EmptyCompany);
            }
        }
        if let Some(confidence) = self.confidence {
            if !(0..=100).contains(&confidence) {
                return Err(LeadValidationError::ConfidenceOutOfRange(confidence));
            }
        }
        Ok(())
    }
}
