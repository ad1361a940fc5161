//! Lead, lead-response and referrer records

use crate::view::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline status of a lead (also used by form responses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Converted => "Converted",
            LeadStatus::Lost => "Lost",
        }
    }

    pub fn all() -> &'static [LeadStatus] {
        &[
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Converted,
            LeadStatus::Lost,
        ]
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    Website,
    Referral,
    Social,
    Ads,
    Other,
}

impl LeadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadSource::Website => "website",
            LeadSource::Referral => "referral",
            LeadSource::Social => "social",
            LeadSource::Ads => "ads",
            LeadSource::Other => "other",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prospective client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    pub source: LeadSource,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub last_contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Program category of interest ("Weight Loss", ...).
    pub category: String,
}

impl Record for Lead {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A form submission from a lead (website/app intake).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub id: String,
    pub response: String,
    pub created_by: String,
    pub created_at: String,
    pub lead_name: String,
    pub lead_email: String,
    pub lead_phone: String,
    pub form_type: String,
    pub status: LeadStatus,
}

impl Record for LeadResponse {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferrerStatus {
    Active,
    Inactive,
}

impl ReferrerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferrerStatus::Active => "active",
            ReferrerStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ReferrerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A referral code handed out to clients or campaigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referrer {
    pub id: String,
    /// The code itself ("FITNESS2024").
    pub referrer: String,
    pub created_by: String,
    pub created_at: String,
    pub usage_count: u64,
    pub total_leads: u64,
    /// Share of referred leads that converted, 0-100.
    pub conversion_rate: f64,
    pub status: ReferrerStatus,
    pub description: String,
}

impl Record for Referrer {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_status_round_trip() {
        for status in LeadStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            let back: LeadStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *status);
        }
    }

    #[test]
    fn test_lead_optional_fields() {
        let json = r#"{
            "id": "1",
            "name": "Jennifer Wilson",
            "email": "jennifer.wilson@email.com",
            "phone": "+1 (555) 987-6543",
            "status": "new",
            "source": "website",
            "createdAt": "2024-08-25",
            "category": "Weight Loss"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert!(lead.assigned_to.is_none());
        assert_eq!(lead.status, LeadStatus::New);
    }
}
