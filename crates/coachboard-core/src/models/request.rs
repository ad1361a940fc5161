//! Client app change requests (workout and diet)

use crate::view::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which program surface the request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Workout,
    Diet,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Workout => "workout",
            RequestKind::Diet => "diet",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change request raised by a client from the mobile app, e.g. swapping
/// an exercise or a meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRequest {
    pub id: String,
    pub kind: RequestKind,
    pub client: String,
    pub group: String,
    pub subscription: String,
    /// Workout requests: exercise the client wants changed.
    #[serde(default)]
    pub exercise: Option<String>,
    /// Workout requests: plan the exercise belongs to.
    #[serde(default)]
    pub workout: Option<String>,
    /// Diet requests: plan the meal belongs to.
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub meal: Option<String>,
    #[serde(default)]
    pub recipe: Option<String>,
    pub reason: String,
    /// Request time as RFC 3339.
    pub since: String,
    pub mark_as_read: bool,
    pub status: RequestStatus,
}

impl AppRequest {
    /// Subject line for table display: the exercise or recipe in question.
    pub fn subject(&self) -> &str {
        self.exercise
            .as_deref()
            .or(self.recipe.as_deref())
            .or(self.meal.as_deref())
            .unwrap_or("")
    }
}

impl Record for AppRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_prefers_exercise_then_recipe() {
        let json = r#"{
            "id": "1",
            "kind": "diet",
            "client": "Sarah Johnson",
            "group": "Weight Loss",
            "subscription": "Premium",
            "meal": "Breakfast",
            "recipe": "Oatmeal with Berries",
            "reason": "Allergic to berries, need alternative",
            "since": "2024-08-25T10:30:00Z",
            "markAsRead": false,
            "status": "pending"
        }"#;
        let request: AppRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.subject(), "Oatmeal with Berries");
        assert_eq!(request.status, RequestStatus::Pending);
    }
}
