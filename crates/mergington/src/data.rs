//! Data structures exchanged between the Mergington backend and its clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An extracurricular activity and its current roster.
///
/// The name is the key of the directory, so it is not repeated inside the
/// serialized record. Records are only ever written out, never read back.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Informational, sign ups beyond it are accepted.
    pub max_participants: u32,
    /// Participant emails in sign up order, without duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder style helper to pre-enroll participants.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            self.add_participant(email.into());
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends the email unless already present. Returns whether it was added.
    pub fn add_participant(&mut self, email: String) -> bool {
        if self.has_participant(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes the email, keeping the order of the others. Returns whether it was present.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != email);
        self.participants.len() != before
    }
}

/// All activities keyed by name.
pub type Directory = BTreeMap<String, Activity>;

/// Body of a successful sign up or unregister.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: String,
    pub activity_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new("Chess Club", "Strategy", "Fridays", 12)
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])
    }

    #[test]
    fn add_participant_rejects_duplicates() {
        let mut activity = chess();
        assert!(!activity.add_participant("michael@mergington.edu".to_string()));
        assert!(activity.add_participant("new@mergington.edu".to_string()));
        assert_eq!(
            activity.participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "new@mergington.edu"
            ]
        );
    }

    #[test]
    fn remove_participant_keeps_order() {
        let mut activity = chess().with_participants(["third@mergington.edu"]);
        assert!(activity.remove_participant("daniel@mergington.edu"));
        assert!(!activity.remove_participant("daniel@mergington.edu"));
        assert_eq!(
            activity.participants,
            vec!["michael@mergington.edu", "third@mergington.edu"]
        );
    }

    #[test]
    fn activity_serializes_without_name() {
        let json = serde_json::to_value(chess()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Strategy",
                "schedule": "Fridays",
                "max_participants": 12,
                "participants": ["michael@mergington.edu", "daniel@mergington.edu"],
            })
        );
    }

    #[test]
    fn health_status_is_lowercase() {
        let json = serde_json::to_string(&HealthStatus::Healthy).unwrap();
        assert_eq!(json, "\"healthy\"");
    }
}
