use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One extracurricular offering. The name is the registry key and lives
/// outside this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory only; enrollment does not check it.
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_enrolled(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

/// Named activity as it appears in a seed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedActivity {
    pub name: String,
    #[serde(flatten)]
    pub activity: Activity,
}

/// Point-in-time copy of the registry, in seed order.
pub type ActivitySnapshot = IndexMap<String, Activity>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Enrolled,
    Withdrawn,
}

/// Returned by a successful enroll or withdraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub activity: String,
    pub participant: String,
    pub change: MembershipChange,
}

impl Confirmation {
    pub fn enrolled(activity: &str, participant: &str) -> Self {
        Self {
            activity: activity.to_string(),
            participant: participant.to_string(),
            change: MembershipChange::Enrolled,
        }
    }

    pub fn withdrawn(activity: &str, participant: &str) -> Self {
        Self {
            activity: activity.to_string(),
            participant: participant.to_string(),
            change: MembershipChange::Withdrawn,
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.change {
            MembershipChange::Enrolled => {
                write!(f, "{} signed up for {}", self.participant, self.activity)
            }
            MembershipChange::Withdrawn => {
                write!(f, "{} unregistered from {}", self.participant, self.activity)
            }
        }
    }
}
