use crate::core::{Activity, ActivityRegistry, ActivitySnapshot, Confirmation, SeedActivity};
use crate::domain::seed;
use crate::utils::error::{ActivityError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_unique};
use indexmap::IndexMap;
use parking_lot::RwLock;

/// In-memory registry.
///
/// The set of activity names is fixed at construction, so the map itself is
/// never locked. Each activity carries its own lock; mutations on different
/// activities never contend.
pub struct InMemoryRegistry {
    activities: IndexMap<String, RwLock<Activity>>,
}

impl InMemoryRegistry {
    /// Builds a registry from a seed list, rejecting duplicate names,
    /// duplicate participants and zero capacity.
    pub fn from_seed(seeds: Vec<SeedActivity>) -> Result<Self> {
        validate_seed(&seeds)?;

        let activities = seeds
            .into_iter()
            .map(|s| (s.name, RwLock::new(s.activity)))
            .collect();

        Ok(Self { activities })
    }

    fn entry(&self, activity: &str) -> Result<&RwLock<Activity>> {
        self.activities
            .get(activity)
            .ok_or_else(|| ActivityError::ActivityNotFound {
                activity: activity.to_string(),
            })
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        let activities = seed::default_activities()
            .into_iter()
            .map(|s| (s.name, RwLock::new(s.activity)))
            .collect();

        Self { activities }
    }
}

impl ActivityRegistry for InMemoryRegistry {
    fn list(&self) -> ActivitySnapshot {
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.read().clone()))
            .collect()
    }

    fn enroll(&self, activity: &str, participant: &str) -> Result<Confirmation> {
        let entry = self.entry(activity).inspect_err(|_| {
            tracing::debug!(activity, participant, "enroll rejected: unknown activity");
        })?;

        let mut guard = entry.write();
        if guard.is_enrolled(participant) {
            tracing::debug!(activity, participant, "enroll rejected: already enrolled");
            return Err(ActivityError::AlreadyEnrolled {
                activity: activity.to_string(),
                participant: participant.to_string(),
            });
        }

        guard.participants.push(participant.to_string());
        if guard.is_over_capacity() {
            tracing::warn!(
                activity,
                enrolled = guard.participants.len(),
                max_participants = guard.max_participants,
                "activity is over capacity"
            );
        }
        tracing::info!(activity, participant, "participant enrolled");

        Ok(Confirmation::enrolled(activity, participant))
    }

    fn withdraw(&self, activity: &str, participant: &str) -> Result<Confirmation> {
        let entry = self.entry(activity).inspect_err(|_| {
            tracing::debug!(activity, participant, "withdraw rejected: unknown activity");
        })?;

        let mut guard = entry.write();
        let Some(position) = guard.participants.iter().position(|p| p == participant) else {
            tracing::debug!(activity, participant, "withdraw rejected: not enrolled");
            return Err(ActivityError::NotEnrolled {
                activity: activity.to_string(),
                participant: participant.to_string(),
            });
        };

        guard.participants.remove(position);
        tracing::info!(activity, participant, "participant withdrawn");

        Ok(Confirmation::withdrawn(activity, participant))
    }

    fn len(&self) -> usize {
        self.activities.len()
    }
}

fn validate_seed(seeds: &[SeedActivity]) -> Result<()> {
    validate_unique("activities.name", seeds.iter().map(|s| s.name.as_str()))?;

    for seed in seeds {
        validate_non_empty_string("activities.name", &seed.name)?;
        validate_positive_number(
            &format!("activities.{}.max_participants", seed.name),
            seed.activity.max_participants,
            1,
        )?;
        validate_unique(
            &format!("activities.{}.participants", seed.name),
            seed.activity.participants.iter().map(String::as_str),
        )?;
    }

    Ok(())
}
