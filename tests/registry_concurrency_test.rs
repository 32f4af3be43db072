use mergington_activities::core::SeedActivity;
use mergington_activities::domain::model::Activity;
use mergington_activities::{ActivityError, ActivityRegistry, InMemoryRegistry};
use std::collections::HashSet;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_enrollments_all_land_once() {
    let registry = Arc::new(InMemoryRegistry::default());

    let handles: Vec<_> = (0..200)
        .map(|i| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                registry.enroll("Programming Class", &format!("student{}@mergington.edu", i))
            })
        })
        .collect();

    for handle in handles {
        assert_ok!(handle.await.unwrap());
    }

    let participants = registry.list()["Programming Class"].participants.clone();
    assert_eq!(participants.len(), 202);

    let unique: HashSet<&String> = participants.iter().collect();
    assert_eq!(unique.len(), participants.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_enrollment_succeeds_once() {
    let registry = Arc::new(InMemoryRegistry::default());

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move { registry.enroll("Debate Club", "racer@mergington.edu") })
        })
        .collect();

    let mut successes = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(ActivityError::AlreadyEnrolled { .. }) => duplicates += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 63);
    assert_eq!(
        registry.list()["Debate Club"].participants,
        vec!["robert@mergington.edu", "racer@mergington.edu"]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_interleaved_enroll_withdraw_round_trips() {
    let registry = Arc::new(InMemoryRegistry::default());
    let before = registry.list();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                let activity = if i % 2 == 0 { "Theater" } else { "Science Club" };
                let participant = format!("visitor{}@mergington.edu", i);
                registry.enroll(activity, &participant)?;
                let _ = registry.list();
                registry.withdraw(activity, &participant)
            })
        })
        .collect();

    for handle in handles {
        assert_ok!(handle.await.unwrap());
    }

    assert_eq!(registry.list(), before);
}

#[test]
fn test_membership_is_independent_per_activity() {
    let registry = InMemoryRegistry::default();
    let email = "multitask@mergington.edu";

    for activity in ["Basketball", "Soccer", "Art Club"] {
        assert_ok!(registry.enroll(activity, email));
    }
    assert_ok!(registry.withdraw("Soccer", email));

    let snapshot = registry.list();
    assert!(snapshot["Basketball"].is_enrolled(email));
    assert!(!snapshot["Soccer"].is_enrolled(email));
    assert!(snapshot["Art Club"].is_enrolled(email));
}

#[test]
fn test_custom_seed_registry() {
    let seeds = vec![SeedActivity {
        name: "Robotics".to_string(),
        activity: Activity::new("Build robots", "Saturdays", 8),
    }];
    let registry = InMemoryRegistry::from_seed(seeds).unwrap();

    assert_eq!(registry.len(), 1);
    assert_err!(registry.enroll("Basketball", "a@mergington.edu"));
    assert_ok!(registry.enroll("Robotics", "a@mergington.edu"));
}
