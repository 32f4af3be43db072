use crate::domain::model::{Activity, SeedActivity};

/// Activities every fresh registry starts with unless the config file
/// provides its own list.
pub fn default_activities() -> Vec<SeedActivity> {
    vec![
        seed(
            "Basketball",
            "Play basketball and develop shooting and teamwork skills",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
        seed(
            "Soccer",
            "Competitive soccer matches and practice sessions",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["james@mergington.edu"],
        ),
        seed(
            "Art Club",
            "Explore painting, drawing, and visual arts techniques",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
            &["lucy@mergington.edu"],
        ),
        seed(
            "Theater",
            "Perform in school plays and develop acting skills",
            "Mondays and Fridays, 3:30 PM - 5:00 PM",
            25,
            &["sarah@mergington.edu", "tom@mergington.edu"],
        ),
        seed(
            "Debate Club",
            "Develop argumentation and public speaking skills through debates",
            "Thursdays, 3:30 PM - 4:30 PM",
            16,
            &["robert@mergington.edu"],
        ),
        seed(
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Tuesdays, 3:30 PM - 4:30 PM",
            20,
            &["maya@mergington.edu", "chris@mergington.edu"],
        ),
        seed(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        seed(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        seed(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    ]
}

fn seed(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> SeedActivity {
    SeedActivity {
        name: name.to_string(),
        activity: Activity::new(description, schedule, max_participants)
            .with_participants(participants.iter().copied()),
    }
}
