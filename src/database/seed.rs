use crate::models::{Activity, ActivityTable};

// (name, description, schedule, max_participants, participants)
type SeedRow = (&'static str, &'static str, &'static str, usize, &'static [&'static str]);

const SEED_ACTIVITIES: &[SeedRow] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball league and practice",
        "Mondays and Thursdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn tennis skills and compete in matches",
        "Wednesdays and Saturdays, 4:00 PM - 5:00 PM",
        10,
        &["jessica@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, and sculpture techniques",
        "Tuesdays and Fridays, 3:30 PM - 5:00 PM",
        18,
        &["maya@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Music Ensemble",
        "Join the school orchestra and perform concerts",
        "Mondays and Wednesdays, 3:30 PM - 4:45 PM",
        25,
        &["noah@mergington.edu"],
    ),
    (
        "Debate Club",
        "Develop argumentation skills and compete in debates",
        "Thursdays, 3:30 PM - 5:00 PM",
        16,
        &["grace@mergington.edu", "james@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Participate in science competitions and experiments",
        "Tuesdays and Saturdays, 2:00 PM - 4:00 PM",
        14,
        &["sarah@mergington.edu"],
    ),
];

// The activity table every process starts with.
pub fn seed_activities() -> ActivityTable {
    let mut table = ActivityTable::new();
    for (name, description, schedule, max_participants, participants) in SEED_ACTIVITIES {
        table.insert(
            *name,
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        );
    }
    table
}
