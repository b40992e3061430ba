//! The activities Mergington High School offers when the server starts.

use mergington::data::Activity;

pub fn activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(["lucas@mergington.edu", "mia@mergington.edu"]),
        Activity::new(
            "Basketball Club",
            "Practice basketball skills and play friendly games",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["ethan@mergington.edu"]),
        Activity::new(
            "Swimming Club",
            "Improve swimming technique and train for meets",
            "Mondays and Wednesdays, 6:30 AM - 7:30 AM",
            18,
        ),
        Activity::new(
            "Art Club",
            "Explore painting, drawing and other visual arts",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["amelia@mergington.edu"]),
        Activity::new(
            "Drama Club",
            "Act, direct and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        Activity::new(
            "Math Olympiad",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(["james@mergington.edu"]),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let activities = activities();
        let names: HashSet<_> = activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names.len(), activities.len());
    }

    #[test]
    fn documented_rosters() {
        let activities = activities();
        let soccer = activities.iter().find(|a| a.name == "Soccer Team").unwrap();
        assert!(soccer.has_participant("lucas@mergington.edu"));

        let basketball = activities
            .iter()
            .find(|a| a.name == "Basketball Club")
            .unwrap();
        assert!(!basketball.has_participant("reusable@mergington.edu"));
    }
}
