//! Goal cards offered by the wizard.

use super::model::Goal;

/// A goal card as shown to the user.
///
/// `icon` is presentation-only and does not travel into the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalOffer {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub sub_options: [&'static str; 3],
}

impl GoalOffer {
    /// Builds the goal record stored in a selection.
    pub fn to_goal(&self) -> Goal {
        Goal {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            sub_options: self.sub_options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub const GOAL_CATALOG: [GoalOffer; 4] = [
    GoalOffer {
        id: "weight-loss",
        name: "Weight Loss",
        description: "Burn fat and reduce weight with cardio and nutrition plans",
        icon: "🔥",
        sub_options: ["HIIT Training", "Cardio Focus", "Nutrition Plan"],
    },
    GoalOffer {
        id: "muscle-gain",
        name: "Muscle Gain",
        description: "Build muscle mass and strength with resistance training",
        icon: "💪",
        sub_options: ["Strength Training", "Hypertrophy Focus", "Protein Planning"],
    },
    GoalOffer {
        id: "endurance",
        name: "Endurance",
        description: "Improve stamina and cardiovascular health",
        icon: "🏃",
        sub_options: ["Long Distance Training", "Interval Workouts", "Recovery Focus"],
    },
    GoalOffer {
        id: "general-fitness",
        name: "General Fitness",
        description: "Balanced approach to overall health and wellness",
        icon: "⚖️",
        sub_options: ["Balanced Workouts", "Flexibility", "Wellness Coaching"],
    },
];

/// Finds a goal card by id.
pub fn find_goal(id: &str) -> Option<&'static GoalOffer> {
    GOAL_CATALOG.iter().find(|offer| offer.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_goal() {
        let offer = find_goal("endurance").unwrap();
        assert_eq!(offer.name, "Endurance");
        assert!(find_goal("bulking").is_none());
    }

    #[test]
    fn test_to_goal_keeps_sub_options_in_order() {
        let goal = find_goal("muscle-gain").unwrap().to_goal();
        assert_eq!(goal.id, "muscle-gain");
        assert_eq!(
            goal.sub_options,
            vec!["Strength Training", "Hypertrophy Focus", "Protein Planning"]
        );
    }

    #[test]
    fn test_goal_ids_are_unique() {
        let mut ids: Vec<&str> = GOAL_CATALOG.iter().map(|g| g.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), GOAL_CATALOG.len());
    }
}
