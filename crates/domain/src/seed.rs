//! Default seed data
//!
//! Fixed records substituted whenever a persisted document is absent or
//! unparsable, and the default profile applied at every startup.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::types::{Achievement, Activity, ActivityCategory, UserProfile, UserStats};
use crate::utils::relative_time::relative_label;

/// The four seed activities, newest first
pub fn seed_activities(now: DateTime<Utc>) -> Vec<Activity> {
    let entries = [
        ("1", "Commute to work", ActivityCategory::Transportation, 3.2, Duration::minutes(30)),
        ("2", "Vegetarian lunch", ActivityCategory::Food, 1.5, Duration::hours(2)),
        ("3", "Online shopping", ActivityCategory::Shopping, 2.8, Duration::hours(4)),
        ("4", "Used air conditioning", ActivityCategory::Energy, 3.5, Duration::hours(5)),
    ];

    entries
        .into_iter()
        .map(|(id, name, category, emissions, age)| {
            let style = category.style();
            let logged_at = now - age;
            Activity {
                id: id.to_string(),
                name: name.to_string(),
                category,
                emissions,
                logged_at,
                timestamp_label: relative_label(logged_at, now),
                icon: style.icon.to_string(),
                badge_class: style.badge_class.to_string(),
            }
        })
        .collect()
}

/// The six seed achievements
pub fn seed_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".into(),
            title: "Green Commuter".into(),
            description: "Use public transportation or bike to work for 5 consecutive days".into(),
            progress: 100.0,
            is_completed: true,
            icon: "bike".into(),
            points: 100,
            required_value: 5,
            category: "Transportation".into(),
        },
        Achievement {
            id: "2".into(),
            title: "Plant-Based Pioneer".into(),
            description: "Eat plant-based meals for 10 days in a month".into(),
            progress: 70.0,
            is_completed: false,
            icon: "utensils".into(),
            points: 150,
            required_value: 10,
            category: "Food".into(),
        },
        Achievement {
            id: "3".into(),
            title: "Energy Saver".into(),
            description: "Reduce your electricity usage by 10% compared to last month".into(),
            progress: 100.0,
            is_completed: true,
            icon: "lightbulb".into(),
            points: 120,
            required_value: 10,
            category: "Energy".into(),
        },
        Achievement {
            id: "4".into(),
            title: "Zero Waste Warrior".into(),
            description: "Go a full week without producing landfill waste".into(),
            progress: 40.0,
            is_completed: false,
            icon: "trash".into(),
            points: 200,
            required_value: 7,
            category: "Waste".into(),
        },
        Achievement {
            id: "5".into(),
            title: "Carbon Footprint Tracker".into(),
            description: "Log your activities for 14 consecutive days".into(),
            progress: 85.0,
            is_completed: false,
            icon: "calendar".into(),
            points: 150,
            required_value: 14,
            category: "Tracking".into(),
        },
        Achievement {
            id: "6".into(),
            title: "Sustainable Shopper".into(),
            description: "Make 5 purchases from sustainable brands".into(),
            progress: 60.0,
            is_completed: false,
            icon: "shopping-bag".into(),
            points: 100,
            required_value: 5,
            category: "Shopping".into(),
        },
    ]
}

/// Default stats applied when no persisted record exists
pub fn default_user_stats() -> UserStats {
    UserStats { total_activities: 24, streak_days: 8, saved_emissions: 45.2 }
}

/// Default profile, applied unconditionally at startup
pub fn default_user_profile() -> UserProfile {
    UserProfile {
        name: "Demo User".into(),
        email: "demo@example.com".into(),
        goal: 100.0, // kg CO2e per week
        join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
        level: 2,
        points: 320,
    }
}
