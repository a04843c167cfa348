//! Mock Data Source
//!
//! Compiled-in fixtures mirroring the backend payloads, used when the
//! dashboard runs without a live API. Lookups go through the same
//! formatters as the HTTP path; a missing user behaves like an HTTP 404
//! and yields `None`.

use crate::api::client::{RawActivity, RawAverageSessions, RawPerformance, RawUserMain};
use crate::format::{self, ActivitySample, PerformanceSample, SessionSample, UserProfile};

const USER_MAIN_DATA: &str = r#"[
    {
        "id": 12,
        "userInfos": { "firstName": "Karl", "lastName": "Dovineau", "age": 31 },
        "todayScore": 0.12,
        "keyData": {
            "calorieCount": 1930,
            "proteinCount": 155,
            "carbohydrateCount": 290,
            "lipidCount": 50
        }
    },
    {
        "id": 18,
        "userInfos": { "firstName": "Cecilia", "lastName": "Ratorez", "age": 34 },
        "score": 0.3,
        "keyData": {
            "calorieCount": 2500,
            "proteinCount": 90,
            "carbohydrateCount": 150,
            "lipidCount": 120
        }
    }
]"#;

const USER_ACTIVITY: &str = r#"[
    {
        "userId": 12,
        "sessions": [
            { "day": "2020-07-01", "kilogram": 80, "calories": 240 },
            { "day": "2020-07-02", "kilogram": 80, "calories": 220 },
            { "day": "2020-07-03", "kilogram": 81, "calories": 280 },
            { "day": "2020-07-04", "kilogram": 81, "calories": 290 },
            { "day": "2020-07-05", "kilogram": 80, "calories": 160 },
            { "day": "2020-07-06", "kilogram": 78, "calories": 162 },
            { "day": "2020-07-07", "kilogram": 76, "calories": 390 }
        ]
    },
    {
        "userId": 18,
        "sessions": [
            { "day": "2020-07-01", "kilogram": 70, "calories": 240 },
            { "day": "2020-07-02", "kilogram": 69, "calories": 220 },
            { "day": "2020-07-03", "kilogram": 70, "calories": 280 },
            { "day": "2020-07-04", "kilogram": 70, "calories": 500 },
            { "day": "2020-07-05", "kilogram": 69, "calories": 160 },
            { "day": "2020-07-06", "kilogram": 69, "calories": 162 },
            { "day": "2020-07-07", "kilogram": 69, "calories": 390 }
        ]
    }
]"#;

const USER_AVERAGE_SESSIONS: &str = r#"[
    {
        "userId": 12,
        "sessions": [
            { "day": 1, "sessionLength": 30 },
            { "day": 2, "sessionLength": 23 },
            { "day": 3, "sessionLength": 45 },
            { "day": 4, "sessionLength": 50 },
            { "day": 5, "sessionLength": 0 },
            { "day": 6, "sessionLength": 0 },
            { "day": 7, "sessionLength": 60 }
        ]
    },
    {
        "userId": 18,
        "sessions": [
            { "day": 1, "sessionLength": 30 },
            { "day": 2, "sessionLength": 40 },
            { "day": 3, "sessionLength": 50 },
            { "day": 4, "sessionLength": 30 },
            { "day": 5, "sessionLength": 30 },
            { "day": 6, "sessionLength": 50 },
            { "day": 7, "sessionLength": 50 }
        ]
    }
]"#;

const USER_PERFORMANCE: &str = r#"[
    {
        "userId": 12,
        "kind": {
            "1": "cardio",
            "2": "energy",
            "3": "endurance",
            "4": "strength",
            "5": "speed",
            "6": "intensity"
        },
        "data": [
            { "value": 80, "kind": 1 },
            { "value": 120, "kind": 2 },
            { "value": 140, "kind": 3 },
            { "value": 50, "kind": 4 },
            { "value": 200, "kind": 5 },
            { "value": 90, "kind": 6 }
        ]
    },
    {
        "userId": 18,
        "kind": {
            "1": "cardio",
            "2": "energy",
            "3": "endurance",
            "4": "strength",
            "5": "speed",
            "6": "intensity"
        },
        "data": [
            { "value": 200, "kind": 1 },
            { "value": 240, "kind": 2 },
            { "value": 80, "kind": 3 },
            { "value": 80, "kind": 4 },
            { "value": 220, "kind": 5 },
            { "value": 110, "kind": 6 }
        ]
    }
]"#;

/// Look up and format a user's main data
pub fn user_main(user_id: u32) -> Option<UserProfile> {
    let records: Vec<RawUserMain> = serde_json::from_str(USER_MAIN_DATA).ok()?;
    let raw = records.into_iter().find(|record| record.id == user_id)?;
    Some(format::format_user_main(raw))
}

/// Look up and format a user's daily activity
pub fn user_activity(user_id: u32) -> Option<Vec<ActivitySample>> {
    let records: Vec<RawActivity> = serde_json::from_str(USER_ACTIVITY).ok()?;
    let raw = records.into_iter().find(|record| record.user_id == user_id)?;
    Some(format::format_user_activity(raw))
}

/// Look up and format a user's average session durations
pub fn user_average_sessions(user_id: u32) -> Option<Vec<SessionSample>> {
    let records: Vec<RawAverageSessions> = serde_json::from_str(USER_AVERAGE_SESSIONS).ok()?;
    let raw = records.into_iter().find(|record| record.user_id == user_id)?;
    Some(format::format_user_average_sessions(raw))
}

/// Look up and format a user's performance categories
pub fn user_performance(user_id: u32) -> Option<Vec<PerformanceSample>> {
    let records: Vec<RawPerformance> = serde_json::from_str(USER_PERFORMANCE).ok()?;
    let raw = records.into_iter().find(|record| record.user_id == user_id)?;
    Some(format::format_user_performance(raw))
}

/// Seeded profiles, used by the landing page to offer entry points
pub fn seeded_profiles() -> Vec<(u32, String)> {
    serde_json::from_str::<Vec<RawUserMain>>(USER_MAIN_DATA)
        .map(|records| {
            records
                .into_iter()
                .map(|record| (record.id, record.user_infos.first_name))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_user_profile_is_formatted() {
        let profile = user_main(12).expect("seeded user");
        assert_eq!(profile.first_name, "Karl");
        assert_eq!(profile.age, 31);
        assert_eq!(profile.score, 0.12);
        assert_eq!(profile.key_data[0].label, "Calories");
        assert_eq!(profile.key_data[0].value, 1930.0);
        assert_eq!(profile.key_data[0].unit, "kCal");
    }

    #[test]
    fn score_reconciles_from_the_legacy_field() {
        let profile = user_main(18).expect("seeded user");
        assert_eq!(profile.score, 0.3);
    }

    #[test]
    fn unknown_user_is_missing_from_every_category() {
        assert!(user_main(99).is_none());
        assert!(user_activity(99).is_none());
        assert!(user_average_sessions(99).is_none());
        assert!(user_performance(99).is_none());
    }

    #[test]
    fn activity_days_are_positional_labels() {
        let activity = user_activity(12).expect("seeded user");
        assert_eq!(activity.len(), 7);
        assert_eq!(activity[0].day, "1");
        assert_eq!(activity[6].day, "7");
        assert_eq!(activity[0].kilogram, 80.0);
        assert_eq!(activity[6].calories, 390.0);
    }

    #[test]
    fn average_sessions_carry_weekday_letters() {
        let sessions = user_average_sessions(12).expect("seeded user");
        let days: Vec<_> = sessions.iter().map(|s| s.day).collect();
        assert_eq!(days, ["L", "M", "M", "J", "V", "S", "D"]);
        assert_eq!(sessions[0].session_length, 30.0);
    }

    #[test]
    fn performance_is_translated_and_reversed() {
        let performance = user_performance(12).expect("seeded user");
        assert_eq!(performance.len(), 6);
        assert_eq!(performance[0].label, "Intensité");
        assert_eq!(performance[0].value, 90.0);
        assert_eq!(performance[5].label, "Cardio");
        assert_eq!(performance[5].value, 80.0);
    }

    #[test]
    fn seeded_profiles_list_both_users() {
        let profiles = seeded_profiles();
        let ids: Vec<_> = profiles.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, [12, 18]);
    }
}
