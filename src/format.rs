//! Data Formatters
//!
//! Pure functions translating raw API payloads into the view shapes the
//! dashboard components consume: field renaming, day-index labeling,
//! weekday lookup and category translation. No I/O happens here.

use crate::api::client::{RawActivity, RawAverageSessions, RawPerformance, RawUserMain};

/// Weekday labels indexed by `day - 1` (API days are 1-based, Monday first)
pub const WEEKDAY_LABELS: [&str; 7] = ["L", "M", "M", "J", "V", "S", "D"];

// ============ View Shapes ============

/// A user's identity, goal score and nutrition summary
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    /// Goal-completion fraction, always within [0, 1]
    pub score: f64,
    /// The four nutrition totals, in display order
    pub key_data: Vec<KeyDataEntry>,
}

/// One nutrition total with its display metadata
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDataEntry {
    pub label: &'static str,
    pub unit: &'static str,
    pub icon: &'static str,
    pub value: f64,
}

/// One tracked day: weight and burned calories
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySample {
    /// Day label, "1" for the first tracked day
    pub day: String,
    pub kilogram: f64,
    pub calories: f64,
}

/// Average session duration for one weekday
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSample {
    pub day: &'static str,
    pub session_length: f64,
}

/// One performance category with its translated label
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSample {
    pub label: String,
    pub value: f64,
}

// ============ Formatters ============

/// Format a user's main data: rename fields, reconcile the score from its
/// two possible source fields (`todayScore` first) and clamp it into
/// [0, 1], and expand the nutrition counts into labeled entries.
pub fn format_user_main(raw: RawUserMain) -> UserProfile {
    let score = raw
        .today_score
        .or(raw.score)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    UserProfile {
        id: raw.id,
        first_name: raw.user_infos.first_name,
        last_name: raw.user_infos.last_name,
        age: raw.user_infos.age,
        score,
        key_data: vec![
            KeyDataEntry {
                label: "Calories",
                unit: "kCal",
                icon: "keyDataIcons/calories.svg",
                value: raw.key_data.calorie_count,
            },
            KeyDataEntry {
                label: "Protéines",
                unit: "g",
                icon: "keyDataIcons/proteines.svg",
                value: raw.key_data.protein_count,
            },
            KeyDataEntry {
                label: "Glucides",
                unit: "g",
                icon: "keyDataIcons/glucides.svg",
                value: raw.key_data.carbohydrate_count,
            },
            KeyDataEntry {
                label: "Lipides",
                unit: "g",
                icon: "keyDataIcons/lipides.svg",
                value: raw.key_data.lipid_count,
            },
        ],
    }
}

/// Format activity samples. Day labels are display positions ("1", "2",
/// ...), not the source dates.
pub fn format_user_activity(raw: RawActivity) -> Vec<ActivitySample> {
    raw.sessions
        .into_iter()
        .enumerate()
        .map(|(index, session)| ActivitySample {
            day: (index + 1).to_string(),
            kilogram: session.kilogram,
            calories: session.calories,
        })
        .collect()
}

/// Format average sessions: the 1-indexed weekday number becomes its
/// letter from the fixed lookup.
pub fn format_user_average_sessions(raw: RawAverageSessions) -> Vec<SessionSample> {
    raw.sessions
        .into_iter()
        .map(|session| SessionSample {
            day: weekday_label(session.day).unwrap_or(""),
            session_length: session.session_length,
        })
        .collect()
}

/// Weekday label for a 1-indexed day number, `None` outside [1, 7]
pub fn weekday_label(day: u8) -> Option<&'static str> {
    WEEKDAY_LABELS
        .get(usize::from(day).checked_sub(1)?)
        .copied()
}

/// Format performance data: resolve each coded kind through the payload's
/// own kind table, translate it for display, and reverse the order.
/// Entries with a code missing from the table are dropped.
pub fn format_user_performance(raw: RawPerformance) -> Vec<PerformanceSample> {
    let mut samples: Vec<PerformanceSample> = raw
        .data
        .iter()
        .filter_map(|entry| {
            let kind = raw.kind.get(&entry.kind)?;
            Some(PerformanceSample {
                label: translate_kind(kind),
                value: entry.value,
            })
        })
        .collect();
    samples.reverse();
    samples
}

/// Translate a performance kind to its display label. Unknown kinds pass
/// through unchanged.
pub fn translate_kind(kind: &str) -> String {
    match kind {
        "cardio" => "Cardio".to_string(),
        "energy" => "Énergie".to_string(),
        "endurance" => "Endurance".to_string(),
        "strength" => "Force".to_string(),
        "speed" => "Vitesse".to_string(),
        "intensity" => "Intensité".to_string(),
        other => other.to_string(),
    }
}

/// Group the integer part of a value with commas, en-US style
pub fn format_thousands(value: f64) -> String {
    let digits = (value.abs().trunc() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::{
        RawActivitySession, RawAverageSession, RawKeyData, RawPerformanceEntry, RawUserInfos,
    };
    use std::collections::HashMap;

    fn raw_user(today_score: Option<f64>, score: Option<f64>) -> RawUserMain {
        RawUserMain {
            id: 1,
            user_infos: RawUserInfos {
                first_name: "Sacha".to_string(),
                last_name: "Martin".to_string(),
                age: 30,
            },
            today_score,
            score,
            key_data: RawKeyData {
                calorie_count: 1930.0,
                protein_count: 155.0,
                carbohydrate_count: 290.0,
                lipid_count: 50.0,
            },
        }
    }

    #[test]
    fn weekday_labels_follow_the_fixed_lookup() {
        for day in 1..=7u8 {
            assert_eq!(
                weekday_label(day),
                Some(WEEKDAY_LABELS[usize::from(day) - 1])
            );
        }
        assert_eq!(weekday_label(3), Some("M"));
        assert_eq!(weekday_label(7), Some("D"));
    }

    #[test]
    fn weekday_label_rejects_days_outside_the_week() {
        assert_eq!(weekday_label(0), None);
        assert_eq!(weekday_label(8), None);
    }

    #[test]
    fn today_score_wins_over_the_legacy_field() {
        let profile = format_user_main(raw_user(Some(0.12), Some(0.9)));
        assert_eq!(profile.score, 0.12);
    }

    #[test]
    fn score_falls_back_to_the_legacy_field() {
        let profile = format_user_main(raw_user(None, Some(0.3)));
        assert_eq!(profile.score, 0.3);
    }

    #[test]
    fn score_is_clamped_into_the_unit_interval() {
        assert_eq!(format_user_main(raw_user(Some(1.4), None)).score, 1.0);
        assert_eq!(format_user_main(raw_user(Some(-0.2), None)).score, 0.0);
    }

    #[test]
    fn key_data_keeps_the_display_order_and_units() {
        let profile = format_user_main(raw_user(Some(0.5), None));
        let labels: Vec<_> = profile.key_data.iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Calories", "Protéines", "Glucides", "Lipides"]);
        assert_eq!(profile.key_data[0].unit, "kCal");
        assert_eq!(profile.key_data[0].value, 1930.0);
        assert_eq!(profile.key_data[3].unit, "g");
    }

    #[test]
    fn activity_day_labels_start_at_one() {
        let formatted = format_user_activity(RawActivity {
            user_id: 1,
            sessions: vec![
                RawActivitySession {
                    day: "2020-07-01".to_string(),
                    kilogram: 80.0,
                    calories: 240.0,
                },
                RawActivitySession {
                    day: "2020-07-02".to_string(),
                    kilogram: 80.0,
                    calories: 220.0,
                },
            ],
        });
        assert_eq!(formatted[0].day, "1");
        assert_eq!(formatted[1].day, "2");
        assert_eq!(formatted[0].kilogram, 80.0);
    }

    #[test]
    fn average_sessions_map_day_numbers_to_letters() {
        let formatted = format_user_average_sessions(RawAverageSessions {
            user_id: 1,
            sessions: (1..=7)
                .map(|day| RawAverageSession {
                    day,
                    session_length: f64::from(day) * 10.0,
                })
                .collect(),
        });
        let days: Vec<_> = formatted.iter().map(|s| s.day).collect();
        assert_eq!(days, WEEKDAY_LABELS);
        assert_eq!(formatted[0].session_length, 10.0);
    }

    #[test]
    fn performance_is_translated_and_reversed() {
        let kind: HashMap<u8, String> = [
            (1, "cardio"),
            (2, "energy"),
            (3, "endurance"),
            (4, "strength"),
            (5, "speed"),
            (6, "intensity"),
        ]
        .into_iter()
        .map(|(code, name)| (code, name.to_string()))
        .collect();

        let formatted = format_user_performance(RawPerformance {
            user_id: 1,
            kind,
            data: (1..=6)
                .map(|code| RawPerformanceEntry {
                    kind: code,
                    value: f64::from(code) * 10.0,
                })
                .collect(),
        });

        assert_eq!(formatted.len(), 6);
        assert_eq!(formatted[0].label, "Intensité");
        assert_eq!(formatted[0].value, 60.0);
        assert_eq!(formatted[5].label, "Cardio");
        assert_eq!(formatted[5].value, 10.0);
    }

    #[test]
    fn performance_drops_codes_missing_from_the_kind_table() {
        let formatted = format_user_performance(RawPerformance {
            user_id: 1,
            kind: HashMap::from([(1, "cardio".to_string())]),
            data: vec![
                RawPerformanceEntry { kind: 1, value: 80.0 },
                RawPerformanceEntry { kind: 9, value: 10.0 },
            ],
        });
        assert_eq!(formatted.len(), 1);
        assert_eq!(formatted[0].label, "Cardio");
    }

    #[test]
    fn unknown_kinds_pass_through_untranslated() {
        assert_eq!(translate_kind("balance"), "balance");
    }

    #[test]
    fn thousands_are_grouped_with_commas() {
        assert_eq!(format_thousands(50.0), "50");
        assert_eq!(format_thousands(1930.0), "1,930");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
    }
}
