//! Dashboard Load Orchestration
//!
//! Fetches the four data categories for one user concurrently and
//! reconciles them into a single view state. Every dashboard mount runs
//! a fresh cycle; nothing is cached between users.

use futures_util::future::try_join4;

use crate::api::{client, mock, ApiError};
use crate::config::{AppConfig, DataSource};
use crate::format::{ActivitySample, PerformanceSample, SessionSample, UserProfile};

/// Everything one dashboard view needs, always fully populated
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub profile: UserProfile,
    pub activity: Vec<ActivitySample>,
    pub sessions: Vec<SessionSample>,
    pub performance: Vec<PerformanceSample>,
}

/// View state of the dashboard page
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Loaded(Box<DashboardData>),
    NotFound,
    ServerError,
}

/// Load all four categories for one user. The join resolves once all
/// four complete and fails fast if any one errors; `Ok(None)` means the
/// user is unknown.
pub async fn load_dashboard(
    config: &AppConfig,
    user_id: u32,
) -> Result<Option<DashboardData>, ApiError> {
    let (profile, activity, sessions, performance) = match config.source {
        DataSource::Mock => (
            mock::user_main(user_id),
            mock::user_activity(user_id),
            mock::user_average_sessions(user_id),
            mock::user_performance(user_id),
        ),
        DataSource::Api => {
            let base = config.api_base.as_str();
            try_join4(
                client::fetch_user_main(base, user_id),
                client::fetch_user_activity(base, user_id),
                client::fetch_user_average_sessions(base, user_id),
                client::fetch_user_performance(base, user_id),
            )
            .await?
        }
    };

    Ok(reconcile(profile, activity, sessions, performance))
}

/// A dashboard is complete only when every category resolved; any missing
/// category is treated as an unknown user.
pub fn reconcile(
    profile: Option<UserProfile>,
    activity: Option<Vec<ActivitySample>>,
    sessions: Option<Vec<SessionSample>>,
    performance: Option<Vec<PerformanceSample>>,
) -> Option<DashboardData> {
    Some(DashboardData {
        profile: profile?,
        activity: activity?,
        sessions: sessions?,
        performance: performance?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::KeyDataEntry;
    use futures_util::future::{err, ok};
    use futures_util::FutureExt;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            first_name: "Sacha".to_string(),
            last_name: "Martin".to_string(),
            age: 30,
            score: 0.5,
            key_data: vec![KeyDataEntry {
                label: "Calories",
                unit: "kCal",
                icon: "keyDataIcons/calories.svg",
                value: 1930.0,
            }],
        }
    }

    fn activity() -> Vec<ActivitySample> {
        vec![ActivitySample {
            day: "1".to_string(),
            kilogram: 80.0,
            calories: 240.0,
        }]
    }

    fn sessions() -> Vec<SessionSample> {
        vec![SessionSample {
            day: "L",
            session_length: 30.0,
        }]
    }

    fn performance() -> Vec<PerformanceSample> {
        vec![PerformanceSample {
            label: "Cardio".to_string(),
            value: 80.0,
        }]
    }

    #[test]
    fn all_categories_present_yield_a_dashboard() {
        let data = reconcile(
            Some(profile()),
            Some(activity()),
            Some(sessions()),
            Some(performance()),
        )
        .expect("complete dashboard");
        assert_eq!(data.profile.first_name, "Sacha");
        assert_eq!(data.activity.len(), 1);
    }

    #[test]
    fn a_fully_missing_user_yields_none() {
        assert!(reconcile(None, None, None, None).is_none());
    }

    #[test]
    fn any_single_missing_category_yields_none() {
        assert!(reconcile(None, Some(activity()), Some(sessions()), Some(performance())).is_none());
        assert!(reconcile(Some(profile()), None, Some(sessions()), Some(performance())).is_none());
        assert!(reconcile(Some(profile()), Some(activity()), None, Some(performance())).is_none());
        assert!(reconcile(Some(profile()), Some(activity()), Some(sessions()), None).is_none());
    }

    #[test]
    fn one_failing_category_fails_the_whole_join() {
        // Same combinator the live path uses: three successful categories
        // cannot rescue a failed one.
        let failure = ApiError::Network("connection refused".to_string());
        let result = try_join4(
            ok::<_, ApiError>(Some(profile())),
            ok::<_, ApiError>(Some(activity())),
            err::<Option<Vec<SessionSample>>, _>(failure.clone()),
            ok::<_, ApiError>(Some(performance())),
        )
        .now_or_never()
        .expect("ready futures resolve immediately");
        assert_eq!(result, Err(failure));
    }
}
