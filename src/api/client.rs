//! HTTP API Client
//!
//! Functions for communicating with the SportSee REST API. Each data
//! category is one GET against `{base}/user/{id}[/{category}]`; the
//! `data` envelope is unwrapped and the payload runs through the matching
//! formatter before it is returned.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

use super::error::ApiError;
use crate::format::{self, ActivitySample, PerformanceSample, SessionSample, UserProfile};

// ============ Wire Types ============

/// Response envelope wrapping every endpoint payload
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserMain {
    pub id: u32,
    pub user_infos: RawUserInfos,
    #[serde(default)]
    pub today_score: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
    pub key_data: RawKeyData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserInfos {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawKeyData {
    pub calorie_count: f64,
    pub protein_count: f64,
    pub carbohydrate_count: f64,
    pub lipid_count: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActivity {
    pub user_id: u32,
    pub sessions: Vec<RawActivitySession>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawActivitySession {
    pub day: String,
    pub kilogram: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAverageSessions {
    pub user_id: u32,
    pub sessions: Vec<RawAverageSession>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAverageSession {
    /// 1-indexed weekday, Monday first
    pub day: u8,
    pub session_length: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerformance {
    pub user_id: u32,
    /// Kind table shipped with the payload, e.g. `1 -> "cardio"`
    pub kind: HashMap<u8, String>,
    pub data: Vec<RawPerformanceEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPerformanceEntry {
    pub kind: u8,
    pub value: f64,
}

// ============ API Functions ============

/// Fetch and format a user's profile, score and nutrition totals
pub async fn fetch_user_main(base: &str, user_id: u32) -> Result<Option<UserProfile>, ApiError> {
    let url = format!("{}/user/{}", base, user_id);
    Ok(get_json::<RawUserMain>(&url)
        .await?
        .map(format::format_user_main))
}

/// Fetch and format a user's daily activity samples
pub async fn fetch_user_activity(
    base: &str,
    user_id: u32,
) -> Result<Option<Vec<ActivitySample>>, ApiError> {
    let url = format!("{}/user/{}/activity", base, user_id);
    Ok(get_json::<RawActivity>(&url)
        .await?
        .map(format::format_user_activity))
}

/// Fetch and format a user's average session durations
pub async fn fetch_user_average_sessions(
    base: &str,
    user_id: u32,
) -> Result<Option<Vec<SessionSample>>, ApiError> {
    let url = format!("{}/user/{}/average-sessions", base, user_id);
    Ok(get_json::<RawAverageSessions>(&url)
        .await?
        .map(format::format_user_average_sessions))
}

/// Fetch and format a user's performance categories
pub async fn fetch_user_performance(
    base: &str,
    user_id: u32,
) -> Result<Option<Vec<PerformanceSample>>, ApiError> {
    let url = format!("{}/user/{}/performance", base, user_id);
    Ok(get_json::<RawPerformance>(&url)
        .await?
        .map(format::format_user_performance))
}

/// GET a JSON envelope. 404 is recovered as `None`; any other failure
/// maps onto the error taxonomy.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<Option<T>, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|error| ApiError::Parse(error.to_string()))?;

    Ok(Some(envelope.data))
}
