//! HTTP API Client
//!
//! Functions for communicating with the patient analytics REST API. Every
//! endpoint has one wrapper that issues a single GET and decodes the body
//! into its typed payload.

use gloo_net::http::{Request, Response};

use crate::api::error::{ApiError, ApiResult};
use crate::state::store::{PatientRecord, TreatmentAnalysis, VitalsSeries};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

/// Local storage key for the API base URL override
const API_BASE_KEY: &str = "pulseboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

// ============ Response Types ============

/// Wire form of the `/stats` payload
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct StatsResponse {
    pub total_patients: u64,
    pub high_risk_patients: u64,
    pub high_risk_percentage: f64,
}

/// Structured error body served on non-2xx responses
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

// ============ API Functions ============

/// Fetch aggregate patient statistics
pub async fn fetch_stats() -> ApiResult<StatsResponse> {
    let response = Request::get(&format!("{}/stats", get_api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// Fetch the full patient roster
pub async fn fetch_patients() -> ApiResult<Vec<PatientRecord>> {
    let response = Request::get(&format!("{}/patients", get_api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// Fetch the short-window vitals series for one patient
pub async fn fetch_patient_vitals(patient_id: &str) -> ApiResult<VitalsSeries> {
    let response = Request::get(&format!("{}/patient/{}/vitals", get_api_base(), patient_id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// Fetch the per-treatment outcome analysis
pub async fn fetch_treatment_analysis() -> ApiResult<TreatmentAnalysis> {
    let response = Request::get(&format!("{}/treatments/analysis", get_api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// Decode a response body, classifying non-2xx and schema failures
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        let err = status_error(response).await;
        web_sys::console::error_1(&format!("API request failed: {}", err).into());
        return Err(err);
    }

    response.json().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        web_sys::console::error_1(&format!("API request failed: {}", err).into());
        err
    })
}

/// Build a `Status` error from a non-2xx response, preferring the server's
/// `{"error": ...}` body over the HTTP status text
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_response_decodes_wire_shape() {
        let body = r#"{
            "total_patients": 10,
            "high_risk_patients": 3,
            "high_risk_percentage": 30.0
        }"#;

        let stats: StatsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(stats.total_patients, 10);
        assert_eq!(stats.high_risk_patients, 3);
        assert!((stats.high_risk_percentage - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_response_rejects_missing_fields() {
        let body = r#"{"total_patients": 10}"#;
        assert!(serde_json::from_str::<StatsResponse>(body).is_err());
    }

    #[test]
    fn error_body_decodes_server_error_shape() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Patient not found"}"#).unwrap();
        assert_eq!(body.error, "Patient not found");
    }
}
