//! HTTP API Layer
//!
//! Typed client for the patient analytics REST API.
//!
//! # Endpoints
//!
//! - `GET /stats` - Aggregate patient statistics
//! - `GET /patients` - Patient roster
//! - `GET /patient/{id}/vitals` - Short-window vitals for one patient
//! - `GET /treatments/analysis` - Per-treatment outcome analysis

pub mod client;
pub mod error;

pub use client::{
    fetch_patient_vitals, fetch_patients, fetch_stats, fetch_treatment_analysis, get_api_base,
    set_api_base, DEFAULT_API_BASE,
};
pub use error::{ApiError, ApiResult};
