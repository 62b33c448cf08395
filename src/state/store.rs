//! Patient Data Store
//!
//! Reactive application state using Leptos signals. The store holds one
//! snapshot of remote data and exposes the fetch actions that refresh it;
//! components read the signals and re-render reactively.

use leptos::*;

use crate::api;
use crate::api::client::StatsResponse;
use crate::api::error::ApiError;
use crate::state::requests::{FetchGate, InFlight};

/// Shared reactive store provided to all components
#[derive(Clone)]
pub struct PatientStore {
    /// Aggregate statistics from the API
    pub stats: RwSignal<StatsSnapshot>,
    /// Patient roster, ordered as served
    pub patients: RwSignal<Vec<PatientRecord>>,
    /// Patient currently highlighted in the UI; set only by explicit action
    pub selected_patient: RwSignal<Option<PatientRecord>>,
    /// Latest treatment outcome analysis, replaced wholesale on each fetch
    pub treatment_analysis: RwSignal<Option<TreatmentAnalysis>>,
    /// Last error message observed; cleared only by explicit dismissal
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Epoch-millis of the last applied fetch
    pub last_refreshed: RwSignal<Option<i64>>,
    in_flight: InFlight,
    stats_gate: FetchGate,
    patients_gate: FetchGate,
    analysis_gate: FetchGate,
}

/// Aggregate statistics snapshot
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StatsSnapshot {
    pub total_patients: u64,
    pub high_risk_patients: u64,
    pub high_risk_percentage: f64,
}

impl From<StatsResponse> for StatsSnapshot {
    fn from(wire: StatsResponse) -> Self {
        Self {
            total_patients: wire.total_patients,
            high_risk_patients: wire.high_risk_patients,
            high_risk_percentage: wire.high_risk_percentage,
        }
    }
}

/// Server-assigned risk stratum
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Moderate => "Moderate risk",
            RiskLevel::High => "High risk",
        }
    }
}

/// One patient record from the roster endpoint
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PatientRecord {
    pub patient_id: String,
    pub age: u32,
    pub gender: String,
    pub systolic_bp: u32,
    pub diastolic_bp: u32,
    pub heart_rate: u32,
    pub cholesterol: u32,
    pub smoking: bool,
    pub diabetes: bool,
    pub bmi: f64,
    pub exercise_hours: u32,
    /// ISO date (YYYY-MM-DD) of the most recent visit
    pub visit_date: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub treatment: String,
    #[serde(default)]
    pub medications: Vec<String>,
    pub treatment_response: String,
    pub follow_up_visits: u32,
    pub risk_level: RiskLevel,
}

/// Short-window vitals series for one patient
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VitalsSeries {
    /// Clock label for each sample
    pub times: Vec<String>,
    pub systolic_bp: Vec<f64>,
    pub heart_rate: Vec<f64>,
}

impl VitalsSeries {
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Per-treatment outcome analysis
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TreatmentAnalysis {
    /// Outcome categories in display order
    #[serde(default)]
    pub responses: Vec<String>,
    #[serde(default)]
    pub data: Vec<TreatmentOutcome>,
}

/// Outcome counts for one treatment
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TreatmentOutcome {
    pub name: String,
    #[serde(rename = "children")]
    pub outcomes: Vec<OutcomeCount>,
}

impl TreatmentOutcome {
    /// Total patients under this treatment
    pub fn total(&self) -> u64 {
        self.outcomes.iter().map(|o| o.value).sum()
    }

    /// Count for one outcome category
    pub fn count_for(&self, response: &str) -> u64 {
        self.outcomes
            .iter()
            .find(|o| o.name == response)
            .map(|o| o.value)
            .unwrap_or(0)
    }
}

/// One outcome category with its patient count
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OutcomeCount {
    pub name: String,
    pub value: u64,
}

/// Provide the store to the component tree
pub fn provide_patient_store() {
    provide_context(PatientStore::new());
}

impl PatientStore {
    pub fn new() -> Self {
        Self {
            stats: create_rw_signal(StatsSnapshot::default()),
            patients: create_rw_signal(Vec::new()),
            selected_patient: create_rw_signal(None),
            treatment_analysis: create_rw_signal(None),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            last_refreshed: create_rw_signal(None),
            in_flight: InFlight::new(),
            stats_gate: FetchGate::new(),
            patients_gate: FetchGate::new(),
            analysis_gate: FetchGate::new(),
        }
    }

    // ============ Fetch Actions ============

    /// Refresh the aggregate stats snapshot
    pub async fn fetch_stats(&self) {
        let ticket = self.stats_gate.begin();
        self.in_flight.enter();
        let result = api::fetch_stats().await;
        self.in_flight.exit();
        self.apply_stats(ticket, result);
    }

    /// Refresh the patient roster
    pub async fn fetch_patients(&self) {
        let ticket = self.patients_gate.begin();
        self.in_flight.enter();
        let result = api::fetch_patients().await;
        self.in_flight.exit();
        self.apply_patients(ticket, result);
    }

    /// Refresh the treatment outcome analysis
    pub async fn fetch_treatment_analysis(&self) {
        let ticket = self.analysis_gate.begin();
        self.in_flight.enter();
        let result = api::fetch_treatment_analysis().await;
        self.in_flight.exit();
        self.apply_analysis(ticket, result);
    }

    /// Fetch the vitals series for one patient.
    ///
    /// The series is returned to the caller rather than stored; on failure
    /// the shared error slot is set and `None` is returned.
    pub async fn fetch_patient_vitals(&self, patient_id: &str) -> Option<VitalsSeries> {
        match api::fetch_patient_vitals(patient_id).await {
            Ok(series) => Some(series),
            Err(e) => {
                self.show_error(&e);
                None
            }
        }
    }

    /// Highlight a patient without touching the network
    pub fn set_selected_patient(&self, patient: PatientRecord) {
        self.selected_patient.set(Some(patient));
    }

    pub fn clear_selected_patient(&self) {
        self.selected_patient.set(None);
    }

    // ============ Completion Appliers ============
    //
    // Stale completions are dropped entirely: neither payload nor error of a
    // superseded request reaches the store.

    fn apply_stats(&self, ticket: u64, result: Result<StatsResponse, ApiError>) {
        if !self.stats_gate.is_current(ticket) {
            return;
        }
        match result {
            Ok(wire) => {
                self.stats.set(wire.into());
                self.mark_refreshed();
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn apply_patients(&self, ticket: u64, result: Result<Vec<PatientRecord>, ApiError>) {
        if !self.patients_gate.is_current(ticket) {
            return;
        }
        match result {
            Ok(roster) => {
                self.patients.set(roster);
                self.mark_refreshed();
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn apply_analysis(&self, ticket: u64, result: Result<TreatmentAnalysis, ApiError>) {
        if !self.analysis_gate.is_current(ticket) {
            return;
        }
        match result {
            Ok(analysis) => {
                self.treatment_analysis.set(Some(analysis));
                self.mark_refreshed();
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn mark_refreshed(&self) {
        self.last_refreshed
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    // ============ Derived Reads ============

    /// Reactive loading indicator: true while any tracked fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.active()
    }

    /// Patients per risk level, derived from the roster
    pub fn risk_breakdown(&self) -> [(RiskLevel, usize); 3] {
        let patients = self.patients.get();
        RiskLevel::ALL.map(|level| {
            (
                level,
                patients.iter().filter(|p| p.risk_level == level).count(),
            )
        })
    }

    // ============ Messages ============

    /// Record a failure in the shared error slot.
    ///
    /// The slot persists until explicitly dismissed; a later success of a
    /// different action does not clear it.
    pub fn show_error(&self, err: &ApiError) {
        self.error.set(Some(err.to_string()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Clear the error slot (explicit dismissal)
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    fn sample_patient(id: &str, risk_level: RiskLevel) -> PatientRecord {
        PatientRecord {
            patient_id: id.to_string(),
            age: 64,
            gender: "female".to_string(),
            systolic_bp: 142,
            diastolic_bp: 88,
            heart_rate: 76,
            cholesterol: 215,
            smoking: false,
            diabetes: true,
            bmi: 27.4,
            exercise_hours: 3,
            visit_date: "2024-11-02".to_string(),
            symptoms: vec!["chest pain".to_string()],
            treatment: "standard medication".to_string(),
            medications: vec!["aspirin".to_string(), "statin".to_string()],
            treatment_response: "partial improvement".to_string(),
            follow_up_visits: 2,
            risk_level,
        }
    }

    fn sample_stats() -> StatsResponse {
        StatsResponse {
            total_patients: 10,
            high_risk_patients: 3,
            high_risk_percentage: 30.0,
        }
    }

    #[test]
    fn successful_stats_fetch_replaces_snapshot() {
        with_runtime(|| {
            let store = PatientStore::new();
            let ticket = store.stats_gate.begin();

            store.apply_stats(ticket, Ok(sample_stats()));

            assert_eq!(
                store.stats.get_untracked(),
                StatsSnapshot {
                    total_patients: 10,
                    high_risk_patients: 3,
                    high_risk_percentage: 30.0,
                }
            );
            assert_eq!(store.error.get_untracked(), None);
            assert!(store.last_refreshed.get_untracked().is_some());
        });
    }

    #[test]
    fn failed_patients_fetch_keeps_roster_and_sets_error() {
        with_runtime(|| {
            let store = PatientStore::new();
            store
                .patients
                .set(vec![sample_patient("P0001", RiskLevel::Low)]);
            let ticket = store.patients_gate.begin();

            store.apply_patients(ticket, Err(ApiError::Network("timeout".into())));

            assert_eq!(store.patients.get_untracked().len(), 1);
            assert_eq!(
                store.error.get_untracked().as_deref(),
                Some("network error: timeout")
            );
        });
    }

    #[test]
    fn selecting_a_patient_is_synchronous() {
        with_runtime(|| {
            let store = PatientStore::new();
            let patient = sample_patient("P0042", RiskLevel::High);

            store.set_selected_patient(patient.clone());

            assert_eq!(store.selected_patient.get_untracked(), Some(patient));
            store.clear_selected_patient();
            assert_eq!(store.selected_patient.get_untracked(), None);
        });
    }

    #[test]
    fn stale_stats_completion_is_ignored() {
        with_runtime(|| {
            let store = PatientStore::new();
            let first = store.stats_gate.begin();
            let second = store.stats_gate.begin();

            // The later-issued call resolves first and is applied.
            store.apply_stats(
                second,
                Ok(StatsResponse {
                    total_patients: 20,
                    high_risk_patients: 5,
                    high_risk_percentage: 25.0,
                }),
            );
            // The earlier call resolves afterwards; its completion is stale.
            store.apply_stats(first, Ok(sample_stats()));

            assert_eq!(store.stats.get_untracked().total_patients, 20);
        });
    }

    #[test]
    fn stale_failure_does_not_touch_error_slot() {
        with_runtime(|| {
            let store = PatientStore::new();
            let first = store.stats_gate.begin();
            let second = store.stats_gate.begin();

            store.apply_stats(second, Ok(sample_stats()));
            store.apply_stats(first, Err(ApiError::Network("timeout".into())));

            assert_eq!(store.error.get_untracked(), None);
        });
    }

    #[test]
    fn error_slot_survives_unrelated_success() {
        with_runtime(|| {
            let store = PatientStore::new();

            let patients_ticket = store.patients_gate.begin();
            store.apply_patients(patients_ticket, Err(ApiError::Network("timeout".into())));

            let stats_ticket = store.stats_gate.begin();
            store.apply_stats(stats_ticket, Ok(sample_stats()));

            // Inherited behavior, kept deliberately: success of a different
            // action does not clear the error slot.
            assert!(store.error.get_untracked().is_some());
        });
    }

    #[test]
    fn loading_tracks_single_fetch_lifecycle() {
        with_runtime(|| {
            let store = PatientStore::new();
            assert!(!store.is_loading());

            let ticket = store.stats_gate.begin();
            store.in_flight.enter();
            assert!(store.is_loading());

            store.in_flight.exit();
            store.apply_stats(ticket, Ok(sample_stats()));
            assert!(!store.is_loading());
        });
    }

    #[test]
    fn risk_breakdown_counts_roster() {
        with_runtime(|| {
            let store = PatientStore::new();
            store.patients.set(vec![
                sample_patient("P0001", RiskLevel::Low),
                sample_patient("P0002", RiskLevel::High),
                sample_patient("P0003", RiskLevel::High),
            ]);

            let breakdown = store.risk_breakdown();
            assert_eq!(breakdown[0], (RiskLevel::Low, 1));
            assert_eq!(breakdown[1], (RiskLevel::Moderate, 0));
            assert_eq!(breakdown[2], (RiskLevel::High, 2));
        });
    }

    #[test]
    fn patient_record_decodes_wire_shape() {
        let body = r#"{
            "patient_id": "P0001",
            "age": 58,
            "gender": "male",
            "systolic_bp": 150,
            "diastolic_bp": 95,
            "heart_rate": 82,
            "cholesterol": 248,
            "smoking": true,
            "diabetes": false,
            "bmi": 29.1,
            "exercise_hours": 1,
            "visit_date": "2024-10-15",
            "symptoms": ["chest pain", "fatigue"],
            "treatment": "lifestyle intervention",
            "medications": ["aspirin"],
            "treatment_response": "no improvement",
            "follow_up_visits": 4,
            "risk_level": "high"
        }"#;

        let patient: PatientRecord = serde_json::from_str(body).unwrap();
        assert_eq!(patient.patient_id, "P0001");
        assert_eq!(patient.risk_level, RiskLevel::High);
        assert_eq!(patient.symptoms.len(), 2);
    }

    #[test]
    fn patient_record_rejects_unknown_risk_level() {
        let body = r#"{
            "patient_id": "P0001",
            "age": 58,
            "gender": "male",
            "systolic_bp": 150,
            "diastolic_bp": 95,
            "heart_rate": 82,
            "cholesterol": 248,
            "smoking": true,
            "diabetes": false,
            "bmi": 29.1,
            "exercise_hours": 1,
            "visit_date": "2024-10-15",
            "treatment": "lifestyle intervention",
            "treatment_response": "no improvement",
            "follow_up_visits": 4,
            "risk_level": "critical"
        }"#;

        assert!(serde_json::from_str::<PatientRecord>(body).is_err());
    }

    #[test]
    fn vitals_series_decodes_wire_shape() {
        let body = r#"{
            "times": ["14:00", "14:10", "14:20"],
            "systolic_bp": [138, 142, 140],
            "heart_rate": [72, 75, 74]
        }"#;

        let vitals: VitalsSeries = serde_json::from_str(body).unwrap();
        assert_eq!(vitals.times.len(), 3);
        assert_eq!(vitals.systolic_bp[1], 142.0);
        assert!(!vitals.is_empty());
    }

    #[test]
    fn treatment_analysis_decodes_wire_shape() {
        let body = r#"{
            "responses": ["significant improvement", "partial improvement", "no improvement"],
            "data": [
                {
                    "name": "standard medication",
                    "children": [
                        {"name": "significant improvement", "value": 120},
                        {"name": "partial improvement", "value": 80},
                        {"name": "no improvement", "value": 40}
                    ]
                }
            ]
        }"#;

        let analysis: TreatmentAnalysis = serde_json::from_str(body).unwrap();
        assert_eq!(analysis.responses.len(), 3);
        assert_eq!(analysis.data[0].total(), 240);
        assert_eq!(analysis.data[0].count_for("partial improvement"), 80);
        assert_eq!(analysis.data[0].count_for("unknown"), 0);
    }
}
