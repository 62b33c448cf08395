//! State Management
//!
//! Reactive patient data store and request tracking primitives.

pub mod requests;
pub mod store;

pub use requests::{FetchGate, InFlight};
pub use store::{
    provide_patient_store, OutcomeCount, PatientRecord, PatientStore, RiskLevel, StatsSnapshot,
    TreatmentAnalysis, TreatmentOutcome, VitalsSeries,
};
