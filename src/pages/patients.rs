//! Patients Page
//!
//! Patient roster with risk filtering, selection, and per-patient vitals.

use leptos::*;

use crate::components::{ListSkeleton, VitalsChart};
use crate::state::store::{PatientRecord, PatientStore, RiskLevel, VitalsSeries};

/// Patients page component
#[component]
pub fn Patients() -> impl IntoView {
    let store = use_context::<PatientStore>().expect("PatientStore not found");

    let (risk_filter, set_risk_filter) = create_signal(None::<RiskLevel>);
    // Vitals live in page state: the store contract keeps them unstored
    let (vitals, set_vitals) = create_signal(None::<VitalsSeries>);

    // Load the roster on mount
    let store_for_effect = store.clone();
    create_effect(move |_| {
        let store = store_for_effect.clone();
        spawn_local(async move {
            store.fetch_patients().await;
        });
    });

    // Select a patient and fetch its vitals
    let store_for_select = store.clone();
    let select = move |patient: PatientRecord| {
        let store = store_for_select.clone();
        let id = patient.patient_id.clone();
        store.set_selected_patient(patient);
        set_vitals.set(None);

        spawn_local(async move {
            let series = store.fetch_patient_vitals(&id).await;
            // Drop the response if the selection moved on meanwhile
            let still_selected = store
                .selected_patient
                .get_untracked()
                .map(|p| p.patient_id == id)
                .unwrap_or(false);
            if still_selected {
                set_vitals.set(series);
            }
        });
    };

    let store_for_close = store.clone();
    let close_detail = move || {
        store_for_close.clear_selected_patient();
        set_vitals.set(None);
    };

    let selected_patient = store.selected_patient;
    let patients_signal = store.patients;
    let store_for_list = store;

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Patients"</h1>
                <p class="text-gray-400 mt-1">"Roster with risk stratification and live vitals"</p>
            </div>

            // Detail panel for the selected patient
            {move || {
                selected_patient.get().map(|patient| {
                    let on_close = close_detail.clone();
                    view! {
                        <PatientDetail patient=patient vitals=vitals on_close=on_close />
                    }
                })
            }}

            // Risk filter chips
            <div class="flex flex-wrap gap-2">
                <FilterChip
                    label="All"
                    active=Signal::derive(move || risk_filter.get().is_none())
                    on_click=move || set_risk_filter.set(None)
                />
                {RiskLevel::ALL.into_iter().map(|level| {
                    view! {
                        <FilterChip
                            label=level.label()
                            active=Signal::derive(move || risk_filter.get() == Some(level))
                            on_click=move || set_risk_filter.set(Some(level))
                        />
                    }
                }).collect_view()}
            </div>

            // Roster
            {move || {
                let filter = risk_filter.get();
                let filtered: Vec<_> = patients_signal.get()
                    .into_iter()
                    .filter(|p| filter.map_or(true, |level| p.risk_level == level))
                    .collect();

                if filtered.is_empty() {
                    if store_for_list.is_loading() {
                        return view! { <ListSkeleton count=6 /> }.into_view();
                    }
                    return view! {
                        <p class="text-gray-400 py-6">"No patients match this filter"</p>
                    }.into_view();
                }

                let select = select.clone();
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {filtered.into_iter().map(|patient| {
                            let select = select.clone();
                            view! { <PatientCard patient=patient on_select=select /> }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Filter chip button
#[component]
fn FilterChip(
    #[prop(into)]
    label: String,
    #[prop(into)]
    active: Signal<bool>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click()
            class=move || {
                let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                if active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Single patient roster card
#[component]
fn PatientCard(
    patient: PatientRecord,
    on_select: impl Fn(PatientRecord) + 'static,
) -> impl IntoView {
    let record = patient.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-center space-x-2">
                <h3 class="font-semibold">{patient.patient_id.clone()}</h3>
                <span class=format!(
                    "{} text-xs px-2 py-0.5 rounded-full text-white",
                    risk_badge_class(patient.risk_level)
                )>
                    {patient.risk_level.label()}
                </span>
            </div>

            <p class="text-gray-400 text-sm mt-1">
                {format!("{}, {} years", patient.gender, patient.age)}
            </p>

            <div class="flex items-center space-x-4 mt-4 text-sm text-gray-400">
                <span>"BP "{patient.systolic_bp}"/"{patient.diastolic_bp}</span>
                <span>"HR "{patient.heart_rate}</span>
                <span>"Chol "{patient.cholesterol}</span>
            </div>

            <button
                on:click=move |_| on_select(record.clone())
                class="mt-4 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
            >
                "View vitals"
            </button>
        </div>
    }
}

/// Detail panel with facts and the vitals chart
#[component]
fn PatientDetail(
    patient: PatientRecord,
    #[prop(into)]
    vitals: Signal<Option<VitalsSeries>>,
    on_close: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center space-x-3">
                    <h2 class="text-xl font-semibold">{patient.patient_id.clone()}</h2>
                    <span class=format!(
                        "{} text-xs px-2 py-0.5 rounded-full text-white",
                        risk_badge_class(patient.risk_level)
                    )>
                        {patient.risk_level.label()}
                    </span>
                </div>
                <button
                    on:click=move |_| on_close()
                    class="text-gray-400 hover:text-white"
                >
                    "✕"
                </button>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                // Facts
                <div class="grid grid-cols-2 gap-4 text-sm">
                    <DetailItem label="Age" value=patient.age.to_string() />
                    <DetailItem label="Gender" value=patient.gender.clone() />
                    <DetailItem
                        label="Blood pressure"
                        value=format!("{}/{} mmHg", patient.systolic_bp, patient.diastolic_bp)
                    />
                    <DetailItem label="Heart rate" value=format!("{} bpm", patient.heart_rate) />
                    <DetailItem label="Cholesterol" value=format!("{} mg/dL", patient.cholesterol) />
                    <DetailItem label="BMI" value=format!("{:.1}", patient.bmi) />
                    <DetailItem label="Exercise" value=format!("{} h/week", patient.exercise_hours) />
                    <DetailItem label="Follow-up visits" value=patient.follow_up_visits.to_string() />
                    <DetailItem label="Smoking" value=yes_no(patient.smoking).to_string() />
                    <DetailItem label="Diabetes" value=yes_no(patient.diabetes).to_string() />
                    <DetailItem label="Treatment" value=patient.treatment.clone() />
                    <DetailItem label="Response" value=patient.treatment_response.clone() />
                </div>

                // Vitals chart
                <div>
                    <h3 class="font-medium mb-2">"Recent vitals"</h3>
                    <VitalsChart series=vitals />
                </div>
            </div>

            // Symptoms and medications
            <div class="flex flex-wrap gap-2 mt-6">
                {patient.symptoms.iter().map(|symptom| view! {
                    <span class="bg-gray-700 text-gray-300 text-xs px-2 py-1 rounded-full">
                        {symptom.clone()}
                    </span>
                }).collect_view()}
                {patient.medications.iter().map(|medication| view! {
                    <span class="bg-gray-700 text-primary-400 text-xs px-2 py-1 rounded-full">
                        {medication.clone()}
                    </span>
                }).collect_view()}
            </div>
        </section>
    }
}

/// One labeled fact in the detail grid
#[component]
fn DetailItem(
    label: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div>
            <span class="block text-gray-500 text-xs">{label}</span>
            <span class="text-gray-200">{value}</span>
        </div>
    }
}

/// Badge color class for a risk level
fn risk_badge_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "bg-green-500",
        RiskLevel::Moderate => "bg-yellow-500",
        RiskLevel::High => "bg-red-500",
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
