//! Treatments Page
//!
//! Per-treatment outcome analysis.

use leptos::*;

use crate::components::{ChartSkeleton, OutcomeChart};
use crate::state::store::{PatientStore, TreatmentOutcome};

/// Treatments page component
#[component]
pub fn Treatments() -> impl IntoView {
    let store = use_context::<PatientStore>().expect("PatientStore not found");

    // Fetch the analysis on mount
    let store_for_effect = store.clone();
    create_effect(move |_| {
        let store = store_for_effect.clone();
        spawn_local(async move {
            store.fetch_treatment_analysis().await;
        });
    });

    let analysis = store.treatment_analysis;
    let store_for_chart = store;

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Treatments"</h1>
                <p class="text-gray-400 mt-1">"Outcome analysis per treatment plan"</p>
            </div>

            // Outcome chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Outcomes by Treatment"</h2>

                {move || {
                    if analysis.get().is_none() && store_for_chart.is_loading() {
                        view! { <ChartSkeleton /> }.into_view()
                    } else {
                        view! { <OutcomeChart analysis=analysis /> }.into_view()
                    }
                }}
            </section>

            // Per-treatment summaries
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    analysis.get()
                        .map(|a| a.data)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|treatment| view! { <TreatmentSummary treatment=treatment /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Summary card for one treatment
#[component]
fn TreatmentSummary(treatment: TreatmentOutcome) -> impl IntoView {
    let total = treatment.total();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{treatment.name.clone()}</h3>
                <span class="text-gray-500 text-sm">{total}" patients"</span>
            </div>

            <div class="space-y-2 mt-4">
                {treatment.outcomes.iter().map(|outcome| {
                    let percent = if total > 0 {
                        outcome.value as f64 / total as f64 * 100.0
                    } else {
                        0.0
                    };

                    view! {
                        <div class="flex items-center justify-between text-sm">
                            <span class="text-gray-300">{outcome.name.clone()}</span>
                            <span class="text-gray-400">
                                {outcome.value}" ("{format!("{:.0}%", percent)}")"
                            </span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
