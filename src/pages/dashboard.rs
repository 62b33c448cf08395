//! Dashboard Page
//!
//! Aggregate statistics, risk-level breakdown, and recent visits.

use leptos::*;

use crate::components::{Loading, StatCard};
use crate::state::store::{PatientStore, RiskLevel};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_context::<PatientStore>().expect("PatientStore not found");

    // Fetch initial data on mount
    let store_for_effect = store.clone();
    create_effect(move |_| {
        let store = store_for_effect.clone();
        spawn_local(async move {
            store.fetch_stats().await;
            store.fetch_patients().await;
        });
    });

    let stats = store.stats;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Patient population at a glance"</p>
            </div>

            // Aggregate stats
            <section>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <StatCard
                        label="Total patients"
                        value=Signal::derive(move || stats.get().total_patients.to_string())
                    />
                    <StatCard
                        label="High-risk patients"
                        value=Signal::derive(move || stats.get().high_risk_patients.to_string())
                        accent="text-red-400"
                    />
                    <StatCard
                        label="High-risk share"
                        value=Signal::derive(move || {
                            format!("{:.1}%", stats.get().high_risk_percentage)
                        })
                        hint="of the tracked population"
                        accent="text-orange-400"
                    />
                </div>
            </section>

            // Risk breakdown from the roster
            <RiskBreakdown />

            // Recent visits
            <RecentVisits />
        </div>
    }
}

/// Horizontal bars of patient counts per risk level
#[component]
fn RiskBreakdown() -> impl IntoView {
    let store = use_context::<PatientStore>().expect("PatientStore not found");
    let store_for_view = store.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Risk Breakdown"</h2>

            {move || {
                let store = store_for_view.clone();
                if store.patients.get().is_empty() {
                    if store.is_loading() {
                        return view! { <Loading /> }.into_view();
                    }
                    return view! {
                        <p class="text-gray-400 text-sm">"No patient data loaded"</p>
                    }.into_view();
                }

                let breakdown = store.risk_breakdown();
                let total: usize = breakdown.iter().map(|(_, count)| count).sum();

                breakdown.into_iter().map(|(level, count)| {
                    let percent = if total > 0 {
                        count as f64 / total as f64 * 100.0
                    } else {
                        0.0
                    };

                    view! {
                        <div class="flex items-center space-x-4 py-2">
                            <span class="w-32 text-sm text-gray-300">{level.label()}</span>
                            <div class="flex-1 bg-gray-700 rounded h-4">
                                <div
                                    class=format!("{} rounded h-4", risk_color(level))
                                    style=format!("width: {:.1}%", percent)
                                />
                            </div>
                            <span class="w-16 text-right text-sm font-semibold">{count}</span>
                        </div>
                    }
                }).collect_view()
            }}
        </section>
    }
}

/// Most recent patient visits from the roster
#[component]
fn RecentVisits() -> impl IntoView {
    let store = use_context::<PatientStore>().expect("PatientStore not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Visits"</h2>

            <div class="space-y-2">
                {move || {
                    let mut patients = store.patients.get();
                    // ISO dates sort lexicographically
                    patients.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));

                    let recent: Vec<_> = patients.into_iter().take(5).collect();

                    if recent.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No recent visits"</p>
                        }.into_view()
                    } else {
                        recent.into_iter().map(|patient| {
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div class="flex items-center space-x-3">
                                        <span class=format!(
                                            "{} w-2 h-2 rounded-full",
                                            risk_color(patient.risk_level)
                                        ) />
                                        <div>
                                            <span class="font-medium">{patient.patient_id.clone()}</span>
                                            <span class="text-gray-400 text-sm ml-2">{patient.treatment.clone()}</span>
                                        </div>
                                    </div>
                                    <span class="text-gray-400 text-sm">{patient.visit_date.clone()}</span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Background color class for a risk level
fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "bg-green-500",
        RiskLevel::Moderate => "bg-yellow-500",
        RiskLevel::High => "bg-red-500",
    }
}
