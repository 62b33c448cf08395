//! Stat Card Component
//!
//! Displays one aggregate statistic from the store.

use leptos::*;

/// Aggregate stat card
#[component]
pub fn StatCard(
    /// Label shown above the value
    label: &'static str,
    /// Formatted value to display
    #[prop(into)]
    value: Signal<String>,
    /// Optional footnote under the value
    #[prop(optional)]
    hint: Option<&'static str>,
    /// Tailwind text color class for the value
    #[prop(default = "text-white")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{label}</span>

            <div class=format!("text-3xl font-bold mt-2 {}", accent)>
                {move || value.get()}
            </div>

            {hint.map(|h| view! {
                <div class="text-gray-500 text-sm mt-2">{h}</div>
            })}
        </div>
    }
}
