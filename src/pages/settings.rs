//! Settings Page
//!
//! API connection configuration and about info.

use leptos::*;

use crate::api;
use crate::state::store::PatientStore;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Pulseboard dashboard"</p>
            </div>

            // API Connection
            <ApiSettings />

            // About
            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let store = use_context::<PatientStore>().expect("PatientStore not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let store_for_test = store.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = api_url.get();
        api::set_api_base(&url);

        let store_clone = store_for_test.clone();
        spawn_local(async move {
            // Probe the stats endpoint; any decoded response counts
            match api::fetch_stats().await {
                Ok(_) => {
                    set_test_result.set(Some(true));
                    store_clone.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    store_clone.show_error(&e);
                }
            }
            set_testing.set(false);
        });
    };

    let store_for_save = store.clone();
    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        store_for_save.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Analytics API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About Pulseboard"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "Pulseboard visualizes patient risk and treatment outcomes served by a "
                    "remote analytics API. Browse the roster, inspect per-patient vitals, "
                    "and compare treatment plans."
                </p>

                <div class="grid md:grid-cols-2 gap-4 text-sm">
                    <div class="p-4 bg-gray-700 rounded-lg">
                        <h3 class="font-medium text-white mb-2">"Built With"</h3>
                        <ul class="space-y-1 text-gray-400">
                            <li>"• Rust compiled to WebAssembly"</li>
                            <li>"• Leptos (CSR UI framework)"</li>
                            <li>"• Canvas-rendered charts"</li>
                        </ul>
                    </div>

                    <div class="p-4 bg-gray-700 rounded-lg">
                        <h3 class="font-medium text-white mb-2">"Features"</h3>
                        <ul class="space-y-1 text-gray-400">
                            <li>"• Risk stratification overview"</li>
                            <li>"• Per-patient vitals charts"</li>
                            <li>"• Treatment outcome analysis"</li>
                        </ul>
                    </div>
                </div>

                <p class="text-sm text-gray-400">
                    "Version 0.1.0"
                </p>
            </div>
        </section>
    }
}
