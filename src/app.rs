//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Patients, Settings, Treatments};
use crate::state::store::{provide_patient_store, PatientStore};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all components
    provide_patient_store();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/patients" view=Patients />
                        <Route path="/treatments" view=Treatments />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with fetch status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing fetch status
#[component]
fn Footer() -> impl IntoView {
    let store = use_context::<PatientStore>().expect("PatientStore not found");
    let last_refreshed = store.last_refreshed;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // API endpoint in use
                <div class="text-gray-400">
                    {format!("API: {}", api::get_api_base())}
                </div>

                // Last refresh time
                <div class="text-gray-400">
                    {move || {
                        last_refreshed.get()
                            .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                            .map(|dt| format!("Updated: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "No data yet".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if store.is_loading() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
