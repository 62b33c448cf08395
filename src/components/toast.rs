//! Toast Notification Component
//!
//! Surfaces the store's message slots. Success messages clear themselves;
//! the error slot persists until the user dismisses it.

use leptos::*;

use crate::state::store::PatientStore;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let store = use_context::<PatientStore>().expect("PatientStore not found");
    let store_for_error = store.clone();

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            // Success toast (auto-clearing)
            {move || {
                store.success.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3 \
                                rounded-lg shadow-lg">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}

            // Error toast (persists until dismissed)
            {move || {
                let store = store_for_error.clone();
                store_for_error.error.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 \
                                rounded-lg shadow-lg">
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{msg}</span>
                        <button
                            on:click=move |_| store.clear_error()
                            class="text-sm underline opacity-80 hover:opacity-100"
                        >
                            "Dismiss"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
