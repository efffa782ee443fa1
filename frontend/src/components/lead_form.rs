//! "Request Web Development" modal.
//!
//! The form is display-only: inputs hold no bound value, nothing is
//! validated, and the submit button has no handler, so submitting falls back
//! to the browser default.

use leptos::*;

use crate::lead_form_fields;

#[component]
pub fn LeadForm(
    /// Fired with no payload when the close glyph is clicked
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div class="bg-white p-6 rounded-lg shadow-lg relative w-full max-w-md">
                <button
                    class="absolute top-3 right-4 text-2xl text-gray-500 hover:text-red-500"
                    on:click=move |_| on_close.call(())
                >
                    "×"
                </button>

                <h2 class="text-xl font-semibold mb-6 text-black">"Request Web Development"</h2>

                <form class="space-y-4">
                    {lead_form_fields()
                        .into_iter()
                        .map(|field| view! {
                            <div>
                                <label class="block text-sm font-medium mb-1">{field.label}</label>
                                <input
                                    type=field.kind.as_str()
                                    placeholder=field.placeholder
                                    class="w-full border border-gray-300 rounded-md p-3 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                />
                            </div>
                        })
                        .collect_view()}
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-3 rounded-md font-semibold hover:bg-blue-700 transition"
                    >
                        "Pay Now"
                    </button>
                </form>
            </div>
        </div>
    }
}
