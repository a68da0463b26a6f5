//! Log Panel Component
//!
//! Opt-in (`debugLog`) view of the rolling logger's buffer.

use leptos::prelude::*;

use crate::view_model::log_lines;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(log_lines(&rolling_logger::recent()));

    view! {
        <section class="log-panel">
            <div class="log-panel-header">
                <h4>"Recent log"</h4>
                <button
                    class="log-refresh"
                    on:click=move |_| set_lines.set(log_lines(&rolling_logger::recent()))
                >
                    "Refresh"
                </button>
            </div>
            <pre class="log-lines">
                {move || lines.get().join("\n")}
            </pre>
        </section>
    }
}
