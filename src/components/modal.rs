//! Generic modal dialog with backdrop dismissal.

use leptos::prelude::*;

/// Centered dialog over a click-to-close backdrop.
#[component]
pub fn Modal(title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button
                        class="dialog__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
