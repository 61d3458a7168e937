use leptos::ev;
use leptos::prelude::*;

/// Blocking yes/no dialog rendered over the page.
///
/// Escape and a click on the overlay both count as declining.
#[component]
pub fn ConfirmDialog(
    /// Dialog title
    title: &'static str,
    /// Question put to the user
    message: &'static str,
    /// Label of the confirming button
    confirm_label: &'static str,
    /// Label of the declining button
    decline_label: &'static str,
    /// Callback when the user confirms
    on_confirm: Callback<()>,
    /// Callback when the user declines or dismisses the dialog
    on_decline: Callback<()>,
) -> impl IntoView {
    // Escape closes the dialog; the listener must not outlive it
    let escape_listener = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_decline.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    // Prevent click propagation from dialog content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 50;"
            on:click=move |_| on_decline.run(())
        >
            <div
                class="modal"
                style="background: white; padding: 24px; border-radius: 8px; box-shadow: 0 10px 25px rgba(0,0,0,0.2); max-width: 28rem; width: 100%;"
                on:click=stop_propagation
            >
                <h3 class="modal-title" style="margin: 0 0 16px 0; font-size: 1.125rem; font-weight: 500; color: #111827;">
                    {title}
                </h3>
                <p style="color: #4b5563; margin: 0 0 24px 0;">{message}</p>
                <div style="display: flex; justify-content: flex-end; gap: 12px;">
                    <button
                        style="padding: 8px 16px; background: #e5e7eb; color: #1f2937; border: none; border-radius: 4px; cursor: pointer;"
                        on:click=move |_| on_decline.run(())
                    >
                        {decline_label}
                    </button>
                    <button
                        style="padding: 8px 16px; background: #ef4444; color: white; border: none; border-radius: 4px; cursor: pointer;"
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
