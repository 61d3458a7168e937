use leptos::prelude::*;

/// Centered loading indicator shown while an initial fetch is in flight
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" style="display: flex; justify-content: center; align-items: center; height: 16rem;">
            <div style="text-align: center; color: #666;">
                <div style="font-size: 24px; margin-bottom: 8px;">"⏳"</div>
                <div>"Loading..."</div>
            </div>
        </div>
    }
}
