pub mod global_context;
pub mod header;

use header::Header;
use leptos::prelude::*;

/// Application shell: header with navigation on top, the routed page below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" style="min-height: 100vh; background: #f9fafb; display: flex; flex-direction: column;">
            <Header />
            <main class="app-main" style="flex: 1;">
                {children()}
            </main>
        </div>
    }
}
