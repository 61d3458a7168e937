use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[component]
fn NavButton(page: Page) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let style = move || {
        if ctx.current_page.get() == page {
            "padding: 8px 14px; border: none; border-radius: 4px; background: #4f46e5; color: white; font-weight: 600; cursor: pointer;"
        } else {
            "padding: 8px 14px; border: none; border-radius: 4px; background: transparent; color: #374151; cursor: pointer;"
        }
    };

    view! {
        <button class="header__nav-button" style=style on:click=move |_| ctx.navigate(page)>
            {page.title()}
        </button>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header
            data-zone="header"
            class="header"
            style="background: white; border-bottom: 1px solid #e5e7eb; padding: 12px 24px; display: flex; align-items: center; justify-content: space-between;"
        >
            <span class="header__title" style="font-size: 1.25rem; font-weight: 700; color: #111827;">
                "His & Her Essentials"
            </span>
            <nav class="header__nav" style="display: flex; gap: 8px;">
                <NavButton page=Page::Products />
                <NavButton page=Page::About />
                <NavButton page=Page::Orders />
            </nav>
        </header>
    }
}
