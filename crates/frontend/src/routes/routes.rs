use crate::domain::about::AboutPage;
use crate::domain::orders::ui::OrdersPage;
use crate::domain::products::ui::ProductsPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <Shell>
            {move || match ctx.current_page.get() {
                Page::Products => view! { <ProductsPage /> }.into_any(),
                Page::About => view! { <AboutPage /> }.into_any(),
                Page::Orders => view! { <OrdersPage /> }.into_any(),
            }}
        </Shell>
    }
}
