use leptos::prelude::*;

/// Inline colors per variant; the app ships no external stylesheet, so the
/// badge carries its own palette the way table status cells do.
fn variant_style(variant: &str) -> &'static str {
    match variant {
        "success" => "background: #e8f5e9; color: #2e7d32;",
        "warning" => "background: #fff8e1; color: #b45309;",
        "error" => "background: #ffebee; color: #c62828;",
        "primary" => "background: #e3f2fd; color: #1565c0;",
        _ => "background: #f5f5f5; color: #666;",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    variant: &'static str,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=format!("badge badge--{}", variant)
            style=format!(
                "display: inline-flex; padding: 3px 10px; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; {}",
                variant_style(variant),
            )
        >
            {children()}
        </span>
    }
}
