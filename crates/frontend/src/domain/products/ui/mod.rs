use super::api;
use super::pricing::{display_price_in_rupees, price_with_discount};
use crate::shared::components::ui::Spinner;
use contracts::domain::product::Product;
use leptos::logging::{log, warn};
use leptos::prelude::*;

/// Cart wiring lives outside this view; the button only reports the intent.
#[component]
fn AddToCartButton(product: Product) -> impl IntoView {
    view! {
        <button
            style="padding: 6px 16px; background: #16a34a; color: white; border: none; border-radius: 4px; font-size: 0.875rem; cursor: pointer;"
            on:click=move |_| log!("add to cart: {}", product.id)
        >
            "Add"
        </button>
    }
}

#[component]
pub fn CardProduct(data: Product) -> impl IntoView {
    let discounted = data.discount > 0.0;
    let selling_price = display_price_in_rupees(price_with_discount(data.price, data.discount));
    let list_price = display_price_in_rupees(data.price);
    let thumbnail = data.image.first().cloned();
    let out_of_stock = data.stock == 0;

    view! {
        <div
            class="card-product"
            style="position: relative; background: white; border-radius: 8px; overflow: hidden; box-shadow: 0 1px 2px rgba(0,0,0,0.05); display: flex; flex-direction: column; min-width: 13rem;"
        >
            {discounted.then(|| view! {
                <div style="position: absolute; top: 8px; left: 8px; z-index: 10; background: #ef4444; color: white; font-size: 0.75rem; font-weight: 700; padding: 4px 8px; border-radius: 9999px;">
                    {format!("{}% OFF", data.discount)}
                </div>
            })}

            <div style="min-height: 8rem; width: 100%; background: #f9fafb; display: flex; align-items: center; justify-content: center; padding: 8px;">
                {thumbnail.map(|src| view! {
                    <img
                        src=src
                        alt=data.name.clone()
                        style="width: 100%; height: 100%; object-fit: contain;"
                    />
                })}
            </div>

            <div style="display: flex; flex-direction: column; padding: 12px; gap: 8px; flex-grow: 1;">
                <div>
                    <span style="font-size: 0.75rem; padding: 2px 8px; color: #16a34a; background: #f0fdf4; border-radius: 4px;">
                        "10 min"
                    </span>
                </div>

                <h3 style="font-weight: 500; color: #1f2937; font-size: 0.875rem; margin: 0;">
                    {data.name.clone()}
                </h3>

                <div style="font-size: 0.75rem; color: #6b7280;">{data.unit.clone()}</div>

                <div style="display: flex; align-items: center; justify-content: space-between; margin-top: auto; padding-top: 8px; border-top: 1px solid #f3f4f6;">
                    <div style="display: flex; flex-direction: column;">
                        <span style="font-weight: 700; color: #111827;">{selling_price}</span>
                        {discounted.then(|| view! {
                            <span style="font-size: 0.75rem; color: #9ca3af; text-decoration: line-through;">
                                {list_price}
                            </span>
                        })}
                    </div>
                    <div>
                        {if out_of_stock {
                            view! {
                                <div style="color: #ef4444; font-size: 0.75rem; background: #fef2f2; padding: 4px 8px; border-radius: 4px;">
                                    "Out of stock"
                                </div>
                            }.into_any()
                        } else {
                            view! { <AddToCartButton product=data.clone() /> }.into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_products().await {
                    Ok(items) => {
                        log!("loaded {} products", items.len());
                        let _ = set_products.try_set(items);
                    }
                    Err(e) => {
                        warn!("product fetch failed: {}", e);
                        let _ = set_error.try_set(Some(e));
                    }
                }
                let _ = set_loading.try_set(false);
            });
        }
    });

    view! {
        <div class="products-page" style="max-width: 1100px; margin: 0 auto; padding: 24px 16px;">
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! {
                        <div
                            role="alert"
                            style="background: #ffebee; border: 1px solid #ffcdd2; color: #c62828; padding: 12px 16px; border-radius: 4px;"
                        >
                            <strong>"Error! "</strong>
                            <span>{err}</span>
                        </div>
                    }
                    .into_any();
                }

                let items = products.get();
                if items.is_empty() {
                    return view! {
                        <div style="text-align: center; padding: 32px; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                            <p style="color: #6b7280; margin: 0;">"No products found"</p>
                        </div>
                    }
                    .into_any();
                }

                view! {
                    <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(13rem, 1fr)); gap: 16px;">
                        {items
                            .into_iter()
                            .map(|product| view! { <CardProduct data=product /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
