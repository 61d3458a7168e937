use super::api;
use super::invoice;
use super::state::OrdersState;
use super::status::status_badge_variant;
use crate::shared::components::ui::{Badge, Spinner};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::modal::ConfirmDialog;
use contracts::domain::order::Order;
use leptos::logging::{log, warn};
use leptos::prelude::*;

const CELL: &str = "padding: 14px 16px; border-bottom: 1px solid #e5e7eb; vertical-align: top;";
const HEADER_CELL: &str = "padding: 10px 16px; text-align: left; font-size: 0.75rem; font-weight: 600; color: #6b7280; text-transform: uppercase; letter-spacing: 0.05em; border-bottom: 1px solid #e5e7eb;";

fn error_banner(message: String) -> AnyView {
    view! {
        <div
            role="alert"
            style="background: #ffebee; border: 1px solid #ffcdd2; color: #c62828; padding: 12px 16px; border-radius: 4px;"
        >
            <strong>"Error! "</strong>
            <span>{message}</span>
        </div>
    }
    .into_any()
}

/// One table row plus, when expanded, the detail panel row below it.
/// Rendered from a state snapshot; event handlers write back through the
/// page-level state signal.
fn order_rows(state: RwSignal<OrdersState>, snapshot: &OrdersState, order: &Order) -> impl IntoView {
    let order = order.clone();
    let expanded = snapshot.is_expanded(&order.id);
    let processing = snapshot.is_processing(&order.id);
    let can_cancel = snapshot.can_cancel(&order);

    let toggle_id = order.id.clone();
    let cancel_id = order.id.clone();
    let print_order = order.clone();

    let user_ref = format!("User ID: {}...", order.user_id.chars().take(8).collect::<String>());
    let thumbnail = order.product_details.image.first().cloned();

    let cancel_button_style = if !can_cancel && processing {
        "padding: 8px 16px; border: none; border-radius: 4px; background: #6b7280; color: white; cursor: wait;"
    } else if !can_cancel {
        "padding: 8px 16px; border: none; border-radius: 4px; background: #9ca3af; color: #e5e7eb; cursor: not-allowed;"
    } else {
        "padding: 8px 16px; border: none; border-radius: 4px; background: #ef4444; color: white; cursor: pointer;"
    };

    let detail_row = expanded.then(|| {
        let address_block = match &order.delivery_address {
            Some(address) => view! {
                <div>
                    <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Address: "</span>{address.address_line.clone()}</p>
                    <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"City: "</span>{address.city.clone()}</p>
                    <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"State: "</span>{address.state.clone()}</p>
                    <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Pincode: "</span>{address.pincode.clone()}</p>
                    <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Country: "</span>{address.country.clone()}</p>
                    <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Phone: "</span>{address.mobile.clone()}</p>
                </div>
            }.into_any(),
            None => view! {
                <p style="font-size: 0.875rem; color: #6b7280; margin: 0;">"No delivery address provided"</p>
            }.into_any(),
        };

        let payment_line = print_order.payment_ref().map(|p| {
            let p = p.to_string();
            view! {
                <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Payment ID: "</span>{p}</p>
            }
        });

        view! {
            <tr>
                <td colspan="5" style="padding: 16px; background: #f9fafb; border-bottom: 1px solid #e5e7eb;">
                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;">
                        <div>
                            <h3 style="font-weight: 500; color: #374151; margin: 0 0 8px 0;">"Order Information"</h3>
                            <div style="background: white; padding: 12px; border-radius: 4px; border: 1px solid #e5e7eb;">
                                <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Order ID: "</span>{order.order_id.clone()}</p>
                                <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Product ID: "</span>{order.product_id.clone()}</p>
                                <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Created: "</span>{format_datetime(&order.created_at)}</p>
                                <p style="font-size: 0.875rem; margin: 2px 0;"><span style="font-weight: 500;">"Updated: "</span>{format_datetime(&order.updated_at)}</p>
                                {payment_line}
                            </div>
                        </div>
                        <div>
                            <h3 style="font-weight: 500; color: #374151; margin: 0 0 8px 0;">"Delivery Address"</h3>
                            <div style="background: white; padding: 12px; border-radius: 4px; border: 1px solid #e5e7eb;">
                                {address_block}
                            </div>
                        </div>
                    </div>
                    <div style="margin-top: 16px; display: flex; justify-content: flex-end; gap: 8px;">
                        <button
                            style="padding: 8px 16px; border: none; border-radius: 4px; background: #3b82f6; color: white; cursor: pointer;"
                            on:click=move |_| {
                                invoice::open_print_window(invoice::render_invoice(&print_order));
                            }
                        >
                            "Print Invoice"
                        </button>
                        <button
                            style=cancel_button_style
                            prop:disabled=!can_cancel
                            on:click=move |_| state.update(|s| s.request_cancel(&cancel_id))
                        >
                            {if processing { "Processing..." } else { "Cancel Order" }}
                        </button>
                    </div>
                </td>
            </tr>
        }
    });

    view! {
        <tr style="background: white;">
            <td style=CELL>
                <div style="font-size: 0.875rem; font-weight: 500; color: #111827;">{order.order_id.clone()}</div>
                <div style="font-size: 0.875rem; color: #6b7280;">{format_date(&order.created_at)}</div>
                <div style="font-size: 0.875rem; color: #6b7280;">{user_ref}</div>
            </td>
            <td style=CELL>
                <div style="display: flex; align-items: center; gap: 12px;">
                    {thumbnail.map(|src| view! {
                        <img
                            src=src
                            alt=order.product_details.name.clone()
                            style="height: 40px; width: 40px; border-radius: 9999px; object-fit: cover;"
                        />
                    })}
                    <div style="font-size: 0.875rem; font-weight: 500; color: #111827;">
                        {order.product_details.name.clone()}
                    </div>
                </div>
            </td>
            <td style=CELL>
                <div style="font-size: 0.875rem; font-weight: 500; color: #111827;">{format!("₹{}", order.total_amt)}</div>
                <div style="font-size: 0.75rem; color: #6b7280;">{format!("Subtotal: ₹{}", order.sub_total_amt)}</div>
            </td>
            <td style=CELL>
                <Badge variant=status_badge_variant(&order.payment_status)>
                    {order.payment_status.clone()}
                </Badge>
            </td>
            <td style=CELL>
                <button
                    style="border: none; background: none; color: #2563eb; cursor: pointer; font-size: 0.875rem; font-weight: 500; padding: 0;"
                    on:click=move |_| state.update(|s| s.toggle_expanded(&toggle_id))
                >
                    {if expanded { "Hide Details" } else { "View Details" }}
                </button>
            </td>
        </tr>
        {detail_row}
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let state = RwSignal::new(OrdersState::new());
    let (loading, set_loading) = signal(true);
    // Fatal fetch error: when set, it replaces the list render entirely
    let (fetch_error, set_fetch_error) = signal::<Option<String>>(None);

    // One-shot fetch on mount. Async writes go through try_* so a response
    // that lands after the view is torn down is dropped, not panicked on.
    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_orders().await {
                    Ok(orders) => {
                        log!("loaded {} orders", orders.len());
                        let _ = state.try_update(|s| s.populate(orders));
                    }
                    Err(e) => {
                        warn!("order fetch failed: {}", e);
                        let _ = set_fetch_error.try_set(Some(e));
                    }
                }
                let _ = set_loading.try_set(false);
            });
        }
    });

    // ConfirmPending -> Cancelling: mark the row, fire the PUT, settle
    let confirm_cancel = move || {
        let Some(id) = state.try_update(|s| s.confirm_cancel()).flatten() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::cancel_order(&id).await {
                Ok(()) => {
                    let _ = state.try_update(|s| s.settle_cancel_success());
                }
                Err(e) => {
                    warn!("cancel of order {} failed: {}", id, e);
                    let _ = state.try_update(|s| {
                        s.settle_cancel_failure(format!("Error cancelling order: {}", e))
                    });
                }
            }
        });
    };

    view! {
        <div class="orders-page" style="max-width: 1100px; margin: 0 auto; padding: 24px 16px;">
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(err) = fetch_error.get() {
                    return error_banner(err);
                }

                let snapshot = state.get();
                let order_count = snapshot.orders.len();

                view! {
                    <div>
                    <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;">
                        <h1 style="font-size: 1.5rem; font-weight: 700; margin: 0;">"Order Management"</h1>
                        // Decorative controls, not wired to any data flow
                        <div style="display: flex; gap: 8px;">
                            <button style="padding: 8px 16px; background: #3b82f6; color: white; border: none; border-radius: 4px; cursor: pointer;">
                                "Export Orders"
                            </button>
                            <select style="padding: 8px 16px; border: 1px solid #d1d5db; border-radius: 4px; background: white;">
                                <option value="">"Filter by Status"</option>
                                <option value="PAID">"Paid"</option>
                                <option value="CASH ON DELIVERY">"Cash on Delivery"</option>
                                <option value="CANCELLED">"Cancelled"</option>
                            </select>
                        </div>
                    </div>

                    // Cancellation failures are row-local: the banner is
                    // dismissible and the list stays on screen
                    {snapshot.cancel_error.clone().map(|err| view! {
                        <div
                            role="alert"
                            style="background: #ffebee; border: 1px solid #ffcdd2; color: #c62828; padding: 12px 16px; border-radius: 4px; margin-bottom: 16px; display: flex; justify-content: space-between; align-items: center;"
                        >
                            <span><strong>"Error! "</strong>{err}</span>
                            <button
                                aria-label="Dismiss"
                                style="border: none; background: none; color: #c62828; cursor: pointer; font-weight: 700;"
                                on:click=move |_| state.update(|s| s.dismiss_cancel_error())
                            >
                                "✕"
                            </button>
                        </div>
                    })}

                    {if snapshot.orders.is_empty() {
                        view! {
                            <div style="text-align: center; padding: 32px; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                                <p style="color: #6b7280; margin: 0;">"No orders found"</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div style="background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); overflow: hidden;">
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead style="background: #f9fafb;">
                                        <tr>
                                            <th scope="col" style=HEADER_CELL>"Order Details"</th>
                                            <th scope="col" style=HEADER_CELL>"Product"</th>
                                            <th scope="col" style=HEADER_CELL>"Amount"</th>
                                            <th scope="col" style=HEADER_CELL>"Payment Status"</th>
                                            <th scope="col" style=HEADER_CELL>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {snapshot
                                            .orders
                                            .iter()
                                            .map(|order| order_rows(state, &snapshot, order))
                                            .collect_view()}
                                    </tbody>
                                </table>
                                // Footer with decorative pagination (single page of data)
                                <div style="background: #f9fafb; padding: 12px 16px; border-top: 1px solid #e5e7eb; display: flex; justify-content: space-between; align-items: center;">
                                    <p style="font-size: 0.875rem; color: #374151; margin: 0;">
                                        "Showing " <span style="font-weight: 500;">{order_count}</span> " orders"
                                    </p>
                                    <nav style="display: inline-flex; border-radius: 6px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);">
                                        <button style="padding: 8px; border: 1px solid #d1d5db; border-radius: 6px 0 0 6px; background: white; color: #9ca3af;">"« Previous"</button>
                                        <button style="padding: 8px 16px; border: 1px solid #d1d5db; border-left: none; background: white; color: #2563eb; font-weight: 600;">"1"</button>
                                        <button style="padding: 8px; border: 1px solid #d1d5db; border-left: none; border-radius: 0 6px 6px 0; background: white; color: #9ca3af;">"Next »"</button>
                                    </nav>
                                </div>
                            </div>
                        }.into_any()
                    }}

                    {snapshot.confirm_dialog_open().then(|| view! {
                        <ConfirmDialog
                            title="Confirm Cancellation"
                            message="Are you sure you want to cancel this order? This action cannot be undone."
                            confirm_label="Yes, Cancel Order"
                            decline_label="No, Keep Order"
                            on_confirm=Callback::new(move |_| confirm_cancel())
                            on_decline=Callback::new(move |_| state.update(|s| s.decline_cancel()))
                        />
                    })}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
