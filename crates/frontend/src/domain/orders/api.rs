//! Order endpoints of the backend API.
//!
//! One-shot requests only: no retry, no polling, no timeout. Failures are
//! reported as plain strings for direct display in the page banners.

use crate::shared::api_utils::api_url;
use contracts::domain::order::{CancelOrderResponse, Order, OrderListResponse};
use gloo_net::http::Request;

/// Fetch the full order collection. Issued once when the page mounts.
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/api/order/orders"))
        .send()
        .await
        .map_err(|e| format!("Error fetching orders: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Error fetching orders: server returned {}",
            response.status()
        ));
    }

    let body: OrderListResponse = response
        .json()
        .await
        .map_err(|e| format!("Error fetching orders: {}", e))?;

    if body.success {
        Ok(body.data)
    } else {
        Err("Failed to fetch orders".to_string())
    }
}

/// Ask the backend to cancel one order. The caller applies the optimistic
/// marker before calling and settles the state with the result.
pub async fn cancel_order(order_id: &str) -> Result<(), String> {
    let url = api_url(&format!("/api/order/orders/cancel/{}", order_id));
    let response = Request::put(&url).send().await.map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("server returned {}", response.status()));
    }

    let body: CancelOrderResponse = response.json().await.map_err(|e| e.to_string())?;

    if body.success {
        Ok(())
    } else {
        Err(body
            .message
            .unwrap_or_else(|| "Failed to cancel order".to_string()))
    }
}
