use crate::shared::api_utils::api_url;
use contracts::domain::product::{Product, ProductListResponse};
use gloo_net::http::Request;

/// Fetch the product catalog for the listing page. One-shot, no retry.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/product/products"))
        .send()
        .await
        .map_err(|e| format!("Error fetching products: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Error fetching products: server returned {}",
            response.status()
        ));
    }

    let body: ProductListResponse = response
        .json()
        .await
        .map_err(|e| format!("Error fetching products: {}", e))?;

    if body.success {
        Ok(body.data)
    } else {
        Err("Failed to fetch products".to_string())
    }
}
