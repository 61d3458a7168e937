use serde::{Deserialize, Serialize};

/// Catalog product as served by `GET /api/product/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Vec<String>,
    /// Sales unit shown on the card ("500 g", "1 pc", ...)
    #[serde(default)]
    pub unit: String,
    /// List price before discount
    #[serde(default)]
    pub price: f64,
    /// Discount percentage, 0 means no discount
    #[serde(default)]
    pub discount: f64,
    /// Remaining stock; 0 renders the out-of-stock marker
    #[serde(default)]
    pub stock: i64,
}

/// Response envelope of `GET /api/product/products`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_product_with_defaults() {
        let json = r#"{ "_id": "p1", "name": "Basmati Rice", "price": 250.0 }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.discount, 0.0);
        assert_eq!(product.stock, 0);
        assert!(product.image.is_empty());
    }

    #[test]
    fn parses_product_list() {
        let json = r#"{ "success": true, "data": [
            { "_id": "p1", "name": "Rice", "price": 250, "discount": 10, "stock": 5, "unit": "1 kg" }
        ] }"#;
        let list: ProductListResponse = serde_json::from_str(json).unwrap();
        assert!(list.success);
        assert_eq!(list.data[0].discount, 10.0);
    }
}
