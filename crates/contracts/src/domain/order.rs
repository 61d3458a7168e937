use serde::{Deserialize, Serialize};

/// Product snapshot embedded in an order at purchase time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProductDetails {
    pub name: String,
    /// Image URLs, first one is used as the thumbnail
    #[serde(default)]
    pub image: Vec<String>,
}

/// Delivery address attached to an order. Optional on the wire: orders
/// created before address capture was introduced carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(default)]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub mobile: String,
}

/// Purchase record owned by the backend order service.
///
/// Field names follow the backend's wire format (MongoDB-style `_id`,
/// camelCase amounts/timestamps, snake_case nested documents), so the
/// serde renames here ARE the contract. The frontend never mutates these
/// records locally except through the cancellation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Primary key, opaque
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-readable order reference shown to customers and on invoices
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Weak reference to the owning customer
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "productId", default)]
    pub product_id: String,
    pub product_details: OrderProductDetails,
    /// Gateway payment reference; absent or empty for cash orders
    #[serde(rename = "paymentId", default)]
    pub payment_id: Option<String>,
    /// Free-text status: "PAID", "CASH ON DELIVERY", "CANCELLED", or
    /// whatever else the payment gateway reported
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(rename = "subTotalAmt", default)]
    pub sub_total_amt: f64,
    /// Invariant: `total_amt >= sub_total_amt`; the difference is the
    /// tax/shipping component shown on invoices
    #[serde(rename = "totalAmt", default)]
    pub total_amt: f64,
    /// ISO-8601 timestamps, kept as strings (formatting is a UI concern)
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl Order {
    /// Payment reference if one was recorded. The backend sends an empty
    /// string for cash orders, which counts as absent.
    pub fn payment_ref(&self) -> Option<&str> {
        self.payment_id.as_deref().filter(|p| !p.is_empty())
    }
}

/// Response envelope of `GET /api/order/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Order>,
}

/// Response envelope of `PUT /api/order/orders/cancel/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_order() {
        let json = r#"{
            "_id": "65f1a2b3c4d5e6f7a8b9c0d1",
            "orderId": "ORD-2024-0001",
            "userId": "65f1a2b3c4d5e6f7a8b9ffff",
            "productId": "65f1a2b3c4d5e6f7a8b9eeee",
            "product_details": { "name": "Linen Shirt", "image": ["https://cdn.example/shirt.jpg"] },
            "paymentId": "pay_123",
            "payment_status": "PAID",
            "delivery_address": {
                "address_line": "14 Rose Lane",
                "city": "Pune",
                "state": "MH",
                "pincode": "411001",
                "country": "India",
                "mobile": "9999999999"
            },
            "subTotalAmt": 100.0,
            "totalAmt": 120.0,
            "createdAt": "2024-03-15T14:02:26.123Z",
            "updatedAt": "2024-03-15T14:02:26.123Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, "ORD-2024-0001");
        assert_eq!(order.payment_ref(), Some("pay_123"));
        assert_eq!(order.product_details.name, "Linen Shirt");
        assert!(order.total_amt >= order.sub_total_amt);
        assert_eq!(order.delivery_address.unwrap().city, "Pune");
    }

    #[test]
    fn parses_order_without_address_or_payment() {
        let json = r#"{
            "_id": "65f1a2b3c4d5e6f7a8b9c0d2",
            "orderId": "ORD-2024-0002",
            "product_details": { "name": "Cotton Scarf" },
            "paymentId": "",
            "payment_status": "CASH ON DELIVERY",
            "subTotalAmt": 40,
            "totalAmt": 45
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert!(order.delivery_address.is_none());
        assert_eq!(order.payment_ref(), None);
        assert!(order.product_details.image.is_empty());
        assert_eq!(order.created_at, "");
    }

    #[test]
    fn parses_list_and_cancel_envelopes() {
        let list: OrderListResponse =
            serde_json::from_str(r#"{ "success": true, "data": [] }"#).unwrap();
        assert!(list.success);
        assert!(list.data.is_empty());

        let failed: OrderListResponse = serde_json::from_str(r#"{ "success": false }"#).unwrap();
        assert!(!failed.success);

        let cancel: CancelOrderResponse =
            serde_json::from_str(r#"{ "success": false, "message": "Order already shipped" }"#)
                .unwrap();
        assert_eq!(cancel.message.as_deref(), Some("Order already shipped"));

        let cancel_ok: CancelOrderResponse =
            serde_json::from_str(r#"{ "success": true }"#).unwrap();
        assert!(cancel_ok.message.is_none());
    }
}
