//! Invoice rendering for the order management page.
//!
//! `render_invoice` is a pure string transformation so it can be tested
//! natively; the window/print side effects live in `open_print_window`.

use crate::shared::date_utils::format_date;
use contracts::domain::order::Order;

/// Escape record-sourced text interpolated into the invoice markup
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn customer_block(order: &Order) -> String {
    match &order.delivery_address {
        Some(address) => format!(
            "{}<br>\n        {}, {} {}<br>\n        {}<br>\n        Phone: {}",
            escape_html(&address.address_line),
            escape_html(&address.city),
            escape_html(&address.state),
            escape_html(&address.pincode),
            escape_html(&address.country),
            escape_html(&address.mobile),
        ),
        None => "No delivery address provided".to_string(),
    }
}

/// Render one order as a self-contained printable HTML document.
///
/// One line item at quantity 1, a subtotal, a derived tax/shipping line
/// (`total - subtotal`, two decimals) and the total. A missing delivery
/// address renders a fallback notice instead of failing.
pub fn render_invoice(order: &Order) -> String {
    let order_no = escape_html(&order.order_id);
    let product_name = escape_html(&order.product_details.name);
    let status = escape_html(&order.payment_status);
    let payment_line = order
        .payment_ref()
        .map(|p| format!("<strong>Payment ID:</strong> {}<br>\n", escape_html(p)))
        .unwrap_or_default();
    let tax_shipping = order.total_amt - order.sub_total_amt;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Invoice #{order_no}</title>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; margin: 0; padding: 20px; color: #333; }}
    .invoice-header {{ text-align: center; margin-bottom: 30px; padding-bottom: 20px; border-bottom: 1px solid #ddd; }}
    .invoice-title {{ font-size: 24px; margin-bottom: 10px; }}
    .company-name {{ font-size: 18px; margin-bottom: 5px; }}
    .invoice-details, .customer-details {{ margin-bottom: 30px; }}
    table {{ width: 100%; border-collapse: collapse; margin-bottom: 30px; }}
    th, td {{ padding: 12px 15px; border-bottom: 1px solid #ddd; text-align: left; }}
    th {{ background-color: #f8f8f8; }}
    .total-row {{ font-weight: bold; }}
    .footer {{ margin-top: 50px; text-align: center; color: #777; font-size: 14px; }}
    @media print {{ .print-button {{ display: none; }} }}
  </style>
</head>
<body>
  <div class="invoice-header">
    <div class="invoice-title">INVOICE</div>
    <div class="company-name">His &amp; Her Essentials</div>
    <div>123 Fashion Street, Downtown, Cityville</div>
  </div>

  <div class="invoice-details">
    <strong>Invoice #:</strong> {order_no}<br>
    <strong>Date:</strong> {date}<br>
    <strong>Payment Status:</strong> {status}<br>
    {payment_line}</div>

  <div class="customer-details">
    <strong>Customer Information:</strong><br>
    {customer}
  </div>

  <table>
    <thead>
      <tr><th>Product</th><th>Price</th><th>Quantity</th><th>Total</th></tr>
    </thead>
    <tbody>
      <tr><td>{product_name}</td><td>₹{subtotal}</td><td>1</td><td>₹{subtotal}</td></tr>
      <tr><td colspan="3" style="text-align: right;"><strong>Subtotal</strong></td><td>₹{subtotal}</td></tr>
      <tr><td colspan="3" style="text-align: right;"><strong>Tax/Shipping</strong></td><td>₹{tax_shipping:.2}</td></tr>
      <tr class="total-row"><td colspan="3" style="text-align: right;"><strong>Total</strong></td><td>₹{total}</td></tr>
    </tbody>
  </table>

  <div class="footer">Thank you for your business!</div>

  <div class="print-button" style="text-align: center; margin-top: 40px;">
    <button onclick="window.print()" style="padding: 10px 20px; background-color: #4F46E5; color: white; border: none; border-radius: 4px; cursor: pointer;">
      Print Invoice
    </button>
  </div>
</body>
</html>
"#,
        order_no = order_no,
        date = format_date(&order.created_at),
        status = status,
        payment_line = payment_line,
        customer = customer_block(order),
        product_name = product_name,
        subtotal = order.sub_total_amt,
        tax_shipping = tax_shipping,
        total = order.total_amt,
    )
}

/// Open a new browser window, write the rendered invoice into it and
/// trigger the print dialog once layout has settled.
///
/// Popup blockers may refuse the window; that is logged and otherwise
/// ignored so the page itself keeps working.
pub fn open_print_window(html: String) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let print_window = match window.open_with_url_and_target("", "_blank") {
        Ok(Some(w)) => w,
        Ok(None) => {
            log::warn!("print window was blocked by the browser");
            return;
        }
        Err(e) => {
            log::warn!("failed to open print window: {:?}", e);
            return;
        }
    };

    let Some(document) = print_window.document() else {
        log::warn!("print window has no document");
        return;
    };
    // web-sys exposes document.write/close on HtmlDocument, not Document
    let document: web_sys::HtmlDocument = wasm_bindgen::JsCast::unchecked_into(document);

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&html));
    if document.write(&parts).is_err() {
        log::warn!("failed to write invoice into print window");
        return;
    }
    let _ = document.close();

    wasm_bindgen_futures::spawn_local(async move {
        // let the freshly written document lay out before printing
        gloo_timers::future::TimeoutFuture::new(500).await;
        let _ = print_window.focus();
        let _ = print_window.print();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::order::{DeliveryAddress, OrderProductDetails};

    fn sample_order() -> Order {
        Order {
            id: "65f1".to_string(),
            order_id: "ORD-2024-0001".to_string(),
            user_id: "u1".to_string(),
            product_id: "p1".to_string(),
            product_details: OrderProductDetails {
                name: "Linen Shirt".to_string(),
                image: vec![],
            },
            payment_id: Some("pay_123".to_string()),
            payment_status: "PAID".to_string(),
            delivery_address: Some(DeliveryAddress {
                address_line: "14 Rose Lane".to_string(),
                city: "Pune".to_string(),
                state: "MH".to_string(),
                pincode: "411001".to_string(),
                country: "India".to_string(),
                mobile: "9999999999".to_string(),
            }),
            sub_total_amt: 100.0,
            total_amt: 120.0,
            created_at: "2024-03-15T14:02:26.123Z".to_string(),
            updated_at: "2024-03-15T14:02:26.123Z".to_string(),
        }
    }

    #[test]
    fn invoice_shows_amount_breakdown() {
        let html = render_invoice(&sample_order());
        assert!(html.contains("Invoice #ORD-2024-0001"));
        // subtotal 100, derived tax/shipping 20.00, total 120
        assert!(html.contains("<td>₹100</td><td>1</td><td>₹100</td>"));
        assert!(html.contains("<strong>Tax/Shipping</strong></td><td>₹20.00</td>"));
        assert!(html.contains("<strong>Total</strong></td><td>₹120</td>"));
        assert!(html.contains("Mar 15, 2024"));
        assert!(html.contains("Payment ID:</strong> pay_123"));
        assert!(html.contains("14 Rose Lane"));
    }

    #[test]
    fn missing_address_renders_fallback() {
        let mut order = sample_order();
        order.delivery_address = None;
        order.payment_id = None;
        let html = render_invoice(&order);
        assert!(html.contains("No delivery address provided"));
        assert!(!html.contains("Payment ID:"));
    }

    #[test]
    fn record_text_is_escaped() {
        let mut order = sample_order();
        order.product_details.name = "<script>alert('x')</script>".to_string();
        order.payment_status = "PAID & SHIPPED".to_string();
        let html = render_invoice(&order);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("PAID &amp; SHIPPED"));
    }
}
