//! Price presentation helpers for the product card.

/// Selling price after applying a percentage discount.
/// A zero (or negative) discount leaves the list price untouched.
pub fn price_with_discount(price: f64, discount: f64) -> f64 {
    if discount <= 0.0 {
        return price;
    }
    price * (100.0 - discount) / 100.0
}

/// Format an amount as Indian rupees with en-IN digit grouping:
/// the last three digits form one group, everything above groups by two.
/// Example: 123456.5 -> "₹1,23,456.50"
pub fn display_price_in_rupees(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();
    let mut whole = amount.trunc() as u64;
    let mut fraction = (amount.fract() * 100.0).round() as u64;
    if fraction >= 100 {
        whole += 1;
        fraction = 0;
    }

    format!(
        "{}₹{}.{:02}",
        if negative { "-" } else { "" },
        group_indian(&whole.to_string()),
        fraction
    )
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        parts.push(&head[i - 2..i]);
        i -= 2;
    }
    parts.push(&head[..i]);
    parts.reverse();

    format!("{},{}", parts.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_discount_keeps_list_price() {
        assert_eq!(price_with_discount(250.0, 0.0), 250.0);
        assert_eq!(price_with_discount(99.5, 0.0), 99.5);
    }

    #[test]
    fn discount_formula() {
        assert_eq!(price_with_discount(200.0, 10.0), 180.0);
        assert_eq!(price_with_discount(100.0, 25.0), 75.0);
        assert_eq!(price_with_discount(100.0, 100.0), 0.0);
    }

    #[test]
    fn rupee_formatting_uses_indian_grouping() {
        assert_eq!(display_price_in_rupees(0.0), "₹0.00");
        assert_eq!(display_price_in_rupees(100.0), "₹100.00");
        assert_eq!(display_price_in_rupees(1234.0), "₹1,234.00");
        assert_eq!(display_price_in_rupees(123456.5), "₹1,23,456.50");
        assert_eq!(display_price_in_rupees(12345678.0), "₹1,23,45,678.00");
    }

    #[test]
    fn rupee_formatting_rounds_fractions() {
        assert_eq!(display_price_in_rupees(99.999), "₹100.00");
        assert_eq!(display_price_in_rupees(10.006), "₹10.01");
    }
}
