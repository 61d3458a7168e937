/// Map a backend payment status to a badge variant.
///
/// The status field is free text on the wire, so this has to be total:
/// anything unrecognized falls through to the neutral style.
pub fn status_badge_variant(status: &str) -> &'static str {
    match status {
        "PAID" => "success",
        "CASH ON DELIVERY" => "warning",
        "CANCELLED" => "error",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses() {
        assert_eq!(status_badge_variant("PAID"), "success");
        assert_eq!(status_badge_variant("CASH ON DELIVERY"), "warning");
        assert_eq!(status_badge_variant("CANCELLED"), "error");
    }

    #[test]
    fn unknown_statuses_are_neutral() {
        assert_eq!(status_badge_variant("REFUND_PENDING"), "neutral");
        assert_eq!(status_badge_variant(""), "neutral");
        assert_eq!(status_badge_variant("paid"), "neutral");
    }
}
