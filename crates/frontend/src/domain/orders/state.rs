use contracts::domain::order::Order;

/// Status written onto an order when the backend confirms a cancellation
pub const CANCELLED_STATUS: &str = "CANCELLED";

/// Cancellation flow selector.
///
/// At most one order moves through the flow at a time; the target id
/// travels with the state so the settle paths know which row to touch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CancelFlow {
    Idle,
    /// Confirmation dialog is open for this order
    ConfirmPending(String),
    /// Cancel request is in flight for this order
    Cancelling(String),
}

/// View-local state of the order management page.
///
/// A plain struct wrapped in one signal by the component. All transitions
/// are synchronous methods here, which keeps the flow testable without a
/// browser: the component only wires user events and network results to
/// these methods.
#[derive(Clone, Debug)]
pub struct OrdersState {
    /// Fetched collection, kept in server response order
    pub orders: Vec<Order>,
    /// Row whose detail panel is open; at most one
    pub expanded: Option<String>,
    pub cancel_flow: CancelFlow,
    /// Transient "Processing..." marker while a cancel request is in
    /// flight. An overlay keyed by order id rather than a flag on `Order`,
    /// so UI-only state never leaks into the domain record.
    pub processing: Option<String>,
    /// Last cancellation failure, shown as a dismissible banner above the
    /// list (the list itself stays visible, unlike fetch failures)
    pub cancel_error: Option<String>,
}

impl OrdersState {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            expanded: None,
            cancel_flow: CancelFlow::Idle,
            processing: None,
            cancel_error: None,
        }
    }

    /// Replace the collection with the mount-time fetch result, verbatim
    pub fn populate(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    pub fn is_expanded(&self, order_id: &str) -> bool {
        self.expanded.as_deref() == Some(order_id)
    }

    /// Expand the given row, collapsing whatever was expanded before;
    /// expanding the already-expanded row collapses it.
    pub fn toggle_expanded(&mut self, order_id: &str) {
        if self.is_expanded(order_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(order_id.to_string());
        }
    }

    pub fn is_processing(&self, order_id: &str) -> bool {
        self.processing.as_deref() == Some(order_id)
    }

    pub fn confirm_dialog_open(&self) -> bool {
        matches!(self.cancel_flow, CancelFlow::ConfirmPending(_))
    }

    /// Whether the cancel action is offered for this order
    pub fn can_cancel(&self, order: &Order) -> bool {
        order.payment_status != CANCELLED_STATUS && !self.is_processing(&order.id)
    }

    /// Idle -> ConfirmPending. Refused for already-cancelled orders and
    /// while another cancellation is underway.
    pub fn request_cancel(&mut self, order_id: &str) {
        if self.cancel_flow != CancelFlow::Idle {
            return;
        }
        let cancellable = self
            .orders
            .iter()
            .any(|o| o.id == order_id && self.can_cancel(o));
        if cancellable {
            self.cancel_flow = CancelFlow::ConfirmPending(order_id.to_string());
        }
    }

    /// ConfirmPending -> Idle, no mutation
    pub fn decline_cancel(&mut self) {
        if let CancelFlow::ConfirmPending(_) = self.cancel_flow {
            self.cancel_flow = CancelFlow::Idle;
        }
    }

    /// ConfirmPending -> Cancelling. Marks the target as processing and
    /// returns its id so the caller can issue the remote request.
    pub fn confirm_cancel(&mut self) -> Option<String> {
        let CancelFlow::ConfirmPending(id) = self.cancel_flow.clone() else {
            return None;
        };
        self.cancel_flow = CancelFlow::Cancelling(id.clone());
        self.processing = Some(id.clone());
        self.cancel_error = None;
        Some(id)
    }

    /// Cancelling -> Idle after a confirmed cancellation: the target's
    /// status becomes CANCELLED, nothing else on the record changes.
    pub fn settle_cancel_success(&mut self) {
        if let CancelFlow::Cancelling(id) = self.cancel_flow.clone() {
            if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
                order.payment_status = CANCELLED_STATUS.to_string();
            }
            self.processing = None;
            self.cancel_flow = CancelFlow::Idle;
        }
    }

    /// Cancelling -> Idle after a failed cancellation: roll back the
    /// processing marker, leave the status untouched, surface the error.
    pub fn settle_cancel_failure(&mut self, message: String) {
        if let CancelFlow::Cancelling(_) = self.cancel_flow {
            self.processing = None;
            self.cancel_flow = CancelFlow::Idle;
            self.cancel_error = Some(message);
        }
    }

    pub fn dismiss_cancel_error(&mut self) {
        self.cancel_error = None;
    }
}

impl Default for OrdersState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::order::OrderProductDetails;

    fn order(id: &str, status: &str) -> Order {
        Order {
            id: id.to_string(),
            order_id: format!("ORD-{}", id),
            user_id: "u1".to_string(),
            product_id: "p1".to_string(),
            product_details: OrderProductDetails {
                name: "Linen Shirt".to_string(),
                image: vec![],
            },
            payment_id: None,
            payment_status: status.to_string(),
            delivery_address: None,
            sub_total_amt: 100.0,
            total_amt: 120.0,
            created_at: "2024-03-15T14:02:26.123Z".to_string(),
            updated_at: "2024-03-15T14:02:26.123Z".to_string(),
        }
    }

    fn state_with(orders: Vec<Order>) -> OrdersState {
        let mut state = OrdersState::new();
        state.populate(orders);
        state
    }

    #[test]
    fn expansion_is_exclusive_and_idempotent() {
        let mut state = state_with(vec![order("a", "PAID"), order("b", "PAID")]);

        state.toggle_expanded("a");
        assert!(state.is_expanded("a"));

        // expanding b collapses a
        state.toggle_expanded("b");
        assert!(state.is_expanded("b"));
        assert!(!state.is_expanded("a"));

        // toggling the expanded row collapses it; toggling again re-expands
        state.toggle_expanded("b");
        assert_eq!(state.expanded, None);
        state.toggle_expanded("b");
        state.toggle_expanded("b");
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn cancel_happy_path() {
        let mut state = state_with(vec![order("a", "PAID"), order("b", "PAID")]);

        state.request_cancel("a");
        assert!(state.confirm_dialog_open());
        assert_eq!(state.processing, None);
        assert_eq!(state.orders[0].payment_status, "PAID");

        let target = state.confirm_cancel();
        assert_eq!(target.as_deref(), Some("a"));
        assert!(state.is_processing("a"));
        assert!(!state.confirm_dialog_open());

        state.settle_cancel_success();
        assert_eq!(state.orders[0].payment_status, CANCELLED_STATUS);
        assert_eq!(state.orders[1].payment_status, "PAID");
        assert_eq!(state.processing, None);
        assert_eq!(state.cancel_flow, CancelFlow::Idle);
        assert_eq!(state.cancel_error, None);
    }

    #[test]
    fn cancel_failure_rolls_back() {
        let mut state = state_with(vec![order("a", "CASH ON DELIVERY")]);

        state.request_cancel("a");
        state.confirm_cancel();
        state.settle_cancel_failure("Error cancelling order: boom".to_string());

        assert_eq!(state.orders[0].payment_status, "CASH ON DELIVERY");
        assert_eq!(state.processing, None);
        assert_eq!(state.cancel_flow, CancelFlow::Idle);
        assert_eq!(
            state.cancel_error.as_deref(),
            Some("Error cancelling order: boom")
        );
    }

    #[test]
    fn decline_leaves_everything_untouched() {
        let mut state = state_with(vec![order("a", "PAID")]);

        state.request_cancel("a");
        state.decline_cancel();

        assert_eq!(state.cancel_flow, CancelFlow::Idle);
        assert_eq!(state.processing, None);
        assert_eq!(state.orders[0].payment_status, "PAID");
        // declining means confirm_cancel has no target anymore
        assert_eq!(state.confirm_cancel(), None);
    }

    #[test]
    fn cancelled_orders_cannot_reenter_the_flow() {
        let mut state = state_with(vec![order("a", "CANCELLED")]);

        assert!(!state.can_cancel(&state.orders[0].clone()));
        state.request_cancel("a");
        assert_eq!(state.cancel_flow, CancelFlow::Idle);
    }

    #[test]
    fn flow_is_serialized_across_orders() {
        let mut state = state_with(vec![order("a", "PAID"), order("b", "PAID")]);

        state.request_cancel("a");
        // a second request while the dialog is open is ignored
        state.request_cancel("b");
        assert_eq!(
            state.cancel_flow,
            CancelFlow::ConfirmPending("a".to_string())
        );

        state.confirm_cancel();
        // and so is one while the request is in flight
        state.request_cancel("b");
        assert_eq!(state.cancel_flow, CancelFlow::Cancelling("a".to_string()));

        // the processing overlay holds at most one id by construction
        assert!(state.is_processing("a"));
        assert!(!state.is_processing("b"));
    }

    #[test]
    fn repeated_dialog_cycles_leave_no_residue() {
        let mut state = state_with(vec![order("a", "PAID")]);

        for _ in 0..3 {
            state.request_cancel("a");
            assert!(state.confirm_dialog_open());
            state.decline_cancel();
            assert_eq!(state.cancel_flow, CancelFlow::Idle);
            // a stray dismissal from an earlier dialog is a no-op
            state.decline_cancel();
            assert_eq!(state.cancel_flow, CancelFlow::Idle);
        }

        assert_eq!(state.orders[0].payment_status, "PAID");
        assert_eq!(state.processing, None);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut state = state_with(vec![order("a", "PAID")]);
        state.request_cancel("missing");
        assert_eq!(state.cancel_flow, CancelFlow::Idle);
    }
}
