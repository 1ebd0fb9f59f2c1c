// CommitOrderCommand - the order-commit transaction's input contract
// (spec 4.6 "Input"). Branch, terminal and till session are all optional;
// the use case's preflight resolves each from context when omitted.

use identity::BranchId;
use pos_core::TerminalId;
use rust_decimal::Decimal;
use till::TillSessionId;

use crate::domain::value_objects::{MenuItemId, MenuVariationId, OrderPaymentMethod};

#[derive(Debug, Clone)]
pub struct CommitOrderLine {
    pub menu_item_id: MenuItemId,
    pub quantity: Decimal,
    pub variation_ids: Vec<MenuVariationId>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommitOrderCommand {
    pub branch_id: Option<BranchId>,
    pub terminal_id: Option<TerminalId>,
    pub till_session_id: Option<TillSessionId>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<CommitOrderLine>,
    pub payment_method: OrderPaymentMethod,
    pub amount_paid: Decimal,
    /// Caller-supplied idempotency key (spec 4.6 "Idempotency"). Without
    /// one, replay is at-least-once and may produce duplicate orders.
    pub client_op_id: Option<String>,
}
