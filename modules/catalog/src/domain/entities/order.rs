// Order / OrderLine entities - the result of a committed order-commit
// transaction (spec 3, 4.6). An order is immutable after creation: every
// field below is captured once, at commit time, and the embedded lines
// carry *snapshots* (never references) of the menu item / variation data
// they were priced against, so later menu authoring never rewrites history.

use chrono::{DateTime, Utc};
use identity::{ActorId, BranchId};
use inventory::{RecipeId, RecipeVariantId, VariantType};
use pos_core::{TaxMode, TerminalId};
use rust_decimal::Decimal;
use till::TillSessionId;
use serde::{Deserialize, Serialize};
use tenancy::TenantId;

use crate::domain::value_objects::{MenuCategoryId, MenuItemId, MenuVariationId, OrderId, OrderPaymentMethod, OrderStatus};
use crate::CatalogError;

/// A copy of the selected variation's pricing/costing-relevant fields as
/// they stood at commit time (spec 4.6c).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedVariationSnapshot {
    pub menu_variation_id: MenuVariationId,
    pub recipe_variant_id: Option<RecipeVariantId>,
    pub name: String,
    pub variant_type: VariantType,
    pub price_delta: Decimal,
    pub size_multiplier: Decimal,
    pub calculated_cost: Decimal,
}

/// One embedded line of a committed order (spec 3's `OrderLine`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub recipe_id_snapshot: Option<RecipeId>,
    pub selected_variations: Vec<SelectedVariationSnapshot>,
    pub name_snapshot: String,
    pub code_snapshot: String,
    pub category_id_snapshot: Option<MenuCategoryId>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub line_total: Decimal,
    pub calculated_cost: Decimal,
    pub price_includes_tax: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderTotals {
    pub sub_total: Decimal,
    pub tax_total: Decimal,
    pub discount: Decimal,
    pub grand_total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayment {
    pub method: OrderPaymentMethod,
    pub amount_paid: Decimal,
    pub change: Decimal,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Tax posture in effect at commit time, captured so a later change to the
/// branch's tax configuration never rewrites a historical order's totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSnapshot {
    pub currency: String,
    pub price_includes_tax: bool,
    pub tax_mode: TaxMode,
    pub tax_rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    tenant_id: TenantId,
    order_number: String,
    branch_id: BranchId,
    terminal_id: Option<TerminalId>,
    till_session_id: TillSessionId,
    staff_id: ActorId,
    status: OrderStatus,
    lines: Vec<OrderLine>,
    totals: OrderTotals,
    payment: OrderPayment,
    pricing_snapshot: PricingSnapshot,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Assembles a freshly-committed order. Called only from within the
    /// order-commit transaction (spec 4.6c), after the order number has
    /// been allocated and the status/change have been computed.
    #[allow(clippy::too_many_arguments)]
    pub fn commit(
        tenant_id: TenantId,
        order_number: String,
        branch_id: BranchId,
        terminal_id: Option<TerminalId>,
        till_session_id: TillSessionId,
        staff_id: ActorId,
        lines: Vec<OrderLine>,
        totals: OrderTotals,
        payment: OrderPayment,
        pricing_snapshot: PricingSnapshot,
        customer_name: Option<String>,
        customer_phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        let status = OrderStatus::from_payment(payment.amount_paid, totals.grand_total);
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            tenant_id,
            order_number,
            branch_id,
            terminal_id,
            till_session_id,
            staff_id,
            status,
            lines,
            totals,
            payment,
            pricing_snapshot,
            customer_name,
            customer_phone,
            notes,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: OrderId,
        tenant_id: TenantId,
        order_number: String,
        branch_id: BranchId,
        terminal_id: Option<TerminalId>,
        till_session_id: TillSessionId,
        staff_id: ActorId,
        status: OrderStatus,
        lines: Vec<OrderLine>,
        totals: OrderTotals,
        payment: OrderPayment,
        pricing_snapshot: PricingSnapshot,
        customer_name: Option<String>,
        customer_phone: Option<String>,
        notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            order_number,
            branch_id,
            terminal_id,
            till_session_id,
            staff_id,
            status,
            lines,
            totals,
            payment,
            pricing_snapshot,
            customer_name,
            customer_phone,
            notes,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn branch_id(&self) -> BranchId {
        self.branch_id
    }

    pub fn terminal_id(&self) -> Option<TerminalId> {
        self.terminal_id
    }

    pub fn till_session_id(&self) -> TillSessionId {
        self.till_session_id
    }

    pub fn staff_id(&self) -> ActorId {
        self.staff_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn totals(&self) -> OrderTotals {
        self.totals
    }

    pub fn payment(&self) -> &OrderPayment {
        &self.payment
    }

    pub fn pricing_snapshot(&self) -> &PricingSnapshot {
        &self.pricing_snapshot
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    pub fn customer_phone(&self) -> Option<&str> {
        self.customer_phone.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Explicit status transition (spec 3: "subsequent status changes go
    /// through explicit transitions"); emitting the accompanying ledger
    /// entry is the caller's responsibility.
    pub fn void(&mut self) -> Result<(), CatalogError> {
        self.status.validate_void()?;
        self.status = OrderStatus::Void;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn refund(&mut self) -> Result<(), CatalogError> {
        self.status.validate_refund()?;
        self.status = OrderStatus::Refunded;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_totals() -> OrderTotals {
        OrderTotals {
            sub_total: dec!(17.00),
            tax_total: dec!(2.55),
            discount: dec!(0),
            grand_total: dec!(19.55),
        }
    }

    fn sample_pricing_snapshot() -> PricingSnapshot {
        PricingSnapshot {
            currency: "SAR".into(),
            price_includes_tax: false,
            tax_mode: TaxMode::Exclusive,
            tax_rate: dec!(15),
        }
    }

    #[test]
    fn commit_derives_paid_status_when_amount_paid_covers_grand_total() {
        let payment = OrderPayment {
            method: OrderPaymentMethod::Cash,
            amount_paid: dec!(20.00),
            change: dec!(0.45),
            paid_at: Some(Utc::now()),
        };
        let order = Order::commit(
            TenantId::new(),
            "DT-20260101-0001".into(),
            BranchId::new(),
            None,
            TillSessionId::new(),
            ActorId::new(),
            vec![],
            sample_totals(),
            payment,
            sample_pricing_snapshot(),
            None,
            None,
            None,
        );
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn commit_derives_placed_status_when_underpaid() {
        let payment = OrderPayment {
            method: OrderPaymentMethod::Cash,
            amount_paid: dec!(19.54),
            change: dec!(0),
            paid_at: None,
        };
        let order = Order::commit(
            TenantId::new(),
            "DT-20260101-0002".into(),
            BranchId::new(),
            None,
            TillSessionId::new(),
            ActorId::new(),
            vec![],
            sample_totals(),
            payment,
            sample_pricing_snapshot(),
            None,
            None,
            None,
        );
        assert_eq!(order.status(), OrderStatus::Placed);
    }

    #[test]
    fn void_then_refund_is_rejected() {
        let payment = OrderPayment {
            method: OrderPaymentMethod::Cash,
            amount_paid: dec!(20.00),
            change: dec!(0.45),
            paid_at: Some(Utc::now()),
        };
        let mut order = Order::commit(
            TenantId::new(),
            "DT-20260101-0003".into(),
            BranchId::new(),
            None,
            TillSessionId::new(),
            ActorId::new(),
            vec![],
            sample_totals(),
            payment,
            sample_pricing_snapshot(),
            None,
            None,
            None,
        );
        order.void().unwrap();
        assert!(matches!(order.refund(), Err(CatalogError::InvalidOrderStatusTransition)));
    }
}
