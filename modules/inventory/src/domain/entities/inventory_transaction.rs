// InventoryTransaction entity - an append-only ledger entry. Never mutated.

use chrono::{DateTime, Utc};
use identity::{ActorId, BranchId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ItemId, TransactionId, TransactionType};

/// Structured reference a ledger entry points back at. At most one of these
/// is meaningfully populated per entry, but all are carried so the row shape
/// is stable across transaction types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionReference {
    pub order_id: Option<uuid::Uuid>,
    pub recipe_id: Option<uuid::Uuid>,
    pub from_branch: Option<BranchId>,
    pub to_branch: Option<BranchId>,
    pub note: Option<String>,
}

impl TransactionReference {
    pub fn for_order(order_id: uuid::Uuid) -> Self {
        Self {
            order_id: Some(order_id),
            ..Default::default()
        }
    }

    pub fn with_note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTransaction {
    id: TransactionId,
    branch_id: BranchId,
    item_id: ItemId,
    transaction_type: TransactionType,
    /// Signed quantity in the item's base unit: positive increases onHandQty.
    quantity: Decimal,
    unit_cost: Decimal,
    reference: TransactionReference,
    actor_id: ActorId,
    created_at: DateTime<Utc>,
}

impl InventoryTransaction {
    pub fn new(
        branch_id: BranchId,
        item_id: ItemId,
        transaction_type: TransactionType,
        quantity: Decimal,
        unit_cost: Decimal,
        reference: TransactionReference,
        actor_id: ActorId,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            branch_id,
            item_id,
            transaction_type,
            quantity,
            unit_cost,
            reference,
            actor_id,
            created_at: Utc::now(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TransactionId,
        branch_id: BranchId,
        item_id: ItemId,
        transaction_type: TransactionType,
        quantity: Decimal,
        unit_cost: Decimal,
        reference: TransactionReference,
        actor_id: ActorId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            branch_id,
            item_id,
            transaction_type,
            quantity,
            unit_cost,
            reference,
            actor_id,
            created_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn branch_id(&self) -> BranchId {
        self.branch_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    pub fn reference(&self) -> &TransactionReference {
        &self.reference
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
