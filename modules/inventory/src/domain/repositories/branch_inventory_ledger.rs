// BranchInventoryLedger port - the three transactional stock primitives
// (spec 4.3): reserve, deduct, release. All three take a live `PgConnection`
// so they compose inside whatever transaction the caller (the order-commit
// use case, in catalog) already opened; the ledger never opens its own.

use async_trait::async_trait;
use identity::{ActorId, BranchId};
use rust_decimal::Decimal;
use sqlx::PgConnection;

use crate::domain::entities::TransactionReference;
use crate::domain::value_objects::ItemId;
use crate::InventoryError;

#[derive(Debug, Clone, Copy)]
pub struct LedgerRequirement {
    pub item_id: ItemId,
    pub qty: Decimal,
}

#[async_trait]
pub trait BranchInventoryLedger: Send + Sync {
    /// Holds stock without yet recording usage. Not wired into the v1
    /// order-commit path (spec 9: "the spec keeps the primitive but does
    /// not require it for v1").
    async fn reserve(
        &self,
        conn: &mut PgConnection,
        branch_id: BranchId,
        requirements: &[LedgerRequirement],
        reference: TransactionReference,
        actor_id: ActorId,
    ) -> Result<(), InventoryError>;

    /// Commit-critical deduction used by the order-commit transaction.
    async fn deduct(
        &self,
        conn: &mut PgConnection,
        branch_id: BranchId,
        requirements: &[LedgerRequirement],
        reference: TransactionReference,
        actor_id: ActorId,
    ) -> Result<(), InventoryError>;

    /// Adds stock back (e.g. to undo a reservation) and logs an `adjust` entry.
    async fn release(
        &self,
        conn: &mut PgConnection,
        branch_id: BranchId,
        requirements: &[LedgerRequirement],
        reference: TransactionReference,
        actor_id: ActorId,
    ) -> Result<(), InventoryError>;
}
