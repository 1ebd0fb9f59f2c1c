// PostgreSQL BranchInventoryLedger implementation (spec 4.3).
//
// Each primitive does at most: one bulk item-type lookup, one bulk stock
// read, one bulk `$inc`-style write, one bulk ledger insert. Never N+1.

use async_trait::async_trait;
use identity::{ActorId, BranchId};
use rust_decimal::Decimal;
use sqlx::PgConnection;
use std::collections::HashMap;

use crate::domain::entities::TransactionReference;
use crate::domain::repositories::{BranchInventoryLedger, LedgerRequirement};
use crate::domain::value_objects::{ItemId, ItemType, TransactionId, TransactionType};
use crate::error::ShortItem;
use crate::InventoryError;

pub struct PgBranchInventoryLedger;

impl PgBranchInventoryLedger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgBranchInventoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(sqlx::FromRow)]
struct ItemTypeRow {
    id: uuid::Uuid,
    item_type: String,
}

#[derive(sqlx::FromRow)]
struct StockRow {
    item_id: uuid::Uuid,
    on_hand_qty: Decimal,
    cost_per_unit: Decimal,
}

/// Filters out `service`-typed items (spec 4.3: silently skipped, no stock
/// row, no ledger entry) and returns the stocked subset with requested qty.
async fn stocked_requirements(
    conn: &mut PgConnection,
    requirements: &[LedgerRequirement],
) -> Result<Vec<LedgerRequirement>, InventoryError> {
    let ids: Vec<uuid::Uuid> = requirements.iter().map(|r| r.item_id.into_uuid()).collect();

    let type_rows = sqlx::query_as::<_, ItemTypeRow>("SELECT id, item_type FROM inventory_items WHERE id = ANY($1)")
        .bind(&ids)
        .fetch_all(&mut *conn)
        .await?;

    let types: HashMap<uuid::Uuid, ItemType> = type_rows
        .into_iter()
        .map(|row| Ok((row.id, row.item_type.parse::<ItemType>()?)))
        .collect::<Result<_, InventoryError>>()?;

    Ok(requirements
        .iter()
        .copied()
        .filter(|r| !matches!(types.get(&r.item_id.into_uuid()), Some(ItemType::Service)))
        .collect())
}

async fn load_stock(
    conn: &mut PgConnection,
    branch_id: BranchId,
    requirements: &[LedgerRequirement],
) -> Result<HashMap<uuid::Uuid, StockRow>, InventoryError> {
    let ids: Vec<uuid::Uuid> = requirements.iter().map(|r| r.item_id.into_uuid()).collect();

    let rows = sqlx::query_as::<_, StockRow>(
        "SELECT item_id, on_hand_qty, cost_per_unit FROM branch_inventories WHERE branch_id = $1 AND item_id = ANY($2)",
    )
    .bind(branch_id.into_uuid())
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    let by_item: HashMap<uuid::Uuid, StockRow> = rows.into_iter().map(|row| (row.item_id, row)).collect();

    for req in requirements {
        if !by_item.contains_key(&req.item_id.into_uuid()) {
            return Err(InventoryError::IngredientNotStockedAtBranch {
                item_id: req.item_id.into_uuid(),
            });
        }
    }

    Ok(by_item)
}

async fn apply_delta(
    conn: &mut PgConnection,
    branch_id: BranchId,
    requirements: &[LedgerRequirement],
    stock: &HashMap<uuid::Uuid, StockRow>,
    signed: impl Fn(Decimal) -> Decimal,
    transaction_type: TransactionType,
    reference: &TransactionReference,
    actor_id: ActorId,
) -> Result<(), InventoryError> {
    if requirements.is_empty() {
        return Ok(());
    }

    let item_ids: Vec<uuid::Uuid> = requirements.iter().map(|r| r.item_id.into_uuid()).collect();
    let deltas: Vec<Decimal> = requirements.iter().map(|r| signed(r.qty)).collect();

    sqlx::query(
        r#"
        UPDATE branch_inventories AS bi
        SET on_hand_qty = bi.on_hand_qty + delta.amount
        FROM UNNEST($2::uuid[], $3::numeric[]) AS delta(item_id, amount)
        WHERE bi.branch_id = $1 AND bi.item_id = delta.item_id
        "#,
    )
    .bind(branch_id.into_uuid())
    .bind(&item_ids)
    .bind(&deltas)
    .execute(&mut *conn)
    .await?;

    let txn_ids: Vec<uuid::Uuid> = requirements.iter().map(|_| TransactionId::new().into_uuid()).collect();
    let txn_types: Vec<String> = requirements.iter().map(|_| transaction_type.to_string()).collect();
    let unit_costs: Vec<Decimal> = requirements
        .iter()
        .map(|r| stock.get(&r.item_id.into_uuid()).map(|s| s.cost_per_unit).unwrap_or_default())
        .collect();
    let order_ids: Vec<Option<uuid::Uuid>> = requirements.iter().map(|_| reference.order_id).collect();
    let notes: Vec<Option<String>> = requirements.iter().map(|_| reference.note.clone()).collect();
    let actor_ids: Vec<uuid::Uuid> = requirements.iter().map(|_| actor_id.into_uuid()).collect();

    sqlx::query(
        r#"
        INSERT INTO inventory_transactions
            (id, branch_id, item_id, transaction_type, quantity, unit_cost, order_id, note, actor_id, created_at)
        SELECT * FROM UNNEST(
            $1::uuid[], $2::uuid[], $3::uuid[], $4::text[], $5::numeric[], $6::numeric[],
            $7::uuid[], $8::text[], $9::uuid[], $10::timestamptz[]
        )
        "#,
    )
    .bind(&txn_ids)
    .bind(vec![branch_id.into_uuid(); requirements.len()])
    .bind(&item_ids)
    .bind(&txn_types)
    .bind(&deltas)
    .bind(&unit_costs)
    .bind(&order_ids)
    .bind(&notes)
    .bind(&actor_ids)
    .bind(vec![chrono::Utc::now(); requirements.len()])
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[async_trait]
impl BranchInventoryLedger for PgBranchInventoryLedger {
    async fn reserve(
        &self,
        conn: &mut PgConnection,
        branch_id: BranchId,
        requirements: &[LedgerRequirement],
        reference: TransactionReference,
        actor_id: ActorId,
    ) -> Result<(), InventoryError> {
        let stocked = stocked_requirements(conn, requirements).await?;
        let stock = load_stock(conn, branch_id, &stocked).await?;

        let short: Vec<ShortItem> = stocked
            .iter()
            .filter_map(|r| {
                let row = stock.get(&r.item_id.into_uuid())?;
                (row.on_hand_qty < r.qty).then(|| ShortItem {
                    item_id: r.item_id.into_uuid(),
                    needed: r.qty,
                    on_hand: row.on_hand_qty,
                })
            })
            .collect();
        if !short.is_empty() {
            return Err(InventoryError::InsufficientStock { items: short });
        }

        // Holds stock without mutating on_hand_qty; logs a usage-typed entry
        // with zero quantity delta so the reservation leaves a paper trail.
        apply_delta(
            conn,
            branch_id,
            &stocked,
            &stock,
            |_qty| Decimal::ZERO,
            TransactionType::Usage,
            &reference,
            actor_id,
        )
        .await
    }

    async fn deduct(
        &self,
        conn: &mut PgConnection,
        branch_id: BranchId,
        requirements: &[LedgerRequirement],
        reference: TransactionReference,
        actor_id: ActorId,
    ) -> Result<(), InventoryError> {
        let stocked = stocked_requirements(conn, requirements).await?;
        let stock = load_stock(conn, branch_id, &stocked).await?;

        let short: Vec<ShortItem> = stocked
            .iter()
            .filter_map(|r| {
                let row = stock.get(&r.item_id.into_uuid())?;
                (row.on_hand_qty < r.qty).then(|| ShortItem {
                    item_id: r.item_id.into_uuid(),
                    needed: r.qty,
                    on_hand: row.on_hand_qty,
                })
            })
            .collect();
        if !short.is_empty() {
            return Err(InventoryError::InsufficientStock { items: short });
        }

        apply_delta(
            conn,
            branch_id,
            &stocked,
            &stock,
            |qty| -qty,
            TransactionType::Usage,
            &reference,
            actor_id,
        )
        .await
    }

    async fn release(
        &self,
        conn: &mut PgConnection,
        branch_id: BranchId,
        requirements: &[LedgerRequirement],
        reference: TransactionReference,
        actor_id: ActorId,
    ) -> Result<(), InventoryError> {
        let stocked = stocked_requirements(conn, requirements).await?;
        let stock = load_stock(conn, branch_id, &stocked).await?;

        apply_delta(
            conn,
            branch_id,
            &stocked,
            &stock,
            |qty| qty,
            TransactionType::Adjust,
            &reference,
            actor_id,
        )
        .await
    }
}
