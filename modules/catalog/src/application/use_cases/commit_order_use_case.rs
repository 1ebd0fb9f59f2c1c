// CommitOrderUseCase - the order-commit transaction (spec 4.6, the most
// important operation this crate exposes).
//
// Preflight resolves and validates everything outside any database
// transaction; commit opens exactly one and either all of order-number
// allocation, order insertion, idempotency recording, and inventory
// deduction land, or none do. Postflight event publication is best-effort
// and never un-commits a successful order.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tenancy::TenantHandle;

use events::{DomainEvent, EventPublisher, OrderCommitted};
use identity::{Action, ActorId, ActorRepository, Authorizer, BranchId, Scope};
use inventory::{
    BranchInventoryLedger, LedgerRequirement, Recipe, RecipeGraph, RecipeId, RecipeRepository, RecipeVariantId,
    RecipeVariantRepository, TransactionReference,
};
use pos_core::{BranchRepository, PosTerminalRepository, OrderNumberGenerator, TaxMode};
use till::TillSessionRepository;

use crate::application::dtos::{CommitOrderCommand, CommitOrderOutcome};
use crate::domain::entities::{Order, OrderLine, OrderPayment, OrderTotals, PricingSnapshot, SelectedVariationSnapshot};
use crate::domain::repositories::{BranchMenuRepository, IdempotencyRecordRepository, MenuItemRepository, MenuVariationRepository, OrderRepository};
use crate::domain::services::PricingEngine;
use crate::domain::value_objects::{MenuVariationId, OrderStatus};
use crate::CatalogError;

/// An in-memory view over a bulk-loaded set of recipes, built fresh for
/// each commit (spec 4.1: the graph is a per-traversal lookup, never a
/// process-wide cache).
struct LoadedRecipeGraph(HashMap<RecipeId, Recipe>);

impl RecipeGraph for LoadedRecipeGraph {
    fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.0.get(&id)
    }
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Placed => "placed",
        OrderStatus::Paid => "paid",
        OrderStatus::Void => "void",
        OrderStatus::Refunded => "refunded",
    }
}

pub struct CommitOrderUseCase {
    actor_repo: Arc<dyn ActorRepository>,
    authorizer: Arc<dyn Authorizer>,
    branch_repo: Arc<dyn BranchRepository>,
    terminal_repo: Arc<dyn PosTerminalRepository>,
    till_repo: Arc<dyn TillSessionRepository>,
    menu_item_repo: Arc<dyn MenuItemRepository>,
    branch_menu_repo: Arc<dyn BranchMenuRepository>,
    menu_variation_repo: Arc<dyn MenuVariationRepository>,
    recipe_repo: Arc<dyn RecipeRepository>,
    recipe_variant_repo: Arc<dyn RecipeVariantRepository>,
    ledger: Arc<dyn BranchInventoryLedger>,
    order_number_generator: Arc<dyn OrderNumberGenerator>,
    order_repo: Arc<dyn OrderRepository>,
    idempotency_repo: Arc<dyn IdempotencyRecordRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CommitOrderUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        actor_repo: Arc<dyn ActorRepository>,
        authorizer: Arc<dyn Authorizer>,
        branch_repo: Arc<dyn BranchRepository>,
        terminal_repo: Arc<dyn PosTerminalRepository>,
        till_repo: Arc<dyn TillSessionRepository>,
        menu_item_repo: Arc<dyn MenuItemRepository>,
        branch_menu_repo: Arc<dyn BranchMenuRepository>,
        menu_variation_repo: Arc<dyn MenuVariationRepository>,
        recipe_repo: Arc<dyn RecipeRepository>,
        recipe_variant_repo: Arc<dyn RecipeVariantRepository>,
        ledger: Arc<dyn BranchInventoryLedger>,
        order_number_generator: Arc<dyn OrderNumberGenerator>,
        order_repo: Arc<dyn OrderRepository>,
        idempotency_repo: Arc<dyn IdempotencyRecordRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            actor_repo,
            authorizer,
            branch_repo,
            terminal_repo,
            till_repo,
            menu_item_repo,
            branch_menu_repo,
            menu_variation_repo,
            recipe_repo,
            recipe_variant_repo,
            ledger,
            order_number_generator,
            order_repo,
            idempotency_repo,
            event_publisher,
        }
    }

    pub async fn execute(
        &self,
        tenant: &TenantHandle,
        cmd: CommitOrderCommand,
        actor_id: ActorId,
        // Branch bound to the caller's authenticated session (e.g. the scope
        // carried on their token), consulted when the command omits an
        // explicit `branch_id` (spec 4.6 step 2).
        session_branch_id: Option<BranchId>,
    ) -> Result<CommitOrderOutcome, CatalogError> {
        let tenant_id = tenant.tenant_id();

        if let Some(client_op_id) = cmd.client_op_id.as_deref() {
            if let Some(existing_order_id) = self.idempotency_repo.find_order_id(tenant_id, client_op_id).await? {
                let order = self
                    .order_repo
                    .find_by_id(tenant_id, existing_order_id)
                    .await?
                    .ok_or(CatalogError::OrderNotFound(existing_order_id.into_uuid()))?;
                return Ok(CommitOrderOutcome {
                    order_id: order.id(),
                    order_number: order.order_number().to_string(),
                    status: order.status(),
                    totals: order.totals(),
                    idempotent_replay: true,
                });
            }
        }

        // --- Preflight (spec 4.6 steps 1-7), no database transaction open ---

        let actor = self
            .actor_repo
            .find_by_id(tenant, actor_id)
            .await?
            .ok_or_else(|| CatalogError::NotStaff(actor_id.into_uuid()))?;
        if !actor.status().is_active() {
            return Err(CatalogError::AccountSuspended(actor_id.into_uuid()));
        }
        if !actor.is_staff() {
            return Err(CatalogError::NotStaff(actor_id.into_uuid()));
        }

        let effective_branch_id = cmd
            .branch_id
            .or(session_branch_id)
            .or_else(|| actor.single_branch())
            .ok_or(CatalogError::BranchRequired)?;

        if !self
            .authorizer
            .may(&actor, Action::PosOrdersCreate, Some(Scope::Branch(effective_branch_id)))
        {
            return Err(CatalogError::NotAuthorized);
        }

        let branch = self
            .branch_repo
            .find_by_id(tenant, effective_branch_id)
            .await?
            .ok_or(CatalogError::BranchNotFound(effective_branch_id.into_uuid()))?;

        let terminal = match cmd.terminal_id {
            Some(terminal_id) => {
                let terminal = self
                    .terminal_repo
                    .find_by_id(tenant, terminal_id)
                    .await?
                    .ok_or(CatalogError::TerminalNotFound(terminal_id.into_uuid()))?;
                if terminal.branch_id() != effective_branch_id {
                    return Err(CatalogError::TerminalBranchMismatch {
                        terminal_id: terminal_id.into_uuid(),
                        branch_id: effective_branch_id.into_uuid(),
                    });
                }
                if !terminal.status().is_active() {
                    return Err(CatalogError::TerminalInactive(terminal_id.into_uuid()));
                }
                Some(terminal)
            }
            None => None,
        };

        let shift = match cmd.till_session_id {
            Some(till_session_id) => self
                .till_repo
                .find_by_id(tenant, till_session_id)
                .await?
                .ok_or(CatalogError::NoOpenTill)?,
            None => match &terminal {
                Some(terminal) => self
                    .till_repo
                    .find_open_by_terminal(tenant, effective_branch_id, Some(terminal.id()))
                    .await?
                    .ok_or(CatalogError::NoOpenTill)?,
                None => self
                    .till_repo
                    .find_open_by_staff(tenant, actor_id)
                    .await?
                    .ok_or(CatalogError::NoOpenTill)?,
            },
        };
        if !shift.status().is_open() {
            return Err(CatalogError::TillClosed);
        }

        // Resolve every line's MenuItem/BranchMenu up front, in bulk where
        // the repositories allow it, to keep the commit path free of N+1s.
        let mut resolved_lines = Vec::with_capacity(cmd.items.len());
        let mut variation_ids: HashSet<MenuVariationId> = HashSet::new();
        for item in &cmd.items {
            let menu_item = self
                .menu_item_repo
                .find_by_id(tenant_id, item.menu_item_id)
                .await?
                .ok_or(CatalogError::MenuItemNotFound(item.menu_item_id.into_uuid()))?;
            if !menu_item.active() {
                return Err(CatalogError::MenuItemUnavailable(menu_item.id().into_uuid()));
            }

            let branch_menu = self
                .branch_menu_repo
                .find(tenant_id, effective_branch_id, menu_item.id())
                .await?
                .ok_or(CatalogError::BranchMenuNotFound {
                    branch_id: effective_branch_id.into_uuid(),
                    item_id: menu_item.id().into_uuid(),
                })?;
            if !branch_menu.available() {
                return Err(CatalogError::MenuItemUnavailable(menu_item.id().into_uuid()));
            }

            variation_ids.extend(item.variation_ids.iter().copied());
            resolved_lines.push((item.clone(), menu_item, branch_menu));
        }

        let variation_ids: Vec<MenuVariationId> = variation_ids.into_iter().collect();
        let variations = self.menu_variation_repo.find_by_ids(tenant_id, &variation_ids).await?;
        let variation_by_id: HashMap<MenuVariationId, _> = variations.into_iter().map(|v| (v.id(), v)).collect();

        let recipe_variant_ids: Vec<RecipeVariantId> = variation_by_id
            .values()
            .filter_map(|v| v.recipe_variant_id())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let recipe_variants = self
            .recipe_variant_repo
            .find_by_ids(tenant_id, &recipe_variant_ids)
            .await?
            .into_iter()
            .map(|v| (v.id(), v))
            .collect::<HashMap<_, _>>();

        let recipe_roots: Vec<RecipeId> = resolved_lines
            .iter()
            .filter_map(|(_, menu_item, _)| menu_item.recipe_id())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let recipe_graph = LoadedRecipeGraph(
            self.recipe_repo
                .load_graph(tenant_id, &recipe_roots)
                .await?
                .into_iter()
                .map(|r| (r.id(), r))
                .collect(),
        );

        let mut order_lines: Vec<OrderLine> = Vec::with_capacity(resolved_lines.len());
        let mut aggregated_requirements: HashMap<inventory::ItemId, Decimal> = HashMap::new();

        for (item, menu_item, branch_menu) in &resolved_lines {
            let selected = item
                .variation_ids
                .iter()
                .map(|id| {
                    variation_by_id
                        .get(id)
                        .cloned()
                        .ok_or(CatalogError::MenuVariationNotFound(id.into_uuid()))
                })
                .collect::<Result<Vec<_>, CatalogError>>()?;

            let priced = PricingEngine::price_line(
                menu_item,
                branch_menu,
                item.quantity,
                &selected,
                &recipe_variants,
                &recipe_graph,
            )?;

            for leaf in &priced.requirements {
                *aggregated_requirements.entry(leaf.item_id).or_insert(Decimal::ZERO) += leaf.qty_in_base_units;
            }

            order_lines.push(OrderLine {
                menu_item_id: menu_item.id(),
                recipe_id_snapshot: menu_item.recipe_id(),
                selected_variations: selected
                    .iter()
                    .map(|v| SelectedVariationSnapshot {
                        menu_variation_id: v.id(),
                        recipe_variant_id: v.recipe_variant_id(),
                        name: v.name().to_string(),
                        variant_type: v.variant_type(),
                        price_delta: v.price_delta(),
                        size_multiplier: v.size_multiplier(),
                        calculated_cost: v.calculated_cost(),
                    })
                    .collect(),
                name_snapshot: branch_menu.name_snapshot().to_string(),
                code_snapshot: branch_menu.code_snapshot().to_string(),
                category_id_snapshot: branch_menu.category_id_snapshot(),
                quantity: item.quantity,
                unit_price: priced.unit_price,
                line_total: priced.unit_price * item.quantity,
                calculated_cost: priced.unit_cost,
                price_includes_tax: menu_item.price_includes_tax(),
                notes: item.notes.clone(),
            });
        }

        let sub_total_raw: Decimal = order_lines.iter().map(|l| l.line_total).sum();
        let tax_rate = branch.tax_rate_for_method(&cmd.payment_method.to_string());
        let tax_total_raw = match branch.tax().mode {
            TaxMode::Exclusive => sub_total_raw * tax_rate / Decimal::ONE_HUNDRED,
            TaxMode::Inclusive => Decimal::ZERO,
        };
        let discount = Decimal::ZERO;

        let sub_total = round_money(sub_total_raw);
        let tax_total = round_money(tax_total_raw);
        let grand_total = sub_total + tax_total - discount;

        let totals = OrderTotals {
            sub_total,
            tax_total,
            discount,
            grand_total,
        };

        let change = if cmd.amount_paid >= grand_total {
            cmd.amount_paid - grand_total
        } else {
            Decimal::ZERO
        };
        let paid_at = (cmd.amount_paid >= grand_total).then(Utc::now);
        let payment = OrderPayment {
            method: cmd.payment_method,
            amount_paid: cmd.amount_paid,
            change,
            paid_at,
        };

        let pricing_snapshot = PricingSnapshot {
            currency: branch.currency().to_string(),
            price_includes_tax: matches!(branch.tax().mode, TaxMode::Inclusive),
            tax_mode: branch.tax().mode,
            tax_rate,
        };

        // --- Commit (spec 4.6 steps a-d), inside one datastore transaction ---

        let mut tx = tenant.pool().begin().await?;

        let order_number = self
            .order_number_generator
            .next(&mut tx, effective_branch_id, &branch.pos_config().order_prefix, Utc::now().date_naive())
            .await?;

        let order = Order::commit(
            tenant_id,
            order_number,
            effective_branch_id,
            terminal.as_ref().map(|t| t.id()),
            shift.id(),
            actor_id,
            order_lines,
            totals,
            payment,
            pricing_snapshot,
            cmd.customer_name.clone(),
            cmd.customer_phone.clone(),
            cmd.notes.clone(),
        );

        self.order_repo.insert(&mut tx, &order).await?;

        if let Some(client_op_id) = cmd.client_op_id.as_deref() {
            self.idempotency_repo.record(&mut tx, tenant_id, client_op_id, order.id()).await?;
        }

        let ledger_requirements: Vec<LedgerRequirement> = aggregated_requirements
            .into_iter()
            .map(|(item_id, qty)| LedgerRequirement { item_id, qty })
            .collect();
        if !ledger_requirements.is_empty() {
            self.ledger
                .deduct(
                    &mut tx,
                    effective_branch_id,
                    &ledger_requirements,
                    TransactionReference::for_order(order.id().into_uuid()),
                    actor_id,
                )
                .await?;
        }

        tx.commit().await?;

        // --- Postflight (spec 4.6): best-effort, never un-commits ---

        let event = DomainEvent::OrderCommitted(OrderCommitted {
            tenant_id: tenant_id.into_uuid(),
            branch_id: effective_branch_id.into_uuid(),
            order_id: order.id().into_uuid(),
            order_number: order.order_number().to_string(),
            till_session_id: Some(shift.id().into_uuid()),
            status: status_label(order.status()).to_string(),
            grand_total: order.totals().grand_total,
            currency: order.pricing_snapshot().currency.clone(),
            committed_at: order.updated_at(),
        });
        if let Err(err) = self.event_publisher.publish(event).await {
            tracing::warn!(error = %err, order_id = %order.id().into_uuid(), "failed to publish order.committed event");
        }

        Ok(CommitOrderOutcome {
            order_id: order.id(),
            order_number: order.order_number().to_string(),
            status: order.status(),
            totals: order.totals(),
            idempotent_replay: false,
        })
    }
}
