use anyhow::Result;
use identity::pin_hasher;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Postgres, Transaction};
use tenancy::{PgTenantRegistry, TenancyConfig, TenantRegistry};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

mod data;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    dotenvy::dotenv().ok();

    let config = TenancyConfig::from_env();
    let pin_pepper = std::env::var("PIN_PEPPER")
        .expect("PIN_PEPPER must be set")
        .into_bytes();

    info!("Connecting to the directory database...");
    let directory_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.directory_database_url)
        .await?;

    info!("Provisioning tenant '{}'...", data::TENANT_KEY);
    provision_tenant(&directory_pool, data::TENANT_KEY, data::TENANT_SCHEMA).await?;

    let registry = PgTenantRegistry::new(directory_pool, config);
    let tenant = registry.resolve(data::TENANT_KEY).await?;

    info!("Seeding demo data for tenant '{}'...", data::TENANT_KEY);
    let mut tx = tenant.pool().begin().await?;

    let branch_id = seed_branch(&mut tx).await?;
    info!("  Branch: {} ({})", data::BRANCH.name, data::BRANCH.code);

    let terminal_id = seed_terminal(&mut tx, branch_id).await?;
    info!("  Terminal: {}", data::TERMINAL.name);

    let manager_id = seed_staff(&mut tx, data::MANAGER.name).await?;
    seed_staff_branch_scope(&mut tx, manager_id, branch_id).await?;
    seed_pin_credential(&mut tx, manager_id, &pin_hasher::pin_key(&pin_pepper, data::MANAGER.pin)).await?;
    info!("  Staff: {} (manager)", data::MANAGER.name);

    let cashier_id = seed_staff(&mut tx, data::CASHIER.name).await?;
    seed_staff_branch_scope(&mut tx, cashier_id, branch_id).await?;
    seed_pin_credential(&mut tx, cashier_id, &pin_hasher::pin_key(&pin_pepper, data::CASHIER.pin)).await?;
    info!("  Staff: {} (cashier)", data::CASHIER.name);

    let dough_id = seed_inventory_item(&mut tx, &data::DOUGH).await?;
    seed_branch_inventory(&mut tx, branch_id, dough_id, &data::DOUGH).await?;
    info!("  Item: {}", data::DOUGH.name);

    let pepperoni_id = seed_inventory_item(&mut tx, &data::PEPPERONI).await?;
    seed_branch_inventory(&mut tx, branch_id, pepperoni_id, &data::PEPPERONI).await?;
    info!("  Item: {}", data::PEPPERONI.name);

    let category_id = seed_menu_category(&mut tx, data::MENU_CATEGORY_NAME).await?;
    info!("  Menu category: {}", data::MENU_CATEGORY_NAME);

    let recipe_id = seed_recipe(&mut tx, &data::PIZZA_BASE_RECIPE, dough_id, &data::DOUGH).await?;
    info!("  Recipe: {}", data::PIZZA_BASE_RECIPE.name);

    let large_variant_id = seed_size_recipe_variant(&mut tx, recipe_id, &data::LARGE).await?;
    info!("  Recipe variant: {}", data::LARGE.name);

    let pepperoni_variant_id =
        seed_topping_recipe_variant(&mut tx, recipe_id, &data::PEPPERONI_TOPPING, pepperoni_id, &data::PEPPERONI).await?;
    info!("  Recipe variant: {}", data::PEPPERONI_TOPPING.name);

    let menu_item_id = seed_menu_item(&mut tx, &data::PIZZA_MENU_ITEM, recipe_id, category_id).await?;
    info!("  Menu item: {}", data::PIZZA_MENU_ITEM.name);

    seed_size_menu_variation(&mut tx, menu_item_id, &data::LARGE, large_variant_id).await?;
    seed_topping_menu_variation(&mut tx, menu_item_id, &data::PEPPERONI_TOPPING, pepperoni_variant_id).await?;

    seed_branch_menu(&mut tx, tenant.tenant_id().into_uuid(), branch_id, menu_item_id, &data::PIZZA_MENU_ITEM, category_id)
        .await?;
    info!("  Branch menu entry published for {}", data::BRANCH.code);

    tx.commit().await?;

    info!("Seed completed successfully!");
    Ok(())
}

async fn provision_tenant(directory_pool: &sqlx::PgPool, tenant_key: &str, schema_name: &str) -> Result<()> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS \"{schema_name}\""))
        .execute(directory_pool)
        .await?;

    let tenant_id = Uuid::now_v7();
    sqlx::query(
        r#"
        INSERT INTO tenant_directory (tenant_id, tenant_key, schema_name, is_active)
        VALUES ($1, $2, $3, true)
        ON CONFLICT (tenant_key) DO NOTHING
        "#,
    )
    .bind(tenant_id)
    .bind(tenant_key)
    .bind(schema_name)
    .execute(directory_pool)
    .await?;

    Ok(())
}

async fn seed_branch(tx: &mut Transaction<'_, Postgres>) -> Result<Uuid> {
    let id = Uuid::now_v7();
    let b = &data::BRANCH;

    sqlx::query(
        r#"
        INSERT INTO branches
            (id, name, code, currency, tax_mode, tax_rate, vat_number, order_prefix, receipt_footer, payment_methods)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, '{}'::jsonb)
        ON CONFLICT (code) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(b.name)
    .bind(b.code)
    .bind(b.currency)
    .bind(b.tax_mode)
    .bind(b.tax_rate.parse::<rust_decimal::Decimal>()?)
    .bind(b.vat_number)
    .bind(b.order_prefix)
    .bind(b.receipt_footer)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM branches WHERE code = $1")
        .bind(b.code)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0)
}

async fn seed_terminal(tx: &mut Transaction<'_, Postgres>, branch_id: Uuid) -> Result<Uuid> {
    let id = Uuid::now_v7();
    let t = &data::TERMINAL;

    sqlx::query(
        r#"
        INSERT INTO pos_terminals (id, branch_id, machine_id, name, status)
        VALUES ($1, $2, $3, $4, 'active')
        ON CONFLICT (branch_id, machine_id) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(branch_id)
    .bind(t.machine_id)
    .bind(t.name)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM pos_terminals WHERE branch_id = $1 AND machine_id = $2")
        .bind(branch_id)
        .bind(t.machine_id)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0)
}

async fn seed_staff(tx: &mut Transaction<'_, Postgres>, name: &str) -> Result<Uuid> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO staff (id, name, is_active, is_staff)
        VALUES ($1, $2, true, true)
        ON CONFLICT (name) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(name)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM staff WHERE name = $1")
        .bind(name)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0)
}

async fn seed_staff_branch_scope(tx: &mut Transaction<'_, Postgres>, staff_id: Uuid, branch_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO staff_branch_scopes (staff_id, branch_id)
        VALUES ($1, $2)
        ON CONFLICT (staff_id, branch_id) DO NOTHING
        "#,
    )
    .bind(staff_id)
    .bind(branch_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn seed_pin_credential(tx: &mut Transaction<'_, Postgres>, staff_id: Uuid, pin_key: &str) -> Result<()> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO pin_credentials (id, actor_id, pin_key, failed_attempts, locked_until, created_at, updated_at)
        VALUES ($1, $2, $3, 0, NULL, now(), now())
        ON CONFLICT (actor_id) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(staff_id)
    .bind(pin_key)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn seed_inventory_item(tx: &mut Transaction<'_, Postgres>, item: &data::ItemSeed) -> Result<Uuid> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO inventory_items (id, tenant_id, name, sku, item_type, base_unit, category_id, active)
        VALUES ($1, (SELECT tenant_id FROM tenant_directory WHERE tenant_key = $5), $2, $3, 'stock', $4, NULL, true)
        ON CONFLICT (sku) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(item.name)
    .bind(item.sku)
    .bind(item.base_unit)
    .bind(data::TENANT_KEY)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM inventory_items WHERE sku = $1")
        .bind(item.sku)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0)
}

async fn seed_branch_inventory(
    tx: &mut Transaction<'_, Postgres>,
    branch_id: Uuid,
    item_id: Uuid,
    item: &data::ItemSeed,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO branch_inventories
            (branch_id, item_id, on_hand_qty, reorder_point, min_stock, max_stock, cost_per_unit, selling_price, active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NULL, true)
        ON CONFLICT (branch_id, item_id) DO NOTHING
        "#,
    )
    .bind(branch_id)
    .bind(item_id)
    .bind(item.on_hand_qty.parse::<rust_decimal::Decimal>()?)
    .bind(item.reorder_point.parse::<rust_decimal::Decimal>()?)
    .bind(item.min_stock.parse::<rust_decimal::Decimal>()?)
    .bind(item.max_stock.parse::<rust_decimal::Decimal>()?)
    .bind(item.cost_per_unit.parse::<rust_decimal::Decimal>()?)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn seed_menu_category(tx: &mut Transaction<'_, Postgres>, name: &str) -> Result<Uuid> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO menu_categories (id, tenant_id, name, display_order)
        VALUES ($1, (SELECT tenant_id FROM tenant_directory WHERE tenant_key = $3), $2, 0)
        ON CONFLICT (name) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(data::TENANT_KEY)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM menu_categories WHERE name = $1")
        .bind(name)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0)
}

async fn seed_recipe(
    tx: &mut Transaction<'_, Postgres>,
    recipe: &data::RecipeSeed,
    dough_id: Uuid,
    dough: &data::ItemSeed,
) -> Result<Uuid> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO recipes (id, tenant_id, name, yield_quantity)
        VALUES ($1, (SELECT tenant_id FROM tenant_directory WHERE tenant_key = $4), $2, $3)
        ON CONFLICT (name) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(recipe.name)
    .bind(recipe.yield_quantity.parse::<rust_decimal::Decimal>()?)
    .bind(data::TENANT_KEY)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM recipes WHERE name = $1")
        .bind(recipe.name)
        .fetch_one(&mut **tx)
        .await?;
    let recipe_id = row.0;

    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
        .bind(recipe_id)
        .execute(&mut **tx)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO recipe_ingredients (recipe_id, source_type, source_id, quantity, unit, name_snapshot, cost_per_unit)
        VALUES ($1, 'inventory', $2, $3, $4, $5, $6)
        "#,
    )
    .bind(recipe_id)
    .bind(dough_id)
    .bind(recipe.ingredient_qty.parse::<rust_decimal::Decimal>()?)
    .bind(dough.base_unit)
    .bind(dough.name)
    .bind(dough.cost_per_unit.parse::<rust_decimal::Decimal>()?)
    .execute(&mut **tx)
    .await?;

    Ok(recipe_id)
}

async fn seed_size_recipe_variant(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: Uuid,
    variant: &data::SizeVariantSeed,
) -> Result<Uuid> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO recipe_variants
            (id, tenant_id, recipe_id, variant_type, size_multiplier, base_cost_adjustment)
        VALUES ($1, (SELECT tenant_id FROM recipes WHERE id = $2), $2, 'size', $3, 0)
        ON CONFLICT (recipe_id, variant_type) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(recipe_id)
    .bind(variant.size_multiplier.parse::<rust_decimal::Decimal>()?)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM recipe_variants WHERE recipe_id = $1 AND variant_type = 'size'")
        .bind(recipe_id)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0)
}

async fn seed_topping_recipe_variant(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: Uuid,
    topping: &data::ToppingVariantSeed,
    pepperoni_id: Uuid,
    pepperoni: &data::ItemSeed,
) -> Result<Uuid> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO recipe_variants
            (id, tenant_id, recipe_id, variant_type, size_multiplier, base_cost_adjustment)
        VALUES ($1, (SELECT tenant_id FROM recipes WHERE id = $2), $2, 'addon', 1, 0)
        ON CONFLICT (recipe_id, variant_type) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(recipe_id)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM recipe_variants WHERE recipe_id = $1 AND variant_type = 'addon'")
        .bind(recipe_id)
        .fetch_one(&mut **tx)
        .await?;
    let variant_id = row.0;

    sqlx::query("DELETE FROM recipe_variant_ingredients WHERE variant_id = $1")
        .bind(variant_id)
        .execute(&mut **tx)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO recipe_variant_ingredients
            (variant_id, source_type, source_id, quantity, unit, name_snapshot, cost_per_unit)
        VALUES ($1, 'inventory', $2, $3, $4, $5, $6)
        "#,
    )
    .bind(variant_id)
    .bind(pepperoni_id)
    .bind(topping.ingredient_qty.parse::<rust_decimal::Decimal>()?)
    .bind(pepperoni.base_unit)
    .bind(pepperoni.name)
    .bind(pepperoni.cost_per_unit.parse::<rust_decimal::Decimal>()?)
    .execute(&mut **tx)
    .await?;

    Ok(variant_id)
}

async fn seed_menu_item(
    tx: &mut Transaction<'_, Postgres>,
    item: &data::MenuItemSeed,
    recipe_id: Uuid,
    category_id: Uuid,
) -> Result<Uuid> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO menu_items
            (id, tenant_id, name, slug, recipe_id, base_price, price_includes_tax, currency, category_id, active)
        VALUES
            ($1, (SELECT tenant_id FROM recipes WHERE id = $3), $2, $4, $3, $5, false, 'SAR', $6, true)
        ON CONFLICT (slug) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(item.name)
    .bind(recipe_id)
    .bind(item.slug)
    .bind(item.base_price.parse::<rust_decimal::Decimal>()?)
    .bind(category_id)
    .execute(&mut **tx)
    .await?;

    let row: (Uuid,) = sqlx::query_as("SELECT id FROM menu_items WHERE slug = $1")
        .bind(item.slug)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0)
}

async fn seed_size_menu_variation(
    tx: &mut Transaction<'_, Postgres>,
    menu_item_id: Uuid,
    variant: &data::SizeVariantSeed,
    recipe_variant_id: Uuid,
) -> Result<()> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO menu_variations
            (id, menu_item_id, name, variant_type, recipe_variant_id, price_delta, size_multiplier, calculated_cost)
        VALUES ($1, $2, $3, 'size', $4, $5, $6, 0)
        ON CONFLICT (menu_item_id, name) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(menu_item_id)
    .bind(variant.name)
    .bind(recipe_variant_id)
    .bind(variant.price_delta.parse::<rust_decimal::Decimal>()?)
    .bind(variant.size_multiplier.parse::<rust_decimal::Decimal>()?)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn seed_topping_menu_variation(
    tx: &mut Transaction<'_, Postgres>,
    menu_item_id: Uuid,
    topping: &data::ToppingVariantSeed,
    recipe_variant_id: Uuid,
) -> Result<()> {
    let id = Uuid::now_v7();

    sqlx::query(
        r#"
        INSERT INTO menu_variations
            (id, menu_item_id, name, variant_type, recipe_variant_id, price_delta, size_multiplier, calculated_cost)
        VALUES ($1, $2, $3, 'addon', $4, $5, 1, 0)
        ON CONFLICT (menu_item_id, name) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(menu_item_id)
    .bind(topping.name)
    .bind(recipe_variant_id)
    .bind(topping.price_delta.parse::<rust_decimal::Decimal>()?)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn seed_branch_menu(
    tx: &mut Transaction<'_, Postgres>,
    tenant_id: Uuid,
    branch_id: Uuid,
    menu_item_id: Uuid,
    item: &data::MenuItemSeed,
    category_id: Uuid,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO branch_menus
            (tenant_id, branch_id, menu_item_id, selling_price, available, visible_on_pos, display_order,
             code_snapshot, name_snapshot, category_id_snapshot)
        VALUES ($1, $2, $3, NULL, true, true, 0, $4, $5, $6)
        ON CONFLICT (branch_id, menu_item_id) DO NOTHING
        "#,
    )
    .bind(tenant_id)
    .bind(branch_id)
    .bind(menu_item_id)
    .bind(item.slug)
    .bind(item.name)
    .bind(category_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
