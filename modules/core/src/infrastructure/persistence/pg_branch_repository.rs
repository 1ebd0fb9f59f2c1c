// PgBranchRepository - Postgres adapter for Branch persistence.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use identity::BranchId;
use rust_decimal::Decimal;
use sqlx::FromRow;
use tenancy::TenantHandle;
use uuid::Uuid;

use crate::domain::entities::{Branch, PaymentMethodConfig, PosConfig, TaxMode, TaxSettings};
use crate::domain::repositories::BranchRepository;
use crate::domain::value_objects::BranchCode;
use crate::CoreError;

#[derive(FromRow)]
struct BranchRow {
    id: Uuid,
    name: String,
    code: String,
    currency: String,
    tax_mode: String,
    tax_rate: Decimal,
    vat_number: Option<String>,
    order_prefix: String,
    receipt_footer: Option<String>,
    payment_methods: serde_json::Value,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

fn row_to_branch(row: BranchRow, tenant: &TenantHandle) -> Result<Branch, CoreError> {
    let tax_mode = match row.tax_mode.as_str() {
        "exclusive" => TaxMode::Exclusive,
        "inclusive" => TaxMode::Inclusive,
        _ => TaxMode::Exclusive,
    };

    let payment_methods: HashMap<String, PaymentMethodConfig> =
        serde_json::from_value(row.payment_methods).unwrap_or_default();

    Ok(Branch::reconstitute(
        BranchId::from_uuid(row.id),
        tenant.tenant_id(),
        row.name,
        BranchCode::new(&row.code)?,
        row.currency,
        TaxSettings {
            mode: tax_mode,
            rate: row.tax_rate,
            vat_number: row.vat_number,
        },
        PosConfig {
            order_prefix: row.order_prefix,
            receipt_footer: row.receipt_footer,
            payment_methods,
        },
    ))
}

pub struct PgBranchRepository;

impl PgBranchRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgBranchRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BranchRepository for PgBranchRepository {
    async fn find_by_id(
        &self,
        tenant: &TenantHandle,
        id: BranchId,
    ) -> Result<Option<Branch>, CoreError> {
        let row: Option<BranchRow> = sqlx::query_as(
            r#"
            SELECT id, name, code, currency, tax_mode, tax_rate, vat_number,
                   order_prefix, receipt_footer, payment_methods, created_at, updated_at
            FROM branches
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(tenant.pool())
        .await?;

        row.map(|r| row_to_branch(r, tenant)).transpose()
    }

    async fn find_by_code(
        &self,
        tenant: &TenantHandle,
        code: &BranchCode,
    ) -> Result<Option<Branch>, CoreError> {
        let row: Option<BranchRow> = sqlx::query_as(
            r#"
            SELECT id, name, code, currency, tax_mode, tax_rate, vat_number,
                   order_prefix, receipt_footer, payment_methods, created_at, updated_at
            FROM branches
            WHERE code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(tenant.pool())
        .await?;

        row.map(|r| row_to_branch(r, tenant)).transpose()
    }

    async fn list(&self, tenant: &TenantHandle) -> Result<Vec<Branch>, CoreError> {
        let rows: Vec<BranchRow> = sqlx::query_as(
            r#"
            SELECT id, name, code, currency, tax_mode, tax_rate, vat_number,
                   order_prefix, receipt_footer, payment_methods, created_at, updated_at
            FROM branches
            ORDER BY name
            "#,
        )
        .fetch_all(tenant.pool())
        .await?;

        rows.into_iter().map(|r| row_to_branch(r, tenant)).collect()
    }

    async fn create(&self, tenant: &TenantHandle, branch: &Branch) -> Result<(), CoreError> {
        let tax_mode = match branch.tax().mode {
            TaxMode::Exclusive => "exclusive",
            TaxMode::Inclusive => "inclusive",
        };
        let payment_methods = serde_json::to_value(&branch.pos_config().payment_methods)
            .unwrap_or(serde_json::Value::Null);

        sqlx::query(
            r#"
            INSERT INTO branches
                (id, name, code, currency, tax_mode, tax_rate, vat_number,
                 order_prefix, receipt_footer, payment_methods, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, now(), now())
            "#,
        )
        .bind(branch.id().into_uuid())
        .bind(branch.name())
        .bind(branch.code().as_str())
        .bind(branch.currency())
        .bind(tax_mode)
        .bind(branch.tax().rate)
        .bind(&branch.tax().vat_number)
        .bind(&branch.pos_config().order_prefix)
        .bind(&branch.pos_config().receipt_footer)
        .bind(payment_methods)
        .execute(tenant.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                CoreError::BranchCodeExists(branch.code().as_str().to_string())
            }
            other => CoreError::Database(other),
        })?;

        Ok(())
    }

    async fn save(&self, tenant: &TenantHandle, branch: &Branch) -> Result<(), CoreError> {
        let tax_mode = match branch.tax().mode {
            TaxMode::Exclusive => "exclusive",
            TaxMode::Inclusive => "inclusive",
        };
        let payment_methods = serde_json::to_value(&branch.pos_config().payment_methods)
            .unwrap_or(serde_json::Value::Null);

        sqlx::query(
            r#"
            UPDATE branches
            SET name = $2, currency = $3, tax_mode = $4, tax_rate = $5, vat_number = $6,
                order_prefix = $7, receipt_footer = $8, payment_methods = $9, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(branch.id().into_uuid())
        .bind(branch.name())
        .bind(branch.currency())
        .bind(tax_mode)
        .bind(branch.tax().rate)
        .bind(&branch.tax().vat_number)
        .bind(&branch.pos_config().order_prefix)
        .bind(&branch.pos_config().receipt_footer)
        .bind(payment_methods)
        .execute(tenant.pool())
        .await?;

        Ok(())
    }
}
