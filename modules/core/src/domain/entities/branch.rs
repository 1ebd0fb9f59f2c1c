// Branch entity - a tenant's physical location, its tax posture, and the
// POS configuration orders are priced and numbered against.

use std::collections::HashMap;

use identity::BranchId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tenancy::TenantId;

use crate::domain::value_objects::BranchCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxMode {
    Exclusive,
    Inclusive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSettings {
    pub mode: TaxMode,
    pub rate: Decimal,
    pub vat_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodConfig {
    pub tax_rate_override: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosConfig {
    pub order_prefix: String,
    pub receipt_footer: Option<String>,
    pub payment_methods: HashMap<String, PaymentMethodConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    id: BranchId,
    tenant_id: TenantId,
    name: String,
    code: BranchCode,
    currency: String,
    tax: TaxSettings,
    pos_config: PosConfig,
}

impl Branch {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tenant_id: TenantId,
        name: String,
        code: BranchCode,
        currency: String,
        tax: TaxSettings,
        pos_config: PosConfig,
    ) -> Self {
        Self {
            id: BranchId::new(),
            tenant_id,
            name,
            code,
            currency,
            tax,
            pos_config,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: BranchId,
        tenant_id: TenantId,
        name: String,
        code: BranchCode,
        currency: String,
        tax: TaxSettings,
        pos_config: PosConfig,
    ) -> Self {
        Self {
            id,
            tenant_id,
            name,
            code,
            currency,
            tax,
            pos_config,
        }
    }

    pub fn id(&self) -> BranchId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &BranchCode {
        &self.code
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn tax(&self) -> &TaxSettings {
        &self.tax
    }

    pub fn pos_config(&self) -> &PosConfig {
        &self.pos_config
    }

    /// The tax rate to apply for a given payment method, honoring a
    /// per-method override if one is configured.
    pub fn tax_rate_for_method(&self, method: &str) -> Decimal {
        self.pos_config
            .payment_methods
            .get(method)
            .and_then(|m| m.tax_rate_override)
            .unwrap_or(self.tax.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch() -> Branch {
        Branch::new(
            TenantId::new(),
            "Main Street".into(),
            BranchCode::new("main").unwrap(),
            "HNL".into(),
            TaxSettings {
                mode: TaxMode::Exclusive,
                rate: Decimal::new(15, 2),
                vat_number: None,
            },
            PosConfig {
                order_prefix: "MS".into(),
                receipt_footer: None,
                payment_methods: HashMap::new(),
            },
        )
    }

    #[test]
    fn falls_back_to_branch_rate_without_override() {
        let b = branch();
        assert_eq!(b.tax_rate_for_method("cash"), Decimal::new(15, 2));
    }

    #[test]
    fn honors_per_method_override() {
        let mut b = branch();
        b.pos_config.payment_methods.insert(
            "card".into(),
            PaymentMethodConfig {
                tax_rate_override: Some(Decimal::new(18, 2)),
            },
        );
        assert_eq!(b.tax_rate_for_method("card"), Decimal::new(18, 2));
        assert_eq!(b.tax_rate_for_method("cash"), Decimal::new(15, 2));
    }
}
