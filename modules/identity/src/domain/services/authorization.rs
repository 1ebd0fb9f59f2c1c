//! Authorization surface (spec 4.8) - the core *consumes* this, it does not
//! implement role-based access control. A concrete `Authorizer` (backed by
//! whatever RBAC/permission store the surrounding platform uses) is supplied
//! by the caller; this crate only defines the contract and the actions the
//! order-commit and till-session paths invoke it with.

use crate::domain::entities::ActorContext;
use crate::domain::value_objects::BranchId;

/// A scope an authorization check is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Tenant,
    Branch(BranchId),
}

/// Actions the core's use cases check before proceeding. Named as
/// `area.resource.verb`, matching the action strings in spec 4.8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PosOrdersCreate,
    PosTillManage,
    StaffManage,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::PosOrdersCreate => "pos.orders.create",
            Action::PosTillManage => "pos.till.manage",
            Action::StaffManage => "staff.manage",
        }
    }
}

/// `may(actor, action, scope) -> bool`, consumed but never implemented by
/// this crate. Implementations are supplied by the surrounding platform.
pub trait Authorizer: Send + Sync {
    fn may(&self, actor: &ActorContext, action: Action, scope: Option<Scope>) -> bool;
}

/// Test/demo authorizer that grants everything. Never wired in production
/// composition roots.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAllAuthorizer;

impl Authorizer for AllowAllAuthorizer {
    fn may(&self, _actor: &ActorContext, _action: Action, _scope: Option<Scope>) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ActorStatus;
    use crate::domain::value_objects::ActorId;
    use tenancy::TenantId;

    #[test]
    fn allow_all_authorizer_always_grants() {
        let authorizer = AllowAllAuthorizer;
        let actor = ActorContext::new(
            ActorId::new(),
            TenantId::new(),
            ActorStatus::Active,
            true,
            vec![],
        );
        assert!(authorizer.may(&actor, Action::PosOrdersCreate, Some(Scope::Branch(BranchId::new()))));
    }

    #[test]
    fn action_as_str_matches_spec_action_strings() {
        assert_eq!(Action::PosOrdersCreate.as_str(), "pos.orders.create");
        assert_eq!(Action::PosTillManage.as_str(), "pos.till.manage");
        assert_eq!(Action::StaffManage.as_str(), "staff.manage");
    }
}
