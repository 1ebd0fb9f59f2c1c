//! ActorContext - the resolved principal behind an authenticated request.
//!
//! Unlike a full RBAC user profile, this carries only what the order-commit
//! preflight (spec 4.6 step 1-3) needs to decide whether a request may
//! proceed: is the account active, is it staff, and what branch(es) is it
//! scoped to. The actual yes/no permission decision is delegated to an
//! external `Authorizer` (see `domain::services::authorization`).

use serde::{Deserialize, Serialize};
use tenancy::TenantId;

use crate::domain::value_objects::{ActorId, BranchId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorStatus {
    Active,
    Suspended,
}

impl ActorStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ActorStatus::Active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorContext {
    id: ActorId,
    tenant_id: TenantId,
    status: ActorStatus,
    is_staff: bool,
    /// Branches this actor is scoped to in the absence of an explicit per-request branch.
    /// A single-branch cashier has exactly one entry; a multi-branch manager may have more.
    home_branches: Vec<BranchId>,
}

impl ActorContext {
    pub fn new(
        id: ActorId,
        tenant_id: TenantId,
        status: ActorStatus,
        is_staff: bool,
        home_branches: Vec<BranchId>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            status,
            is_staff,
            home_branches,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn status(&self) -> ActorStatus {
        self.status
    }

    pub fn is_staff(&self) -> bool {
        self.is_staff
    }

    /// Returns the actor's single home branch if it has exactly one, per
    /// spec 4.6 step 2's "actor's single branch" fallback.
    pub fn single_branch(&self) -> Option<BranchId> {
        match self.home_branches.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn home_branches(&self) -> &[BranchId] {
        &self.home_branches
    }

    pub fn is_scoped_to(&self, branch: BranchId) -> bool {
        self.home_branches.contains(&branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_branch_resolves_with_exactly_one_home_branch() {
        let branch = BranchId::new();
        let ctx = ActorContext::new(
            ActorId::new(),
            TenantId::new(),
            ActorStatus::Active,
            true,
            vec![branch],
        );

        assert_eq!(ctx.single_branch(), Some(branch));
    }

    #[test]
    fn single_branch_is_none_with_multiple_or_zero_branches() {
        let ctx = ActorContext::new(
            ActorId::new(),
            TenantId::new(),
            ActorStatus::Active,
            true,
            vec![],
        );
        assert_eq!(ctx.single_branch(), None);

        let ctx2 = ActorContext::new(
            ActorId::new(),
            TenantId::new(),
            ActorStatus::Active,
            true,
            vec![BranchId::new(), BranchId::new()],
        );
        assert_eq!(ctx2.single_branch(), None);
    }

    #[test]
    fn status_is_active_reflects_enum_variant() {
        assert!(ActorStatus::Active.is_active());
        assert!(!ActorStatus::Suspended.is_active());
    }
}
