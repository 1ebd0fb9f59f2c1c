// PosTerminal entity - a physical POS device scoped to a branch.

use identity::BranchId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{TerminalCode, TerminalId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalStatus {
    Active,
    Maintenance,
    Retired,
}

impl TerminalStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, TerminalStatus::Active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosTerminal {
    id: TerminalId,
    branch_id: BranchId,
    machine_id: TerminalCode,
    name: String,
    status: TerminalStatus,
}

impl PosTerminal {
    pub fn new(branch_id: BranchId, machine_id: TerminalCode, name: String) -> Self {
        Self {
            id: TerminalId::new(),
            branch_id,
            machine_id,
            name,
            status: TerminalStatus::Active,
        }
    }

    pub fn reconstitute(
        id: TerminalId,
        branch_id: BranchId,
        machine_id: TerminalCode,
        name: String,
        status: TerminalStatus,
    ) -> Self {
        Self {
            id,
            branch_id,
            machine_id,
            name,
            status,
        }
    }

    pub fn id(&self) -> TerminalId {
        self.id
    }

    pub fn branch_id(&self) -> BranchId {
        self.branch_id
    }

    pub fn machine_id(&self) -> &TerminalCode {
        &self.machine_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> TerminalStatus {
        self.status
    }

    pub fn retire(&mut self) {
        self.status = TerminalStatus::Retired;
    }

    pub fn set_maintenance(&mut self) {
        self.status = TerminalStatus::Maintenance;
    }

    pub fn reactivate(&mut self) {
        self.status = TerminalStatus::Active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_active() {
        let t = PosTerminal::new(
            BranchId::new(),
            TerminalCode::new("till-1").unwrap(),
            "Front counter".into(),
        );
        assert!(t.status().is_active());
    }

    #[test]
    fn retire_is_terminal() {
        let mut t = PosTerminal::new(
            BranchId::new(),
            TerminalCode::new("till-1").unwrap(),
            "Front counter".into(),
        );
        t.retire();
        assert!(!t.status().is_active());
    }
}
