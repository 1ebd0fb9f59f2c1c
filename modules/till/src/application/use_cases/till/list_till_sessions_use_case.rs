//! List till sessions use case.

use std::str::FromStr;
use std::sync::Arc;

use tenancy::TenantHandle;

use crate::application::dtos::{ListTillSessionsQuery, TillSessionListResponse, TillSessionResponse};
use crate::domain::repositories::{TillSessionFilter, TillSessionRepository};
use crate::domain::value_objects::TillSessionStatus;
use crate::TillError;
use identity::{ActorId as StaffId, BranchId};
use pos_core::TerminalId;

/// Lists till sessions with filters and pagination (ambient reporting
/// surface, spec 3).
pub struct ListTillSessionsUseCase {
    till_repo: Arc<dyn TillSessionRepository>,
}

impl ListTillSessionsUseCase {
    pub fn new(till_repo: Arc<dyn TillSessionRepository>) -> Self {
        Self { till_repo }
    }

    pub async fn execute(
        &self,
        tenant: &TenantHandle,
        query: ListTillSessionsQuery,
    ) -> Result<TillSessionListResponse, TillError> {
        let page = query.page.unwrap_or(1).max(1);
        let page_size = query.page_size.unwrap_or(20).clamp(1, 100);

        let filter = TillSessionFilter {
            branch_id: query.branch_id.map(BranchId::from_uuid),
            terminal_id: query.terminal_id.map(TerminalId::from_uuid),
            staff_id: query.staff_id.map(StaffId::from_uuid),
            status: query.status.as_ref().and_then(|s| TillSessionStatus::from_str(s).ok()),
        };

        let (sessions, total) = self.till_repo.find_paginated(tenant, filter, page, page_size).await?;

        let total_pages = (total as f64 / page_size as f64).ceil() as i64;

        Ok(TillSessionListResponse {
            data: sessions.into_iter().map(TillSessionResponse::from).collect(),
            total,
            page,
            page_size,
            total_pages,
        })
    }
}
