//! Sequential drivers that pair each state step with its collaborator call.
//!
//! The UI splits these steps around a channel so the frame loop never
//! awaits; headless callers and tests use the functions here directly.

use log::debug;

use super::api::{ApiResult, CardTenantApi};
use super::pagination::PageChange;
use super::query::TenantLookupQuery;
use super::state::{CardTenantModalState, ConfirmOutcome, RemovalStep};
use super::types::{CardId, Page, TenantOption};

/// Opens the modal and loads the first page when a card is bound.
pub async fn open_and_load(
    state: &mut CardTenantModalState,
    api: &dyn CardTenantApi,
    card_id: Option<CardId>,
    disabled: bool,
) {
    if let Some(query) = state.open(card_id, disabled) {
        let result = api.fetch_assigned_tenants(&query).await;
        state.apply_fetch(&query, result);
    }
}

/// Search button: first page with the current criteria.
pub async fn search(state: &mut CardTenantModalState, api: &dyn CardTenantApi) {
    change_page(state, api, PageChange::FirstPage).await;
}

pub async fn change_page(
    state: &mut CardTenantModalState,
    api: &dyn CardTenantApi,
    change: PageChange,
) {
    if let Some(query) = state.fetch_query(change) {
        let result = api.fetch_assigned_tenants(&query).await;
        state.apply_fetch(&query, result);
    }
}

/// Remove button. Returns the number of rows taken off the table.
pub async fn remove_selected(state: &mut CardTenantModalState, api: &dyn CardTenantApi) -> usize {
    match state.plan_removal() {
        None => 0,
        Some(RemovalStep::Done { removed }) => removed,
        Some(RemovalStep::Remote(plan)) => {
            let before = state.rows().len();
            let result = api.remove_assigned_tenants(&plan.persisted).await;
            state.finish_removal(&plan, result);
            before - state.rows().len()
        }
    }
}

/// OK button. Returns `true` when the modal ended up closed.
pub async fn confirm(state: &mut CardTenantModalState, api: &dyn CardTenantApi) -> bool {
    match state.confirm() {
        ConfirmOutcome::Close => true,
        ConfirmOutcome::Blocked => false,
        ConfirmOutcome::Save(rows) => {
            debug!("Saving {} new tenant assignment(s)", rows.len());
            let result = api.save_assigned_tenants(&rows).await;
            state.finish_save(result);
            !state.is_open()
        }
    }
}

/// Candidate tenants for the picker of a draft row.
pub async fn lookup_tenants(
    api: &dyn CardTenantApi,
    lov_code: &str,
    keyword: &str,
) -> ApiResult<Page<TenantOption>> {
    api.lookup_tenants(&TenantLookupQuery::new(lov_code, keyword))
        .await
}
