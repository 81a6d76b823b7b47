//! State machine of the card tenant assignment modal.
//!
//! UI code reads this state and calls its methods; collaborator calls are
//! made by the caller between a `*_query`/`plan_*`/`confirm` step and the
//! matching `apply_*`/`finish_*` step:
//!
//! - `open` / `fetch_query` → `fetch_assigned_tenants` → `apply_fetch`
//! - `plan_removal` → `remove_assigned_tenants` → `finish_removal`
//! - `confirm` → `save_assigned_tenants` → `finish_save`
//!
//! Responses are applied in arrival order; a late response for an older
//! query overwrites a newer one. Results started before the modal was last
//! opened are dropped.

use std::collections::HashSet;

use log::{debug, info, warn};

use super::api::ApiResult;
use super::pagination::{PageChange, Pagination};
use super::query::{CardTenantQuery, SearchForm};
use super::types::{CardId, NewCardTenant, Page, RemovableTenant, RowId, TenantOption, TenantRow};
use crate::config::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Editing,
    /// Waiting for the save call started by `confirm`.
    Saving,
}

/// Checked rows of the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    keys: Vec<RowId>,
    rows: Vec<TenantRow>,
}

impl Selection {
    pub fn keys(&self) -> &[RowId] {
        &self.keys
    }

    pub fn rows(&self) -> &[TenantRow] {
        &self.rows
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.keys.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Rows picked for removal, split by deletion path.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalPlan {
    /// Every selected row, drafts included.
    pub row_ids: Vec<RowId>,
    /// Persisted rows to send to the remove endpoint.
    pub persisted: Vec<RemovableTenant>,
    /// Modal session that planned the removal.
    pub session: u64,
}

impl RemovalPlan {
    pub fn draft_count(&self) -> usize {
        self.row_ids.len() - self.persisted.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemovalStep {
    /// Only draft rows were selected; they are already gone.
    Done { removed: usize },
    /// Persisted rows must be removed remotely before anything changes.
    Remote(RemovalPlan),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// Nothing to save (or read-only modal); the modal has been closed.
    Close,
    /// A draft row failed validation; nothing was saved or closed.
    Blocked,
    /// Save these rows; the modal stays open until `finish_save`.
    Save(Vec<NewCardTenant>),
}

/// Transient message shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Removed(usize),
}

#[derive(Debug)]
pub struct CardTenantModalState {
    phase: ModalPhase,
    card_id: Option<CardId>,
    disabled: bool,
    rows: Vec<TenantRow>,
    pagination: Pagination,
    selection: Selection,
    search_form: SearchForm,
    fetching: bool,
    confirm_loading: bool,
    notice: Option<Notice>,
    page_size: u32,
    /// Bumped by every `open`.
    session: u64,
}

impl Default for CardTenantModalState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CardTenantModalState {
    pub fn new(page_size: u32) -> Self {
        Self {
            phase: ModalPhase::Closed,
            card_id: None,
            disabled: true,
            rows: Vec::new(),
            pagination: Pagination::new(page_size),
            selection: Selection::default(),
            search_form: SearchForm::default(),
            fetching: false,
            confirm_loading: false,
            notice: None,
            page_size,
            session: 0,
        }
    }

    // =====================
    // Lifecycle
    // =====================

    /// Opens the modal for `card_id` and returns the initial fetch query.
    ///
    /// A modal without a card id opens empty and never fetches.
    pub fn open(&mut self, card_id: Option<CardId>, disabled: bool) -> Option<CardTenantQuery> {
        debug!("Opening card tenant modal for card {card_id:?} (disabled: {disabled})");
        self.reset_session();
        self.session = self.session.wrapping_add(1);
        self.phase = ModalPhase::Editing;
        self.card_id = card_id;
        self.disabled = disabled;
        self.fetch_query(PageChange::FirstPage)
    }

    /// Cancel button and window close.
    pub fn cancel(&mut self) {
        self.close();
    }

    pub fn close(&mut self) {
        debug!("Closing card tenant modal for card {:?}", self.card_id);
        self.reset_session();
        self.phase = ModalPhase::Closed;
    }

    fn reset_session(&mut self) {
        self.rows.clear();
        self.pagination = Pagination::new(self.page_size);
        self.selection = Selection::default();
        self.search_form.reset_fields();
        self.search_form.unmount();
        self.fetching = false;
        self.confirm_loading = false;
        self.notice = None;
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn card_id(&self) -> Option<CardId> {
        self.card_id
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    // =====================
    // Fetch
    // =====================

    /// Builds the list query for a page change, or `None` when the modal is
    /// not bound to a card.
    pub fn fetch_query(&mut self, change: PageChange) -> Option<CardTenantQuery> {
        if !self.is_open() {
            return None;
        }
        let card_id = self.card_id?;

        let (page, size, sort) = match change {
            PageChange::FirstPage => (0, self.page_size, None),
            PageChange::Goto {
                current,
                page_size,
                sort,
            } => (current.saturating_sub(1), page_size.max(1), sort),
        };

        let query = CardTenantQuery {
            card_id,
            page,
            size,
            sort,
            criteria: self.search_form.criteria().cloned(),
        };
        debug!("Fetching assigned tenants: {query:?}");
        self.fetching = true;
        Some(query)
    }

    /// Applies a fetch response. Failures keep the current rows.
    pub fn apply_fetch(&mut self, query: &CardTenantQuery, result: ApiResult<Page<TenantRow>>) {
        if !self.is_open() || self.card_id != Some(query.card_id) {
            debug!("Dropping tenant page for card {} (modal moved on)", query.card_id);
            return;
        }
        self.fetching = false;

        match result {
            Ok(page) => {
                self.pagination = Pagination::from_page(&page, query.size, query.sort.clone());
                self.rows = dedup_rows(page.content);
                self.resync_selection();
            }
            Err(err) => {
                warn!("Failed to fetch tenants of card {}: {err}", query.card_id);
            }
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn search_form(&self) -> &SearchForm {
        &self.search_form
    }

    pub fn search_form_mut(&mut self) -> &mut SearchForm {
        &mut self.search_form
    }

    // =====================
    // Rows
    // =====================

    pub fn rows(&self) -> &[TenantRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&TenantRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn draft_rows(&self) -> impl Iterator<Item = &TenantRow> {
        self.rows.iter().filter(|row| row.is_draft())
    }

    pub fn has_drafts(&self) -> bool {
        self.draft_rows().next().is_some()
    }

    fn can_edit(&self) -> bool {
        self.phase == ModalPhase::Editing && !self.disabled
    }

    /// Prepends a draft row. Returns `None` for a read-only or closed modal.
    pub fn add_row(&mut self) -> Option<RowId> {
        if !self.can_edit() {
            return None;
        }
        let row = TenantRow::draft();
        let id = row.id();
        self.pagination = self.pagination.add_item(self.rows.len());
        self.rows.insert(0, row);
        debug!("Added draft tenant row {id}");
        Some(id)
    }

    /// Fills a draft row from the tenant picker.
    pub fn pick_tenant(&mut self, id: RowId, tenant: &TenantOption) -> bool {
        match self.draft_mut(id) {
            Some(row) => {
                row.apply_tenant(tenant);
                true
            }
            None => false,
        }
    }

    pub fn clear_tenant(&mut self, id: RowId) -> bool {
        match self.draft_mut(id) {
            Some(row) => {
                row.clear_tenant();
                true
            }
            None => false,
        }
    }

    fn draft_mut(&mut self, id: RowId) -> Option<&mut TenantRow> {
        if !self.can_edit() {
            return None;
        }
        self.rows
            .iter_mut()
            .find(|row| row.id() == id && row.is_draft())
    }

    // =====================
    // Selection
    // =====================

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replaces the selection. Ids not present in the table are ignored.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = RowId>) {
        if !self.can_edit() {
            return;
        }
        let wanted: HashSet<RowId> = ids.into_iter().collect();
        let rows: Vec<TenantRow> = self
            .rows
            .iter()
            .filter(|row| wanted.contains(&row.id()))
            .cloned()
            .collect();
        self.selection = Selection {
            keys: rows.iter().map(TenantRow::id).collect(),
            rows,
        };
    }

    pub fn toggle_row(&mut self, id: RowId, checked: bool) {
        let mut keys = self.selection.keys.clone();
        keys.retain(|key| *key != id);
        if checked {
            keys.push(id);
        }
        self.set_selection(keys);
    }

    pub fn select_all(&mut self, checked: bool) {
        let keys: Vec<RowId> = if checked {
            self.rows.iter().map(TenantRow::id).collect()
        } else {
            Vec::new()
        };
        self.set_selection(keys);
    }

    fn resync_selection(&mut self) {
        let keys = self.selection.keys.clone();
        self.selection = Selection::default();
        self.set_selection(keys);
    }

    // =====================
    // Removal
    // =====================

    /// Splits the selection by deletion path.
    ///
    /// Draft-only selections are removed right away. Otherwise nothing
    /// changes until [`Self::finish_removal`] reports the remote result.
    pub fn plan_removal(&mut self) -> Option<RemovalStep> {
        if !self.can_edit() || self.selection.is_empty() || self.confirm_loading {
            return None;
        }

        let plan = RemovalPlan {
            row_ids: self.selection.keys.clone(),
            persisted: self
                .selection
                .rows
                .iter()
                .filter_map(TenantRow::to_removable)
                .collect(),
            session: self.session,
        };

        if plan.persisted.is_empty() {
            let removed = self.drop_rows(&plan.row_ids);
            Some(RemovalStep::Done { removed })
        } else {
            self.confirm_loading = true;
            Some(RemovalStep::Remote(plan))
        }
    }

    /// Applies the result of the remote removal of `plan`.
    pub fn finish_removal(&mut self, plan: &RemovalPlan, result: ApiResult<()>) {
        if !self.is_open() || plan.session != self.session {
            debug!("Dropping removal result of an earlier modal session");
            return;
        }
        self.confirm_loading = false;
        match result {
            Ok(()) => {
                info!(
                    "Removed {} tenant(s) from card {:?}",
                    plan.persisted.len(),
                    self.card_id
                );
                self.drop_rows(&plan.row_ids);
            }
            Err(err) => {
                warn!(
                    "Failed to remove tenants from card {:?}: {err}",
                    self.card_id
                );
            }
        }
    }

    fn drop_rows(&mut self, ids: &[RowId]) -> usize {
        let previous_len = self.rows.len();
        self.rows.retain(|row| !ids.contains(&row.id()));
        let removed = previous_len - self.rows.len();
        self.pagination = self.pagination.remove_items(removed, previous_len);
        self.selection = Selection::default();
        self.notice = Some(Notice::Removed(removed));
        removed
    }

    pub fn is_confirm_loading(&self) -> bool {
        self.confirm_loading
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // =====================
    // Confirm / save
    // =====================

    /// OK button.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        if self.phase != ModalPhase::Editing {
            return ConfirmOutcome::Blocked;
        }
        if self.disabled || !self.has_drafts() {
            self.close();
            return ConfirmOutcome::Close;
        }
        let Some(card_id) = self.card_id else {
            warn!("Cannot save tenants of a modal without a card id");
            return ConfirmOutcome::Blocked;
        };

        let mut all_valid = true;
        for row in self.rows.iter_mut().filter(|row| row.is_draft()) {
            all_valid &= row.validate();
        }
        if !all_valid {
            debug!("Save blocked: draft tenant rows are incomplete");
            return ConfirmOutcome::Blocked;
        }

        let payload: Vec<NewCardTenant> = self
            .draft_rows()
            .filter_map(|row| row.to_new_assignment(card_id))
            .collect();
        self.phase = ModalPhase::Saving;
        self.confirm_loading = true;
        ConfirmOutcome::Save(payload)
    }

    /// Applies the save result. Success closes the modal.
    pub fn finish_save(&mut self, result: ApiResult<()>) {
        if self.phase != ModalPhase::Saving {
            return;
        }
        self.confirm_loading = false;
        match result {
            Ok(()) => {
                info!("Saved tenant assignments of card {:?}", self.card_id);
                self.selection = Selection::default();
                self.close();
            }
            Err(err) => {
                warn!("Failed to save tenants of card {:?}: {err}", self.card_id);
                self.phase = ModalPhase::Editing;
            }
        }
    }
}

fn dedup_rows(rows: Vec<TenantRow>) -> Vec<TenantRow> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut unique = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(row.id()) {
            unique.push(row);
        } else {
            warn!("Dropping duplicate tenant row {}", row.id());
        }
    }
    unique
}
