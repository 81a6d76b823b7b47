//! The card tenant assignment modal window.

use std::sync::Arc;

use cardtenant_business::{
    BusinessConfig, CardId, CardTenantApi, CardTenantModalState, ConfirmOutcome, ModalPhase,
    Notice, PageChange, Pagination, RemovalStep,
};
use egui::{Color32, RichText, Ui, Window};
use tokio::runtime::Handle;

use super::lov::{PickerAction, TenantPicker, tenant_picker_window};
use super::search_form::{SearchAction, search_form};
use super::table::{TableAction, tenant_table};
use super::tasks::CardTenantTasks;

/// Everything the modal needs between frames.
pub struct CardTenantPanel {
    pub modal: CardTenantModalState,
    pub picker: TenantPicker,
    pub tasks: CardTenantTasks,
    lov_code: String,
}

impl CardTenantPanel {
    pub fn new(config: &BusinessConfig, api: Arc<dyn CardTenantApi>, runtime: Handle) -> Self {
        Self {
            modal: CardTenantModalState::new(config.page_size),
            picker: TenantPicker::default(),
            tasks: CardTenantTasks::new(api, runtime),
            lov_code: config.tenant_lov_code.clone(),
        }
    }

    /// Opens the modal and starts loading the first page.
    pub fn open(&mut self, ctx: &egui::Context, card_id: Option<CardId>, disabled: bool) {
        self.picker.close();
        if let Some(query) = self.modal.open(card_id, disabled) {
            self.tasks.fetch(ctx, query);
        }
    }

    fn fetch(&mut self, ctx: &egui::Context, change: PageChange) {
        if let Some(query) = self.modal.fetch_query(change) {
            self.tasks.fetch(ctx, query);
        }
    }

    fn remove_selected(&mut self, ctx: &egui::Context) {
        if let Some(RemovalStep::Remote(plan)) = self.modal.plan_removal() {
            self.tasks.remove(ctx, plan);
        }
    }

    fn confirm(&mut self, ctx: &egui::Context) {
        match self.modal.confirm() {
            ConfirmOutcome::Save(rows) => self.tasks.save(ctx, rows),
            ConfirmOutcome::Close => self.picker.close(),
            ConfirmOutcome::Blocked => {}
        }
    }

    fn cancel(&mut self) {
        self.modal.cancel();
        self.picker.close();
    }

    fn apply_table_action(&mut self, ctx: &egui::Context, action: TableAction) {
        match action {
            TableAction::Toggle(id, checked) => self.modal.toggle_row(id, checked),
            TableAction::SelectAll(checked) => self.modal.select_all(checked),
            TableAction::PickTenant(id) => {
                let query = self.picker.open_for(id, &self.lov_code);
                self.tasks.lookup(ctx, id, query);
            }
            TableAction::ClearTenant(id) => {
                self.modal.clear_tenant(id);
            }
            TableAction::Sort(sort) => {
                let pagination = self.modal.pagination();
                let change = PageChange::Goto {
                    current: pagination.current,
                    page_size: pagination.base_page_size,
                    sort,
                };
                self.fetch(ctx, change);
            }
        }
    }

    fn apply_picker_action(&mut self, ctx: &egui::Context, action: PickerAction) {
        match action {
            PickerAction::Search => {
                if let Some(row) = self.picker.row() {
                    let query = self.picker.search(&self.lov_code);
                    self.tasks.lookup(ctx, row, query);
                }
            }
            PickerAction::Pick(row, tenant) => {
                self.modal.pick_tenant(row, &tenant);
                self.picker.close();
            }
            PickerAction::Close => self.picker.close(),
        }
    }
}

/// Renders the modal while it is open.
pub fn card_tenant_modal(ctx: &egui::Context, panel: &mut CardTenantPanel) {
    if !panel.modal.is_open() {
        return;
    }

    let mut open = true;
    let mut search_action = None;
    let mut table_action = None;
    let mut page_change = None;
    let mut add_clicked = false;
    let mut remove_clicked = false;
    let mut ok_clicked = false;
    let mut cancel_clicked = false;

    Window::new("Assign Tenants")
        .id(egui::Id::new("card_tenant_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(760.0)
        .show(ctx, |ui| {
            let modal = &mut panel.modal;

            search_action = search_form(ui, modal.search_form_mut());
            ui.separator();

            if !modal.is_disabled() {
                ui.horizontal(|ui| {
                    add_clicked = ui.button("Add").clicked();
                    let can_remove =
                        !modal.selection().is_empty() && !modal.is_confirm_loading();
                    remove_clicked = ui
                        .add_enabled(can_remove, egui::Button::new("Remove"))
                        .clicked();
                });
            }

            if let Some(Notice::Removed(count)) = modal.notice() {
                ui.horizontal(|ui| {
                    ui.colored_label(
                        Color32::from_rgb(34, 139, 34),
                        format!("Removed {count} tenant(s)"),
                    );
                    if ui.small_button("✕").clicked() {
                        modal.dismiss_notice();
                    }
                });
            }

            if modal.is_fetching() {
                ui.label("Loading...");
            }

            table_action = tenant_table(ui, modal);
            page_change = pager(ui, modal.pagination());

            ui.separator();
            ui.horizontal(|ui| {
                let saving = modal.phase() == ModalPhase::Saving;
                let label = if saving { "Saving..." } else { "OK" };
                ok_clicked = ui
                    .add_enabled(!modal.is_confirm_loading(), egui::Button::new(label))
                    .clicked();
                cancel_clicked = ui.button("Cancel").clicked();
            });
        });

    match search_action {
        Some(SearchAction::Search) => panel.fetch(ctx, PageChange::FirstPage),
        Some(SearchAction::Reset) => panel.modal.search_form_mut().reset_fields(),
        None => {}
    }
    if add_clicked {
        panel.modal.add_row();
    }
    if remove_clicked {
        panel.remove_selected(ctx);
    }
    if let Some(action) = table_action {
        panel.apply_table_action(ctx, action);
    }
    if let Some(change) = page_change {
        panel.fetch(ctx, change);
    }

    if let Some(action) = tenant_picker_window(ctx, &mut panel.picker) {
        panel.apply_picker_action(ctx, action);
    }

    if ok_clicked {
        panel.confirm(ctx);
    } else if cancel_clicked || !open {
        panel.cancel();
    }
}

fn pager(ui: &mut Ui, pagination: &Pagination) -> Option<PageChange> {
    let mut change = None;
    let pages = pagination.total_pages();
    let goto = |current: u32| PageChange::Goto {
        current,
        page_size: pagination.base_page_size,
        sort: pagination.sort.clone(),
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Total {}", pagination.total)).weak());
        if ui
            .add_enabled(pagination.current > 1, egui::Button::new("‹ Prev"))
            .clicked()
        {
            change = Some(goto(pagination.current - 1));
        }
        ui.label(format!("Page {} / {pages}", pagination.current));
        if ui
            .add_enabled(pagination.current < pages, egui::Button::new("Next ›"))
            .clicked()
        {
            change = Some(goto(pagination.current + 1));
        }
    });

    change
}
