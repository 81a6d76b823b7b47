//! Tenant picker for draft rows.

use cardtenant_business::{ApiResult, Page, RowId, TenantLookupQuery, TenantOption};
use egui::{Color32, RichText, ScrollArea, Ui, Window};
use log::warn;

/// Lookup window state. Open while `row` is set.
#[derive(Debug, Default)]
pub struct TenantPicker {
    row: Option<RowId>,
    pub keyword: String,
    options: Vec<TenantOption>,
    loading: bool,
    error: Option<String>,
}

impl TenantPicker {
    /// Opens the picker for `row` and returns the initial lookup.
    pub fn open_for(&mut self, row: RowId, lov_code: &str) -> TenantLookupQuery {
        *self = Self {
            row: Some(row),
            loading: true,
            ..Self::default()
        };
        TenantLookupQuery::new(lov_code, "")
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn row(&self) -> Option<RowId> {
        self.row
    }

    pub fn is_open(&self) -> bool {
        self.row.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn options(&self) -> &[TenantOption] {
        &self.options
    }

    /// Query for the current keyword.
    pub fn search(&mut self, lov_code: &str) -> TenantLookupQuery {
        self.loading = true;
        self.error = None;
        TenantLookupQuery::new(lov_code, self.keyword.clone())
    }

    pub fn apply_results(&mut self, row: RowId, result: ApiResult<Page<TenantOption>>) {
        if self.row != Some(row) {
            return;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.options = page.content;
                self.error = None;
            }
            Err(err) => {
                warn!("Tenant lookup failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }
}

pub enum PickerAction {
    Search,
    Pick(RowId, TenantOption),
    Close,
}

/// Renders the picker window when it is open.
pub fn tenant_picker_window(ctx: &egui::Context, picker: &mut TenantPicker) -> Option<PickerAction> {
    let row = picker.row?;
    let mut action = None;
    let mut open = true;

    Window::new("Select Tenant")
        .id(egui::Id::new("card_tenant_picker"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Tenant Code:");
                let response = ui.text_edit_singleline(&mut picker.keyword);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Search").clicked() || submitted {
                    action = Some(PickerAction::Search);
                }
            });

            if let Some(error) = &picker.error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
            }

            ui.separator();

            if picker.loading {
                ui.label("Loading...");
            } else if picker.options.is_empty() {
                ui.label(RichText::new("No tenants found").weak());
            }

            ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                for option in &picker.options {
                    if option_button(ui, option) {
                        action = Some(PickerAction::Pick(row, option.clone()));
                    }
                }
            });
        });

    if !open {
        action = Some(PickerAction::Close);
    }
    action
}

fn option_button(ui: &mut Ui, option: &TenantOption) -> bool {
    let text = match &option.tenant_name {
        Some(name) => format!("{} {name}", option.tenant_num),
        None => option.tenant_num.clone(),
    };
    ui.selectable_label(false, text).clicked()
}
