//! Cell rendering for the assigned tenants table.

use cardtenant_business::{DATETIME_FORMAT, FieldError};
use chrono::NaiveDateTime;
use egui::{Color32, RichText, Ui};

#[inline]
pub fn render_select_cell(ui: &mut Ui, checked: bool) -> Option<bool> {
    let mut checked = checked;
    let mut toggled = None;
    ui.centered_and_justified(|ui| {
        if ui.checkbox(&mut checked, "").changed() {
            toggled = Some(checked);
        }
    });
    toggled
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: Option<&str>) {
    ui.label(text.unwrap_or_default());
}

#[inline]
pub fn render_timestamp_cell(ui: &mut Ui, value: Option<NaiveDateTime>) {
    match value {
        Some(value) => ui.label(
            RichText::new(value.format(DATETIME_FORMAT).to_string())
                .monospace()
                .small(),
        ),
        None => ui.label(""),
    };
}

/// What the user did in an editable tenant code cell.
pub enum TenantCellAction {
    Pick,
    Clear,
}

/// Tenant code of a draft row: a picker button plus inline error.
#[inline]
pub fn render_tenant_picker_cell(
    ui: &mut Ui,
    tenant_num: Option<&str>,
    error: Option<FieldError>,
) -> Option<TenantCellAction> {
    let mut action = None;
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            let text = tenant_num.unwrap_or("Select tenant...");
            if ui.button(text).clicked() {
                action = Some(TenantCellAction::Pick);
            }
            if tenant_num.is_some() && ui.small_button("✕").on_hover_text("Clear").clicked() {
                action = Some(TenantCellAction::Clear);
            }
        });
        if let Some(error) = error {
            ui.label(
                RichText::new(error.to_string())
                    .color(Color32::from_rgb(220, 53, 69))
                    .small(),
            );
        }
    });
    action
}
