//! Row rendering for the assigned tenants table.

use cardtenant_business::TenantRow;
use egui::{Stroke, Ui};
use egui_extras::TableRow;

use super::TableAction;
use super::cells::{
    TenantCellAction, render_select_cell, render_tenant_picker_cell, render_text_cell,
    render_timestamp_cell,
};

pub struct TenantRowData<'a> {
    pub row: &'a TenantRow,
    /// `None` when the modal is read-only and has no selection column.
    pub selected: Option<bool>,
    pub editable: bool,
}

/// Renders one row. Draft rows get an editable tenant code cell.
#[inline]
pub fn render_tenant_row(table_row: &mut TableRow<'_, '_>, data: &TenantRowData<'_>) -> Option<TableAction> {
    let mut action = None;
    let row = data.row;
    let id = row.id();

    if let Some(selected) = data.selected {
        table_row.col(|ui| {
            if let Some(checked) = render_select_cell(ui, selected) {
                action = Some(TableAction::Toggle(id, checked));
            }
            draw_cell_bottom_border(ui);
        });
    }

    table_row.col(|ui| {
        if row.is_draft() && data.editable {
            match render_tenant_picker_cell(ui, row.tenant_num.as_deref(), row.field_error()) {
                Some(TenantCellAction::Pick) => action = Some(TableAction::PickTenant(id)),
                Some(TenantCellAction::Clear) => action = Some(TableAction::ClearTenant(id)),
                None => {}
            }
        } else {
            render_text_cell(ui, row.tenant_num.as_deref());
        }
        draw_cell_bottom_border(ui);
    });

    table_row.col(|ui| {
        render_text_cell(ui, row.tenant_name.as_deref());
        draw_cell_bottom_border(ui);
    });

    table_row.col(|ui| {
        render_timestamp_cell(ui, row.creation_date);
        draw_cell_bottom_border(ui);
    });

    action
}

#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
