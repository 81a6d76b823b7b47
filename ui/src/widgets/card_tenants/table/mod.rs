//! Assigned tenants table, split into columns, header, row and cells.

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use cardtenant_business::{CardTenantModalState, RowId, SortSpec};
use egui::{RichText, Ui};
use egui_extras::TableBuilder;

use columns::{DRAFT_ROW_HEIGHT, HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::{HeaderSelection, render_table_header};
use row::{TenantRowData, render_tenant_row};

/// Interaction collected while rendering, applied after the table is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    Toggle(RowId, bool),
    SelectAll(bool),
    PickTenant(RowId),
    ClearTenant(RowId),
    /// `None` clears the sort.
    Sort(Option<SortSpec>),
}

pub fn tenant_table(ui: &mut Ui, modal: &CardTenantModalState) -> Option<TableAction> {
    let editable = !modal.is_disabled();
    let rows = modal.rows();
    let selection = modal.selection();
    let mut action = None;

    let header_selection = editable.then(|| HeaderSelection {
        all_checked: !rows.is_empty() && selection.len() == rows.len(),
    });

    let mut builder = TableBuilder::new(ui)
        .id_salt("card_tenant_table")
        .striped(true)
        .resizable(false)
        .max_scroll_height(360.0);
    for column in table_columns(editable) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if let Some(next) =
                render_table_header(&mut header, header_selection, modal.pagination().sort.as_ref())
            {
                action = Some(next);
            }
        })
        .body(|mut body| {
            for tenant in rows {
                let height = if tenant.is_draft() {
                    DRAFT_ROW_HEIGHT
                } else {
                    ROW_HEIGHT
                };
                body.row(height, |mut table_row| {
                    let data = TenantRowData {
                        row: tenant,
                        selected: editable.then(|| selection.contains(tenant.id())),
                        editable,
                    };
                    if let Some(next) = render_tenant_row(&mut table_row, &data) {
                        action = Some(next);
                    }
                });
            }
        });

    if rows.is_empty() {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No tenants assigned").weak());
        });
    }

    action
}
