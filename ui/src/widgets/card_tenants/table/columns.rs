//! Column definitions for the assigned tenants table.

use egui_extras::Column;

pub const SELECT_WIDTH: f32 = 32.0;
pub const TENANT_CODE_WIDTH: f32 = 200.0;
pub const CREATION_DATE_WIDTH: f32 = 180.0;
pub const ROW_HEIGHT: f32 = 30.0;
/// Draft rows leave room for the inline validation message.
pub const DRAFT_ROW_HEIGHT: f32 = 46.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Columns in order: selection (editable modals only), Tenant Code,
/// Tenant Name, Registered At.
#[inline]
pub fn table_columns(selectable: bool) -> Vec<Column> {
    let mut columns = Vec::with_capacity(4);
    if selectable {
        columns.push(Column::exact(SELECT_WIDTH));
    }
    columns.push(Column::exact(TENANT_CODE_WIDTH));
    columns.push(Column::remainder().at_least(160.0));
    columns.push(Column::exact(CREATION_DATE_WIDTH));
    columns
}
