//! Table header with select-all and sortable columns.

use cardtenant_business::{SortOrder, SortSpec};
use egui::{Label, RichText, Sense, Ui};
use egui_extras::TableRow;

use super::TableAction;

/// Header label and wire field of each data column.
const HEADERS: [(&str, &str); 3] = [
    ("Tenant Code", "tenantNum"),
    ("Tenant Name", "tenantName"),
    ("Registered At", "creationDate"),
];

/// Select-all checkbox state of the header.
pub struct HeaderSelection {
    pub all_checked: bool,
}

/// Renders the header row. Clicking a sortable label cycles
/// ascending, descending, unsorted.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    selection: Option<HeaderSelection>,
    sort: Option<&SortSpec>,
) -> Option<TableAction> {
    let mut action = None;

    if let Some(HeaderSelection { mut all_checked }) = selection {
        header.col(|ui| {
            ui.centered_and_justified(|ui| {
                if ui.checkbox(&mut all_checked, "").changed() {
                    action = Some(TableAction::SelectAll(all_checked));
                }
            });
        });
    }

    for (label, field) in HEADERS {
        header.col(|ui| {
            if let Some(next) = render_sortable_cell(ui, label, field, sort) {
                action = Some(TableAction::Sort(next));
            }
        });
    }

    action
}

fn render_sortable_cell(
    ui: &mut Ui,
    label: &str,
    field: &str,
    sort: Option<&SortSpec>,
) -> Option<Option<SortSpec>> {
    let current = sort.filter(|s| s.field == field).map(|s| s.order);
    let marker = match current {
        Some(SortOrder::Ascend) => " ⏶",
        Some(SortOrder::Descend) => " ⏷",
        None => "",
    };

    let clicked = ui
        .add(
            Label::new(RichText::new(format!("{label}{marker}")).strong())
                .selectable(false)
                .sense(Sense::click()),
        )
        .clicked();

    clicked.then(|| next_sort(field, current))
}

fn next_sort(field: &str, current: Option<SortOrder>) -> Option<SortSpec> {
    match current {
        None => Some(SortSpec::new(field, SortOrder::Ascend)),
        Some(SortOrder::Ascend) => Some(SortSpec::new(field, SortOrder::Descend)),
        Some(SortOrder::Descend) => None,
    }
}
