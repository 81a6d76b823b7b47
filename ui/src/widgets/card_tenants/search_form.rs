//! Search form above the assigned tenants table.

use cardtenant_business::SearchForm;
use chrono::{Local, NaiveDate, NaiveDateTime};
use egui::Ui;
use egui_extras::DatePickerButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Search,
    Reset,
}

/// Renders the form and mounts it on first render.
pub fn search_form(ui: &mut Ui, form: &mut SearchForm) -> Option<SearchAction> {
    form.mount();
    let fields = form.fields_mut();
    let mut action = None;

    egui::Grid::new("card_tenant_search_form")
        .num_columns(4)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Tenant Code:");
            ui.text_edit_singleline(&mut fields.tenant_num);
            ui.label("Tenant Name:");
            ui.text_edit_singleline(&mut fields.tenant_name);
            ui.end_row();

            ui.label("Registered From:");
            date_field(ui, "begin_date", &mut fields.begin_date, start_of_day);
            ui.label("Registered To:");
            date_field(ui, "end_date", &mut fields.end_date, end_of_day);
            ui.end_row();
        });

    ui.horizontal(|ui| {
        if ui.button("Search").clicked() {
            action = Some(SearchAction::Search);
        }
        if ui.button("Reset").clicked() {
            action = Some(SearchAction::Reset);
        }
    });

    action
}

/// Date picker with a clear button. Stores `to_datetime(date)`.
fn date_field(
    ui: &mut Ui,
    id: &str,
    value: &mut Option<NaiveDateTime>,
    to_datetime: fn(NaiveDate) -> Option<NaiveDateTime>,
) {
    ui.horizontal(|ui| {
        let mut date = value.map_or_else(|| Local::now().date_naive(), |v| v.date());
        if ui
            .add(DatePickerButton::new(&mut date).id_salt(id))
            .changed()
        {
            *value = to_datetime(date);
        }
        if value.is_some() {
            if ui.small_button("✕").on_hover_text("Clear").clicked() {
                *value = None;
            }
        } else {
            ui.weak("any");
        }
    });
}

fn start_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
}

fn end_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(23, 59, 59)
}
