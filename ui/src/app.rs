use crate::{state::State, widgets};

pub struct CardTenantApp {
    state: State,
}

impl CardTenantApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for CardTenantApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply finished background calls before drawing
        widgets::poll_card_tenant_messages(&mut self.state.card_tenants);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label(format!("API: {}", self.state.config.api_url()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Dashboard Cards");
            launcher(ui, &mut self.state);
        });

        widgets::card_tenant_modal(ctx, &mut self.state.card_tenants);
    }
}

fn launcher(ui: &mut egui::Ui, state: &mut State) {
    ui.horizontal(|ui| {
        ui.label("Card ID:");
        ui.text_edit_singleline(&mut state.card_id_input);
        ui.checkbox(&mut state.read_only, "Read only");
        if ui.button("Assign Tenants").clicked() {
            state.open_card_tenants(ui.ctx());
        }
    });

    if !state.card_id_input.trim().is_empty() && state.parsed_card_id().is_none() {
        ui.colored_label(egui::Color32::RED, "Card ID must be a number");
    }
}
