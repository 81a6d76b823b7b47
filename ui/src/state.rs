use std::sync::Arc;

use cardtenant_business::{BusinessConfig, CardId, HttpCardTenantApi};
use tokio::runtime::Handle;

use crate::widgets::CardTenantPanel;

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    /// Card id typed into the launcher, parsed when the modal opens.
    pub card_id_input: String,
    /// Opens the modal read-only.
    pub read_only: bool,
    pub card_tenants: CardTenantPanel,
}

impl State {
    pub fn new(config: BusinessConfig, runtime: Handle) -> Self {
        let api = Arc::new(HttpCardTenantApi::new(&config));
        let card_tenants = CardTenantPanel::new(&config, api, runtime);
        Self {
            config,
            card_id_input: String::new(),
            read_only: false,
            card_tenants,
        }
    }

    /// State against `base_url` on the current Tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url), Handle::current())
    }

    /// Card id from the launcher input. Blank or invalid input means none.
    pub fn parsed_card_id(&self) -> Option<CardId> {
        self.card_id_input.trim().parse().ok()
    }

    pub fn open_card_tenants(&mut self, ctx: &egui::Context) {
        let card_id = self.parsed_card_id();
        let read_only = self.read_only;
        self.card_tenants.open(ctx, card_id, read_only);
    }
}
