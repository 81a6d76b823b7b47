use std::time::Duration;

use cardtenant_ui::state::State;
use cardtenant_ui::widgets::{card_tenant_modal, poll_card_tenant_messages};
use egui_kittest::Harness;
use wiremock::MockServer;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Harness rendering only the modal against a fresh mock server.
    /// Mount mocks with [`Self::mock_server`] before opening the modal.
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let state = State::test(mock_server.uri());

        let harness = Harness::builder()
            .with_size(egui::vec2(1000.0, 800.0))
            .build_ui_state(
                |ui, state: &mut State| {
                    poll_card_tenant_messages(&mut state.card_tenants);
                    let ctx = ui.ctx().clone();
                    card_tenant_modal(&ctx, &mut state.card_tenants);
                },
                state,
            );

        Self {
            mock_server,
            harness,
        }
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    pub fn open(&mut self, card_id: Option<i64>, disabled: bool) {
        let ctx = self.harness.ctx.clone();
        self.harness
            .state_mut()
            .card_tenants
            .open(&ctx, card_id, disabled);
        self.harness.step();
    }

    /// Steps frames until `done` holds or the timeout elapses.
    pub async fn wait_until(&mut self, done: impl Fn(&Harness<'a, State>) -> bool) -> bool {
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();
            if done(&self.harness) {
                return true;
            }
        }
        false
    }

    /// Lets in-flight background calls finish.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();
        }
    }
}
