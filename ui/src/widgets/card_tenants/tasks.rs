//! Background calls for the card tenant modal.
//!
//! Every collaborator call runs on the Tokio runtime and reports back
//! through a flume channel. The frame loop drains the channel with
//! [`poll_card_tenant_messages`] so state is only mutated on the UI thread.

use std::future::Future;
use std::sync::Arc;

use cardtenant_business::{
    ApiResult, CardTenantApi, CardTenantQuery, NewCardTenant, Page, RemovalPlan, RowId,
    TenantLookupQuery, TenantOption, TenantRow,
};
use flume::{Receiver, Sender, TryRecvError};
use log::warn;
use tokio::runtime::Handle;

use super::panel::CardTenantPanel;

/// Result of a background call, applied by the frame loop.
#[derive(Debug)]
pub enum ModalMessage {
    Fetched {
        query: CardTenantQuery,
        result: ApiResult<Page<TenantRow>>,
    },
    Removed {
        plan: RemovalPlan,
        result: ApiResult<()>,
    },
    Saved {
        result: ApiResult<()>,
    },
    TenantsFound {
        row: RowId,
        result: ApiResult<Page<TenantOption>>,
    },
}

pub struct CardTenantTasks {
    api: Arc<dyn CardTenantApi>,
    runtime: Handle,
    sender: Sender<ModalMessage>,
    receiver: Receiver<ModalMessage>,
}

impl CardTenantTasks {
    pub fn new(api: Arc<dyn CardTenantApi>, runtime: Handle) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            api,
            runtime,
            sender,
            receiver,
        }
    }

    fn spawn<F>(&self, ctx: &egui::Context, task: F)
    where
        F: Future<Output = ModalMessage> + Send + 'static,
    {
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let message = task.await;
            if sender.send_async(message).await.is_err() {
                warn!("Card tenant modal is gone, dropping result");
            }
            ctx.request_repaint();
        });
    }

    pub fn fetch(&self, ctx: &egui::Context, query: CardTenantQuery) {
        let api = Arc::clone(&self.api);
        self.spawn(ctx, async move {
            let result = api.fetch_assigned_tenants(&query).await;
            ModalMessage::Fetched { query, result }
        });
    }

    pub fn remove(&self, ctx: &egui::Context, plan: RemovalPlan) {
        let api = Arc::clone(&self.api);
        self.spawn(ctx, async move {
            let result = api.remove_assigned_tenants(&plan.persisted).await;
            ModalMessage::Removed { plan, result }
        });
    }

    pub fn save(&self, ctx: &egui::Context, rows: Vec<NewCardTenant>) {
        let api = Arc::clone(&self.api);
        self.spawn(ctx, async move {
            let result = api.save_assigned_tenants(&rows).await;
            ModalMessage::Saved { result }
        });
    }

    pub fn lookup(&self, ctx: &egui::Context, row: RowId, query: TenantLookupQuery) {
        let api = Arc::clone(&self.api);
        self.spawn(ctx, async move {
            let result = api.lookup_tenants(&query).await;
            ModalMessage::TenantsFound { row, result }
        });
    }

    fn try_recv(&self) -> Option<ModalMessage> {
        match self.receiver.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Applies every finished background call. Call once per frame.
pub fn poll_card_tenant_messages(panel: &mut CardTenantPanel) {
    while let Some(message) = panel.tasks.try_recv() {
        match message {
            ModalMessage::Fetched { query, result } => panel.modal.apply_fetch(&query, result),
            ModalMessage::Removed { plan, result } => panel.modal.finish_removal(&plan, result),
            ModalMessage::Saved { result } => {
                panel.modal.finish_save(result);
                if !panel.modal.is_open() {
                    panel.picker.close();
                }
            }
            ModalMessage::TenantsFound { row, result } => panel.picker.apply_results(row, result),
        }
    }
}
