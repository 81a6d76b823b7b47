//! In-memory `CardTenantApi` that records every call.

use std::sync::Mutex;

use async_trait::async_trait;
use cardtenant_business::{
    ApiResult, CardTenantApi, CardTenantApiError, CardTenantQuery, NewCardTenant, Page,
    RemovableTenant, TenantLookupQuery, TenantOption, TenantRow,
};

#[derive(Default)]
struct Recorded {
    fetches: Vec<CardTenantQuery>,
    removals: Vec<Vec<RemovableTenant>>,
    saves: Vec<Vec<NewCardTenant>>,
    lookups: Vec<TenantLookupQuery>,
}

#[derive(Default)]
pub struct MockCardTenantApi {
    rows: Mutex<Vec<TenantRow>>,
    options: Vec<TenantOption>,
    fail_fetch: Mutex<bool>,
    fail_remove: bool,
    fail_save: bool,
    recorded: Mutex<Recorded>,
}

impl MockCardTenantApi {
    pub fn with_rows(rows: Vec<TenantRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: Vec<TenantOption>) -> Self {
        self.options = options;
        self
    }

    pub fn failing_remove(mut self) -> Self {
        self.fail_remove = true;
        self
    }

    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        *self.fail_fetch.lock().unwrap() = fail;
    }

    pub fn fetches(&self) -> Vec<CardTenantQuery> {
        self.recorded.lock().unwrap().fetches.clone()
    }

    pub fn removals(&self) -> Vec<Vec<RemovableTenant>> {
        self.recorded.lock().unwrap().removals.clone()
    }

    pub fn saves(&self) -> Vec<Vec<NewCardTenant>> {
        self.recorded.lock().unwrap().saves.clone()
    }

    pub fn lookups(&self) -> Vec<TenantLookupQuery> {
        self.recorded.lock().unwrap().lookups.clone()
    }
}

#[async_trait]
impl CardTenantApi for MockCardTenantApi {
    async fn fetch_assigned_tenants(&self, query: &CardTenantQuery) -> ApiResult<Page<TenantRow>> {
        self.recorded.lock().unwrap().fetches.push(query.clone());
        if *self.fail_fetch.lock().unwrap() {
            return Err(CardTenantApiError::Status(500));
        }
        let rows = self.rows.lock().unwrap();
        let size = query.size.max(1) as usize;
        let content: Vec<TenantRow> = rows
            .iter()
            .skip(query.page as usize * size)
            .take(size)
            .cloned()
            .collect();
        Ok(Page::new(content, query.page, query.size, rows.len() as u64))
    }

    async fn remove_assigned_tenants(&self, rows: &[RemovableTenant]) -> ApiResult<()> {
        self.recorded.lock().unwrap().removals.push(rows.to_vec());
        if self.fail_remove {
            return Err(CardTenantApiError::Failed("removal rejected".to_owned()));
        }
        let mut stored = self.rows.lock().unwrap();
        stored.retain(|row| {
            !rows
                .iter()
                .any(|removed| row.id() == cardtenant_business::RowId::Persisted(removed.id))
        });
        Ok(())
    }

    async fn save_assigned_tenants(&self, rows: &[NewCardTenant]) -> ApiResult<()> {
        self.recorded.lock().unwrap().saves.push(rows.to_vec());
        if self.fail_save {
            return Err(CardTenantApiError::Status(500));
        }
        Ok(())
    }

    async fn lookup_tenants(&self, query: &TenantLookupQuery) -> ApiResult<Page<TenantOption>> {
        self.recorded.lock().unwrap().lookups.push(query.clone());
        let keyword = query.keyword.trim();
        let content: Vec<TenantOption> = self
            .options
            .iter()
            .filter(|option| keyword.is_empty() || option.tenant_num.contains(keyword))
            .cloned()
            .collect();
        let total = content.len() as u64;
        Ok(Page::new(content, 0, query.size, total))
    }
}

pub fn tenant_option(tenant_id: i64, tenant_num: &str, tenant_name: &str) -> TenantOption {
    TenantOption {
        tenant_id,
        tenant_num: tenant_num.to_owned(),
        tenant_name: Some(tenant_name.to_owned()),
        creation_date: None,
    }
}

/// `count` persisted rows with ids `1..=count`.
pub fn persisted_rows(count: i64) -> Vec<TenantRow> {
    (1..=count)
        .map(|id| {
            TenantRow::persisted(id, 100 + id, format!("T-{:03}", 100 + id))
                .with_name(format!("Tenant {id}"))
        })
        .collect()
}
