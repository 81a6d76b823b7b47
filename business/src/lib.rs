//! Headless state and HTTP client of the card tenant assignment modal.

pub mod card_tenants;
mod config;

pub use card_tenants::{
    ApiResult, CardId, CardTenantApi, CardTenantApiError, CardTenantModalState, CardTenantQuery,
    ConfirmOutcome, DATETIME_FORMAT, FieldError, HttpCardTenantApi, ModalPhase, NewCardTenant,
    Notice, Page, PageChange, Pagination, RemovableTenant, RemovalPlan, RemovalStep, RowId,
    RowStatus, SearchCriteria, SearchForm, Selection, SortOrder, SortSpec, TenantLookupQuery,
    TenantOption, TenantRow, workflow,
};
pub use config::{BusinessConfig, ConfigError, DEFAULT_PAGE_SIZE, DEFAULT_TENANT_LOV_CODE};
