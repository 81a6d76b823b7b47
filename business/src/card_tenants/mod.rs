//! Card tenant assignment: rows, pagination, queries, the modal state
//! machine and the collaborator contract it talks to.

mod api;
mod pagination;
mod query;
mod state;
mod types;
pub mod workflow;

pub use api::{ApiResult, CardTenantApi, CardTenantApiError, HttpCardTenantApi};
pub use pagination::{PageChange, Pagination, SortOrder, SortSpec};
pub use query::{CardTenantQuery, SearchCriteria, SearchForm, TenantLookupQuery};
pub use state::{
    CardTenantModalState, ConfirmOutcome, ModalPhase, Notice, RemovalPlan, RemovalStep, Selection,
};
pub use types::{
    CardId, DATETIME_FORMAT, FieldError, NewCardTenant, Page, RemovableTenant, RowId, RowStatus,
    TenantOption, TenantRow,
};
