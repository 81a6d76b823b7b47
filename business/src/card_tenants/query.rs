//! Query building for the assigned-tenants list and the tenant picker.

use chrono::NaiveDateTime;

use super::pagination::SortSpec;
use super::types::{CardId, DATETIME_FORMAT};

/// Fields of the search form above the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub tenant_num: String,
    pub tenant_name: String,
    pub begin_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.tenant_num.trim().is_empty()
            && self.tenant_name.trim().is_empty()
            && self.begin_date.is_none()
            && self.end_date.is_none()
    }
}

/// The search form owned by the modal.
///
/// Criteria are pulled when a query is built. Before the form has been
/// rendered for the first time it contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    mounted: bool,
    fields: SearchCriteria,
}

impl SearchForm {
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn fields(&self) -> &SearchCriteria {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut SearchCriteria {
        &mut self.fields
    }

    pub fn reset_fields(&mut self) {
        self.fields = SearchCriteria::default();
    }

    /// Current criteria, or `None` while the form is not mounted.
    pub fn criteria(&self) -> Option<&SearchCriteria> {
        self.mounted.then_some(&self.fields)
    }
}

/// Query for `fetch_assigned_tenants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTenantQuery {
    pub card_id: CardId,
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
    pub sort: Option<SortSpec>,
    pub criteria: Option<SearchCriteria>,
}

impl CardTenantQuery {
    /// Query string pairs. Blank criteria are omitted and dates use
    /// [`DATETIME_FORMAT`].
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("cardId", self.card_id.to_string()),
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];

        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.to_string()));
        }

        if let Some(criteria) = &self.criteria {
            let tenant_num = criteria.tenant_num.trim();
            if !tenant_num.is_empty() {
                pairs.push(("tenantNum", tenant_num.to_owned()));
            }
            let tenant_name = criteria.tenant_name.trim();
            if !tenant_name.is_empty() {
                pairs.push(("tenantName", tenant_name.to_owned()));
            }
            if let Some(begin) = criteria.begin_date {
                pairs.push(("beginDate", begin.format(DATETIME_FORMAT).to_string()));
            }
            if let Some(end) = criteria.end_date {
                pairs.push(("endDate", end.format(DATETIME_FORMAT).to_string()));
            }
        }

        pairs
    }
}

/// Query for the tenant picker's lookup source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantLookupQuery {
    pub lov_code: String,
    pub keyword: String,
    pub page: u32,
    pub size: u32,
}

impl TenantLookupQuery {
    pub fn new(lov_code: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            lov_code: lov_code.into(),
            keyword: keyword.into(),
            page: 0,
            size: 10,
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lovCode", self.lov_code.clone()),
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        let keyword = self.keyword.trim();
        if !keyword.is_empty() {
            pairs.push(("tenantNum", keyword.to_owned()));
        }
        pairs
    }
}
