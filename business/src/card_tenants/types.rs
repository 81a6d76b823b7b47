//! Row and payload types for card tenant assignments.
//!
//! Server rows arrive as camelCase JSON. Every field the table does not
//! interpret is kept in `extra` so it can be echoed back on removal.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Identifier of the dashboard card that owns the assignments.
pub type CardId = i64;

/// Wire format of every timestamp exchanged with the platform API.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identifier of a row in the assignment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowId {
    /// Primary key assigned by the server.
    Persisted(i64),
    /// Client-generated key of a row that has not been saved yet.
    Draft(Uuid),
}

impl RowId {
    pub fn new_draft() -> Self {
        Self::Draft(Uuid::new_v4())
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, Self::Draft(_))
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persisted(id) => write!(f, "{id}"),
            Self::Draft(uuid) => write!(f, "{uuid}"),
        }
    }
}

/// Transient tag telling saved rows apart from rows added in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowStatus {
    /// Added in the modal, not saved yet.
    Create,
    #[default]
    Persisted,
}

/// Inline validation error of a draft row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    TenantRequired,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TenantRequired => f.write_str("Tenant code is required"),
        }
    }
}

/// One tenant assigned to the card.
#[derive(Debug, Clone, PartialEq)]
pub struct TenantRow {
    id: RowId,
    status: RowStatus,
    pub tenant_id: Option<i64>,
    pub tenant_num: Option<String>,
    pub tenant_name: Option<String>,
    pub creation_date: Option<NaiveDateTime>,
    /// Remaining server fields (`cardId`, `objectVersionNumber`, ...).
    pub extra: Map<String, Value>,
    field_error: Option<FieldError>,
}

impl TenantRow {
    /// A fresh unsaved row with a client-generated id.
    pub fn draft() -> Self {
        Self {
            id: RowId::new_draft(),
            status: RowStatus::Create,
            tenant_id: None,
            tenant_num: None,
            tenant_name: None,
            creation_date: None,
            extra: Map::new(),
            field_error: None,
        }
    }

    /// A saved row as the server would return it.
    pub fn persisted(id: i64, tenant_id: i64, tenant_num: impl Into<String>) -> Self {
        Self {
            id: RowId::Persisted(id),
            status: RowStatus::Persisted,
            tenant_id: Some(tenant_id),
            tenant_num: Some(tenant_num.into()),
            tenant_name: None,
            creation_date: None,
            extra: Map::new(),
            field_error: None,
        }
    }

    pub fn with_name(mut self, tenant_name: impl Into<String>) -> Self {
        self.tenant_name = Some(tenant_name.into());
        self
    }

    pub fn with_creation_date(mut self, creation_date: NaiveDateTime) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn status(&self) -> RowStatus {
        self.status
    }

    pub fn is_draft(&self) -> bool {
        self.status == RowStatus::Create
    }

    pub fn field_error(&self) -> Option<FieldError> {
        self.field_error
    }

    /// Fills the editable fields from a picked tenant.
    pub(crate) fn apply_tenant(&mut self, tenant: &TenantOption) {
        self.tenant_id = Some(tenant.tenant_id);
        self.tenant_num = Some(tenant.tenant_num.clone());
        self.tenant_name = tenant.tenant_name.clone();
        self.creation_date = tenant.creation_date;
        self.field_error = None;
    }

    pub(crate) fn clear_tenant(&mut self) {
        self.tenant_id = None;
        self.tenant_num = None;
        self.tenant_name = None;
        self.creation_date = None;
    }

    /// Checks the required editable fields, recording the error on the row.
    pub(crate) fn validate(&mut self) -> bool {
        self.field_error = if self.tenant_id.is_none() {
            Some(FieldError::TenantRequired)
        } else {
            None
        };
        self.field_error.is_none()
    }

    /// Payload for the remove endpoint. `creationDate` is left out because
    /// the platform refuses to delete rows that carry it.
    pub fn to_removable(&self) -> Option<RemovableTenant> {
        let RowId::Persisted(id) = self.id else {
            return None;
        };
        Some(RemovableTenant {
            id,
            tenant_id: self.tenant_id,
            tenant_num: self.tenant_num.clone(),
            tenant_name: self.tenant_name.clone(),
            extra: self.extra.clone(),
        })
    }

    /// Payload for the save endpoint, stamped with the owning card.
    pub fn to_new_assignment(&self, card_id: CardId) -> Option<NewCardTenant> {
        if !self.is_draft() {
            return None;
        }
        Some(NewCardTenant {
            card_id,
            tenant_id: self.tenant_id?,
            tenant_num: self.tenant_num.clone(),
            tenant_name: self.tenant_name.clone(),
            creation_date: self.creation_date,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantRowWire {
    id: i64,
    #[serde(default)]
    tenant_id: Option<i64>,
    #[serde(default)]
    tenant_num: Option<String>,
    #[serde(default)]
    tenant_name: Option<String>,
    #[serde(default, with = "wire_datetime")]
    creation_date: Option<NaiveDateTime>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for TenantRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = TenantRowWire::deserialize(deserializer)?;
        Ok(Self {
            id: RowId::Persisted(wire.id),
            status: RowStatus::Persisted,
            tenant_id: wire.tenant_id,
            tenant_num: wire.tenant_num,
            tenant_name: wire.tenant_name,
            creation_date: wire.creation_date,
            extra: wire.extra,
            field_error: None,
        })
    }
}

/// A persisted row stripped of its creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovableTenant {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A validated draft row, ready to be saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardTenant {
    pub card_id: CardId,
    pub tenant_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    #[serde(
        default,
        with = "wire_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<NaiveDateTime>,
}

/// A tenant offered by the lookup picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantOption {
    pub tenant_id: i64,
    pub tenant_num: String,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default, with = "wire_datetime")]
    pub creation_date: Option<NaiveDateTime>,
}

/// One page of a paginated platform response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Zero-based page index.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, number: u32, size: u32, total_elements: u64) -> Self {
        Self {
            content,
            number,
            size,
            total_elements,
        }
    }
}

pub(crate) mod wire_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATETIME_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&value.format(DATETIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
