//! Card tenant assignment modal.
//!
//! - `panel`: modal window and the state it keeps between frames
//! - `search_form`: criteria above the table
//! - `table`: assigned tenants table (columns, header, row, cells)
//! - `lov`: tenant picker for draft rows
//! - `tasks`: background calls and the channel back to the frame loop

mod lov;
mod panel;
mod search_form;
pub mod table;
mod tasks;

pub use lov::TenantPicker;
pub use panel::{CardTenantPanel, card_tenant_modal};
pub use tasks::{CardTenantTasks, ModalMessage, poll_card_tenant_messages};
