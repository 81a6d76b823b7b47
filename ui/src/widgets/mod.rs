pub mod card_tenants;

pub use card_tenants::{CardTenantPanel, card_tenant_modal, poll_card_tenant_messages};
