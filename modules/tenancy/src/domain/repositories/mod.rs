mod tenant_registry;

pub use tenant_registry::TenantRegistry;
