mod pg_tenant_registry;

pub use pg_tenant_registry::PgTenantRegistry;
