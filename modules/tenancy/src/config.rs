// Tenancy configuration - read once at startup, threaded in explicitly.
// Per the core's "no process-global mutable state beyond startup config" rule.

#[derive(Debug, Clone)]
pub struct TenancyConfig {
    /// Connection string for the shared directory database (holds the
    /// `tenant_directory` table only; out of core scope otherwise).
    pub directory_database_url: String,
    /// Max pooled connections per resolved tenant pool.
    pub tenant_pool_max_connections: u32,
}

impl TenancyConfig {
    pub fn from_env() -> Self {
        let directory_database_url = std::env::var("TENANT_DIRECTORY_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .expect("TENANT_DIRECTORY_DATABASE_URL or DATABASE_URL must be set");
        let tenant_pool_max_connections = std::env::var("TENANT_POOL_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            directory_database_url,
            tenant_pool_max_connections,
        }
    }
}
