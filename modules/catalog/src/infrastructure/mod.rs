// Infrastructure layer - PostgreSQL adapters for the catalog module's ports

pub mod persistence;
