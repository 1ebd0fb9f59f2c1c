// Domain services for the catalog module

mod pricing_engine;

pub use pricing_engine::{PricedLine, PricingEngine};
