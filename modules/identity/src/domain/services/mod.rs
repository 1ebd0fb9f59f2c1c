mod authorization;

pub use authorization::{Action, AllowAllAuthorizer, Authorizer, Scope};
