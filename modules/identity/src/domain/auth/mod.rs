pub mod pin_hasher;
mod till_token;

pub use till_token::{TillTokenClaims, TillTokenIssuer};
