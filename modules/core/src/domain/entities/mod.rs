// Domain entities for branches and POS terminals

mod branch;
mod pos_terminal;

pub use branch::{Branch, PaymentMethodConfig, PosConfig, TaxMode, TaxSettings};
pub use pos_terminal::{PosTerminal, TerminalStatus};
