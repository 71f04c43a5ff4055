pub mod ledger;
pub mod roles;

pub use ledger::*;
pub use roles::*;
