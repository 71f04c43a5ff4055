pub mod initialize_ledger;
pub mod claim;
pub mod set_contract_uri;
pub mod emergency_withdraw;
pub mod manage_roles;
pub mod queries;

pub use initialize_ledger::*;
pub use claim::*;
pub use set_contract_uri::*;
pub use emergency_withdraw::*;
pub use manage_roles::*;
pub use queries::*;
