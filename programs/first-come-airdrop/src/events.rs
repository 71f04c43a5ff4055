use anchor_lang::prelude::*;

/// Event emitted when a ledger is initialized
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub deployer: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub airdrop_amount: u64,
    pub max_claim: u64,
}

/// Event emitted when an account successfully claims its allocation
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropClaimed {
    pub claimer: Pubkey,
    pub amount: u64,
}

/// Event emitted on every accepted contract URI update, even when unchanged
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractUriUpdated {
    pub prev_uri: String,
    pub new_uri: String,
}

/// Event emitted when the whole vault balance is returned to the deployer
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyWithdrawn {
    pub amount: u64,
    pub to: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGranted {
    pub role: [u8; 32],
    pub account: Pubkey,
    pub sender: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRevoked {
    pub role: [u8; 32],
    pub account: Pubkey,
    pub sender: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAdminChanged {
    pub role: [u8; 32],
    pub previous_admin_role: [u8; 32],
    pub new_admin_role: [u8; 32],
}

/// Event emitted when the switch role check is opened or closed
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleEnforcementUpdated {
    pub role: [u8; 32],
    pub enforced: bool,
    pub sender: Pubkey,
}
