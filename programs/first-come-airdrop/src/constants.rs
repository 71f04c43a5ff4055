/// Program constants for the first-come airdrop ledger

/// PDA seed for the ledger account (followed by the mint)
pub const LEDGER_SEED: &[u8] = b"ledger";

/// PDA seed for the role registry (followed by the ledger)
pub const ROLES_SEED: &[u8] = b"roles";

/// PDA seed for a claim record (followed by the ledger and the claimer)
pub const CLAIM_SEED: &[u8] = b"claim";

/// PDA seed for the token vault (followed by the ledger)
pub const VAULT_SEED: &[u8] = b"vault";

/// Root role. Administers itself and every built-in role.
pub const DEFAULT_ADMIN_ROLE: [u8; 32] = [0u8; 32];

/// keccak256("CLAIMER_ROLE")
pub const CLAIMER_ROLE: [u8; 32] = [
    0x11, 0xa8, 0xcb, 0x5a, 0x02, 0xbd, 0x6c, 0x42, 0x67, 0x98, 0x35, 0xe8, 0x67, 0xef, 0x21, 0x18,
    0xba, 0x78, 0xf0, 0x88, 0xf8, 0x30, 0x05, 0x11, 0x42, 0x0c, 0x66, 0x03, 0xc2, 0x1d, 0x9c, 0x78,
];

/// keccak256("TREASURER_ROLE")
pub const TREASURER_ROLE: [u8; 32] = [
    0x34, 0x96, 0xe2, 0xe7, 0x3c, 0x4d, 0x42, 0xb7, 0x5d, 0x70, 0x2e, 0x60, 0xd9, 0xe4, 0x81, 0x02,
    0x72, 0x0b, 0x86, 0x91, 0x23, 0x44, 0x15, 0x96, 0x3a, 0x5a, 0x85, 0x7b, 0x86, 0x42, 0x5d, 0x07,
];

/// Maximum number of distinct roles a registry can hold
/// Keep in sync with `#[max_len]` on `RoleRegistry::roles`
pub const MAX_ROLES: usize = 8;

/// Maximum number of members per role
/// Keep in sync with `#[max_len]` on `RoleData::members`
pub const MAX_ROLE_MEMBERS: usize = 16;

/// Maximum length of the contract metadata URI (in bytes)
pub const MAX_URI_LEN: usize = 200;

/// Account discriminator size (Anchor adds this automatically)
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Derive a role id from its name, the same way the built-in ids above are derived.
pub fn role_id(name: &str) -> [u8; 32] {
    solana_program::keccak::hash(name.as_bytes()).to_bytes()
}
