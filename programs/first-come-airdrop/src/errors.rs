use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    #[msg("Unauthorized - signer lacks the required role or ownership")]
    Unauthorized,

    #[msg("This account has already claimed the airdrop")]
    AlreadyClaimed,

    #[msg("Maximum number of claims reached")]
    CapExceeded,

    #[msg("Vault is empty - nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Role member index out of range")]
    IndexOutOfRange,

    #[msg("Airdrop amount and max claim must be positive and their product must fit in u64")]
    InvalidConfig,

    #[msg("Contract URI exceeds the maximum length (200 bytes)")]
    UriTooLong,

    #[msg("Role registry is full - too many roles or role members")]
    RoleCapacityExceeded,

    #[msg("Vault mismatch - provided vault does not match ledger vault")]
    VaultMismatch,

    #[msg("Token account mint does not match the airdrop mint")]
    MintMismatch,

    #[msg("Recipient token account is not owned by the expected wallet")]
    RecipientMismatch,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,
}
