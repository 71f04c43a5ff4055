use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod states;

pub use instructions::*;
pub use states::LedgerParams;

declare_id!("6W9zTkpEqoweTTTw81kw659fUtJC4UyPAh4gRVgvJEN6");

#[program]
pub mod first_come_airdrop {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>, params: LedgerParams) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx, params)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    pub fn set_contract_uri(ctx: Context<SetContractUri>, uri: String) -> Result<()> {
        instructions::set_contract_uri::set_contract_uri(ctx, uri)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::emergency_withdraw(ctx)
    }

    pub fn grant_role(ctx: Context<ManageRoles>, role: [u8; 32], account: Pubkey) -> Result<()> {
        instructions::manage_roles::grant_role(ctx, role, account)
    }

    pub fn revoke_role(ctx: Context<ManageRoles>, role: [u8; 32], account: Pubkey) -> Result<()> {
        instructions::manage_roles::revoke_role(ctx, role, account)
    }

    pub fn renounce_role(ctx: Context<ManageRoles>, role: [u8; 32], account: Pubkey) -> Result<()> {
        instructions::manage_roles::renounce_role(ctx, role, account)
    }

    pub fn set_role_admin(
        ctx: Context<ManageRoles>,
        role: [u8; 32],
        new_admin_role: [u8; 32],
    ) -> Result<()> {
        instructions::manage_roles::set_role_admin(ctx, role, new_admin_role)
    }

    pub fn set_role_enforcement(ctx: Context<ManageRoles>, enforce: bool) -> Result<()> {
        instructions::manage_roles::set_role_enforcement(ctx, enforce)
    }

    pub fn get_remaining_claim(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::queries::get_remaining_claim(ctx)
    }

    pub fn get_max_claim(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::queries::get_max_claim(ctx)
    }

    pub fn get_airdrop_amount(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::queries::get_airdrop_amount(ctx)
    }

    pub fn total_claimed(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::queries::total_claimed(ctx)
    }

    pub fn total_claims(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::queries::total_claims(ctx)
    }

    pub fn contract_uri(ctx: Context<LedgerView>) -> Result<String> {
        instructions::queries::contract_uri(ctx)
    }

    pub fn get_owner(ctx: Context<LedgerView>) -> Result<Pubkey> {
        instructions::queries::get_owner(ctx)
    }

    pub fn get_deployer(ctx: Context<LedgerView>) -> Result<Pubkey> {
        instructions::queries::get_deployer(ctx)
    }

    pub fn has_claimed(ctx: Context<ClaimView>, account: Pubkey) -> Result<bool> {
        instructions::queries::has_claimed(ctx, account)
    }

    pub fn has_role(ctx: Context<RegistryView>, role: [u8; 32], account: Pubkey) -> Result<bool> {
        instructions::queries::has_role(ctx, role, account)
    }

    pub fn has_role_with_switch(
        ctx: Context<RegistryView>,
        role: [u8; 32],
        account: Pubkey,
    ) -> Result<bool> {
        instructions::queries::has_role_with_switch(ctx, role, account)
    }

    pub fn get_role_admin(ctx: Context<RegistryView>, role: [u8; 32]) -> Result<[u8; 32]> {
        instructions::queries::get_role_admin(ctx, role)
    }

    pub fn get_role_member(
        ctx: Context<RegistryView>,
        role: [u8; 32],
        index: u64,
    ) -> Result<Pubkey> {
        instructions::queries::get_role_member(ctx, role, index)
    }

    pub fn get_role_member_count(ctx: Context<RegistryView>, role: [u8; 32]) -> Result<u64> {
        instructions::queries::get_role_member_count(ctx, role)
    }
}
