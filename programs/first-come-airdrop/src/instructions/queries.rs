//! Read-only instructions. Each returns its value through the transaction's
//! return data and never writes state.

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;

#[derive(Accounts)]
pub struct LedgerView<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct ClaimView<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// CHECK: may not exist yet; the seeds bind it to `account`
    #[account(
        seeds = [CLAIM_SEED, ledger.key().as_ref(), account.as_ref()],
        bump
    )]
    pub claim_record: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    #[account(
        seeds = [ROLES_SEED, ledger.key().as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, RoleRegistry>,
}

pub fn get_remaining_claim(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.ledger.remaining_claim())
}

pub fn get_max_claim(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.ledger.max_claim)
}

pub fn get_airdrop_amount(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.ledger.airdrop_amount)
}

/// Amount paid out so far, not the number of claims
pub fn total_claimed(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_claimed)
}

pub fn total_claims(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_claims)
}

pub fn contract_uri(ctx: Context<LedgerView>) -> Result<String> {
    Ok(ctx.accounts.ledger.contract_uri.clone())
}

pub fn get_owner(ctx: Context<LedgerView>) -> Result<Pubkey> {
    Ok(ctx.accounts.ledger.owner)
}

pub fn get_deployer(ctx: Context<LedgerView>) -> Result<Pubkey> {
    Ok(ctx.accounts.ledger.deployer)
}

pub fn has_claimed(ctx: Context<ClaimView>, _account: Pubkey) -> Result<bool> {
    claim_status(&ctx.accounts.claim_record.to_account_info())
}

/// Read the claim flag from a claim record account. A record that was never
/// created (not owned by this program, or empty) means the account has not claimed.
pub fn claim_status(info: &AccountInfo) -> Result<bool> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(false);
    }
    let data = info.try_borrow_data()?;
    let record = ClaimRecord::try_deserialize(&mut &data[..])?;
    Ok(record.has_claimed)
}

pub fn has_role(ctx: Context<RegistryView>, role: [u8; 32], account: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.registry.has_role(&role, &account))
}

pub fn has_role_with_switch(
    ctx: Context<RegistryView>,
    role: [u8; 32],
    account: Pubkey,
) -> Result<bool> {
    Ok(ctx.accounts.registry.has_role_with_switch(&role, &account))
}

pub fn get_role_admin(ctx: Context<RegistryView>, role: [u8; 32]) -> Result<[u8; 32]> {
    Ok(ctx.accounts.registry.get_role_admin(&role))
}

pub fn get_role_member(ctx: Context<RegistryView>, role: [u8; 32], index: u64) -> Result<Pubkey> {
    ctx.accounts.registry.get_role_member(&role, index)
}

pub fn get_role_member_count(ctx: Context<RegistryView>, role: [u8; 32]) -> Result<u64> {
    Ok(ctx.accounts.registry.get_role_member_count(&role))
}
