use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::errors::*;
use crate::states::*;

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    // Step 1: Ledger must exist and own the provided vault
    #[account(
        seeds = [LEDGER_SEED, ledger.mint.as_ref()],
        bump = ledger.bump,
        has_one = vault @ AirdropError::VaultMismatch
    )]
    pub ledger: Account<'info, AirdropLedger>,

    // Step 2: Role registry decides who may withdraw
    #[account(
        seeds = [ROLES_SEED, ledger.key().as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, RoleRegistry>,

    // Step 3: Vault is drained
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    // Step 4: Funds always go back to the deployer, never to a caller-chosen wallet
    #[account(
        mut,
        constraint = recipient.mint == ledger.mint @ AirdropError::MintMismatch,
        constraint = recipient.owner == ledger.deployer @ AirdropError::RecipientMismatch
    )]
    pub recipient: Account<'info, TokenAccount>,

    // Step 5: Treasurer must sign
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let ledger = &ctx.accounts.ledger;

    // Step 1: Verify the caller's role and that there is something to move
    let withdrawn = ledger.emergency_withdrawal(
        &ctx.accounts.registry,
        ctx.accounts.caller.key(),
        ctx.accounts.vault.amount,
    )?;

    // Step 2: Prepare PDA signer seeds
    let bump = [ledger.bump];
    let seeds: &[&[u8]] = &[LEDGER_SEED, ledger.mint.as_ref(), &bump];
    let signer = &[seeds];

    // Step 3: Transfer the whole vault balance
    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.recipient.to_account_info(),
        authority: ledger.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
    token::transfer(cpi_ctx, withdrawn.amount)?;

    // Step 4: Log withdrawal details
    msg!(
        "Emergency withdrawal of {} tokens to {}",
        withdrawn.amount,
        withdrawn.to
    );

    // Step 5: Emit withdrawal event
    emit!(withdrawn);

    Ok(())
}
