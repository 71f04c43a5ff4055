use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::errors::*;
use crate::states::*;

#[derive(Accounts)]
pub struct Claim<'info> {
    // Step 1: Ledger must exist and own the provided vault
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.mint.as_ref()],
        bump = ledger.bump,
        has_one = vault @ AirdropError::VaultMismatch
    )]
    pub ledger: Account<'info, AirdropLedger>,

    // Step 2: Role registry decides eligibility
    #[account(
        seeds = [ROLES_SEED, ledger.key().as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, RoleRegistry>,

    // Step 3: Claim record is created on the first attempt
    #[account(
        init_if_needed,
        payer = claimer,
        space = DISCRIMINATOR_SIZE + ClaimRecord::INIT_SPACE,
        seeds = [CLAIM_SEED, ledger.key().as_ref(), claimer.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    // Step 4: Vault is debited
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    // Step 5: Claimer's own token account for the airdrop mint is credited
    #[account(
        mut,
        constraint = claimer_token_account.mint == ledger.mint @ AirdropError::MintMismatch,
        constraint = claimer_token_account.owner == claimer.key() @ AirdropError::RecipientMismatch
    )]
    pub claimer_token_account: Account<'info, TokenAccount>,

    // Step 6: Claimer signs and pays for the claim record
    #[account(mut)]
    pub claimer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let claimer = ctx.accounts.claimer.key();
    let ledger_key = ctx.accounts.ledger.key();

    // Step 1: Bind a freshly created record to this ledger and claimer
    if !ctx.accounts.claim_record.is_bound() {
        ctx.accounts
            .claim_record
            .bind(ledger_key, claimer, ctx.bumps.claim_record);
    }

    // Step 2: Check eligibility, claim-once and the cap, then commit
    let accounts = &mut *ctx.accounts;
    let claimed = accounts
        .ledger
        .record_claim(&accounts.registry, &mut accounts.claim_record, claimer)?;

    // Step 3: Prepare PDA signer seeds
    let mint = accounts.ledger.mint;
    let bump = [accounts.ledger.bump];
    let seeds: &[&[u8]] = &[LEDGER_SEED, mint.as_ref(), &bump];
    let signer = &[seeds];

    // Step 4: Transfer the fixed amount from the vault to the claimer
    let cpi_accounts = Transfer {
        from: accounts.vault.to_account_info(),
        to: accounts.claimer_token_account.to_account_info(),
        authority: accounts.ledger.to_account_info(),
    };
    let cpi_program = accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
    token::transfer(cpi_ctx, claimed.amount)?;

    // Step 5: Log success message
    msg!(
        "Claim successful - Wallet: {}, Amount: {}, Claims: {}/{}",
        claimer,
        claimed.amount,
        accounts.ledger.total_claims,
        accounts.ledger.max_claim
    );

    // Step 6: Emit claim event
    emit!(claimed);

    Ok(())
}
