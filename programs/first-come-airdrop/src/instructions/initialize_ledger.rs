use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::events::*;
use crate::states::*;

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    // Step 1: Create the ledger PDA, one per mint
    #[account(
        init,
        payer = deployer,
        space = DISCRIMINATOR_SIZE + AirdropLedger::INIT_SPACE,
        seeds = [LEDGER_SEED, mint.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    // Step 2: Create the role registry PDA for this ledger
    #[account(
        init,
        payer = deployer,
        space = DISCRIMINATOR_SIZE + RoleRegistry::INIT_SPACE,
        seeds = [ROLES_SEED, ledger.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, RoleRegistry>,

    // Step 3: Mint of the airdropped token
    pub mint: Account<'info, Mint>,

    // Step 4: Create the vault, owned by the ledger PDA
    #[account(
        init,
        payer = deployer,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    // Step 5: Deployer pays for account creation and signs
    #[account(mut)]
    pub deployer: Signer<'info>,

    // Step 6: Programs for account creation
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_ledger(ctx: Context<InitializeLedger>, params: LedgerParams) -> Result<()> {
    // Step 1: Collect the keys the ledger links to
    let deployer = ctx.accounts.deployer.key();
    let ledger_key = ctx.accounts.ledger.key();
    let mint = ctx.accounts.mint.key();
    let vault = ctx.accounts.vault.key();

    // Step 2: Validate the configuration and store the ledger
    let ledger = AirdropLedger::new(deployer, mint, vault, ctx.bumps.ledger, params)?;
    let (airdrop_amount, max_claim, owner) = (ledger.airdrop_amount, ledger.max_claim, ledger.owner);
    ctx.accounts.ledger.set_inner(ledger);

    // Step 3: Set up the built-in roles, deployer as root admin and treasurer
    let setup = ctx
        .accounts
        .registry
        .bootstrap(ledger_key, deployer, ctx.bumps.registry)?;

    // Step 4: Log success message
    msg!(
        "Ledger initialized - Mint: {}, Amount: {}, Max claims: {}",
        mint,
        airdrop_amount,
        max_claim
    );

    // Step 5: Emit role setup events, then the initialization event
    for changed in setup.admin_changes {
        emit!(changed);
    }
    for granted in setup.grants {
        emit!(granted);
    }
    emit!(LedgerInitialized {
        ledger: ledger_key,
        deployer,
        owner,
        mint,
        vault,
        airdrop_amount,
        max_claim,
    });

    Ok(())
}
