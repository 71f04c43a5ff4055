use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;

#[derive(Accounts)]
pub struct SetContractUri<'info> {
    // Step 1: Ledger must exist and match PDA
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    // Step 2: Owner must sign (checked against ledger.owner in the handler)
    pub owner: Signer<'info>,
}

pub fn set_contract_uri(ctx: Context<SetContractUri>, uri: String) -> Result<()> {
    // Step 1: Verify the owner and swap the URI
    let owner = ctx.accounts.owner.key();
    let updated = ctx.accounts.ledger.set_contract_uri(owner, uri)?;

    // Step 2: Log the change
    msg!(
        "Contract URI updated: {} -> {}",
        updated.prev_uri,
        updated.new_uri
    );

    // Step 3: Emit update event
    emit!(updated);

    Ok(())
}
