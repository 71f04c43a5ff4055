use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;

/// Accounts shared by every role-mutating instruction
#[derive(Accounts)]
pub struct ManageRoles<'info> {
    // Step 1: Ledger the registry belongs to
    #[account(
        seeds = [LEDGER_SEED, ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    // Step 2: Registry must match the ledger's PDA
    #[account(
        mut,
        seeds = [ROLES_SEED, ledger.key().as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, RoleRegistry>,

    // Step 3: Sender must sign; authorization is checked against the registry
    pub sender: Signer<'info>,
}

pub fn grant_role(ctx: Context<ManageRoles>, role: [u8; 32], account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    if let Some(granted) = ctx.accounts.registry.grant_role(sender, role, account)? {
        msg!("Role {:?} granted to {} by {}", role, account, sender);
        emit!(granted);
    }
    Ok(())
}

pub fn revoke_role(ctx: Context<ManageRoles>, role: [u8; 32], account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    if let Some(revoked) = ctx.accounts.registry.revoke_role(sender, role, account)? {
        msg!("Role {:?} revoked from {} by {}", role, account, sender);
        emit!(revoked);
    }
    Ok(())
}

pub fn renounce_role(ctx: Context<ManageRoles>, role: [u8; 32], account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    if let Some(revoked) = ctx.accounts.registry.renounce_role(sender, role, account)? {
        msg!("Role {:?} renounced by {}", role, account);
        emit!(revoked);
    }
    Ok(())
}

pub fn set_role_admin(
    ctx: Context<ManageRoles>,
    role: [u8; 32],
    new_admin_role: [u8; 32],
) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    let changed = ctx
        .accounts
        .registry
        .set_role_admin(sender, role, new_admin_role)?;

    msg!(
        "Role {:?} admin changed: {:?} -> {:?}",
        role,
        changed.previous_admin_role,
        changed.new_admin_role
    );
    emit!(changed);

    Ok(())
}

pub fn set_role_enforcement(ctx: Context<ManageRoles>, enforce: bool) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    let updated = ctx
        .accounts
        .registry
        .set_role_enforcement(sender, enforce)?;

    msg!("Switch role enforcement set to {} by {}", enforce, sender);
    emit!(updated);

    Ok(())
}
