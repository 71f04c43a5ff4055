use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::AirdropError;
use crate::events::{RoleAdminChanged, RoleEnforcementUpdated, RoleGranted, RoleRevoked};

/// A role, the role allowed to manage it, and its members in insertion order
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace, Debug, PartialEq, Eq)]
pub struct RoleData {
    pub role: [u8; 32],
    pub admin_role: [u8; 32],
    #[max_len(16)]
    pub members: Vec<Pubkey>,
}

/// Role-based access control for one ledger.
///
/// Roles are never deleted, only emptied. A role that was never set up reports
/// `DEFAULT_ADMIN_ROLE` as its admin and has no members.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct RoleRegistry {
    /// Ledger this registry authorizes
    pub ledger: Pubkey,

    #[max_len(8)]
    pub roles: Vec<RoleData>,

    /// Role answered by `has_role_with_switch` without a membership check
    /// while `enforce_switch_role` is false
    pub switch_role: [u8; 32],

    pub enforce_switch_role: bool,

    /// Bump seed for PDA verification
    pub bump: u8,
}

/// Events produced while setting up a fresh registry, in emission order
#[derive(Debug, Default)]
pub struct RoleSetup {
    pub admin_changes: Vec<RoleAdminChanged>,
    pub grants: Vec<RoleGranted>,
}

impl RoleRegistry {
    /// Set up the built-in roles and hand the deployer the root and treasury roles.
    ///
    /// The switch starts open, so every account counts as a `CLAIMER_ROLE`
    /// holder until an admin closes it.
    pub fn bootstrap(&mut self, ledger: Pubkey, deployer: Pubkey, bump: u8) -> Result<RoleSetup> {
        self.ledger = ledger;
        self.bump = bump;
        self.roles = Vec::new();
        self.switch_role = CLAIMER_ROLE;
        self.enforce_switch_role = false;

        let mut setup = RoleSetup::default();
        for (role, admin) in [
            (DEFAULT_ADMIN_ROLE, DEFAULT_ADMIN_ROLE),
            (CLAIMER_ROLE, DEFAULT_ADMIN_ROLE),
            (TREASURER_ROLE, DEFAULT_ADMIN_ROLE),
        ] {
            setup.admin_changes.push(self.apply_role_admin(role, admin)?);
        }
        for role in [DEFAULT_ADMIN_ROLE, TREASURER_ROLE] {
            if let Some(granted) = self.apply_grant(role, deployer, deployer)? {
                setup.grants.push(granted);
            }
        }
        Ok(setup)
    }

    fn find(&self, role: &[u8; 32]) -> Option<&RoleData> {
        self.roles.iter().find(|data| &data.role == role)
    }

    pub fn has_role(&self, role: &[u8; 32], account: &Pubkey) -> bool {
        self.find(role)
            .map(|data| data.members.contains(account))
            .unwrap_or(false)
    }

    /// Membership check that lets everyone through for the switch role while
    /// enforcement is off. Any other role falls back to `has_role`.
    pub fn has_role_with_switch(&self, role: &[u8; 32], account: &Pubkey) -> bool {
        if role == &self.switch_role && !self.enforce_switch_role {
            return true;
        }
        self.has_role(role, account)
    }

    pub fn get_role_admin(&self, role: &[u8; 32]) -> [u8; 32] {
        self.find(role)
            .map(|data| data.admin_role)
            .unwrap_or(DEFAULT_ADMIN_ROLE)
    }

    pub fn get_role_member_count(&self, role: &[u8; 32]) -> u64 {
        self.find(role)
            .map(|data| data.members.len() as u64)
            .unwrap_or(0)
    }

    pub fn get_role_member(&self, role: &[u8; 32], index: u64) -> Result<Pubkey> {
        let members = self.find(role).map(|data| data.members.as_slice()).unwrap_or(&[]);
        usize::try_from(index)
            .ok()
            .and_then(|index| members.get(index))
            .copied()
            .ok_or_else(|| error!(AirdropError::IndexOutOfRange))
    }

    /// Grant `role` to `account`. Returns `None` when the account already holds it.
    pub fn grant_role(
        &mut self,
        sender: Pubkey,
        role: [u8; 32],
        account: Pubkey,
    ) -> Result<Option<RoleGranted>> {
        self.require_admin_of(&role, &sender)?;
        self.apply_grant(role, account, sender)
    }

    /// Revoke `role` from `account`. Returns `None` when the account was not a member.
    pub fn revoke_role(
        &mut self,
        sender: Pubkey,
        role: [u8; 32],
        account: Pubkey,
    ) -> Result<Option<RoleRevoked>> {
        self.require_admin_of(&role, &sender)?;
        self.apply_revoke(role, account, sender)
    }

    /// Drop the sender's own membership. Admins cannot renounce on behalf of others.
    pub fn renounce_role(
        &mut self,
        sender: Pubkey,
        role: [u8; 32],
        account: Pubkey,
    ) -> Result<Option<RoleRevoked>> {
        require_keys_eq!(sender, account, AirdropError::Unauthorized);
        self.apply_revoke(role, account, sender)
    }

    /// Move `role` under a new admin role. The root role always administers itself.
    pub fn set_role_admin(
        &mut self,
        sender: Pubkey,
        role: [u8; 32],
        new_admin_role: [u8; 32],
    ) -> Result<RoleAdminChanged> {
        require!(role != DEFAULT_ADMIN_ROLE, AirdropError::Unauthorized);
        self.require_admin_of(&role, &sender)?;
        self.apply_role_admin(role, new_admin_role)
    }

    /// Close (`enforce = true`) or reopen the switch role check. Root admins only.
    pub fn set_role_enforcement(
        &mut self,
        sender: Pubkey,
        enforce: bool,
    ) -> Result<RoleEnforcementUpdated> {
        require!(
            self.has_role(&DEFAULT_ADMIN_ROLE, &sender),
            AirdropError::Unauthorized
        );
        self.enforce_switch_role = enforce;
        Ok(RoleEnforcementUpdated {
            role: self.switch_role,
            enforced: enforce,
            sender,
        })
    }

    fn require_admin_of(&self, role: &[u8; 32], sender: &Pubkey) -> Result<()> {
        let admin_role = self.get_role_admin(role);
        require!(
            self.has_role(&admin_role, sender),
            AirdropError::Unauthorized
        );
        Ok(())
    }

    /// Index of `role`, creating an empty entry if needed. Capacity is checked
    /// before anything is pushed.
    fn entry_index(&mut self, role: [u8; 32]) -> Result<usize> {
        if let Some(index) = self.roles.iter().position(|data| data.role == role) {
            return Ok(index);
        }
        require!(self.roles.len() < MAX_ROLES, AirdropError::RoleCapacityExceeded);
        self.roles.push(RoleData {
            role,
            admin_role: DEFAULT_ADMIN_ROLE,
            members: Vec::new(),
        });
        Ok(self.roles.len() - 1)
    }

    fn apply_grant(
        &mut self,
        role: [u8; 32],
        account: Pubkey,
        sender: Pubkey,
    ) -> Result<Option<RoleGranted>> {
        if self.has_role(&role, &account) {
            return Ok(None);
        }
        require!(
            (self.get_role_member_count(&role) as usize) < MAX_ROLE_MEMBERS,
            AirdropError::RoleCapacityExceeded
        );
        let index = self.entry_index(role)?;
        self.roles[index].members.push(account);
        Ok(Some(RoleGranted {
            role,
            account,
            sender,
        }))
    }

    /// The last root admin can never be removed, so the admin chain always
    /// has a reachable root.
    fn apply_revoke(
        &mut self,
        role: [u8; 32],
        account: Pubkey,
        sender: Pubkey,
    ) -> Result<Option<RoleRevoked>> {
        let Some(data) = self.roles.iter_mut().find(|data| data.role == role) else {
            return Ok(None);
        };
        let Some(position) = data.members.iter().position(|member| member == &account) else {
            return Ok(None);
        };
        require!(
            role != DEFAULT_ADMIN_ROLE || data.members.len() > 1,
            AirdropError::Unauthorized
        );
        // Vec::remove keeps the remaining members in insertion order
        data.members.remove(position);
        Ok(Some(RoleRevoked {
            role,
            account,
            sender,
        }))
    }

    fn apply_role_admin(&mut self, role: [u8; 32], new_admin_role: [u8; 32]) -> Result<RoleAdminChanged> {
        let previous_admin_role = self.get_role_admin(&role);
        let index = self.entry_index(role)?;
        self.roles[index].admin_role = new_admin_role;
        Ok(RoleAdminChanged {
            role,
            previous_admin_role,
            new_admin_role,
        })
    }
}
