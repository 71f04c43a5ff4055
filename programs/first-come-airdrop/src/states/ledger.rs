use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::AirdropError;
use crate::events::{AirdropClaimed, ContractUriUpdated, EmergencyWithdrawn};
use crate::states::RoleRegistry;

/// Arguments of `initialize_ledger`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LedgerParams {
    /// Tokens paid per claim, in the mint's smallest unit
    pub airdrop_amount: u64,
    /// Number of claims the ledger will ever honor
    pub max_claim: u64,
    /// Owner allowed to update the contract URI
    pub owner: Pubkey,
    pub contract_uri: String,
}

/// Main ledger state account
#[account]
#[derive(InitSpace, Debug)]
pub struct AirdropLedger {
    /// Signer that initialized the ledger. Receives emergency withdrawals.
    pub deployer: Pubkey,

    /// Owner designation, separate from the role registry
    pub owner: Pubkey,

    /// Mint of the airdropped token
    pub mint: Pubkey,

    /// Token vault holding the airdrop funds, owned by this PDA
    pub vault: Pubkey,

    pub airdrop_amount: u64,

    pub max_claim: u64,

    /// Number of successful claims so far
    pub total_claims: u64,

    /// Amount paid out so far (`total_claims * airdrop_amount`)
    pub total_claimed: u64,

    /// Off-chain metadata pointer
    #[max_len(200)]
    pub contract_uri: String,

    /// Bump seed for PDA verification
    pub bump: u8,
}

impl AirdropLedger {
    pub fn new(
        deployer: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        bump: u8,
        params: LedgerParams,
    ) -> Result<Self> {
        require!(
            params.airdrop_amount > 0 && params.max_claim > 0,
            AirdropError::InvalidConfig
        );
        // total_claimed can then never overflow
        require!(
            params.max_claim.checked_mul(params.airdrop_amount).is_some(),
            AirdropError::InvalidConfig
        );
        require!(
            params.contract_uri.len() <= MAX_URI_LEN,
            AirdropError::UriTooLong
        );

        Ok(Self {
            deployer,
            owner: params.owner,
            mint,
            vault,
            airdrop_amount: params.airdrop_amount,
            max_claim: params.max_claim,
            total_claims: 0,
            total_claimed: 0,
            contract_uri: params.contract_uri,
            bump,
        })
    }

    /// Tokens still claimable: `(max_claim - total_claims) * airdrop_amount`, never negative.
    pub fn remaining_claim(&self) -> u64 {
        self.max_claim
            .saturating_sub(self.total_claims)
            .saturating_mul(self.airdrop_amount)
    }

    pub fn is_exhausted(&self) -> bool {
        self.total_claims >= self.max_claim
    }

    /// Check every claim precondition, then commit the claim to the ledger and
    /// the claimant's record.
    ///
    /// Nothing is written unless all checks pass. The caller still has to move
    /// `airdrop_amount` tokens out of the vault and emit the returned event.
    ///
    /// While the registry's switch is open (the initial state) every account is
    /// eligible, so only `AlreadyClaimed` and `CapExceeded` can reject a claim.
    pub fn record_claim(
        &mut self,
        registry: &RoleRegistry,
        record: &mut ClaimRecord,
        claimer: Pubkey,
    ) -> Result<AirdropClaimed> {
        require!(
            registry.has_role_with_switch(&CLAIMER_ROLE, &claimer),
            AirdropError::Unauthorized
        );
        require!(!record.has_claimed, AirdropError::AlreadyClaimed);
        require!(!self.is_exhausted(), AirdropError::CapExceeded);

        let total_claims = self
            .total_claims
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        let total_claimed = self
            .total_claimed
            .checked_add(self.airdrop_amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        record.has_claimed = true;
        self.total_claims = total_claims;
        self.total_claimed = total_claimed;

        Ok(AirdropClaimed {
            claimer,
            amount: self.airdrop_amount,
        })
    }

    /// Replace the metadata URI. Owner only; accepted calls always produce an event.
    pub fn set_contract_uri(&mut self, caller: Pubkey, uri: String) -> Result<ContractUriUpdated> {
        require_keys_eq!(caller, self.owner, AirdropError::Unauthorized);
        require!(uri.len() <= MAX_URI_LEN, AirdropError::UriTooLong);

        let prev_uri = std::mem::replace(&mut self.contract_uri, uri);
        Ok(ContractUriUpdated {
            prev_uri,
            new_uri: self.contract_uri.clone(),
        })
    }

    /// Authorize draining `vault_balance` back to the deployer.
    pub fn emergency_withdrawal(
        &self,
        registry: &RoleRegistry,
        caller: Pubkey,
        vault_balance: u64,
    ) -> Result<EmergencyWithdrawn> {
        require!(
            registry.has_role(&TREASURER_ROLE, &caller),
            AirdropError::Unauthorized
        );
        require!(vault_balance > 0, AirdropError::NothingToWithdraw);

        Ok(EmergencyWithdrawn {
            amount: vault_balance,
            to: self.deployer,
        })
    }
}

/// Per-account claim flag, created on the account's first claim attempt
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct ClaimRecord {
    pub ledger: Pubkey,
    pub claimer: Pubkey,
    /// Flips to true exactly once
    pub has_claimed: bool,
    pub bump: u8,
}

impl ClaimRecord {
    pub fn is_bound(&self) -> bool {
        self.claimer != Pubkey::default()
    }

    pub fn bind(&mut self, ledger: Pubkey, claimer: Pubkey, bump: u8) {
        self.ledger = ledger;
        self.claimer = claimer;
        self.bump = bump;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor_error(code: AirdropError) -> anchor_lang::error::Error {
        code.into()
    }

    fn params(airdrop_amount: u64, max_claim: u64) -> LedgerParams {
        LedgerParams {
            airdrop_amount,
            max_claim,
            owner: Pubkey::new_unique(),
            contract_uri: "ipfs://airdrop/meta.json".to_string(),
        }
    }

    fn setup(airdrop_amount: u64, max_claim: u64) -> (AirdropLedger, RoleRegistry) {
        let deployer = Pubkey::new_unique();
        let ledger = AirdropLedger::new(
            deployer,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            255,
            params(airdrop_amount, max_claim),
        )
        .unwrap();
        let mut registry = RoleRegistry::default();
        registry.bootstrap(Pubkey::new_unique(), deployer, 254).unwrap();
        (ledger, registry)
    }

    #[test]
    fn rejects_degenerate_config() {
        let deployer = Pubkey::new_unique();
        for (amount, cap) in [(0, 10), (10, 0), (u64::MAX, 2)] {
            let err = AirdropLedger::new(
                deployer,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                255,
                params(amount, cap),
            )
            .unwrap_err();
            assert_eq!(err, anchor_error(AirdropError::InvalidConfig));
        }

        let mut long = params(1, 1);
        long.contract_uri = "x".repeat(MAX_URI_LEN + 1);
        let err = AirdropLedger::new(deployer, Pubkey::new_unique(), Pubkey::new_unique(), 255, long)
            .unwrap_err();
        assert_eq!(err, anchor_error(AirdropError::UriTooLong));
    }

    #[test]
    fn claim_flips_record_and_counters() {
        let (mut ledger, registry) = setup(100, 3);
        let claimer = Pubkey::new_unique();
        let mut record = ClaimRecord::default();

        let event = ledger.record_claim(&registry, &mut record, claimer).unwrap();

        assert_eq!(event, AirdropClaimed { claimer, amount: 100 });
        assert!(record.has_claimed);
        assert_eq!(ledger.total_claims, 1);
        assert_eq!(ledger.total_claimed, 100);
        assert_eq!(ledger.remaining_claim(), 200);
    }

    #[test]
    fn second_claim_is_rejected_without_side_effects() {
        let (mut ledger, registry) = setup(100, 3);
        let claimer = Pubkey::new_unique();
        let mut record = ClaimRecord::default();
        ledger.record_claim(&registry, &mut record, claimer).unwrap();

        let err = ledger.record_claim(&registry, &mut record, claimer).unwrap_err();

        assert_eq!(err, anchor_error(AirdropError::AlreadyClaimed));
        assert_eq!(ledger.total_claims, 1);
        assert_eq!(ledger.total_claimed, 100);
    }

    #[test]
    fn cap_is_checked_before_mutation() {
        let (mut ledger, registry) = setup(5, 1);
        ledger
            .record_claim(&registry, &mut ClaimRecord::default(), Pubkey::new_unique())
            .unwrap();
        assert!(ledger.is_exhausted());

        let mut late = ClaimRecord::default();
        let err = ledger
            .record_claim(&registry, &mut late, Pubkey::new_unique())
            .unwrap_err();

        assert_eq!(err, anchor_error(AirdropError::CapExceeded));
        assert!(!late.has_claimed);
        assert_eq!(ledger.total_claims, 1);
        assert_eq!(ledger.remaining_claim(), 0);
    }

    #[test]
    fn already_claimed_wins_over_cap_exceeded() {
        let (mut ledger, registry) = setup(5, 1);
        let claimer = Pubkey::new_unique();
        let mut record = ClaimRecord::default();
        ledger.record_claim(&registry, &mut record, claimer).unwrap();

        let err = ledger.record_claim(&registry, &mut record, claimer).unwrap_err();
        assert_eq!(err, anchor_error(AirdropError::AlreadyClaimed));
    }

    #[test]
    fn enforced_switch_limits_claims_to_claimer_role() {
        let (mut ledger, mut registry) = setup(10, 5);
        let admin = ledger.deployer;
        let listed = Pubkey::new_unique();
        let unlisted = Pubkey::new_unique();
        registry.set_role_enforcement(admin, true).unwrap();
        registry.grant_role(admin, CLAIMER_ROLE, listed).unwrap();

        let mut record = ClaimRecord::default();
        let err = ledger.record_claim(&registry, &mut record, unlisted).unwrap_err();
        assert_eq!(err, anchor_error(AirdropError::Unauthorized));
        assert!(!record.has_claimed);

        ledger
            .record_claim(&registry, &mut ClaimRecord::default(), listed)
            .unwrap();
        assert_eq!(ledger.total_claims, 1);
    }

    #[test]
    fn remaining_claim_never_underflows() {
        let (mut ledger, _) = setup(7, 2);
        // simulate an external double count
        ledger.total_claims = 5;
        assert_eq!(ledger.remaining_claim(), 0);
    }

    #[test]
    fn contract_uri_is_owner_only_and_always_reports() {
        let (mut ledger, _) = setup(1, 1);
        let owner = ledger.owner;

        // the deployer is not the owner
        let err = ledger
            .set_contract_uri(ledger.deployer, "ipfs://other".to_string())
            .unwrap_err();
        assert_eq!(err, anchor_error(AirdropError::Unauthorized));
        assert_eq!(ledger.contract_uri, "ipfs://airdrop/meta.json");

        let event = ledger.set_contract_uri(owner, "ipfs://v2".to_string()).unwrap();
        assert_eq!(event.prev_uri, "ipfs://airdrop/meta.json");
        assert_eq!(event.new_uri, "ipfs://v2");
        assert_eq!(ledger.contract_uri, "ipfs://v2");

        let unchanged = ledger.set_contract_uri(owner, "ipfs://v2".to_string()).unwrap();
        assert_eq!(unchanged.prev_uri, unchanged.new_uri);

        let err = ledger
            .set_contract_uri(owner, "y".repeat(MAX_URI_LEN + 1))
            .unwrap_err();
        assert_eq!(err, anchor_error(AirdropError::UriTooLong));
        assert_eq!(ledger.contract_uri, "ipfs://v2");
    }

    #[test]
    fn emergency_withdrawal_needs_treasurer_and_balance() {
        let (ledger, registry) = setup(1, 1);
        let outsider = Pubkey::new_unique();

        let err = ledger.emergency_withdrawal(&registry, outsider, 50).unwrap_err();
        assert_eq!(err, anchor_error(AirdropError::Unauthorized));

        let err = ledger.emergency_withdrawal(&registry, ledger.deployer, 0).unwrap_err();
        assert_eq!(err, anchor_error(AirdropError::NothingToWithdraw));

        let event = ledger.emergency_withdrawal(&registry, ledger.deployer, 50).unwrap();
        assert_eq!(
            event,
            EmergencyWithdrawn {
                amount: 50,
                to: ledger.deployer,
            }
        );
    }

    #[test]
    fn claim_record_binding() {
        let mut record = ClaimRecord::default();
        assert!(!record.is_bound());
        let (ledger, claimer) = (Pubkey::new_unique(), Pubkey::new_unique());
        record.bind(ledger, claimer, 253);
        assert!(record.is_bound());
        assert_eq!(record.claimer, claimer);
        assert!(!record.has_claimed);
    }
}
