use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Record for one fractionalized NFT.
///
/// Lives at PDA `["vault", asset_mint]` and acts as the signing authority
/// for the custody token accounts and the fraction mint. Created by
/// `fractionalize`, mutated by `buy_fractions`, closed by `redeem`.
#[account]
pub struct Vault {
    /// Original owner of the locked NFT.
    pub creator: Pubkey,
    /// Mint of the NFT held in vault custody.
    pub asset_mint: Pubkey,
    /// Mint of the fraction tokens backing this vault.
    pub fraction_mint: Pubkey,
    /// Fixed share supply, minted in full at creation.
    pub total_fractions: u64,
    /// Price per share in payment-token minor units.
    pub price_per_fraction: u64,
    /// Shares sold so far, never exceeds `total_fractions`.
    pub fractions_sold: u64,
    pub is_sale_active: bool,
    /// Payment-token account receiving the creator's share of proceeds.
    pub creator_payment_account: Pubkey,
    pub created_at: i64,
    pub sale_ended_at: Option<i64>,
}

impl Vault {
    pub const LEN: usize = 8 +  // discriminator
        32 +                    // creator
        32 +                    // asset_mint
        32 +                    // fraction_mint
        8 +                     // total_fractions
        8 +                     // price_per_fraction
        8 +                     // fractions_sold
        1 +                     // is_sale_active
        32 +                    // creator_payment_account
        8 +                     // created_at
        9;                      // sale_ended_at (Option<i64>)

    pub fn remaining_fractions(&self) -> u64 {
        self.total_fractions.saturating_sub(self.fractions_sold)
    }

    pub fn is_fully_sold(&self) -> bool {
        self.fractions_sold >= self.total_fractions
    }

    /// Account for a sale of `num_fractions`. All checks precede the write,
    /// so a failed call leaves the record untouched.
    pub fn record_sale(&mut self, num_fractions: u64) -> Result<()> {
        require!(self.is_sale_active, ErrorCode::SaleNotActive);
        require!(num_fractions > 0, ErrorCode::InvalidAmount);
        require!(
            num_fractions <= self.remaining_fractions(),
            ErrorCode::InsufficientFractions
        );

        self.fractions_sold = self
            .fractions_sold
            .checked_add(num_fractions)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }
}

/// Per-user compliance record at PDA `["kyc", user]`.
///
/// Created unverified by `register_kyc`; only the platform admin flips it
/// through `verify_kyc`. Never deleted.
#[account]
pub struct KycAccount {
    pub user: Pubkey,
    pub is_verified: bool,
    pub verification_method: VerificationMethod,
    /// 1-3 once verified, 0 before.
    pub verification_level: u8,
    /// Unix timestamp of verification, 0 before.
    pub verified_at: i64,
    /// Informational only, not validated beyond length.
    pub email: Option<String>,
    pub country: Option<String>,
}

/// How a user's identity was verified. Stored for audit purposes; no
/// behavioral difference between variants.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum VerificationMethod {
    AdminApproval,
    EmailVerification,
    SocialVerification,
    DocumentUpload,
    PhoneVerification,
}

impl KycAccount {
    pub const MAX_EMAIL_LEN: usize = 64;
    pub const MAX_COUNTRY_LEN: usize = 32;

    pub const LEN: usize = 8 +          // discriminator
        32 +                            // user
        1 +                             // is_verified
        1 +                             // verification_method
        1 +                             // verification_level
        8 +                             // verified_at
        1 + 4 + Self::MAX_EMAIL_LEN +   // email (Option<String>)
        1 + 4 + Self::MAX_COUNTRY_LEN;  // country (Option<String>)

    pub fn is_eligible(&self) -> bool {
        self.is_verified && self.verification_level >= 1
    }

    /// Mark the user verified. Re-verifying overwrites method, level and
    /// timestamp without error.
    pub fn verify(&mut self, method: VerificationMethod, level: u8, now: i64) -> Result<()> {
        require!(
            (1..=3).contains(&level),
            ErrorCode::InvalidVerificationLevel
        );

        self.is_verified = true;
        self.verification_method = method;
        self.verification_level = level;
        self.verified_at = now;

        Ok(())
    }
}

/// Global platform settings at PDA `["platform_config"]`, created once by
/// `initialize` and writable only by the admin.
#[account]
pub struct PlatformConfig {
    pub admin: Pubkey,
    /// Payment-token account collecting platform fees.
    pub treasury: Pubkey,
    /// Mint of the stable payment token, taken from the treasury account.
    pub payment_mint: Pubkey,
    pub platform_fee_numerator: u64,
    pub platform_fee_denominator: u64,
    /// Bounds on a single purchase's gross payment amount.
    pub min_investment_amount: u64,
    pub max_investment_amount: u64,
    /// Kill-switch for fractionalization and purchases.
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PlatformConfig {
    pub const LEN: usize = 8 +  // discriminator
        32 +                    // admin
        32 +                    // treasury
        32 +                    // payment_mint
        8 +                     // platform_fee_numerator
        8 +                     // platform_fee_denominator
        8 +                     // min_investment_amount
        8 +                     // max_investment_amount
        1 +                     // is_active
        8 +                     // created_at
        8;                      // updated_at

    pub fn update_economics(
        &mut self,
        fee_numerator: u64,
        fee_denominator: u64,
        min_investment_amount: u64,
        max_investment_amount: u64,
        now: i64,
    ) -> Result<()> {
        require!(
            fee_denominator > 0 && fee_numerator <= fee_denominator,
            ErrorCode::InvalidFeeRatio
        );
        require!(
            min_investment_amount <= max_investment_amount,
            ErrorCode::InvalidBounds
        );

        self.platform_fee_numerator = fee_numerator;
        self.platform_fee_denominator = fee_denominator;
        self.min_investment_amount = min_investment_amount;
        self.max_investment_amount = max_investment_amount;
        self.updated_at = now;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vault(total_fractions: u64, price_per_fraction: u64) -> Vault {
        Vault {
            creator: Pubkey::new_unique(),
            asset_mint: Pubkey::new_unique(),
            fraction_mint: Pubkey::new_unique(),
            total_fractions,
            price_per_fraction,
            fractions_sold: 0,
            is_sale_active: true,
            creator_payment_account: Pubkey::new_unique(),
            created_at: 1_700_000_000,
            sale_ended_at: None,
        }
    }

    fn test_kyc() -> KycAccount {
        KycAccount {
            user: Pubkey::new_unique(),
            is_verified: false,
            verification_method: VerificationMethod::AdminApproval,
            verification_level: 0,
            verified_at: 0,
            email: None,
            country: None,
        }
    }

    fn test_config() -> PlatformConfig {
        PlatformConfig {
            admin: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            payment_mint: Pubkey::new_unique(),
            platform_fee_numerator: 500,
            platform_fee_denominator: 10_000,
            min_investment_amount: 1,
            max_investment_amount: u64::MAX,
            is_active: true,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
        }
    }

    #[test]
    fn record_sale_accumulates_and_sells_out() {
        let mut vault = test_vault(1000, 50);

        vault.record_sale(100).unwrap();
        assert_eq!(vault.fractions_sold, 100);
        assert_eq!(vault.remaining_fractions(), 900);
        assert!(!vault.is_fully_sold());

        vault.record_sale(900).unwrap();
        assert_eq!(vault.fractions_sold, 1000);
        assert_eq!(vault.remaining_fractions(), 0);
        assert!(vault.is_fully_sold());
        // sell-out is not a state change; the flag only flips on redeem
        assert!(vault.is_sale_active);
    }

    #[test]
    fn record_sale_sum_of_buys_equals_fractions_sold() {
        let mut vault = test_vault(500, 10);
        let buys = [1u64, 99, 250, 150];

        for n in buys {
            vault.record_sale(n).unwrap();
            assert!(vault.fractions_sold <= vault.total_fractions);
        }
        assert_eq!(vault.fractions_sold, buys.iter().sum::<u64>());
    }

    #[test]
    fn record_sale_rejects_overselling_without_side_effects() {
        let mut vault = test_vault(1000, 50);
        vault.record_sale(999).unwrap();

        assert_eq!(
            vault.record_sale(2),
            Err(ErrorCode::InsufficientFractions.into())
        );
        assert_eq!(vault.fractions_sold, 999);

        vault.record_sale(1).unwrap();
        assert_eq!(
            vault.record_sale(1),
            Err(ErrorCode::InsufficientFractions.into())
        );
    }

    #[test]
    fn record_sale_rejects_zero_amount() {
        let mut vault = test_vault(10, 1);
        assert_eq!(vault.record_sale(0), Err(ErrorCode::InvalidAmount.into()));
        assert_eq!(vault.fractions_sold, 0);
    }

    #[test]
    fn record_sale_rejects_inactive_sale() {
        let mut vault = test_vault(10, 1);
        vault.is_sale_active = false;
        assert_eq!(vault.record_sale(1), Err(ErrorCode::SaleNotActive.into()));
        assert_eq!(vault.fractions_sold, 0);
    }

    #[test]
    fn kyc_eligibility_follows_verification() {
        let mut kyc = test_kyc();
        assert!(!kyc.is_eligible());

        kyc.verify(VerificationMethod::EmailVerification, 1, 1_700_000_100)
            .unwrap();
        assert!(kyc.is_eligible());
        assert_eq!(kyc.verification_level, 1);
        assert_eq!(kyc.verified_at, 1_700_000_100);

        // re-verification overwrites without error
        kyc.verify(VerificationMethod::DocumentUpload, 3, 1_700_000_200)
            .unwrap();
        assert!(kyc.is_eligible());
        assert_eq!(kyc.verification_method, VerificationMethod::DocumentUpload);
        assert_eq!(kyc.verification_level, 3);
        assert_eq!(kyc.verified_at, 1_700_000_200);
    }

    #[test]
    fn kyc_verify_rejects_out_of_range_levels() {
        let mut kyc = test_kyc();
        for level in [0u8, 4, 255] {
            assert_eq!(
                kyc.verify(VerificationMethod::AdminApproval, level, 1),
                Err(ErrorCode::InvalidVerificationLevel.into())
            );
            assert!(!kyc.is_verified);
        }
    }

    #[test]
    fn config_update_persists_and_stamps() {
        let mut config = test_config();
        config
            .update_economics(250, 10_000, 100, 1_000_000, 1_700_000_500)
            .unwrap();
        assert_eq!(config.platform_fee_numerator, 250);
        assert_eq!(config.platform_fee_denominator, 10_000);
        assert_eq!(config.min_investment_amount, 100);
        assert_eq!(config.max_investment_amount, 1_000_000);
        assert_eq!(config.updated_at, 1_700_000_500);
    }

    #[test]
    fn config_update_rejects_bad_fee_ratio() {
        let mut config = test_config();
        assert_eq!(
            config.update_economics(1, 0, 1, 100, 1),
            Err(ErrorCode::InvalidFeeRatio.into())
        );
        assert_eq!(
            config.update_economics(10_001, 10_000, 1, 100, 1),
            Err(ErrorCode::InvalidFeeRatio.into())
        );
        // zero fee is a valid ratio
        config.update_economics(0, 10_000, 1, 100, 1).unwrap();
    }

    #[test]
    fn config_update_rejects_inverted_bounds() {
        let mut config = test_config();
        assert_eq!(
            config.update_economics(500, 10_000, 100, 99, 1),
            Err(ErrorCode::InvalidBounds.into())
        );
        // min == max is allowed
        config.update_economics(500, 10_000, 100, 100, 1).unwrap();
    }
}
