use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

declare_id!("91CLwQaCxutnTf8XafP3e6EmGBA3eUkMaw86Hgghby4R");

/// NFT fractionalization platform.
///
/// Locks an NFT in a program-owned vault, mints a fixed supply of fraction
/// tokens and sells them for a stable payment token with a platform fee
/// split. Purchases and redemption are gated behind a KYC flag set by the
/// platform admin. Whoever accumulates the full fraction supply can burn it
/// to reclaim the locked NFT, which closes the vault.
#[program]
pub mod fraction_vault {
    use super::*;

    pub const VAULT_PREFIX: &[u8] = b"vault";
    pub const VAULT_ASSET_PREFIX: &[u8] = b"vault_asset";
    pub const VAULT_FRACTIONS_PREFIX: &[u8] = b"vault_fractions";
    pub const FRACTION_MINT_PREFIX: &[u8] = b"fraction_mint";
    pub const KYC_PREFIX: &[u8] = b"kyc";
    pub const PLATFORM_CONFIG_PREFIX: &[u8] = b"platform_config";

    /// Fractions are whole shares, never subdivided.
    pub const FRACTION_DECIMALS: u8 = 0;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    pub fn update_platform_config(
        ctx: Context<UpdatePlatformConfig>,
        platform_fee_numerator: u64,
        platform_fee_denominator: u64,
        min_investment_amount: u64,
        max_investment_amount: u64,
    ) -> Result<()> {
        instructions::update_config::handler(
            ctx,
            platform_fee_numerator,
            platform_fee_denominator,
            min_investment_amount,
            max_investment_amount,
        )
    }

    pub fn register_kyc(
        ctx: Context<RegisterKyc>,
        email: Option<String>,
        country: Option<String>,
    ) -> Result<()> {
        instructions::register_kyc::handler(ctx, email, country)
    }

    pub fn verify_kyc(
        ctx: Context<VerifyKyc>,
        verification_method: VerificationMethod,
        verification_level: u8,
    ) -> Result<()> {
        instructions::verify_kyc::handler(ctx, verification_method, verification_level)
    }

    pub fn fractionalize(
        ctx: Context<Fractionalize>,
        total_fractions: u64,
        price_per_fraction: u64,
    ) -> Result<()> {
        instructions::fractionalize::handler(ctx, total_fractions, price_per_fraction)
    }

    pub fn buy_fractions(ctx: Context<BuyFractions>, num_fractions: u64) -> Result<()> {
        instructions::buy_fractions::handler(ctx, num_fractions)
    }

    pub fn redeem(ctx: Context<Redeem>) -> Result<()> {
        instructions::redeem::handler(ctx)
    }
}
