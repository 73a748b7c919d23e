use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::state::PlatformConfig;

pub const DEFAULT_PLATFORM_FEE_NUMERATOR: u64 = 500;
pub const DEFAULT_PLATFORM_FEE_DENOMINATOR: u64 = 10_000;
pub const DEFAULT_MIN_INVESTMENT_AMOUNT: u64 = 1;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = PlatformConfig::LEN,
        seeds = [crate::fraction_vault::PLATFORM_CONFIG_PREFIX],
        bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// Payment-token account that will collect platform fees. Its mint
    /// becomes the platform payment mint.
    pub treasury: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.platform_config;
    let clock = Clock::get()?;

    config.admin = ctx.accounts.admin.key();
    config.treasury = ctx.accounts.treasury.key();
    config.payment_mint = ctx.accounts.treasury.mint;
    config.platform_fee_numerator = DEFAULT_PLATFORM_FEE_NUMERATOR;
    config.platform_fee_denominator = DEFAULT_PLATFORM_FEE_DENOMINATOR;
    config.min_investment_amount = DEFAULT_MIN_INVESTMENT_AMOUNT;
    // no purchase cap until the admin sets one
    config.max_investment_amount = u64::MAX;
    config.is_active = true;
    config.created_at = clock.unix_timestamp;
    config.updated_at = clock.unix_timestamp;

    msg!("Platform initialized, admin: {}", config.admin);
    msg!("Treasury: {}", config.treasury);

    Ok(())
}
