use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::PlatformConfig;

#[derive(Accounts)]
pub struct UpdatePlatformConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [crate::fraction_vault::PLATFORM_CONFIG_PREFIX],
        bump,
        constraint = platform_config.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}

pub fn handler(
    ctx: Context<UpdatePlatformConfig>,
    platform_fee_numerator: u64,
    platform_fee_denominator: u64,
    min_investment_amount: u64,
    max_investment_amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;

    ctx.accounts.platform_config.update_economics(
        platform_fee_numerator,
        platform_fee_denominator,
        min_investment_amount,
        max_investment_amount,
        clock.unix_timestamp,
    )?;

    msg!(
        "Platform config updated, fee: {}/{}, bounds: {} - {}",
        platform_fee_numerator,
        platform_fee_denominator,
        min_investment_amount,
        max_investment_amount
    );

    Ok(())
}
