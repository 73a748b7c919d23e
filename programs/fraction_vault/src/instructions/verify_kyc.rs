use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::{KycAccount, PlatformConfig, VerificationMethod};

#[derive(Accounts)]
pub struct VerifyKyc<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [crate::fraction_vault::KYC_PREFIX, kyc_account.user.as_ref()],
        bump
    )]
    pub kyc_account: Account<'info, KycAccount>,

    #[account(
        seeds = [crate::fraction_vault::PLATFORM_CONFIG_PREFIX],
        bump,
        constraint = platform_config.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}

pub fn handler(
    ctx: Context<VerifyKyc>,
    verification_method: VerificationMethod,
    verification_level: u8,
) -> Result<()> {
    let clock = Clock::get()?;

    let kyc_account = &mut ctx.accounts.kyc_account;
    kyc_account.verify(verification_method, verification_level, clock.unix_timestamp)?;

    msg!(
        "KYC verified: user {}, method {:?}, level {}",
        kyc_account.user,
        kyc_account.verification_method,
        kyc_account.verification_level
    );

    Ok(())
}
