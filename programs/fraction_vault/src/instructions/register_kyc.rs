use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::{KycAccount, VerificationMethod};

#[derive(Accounts)]
pub struct RegisterKyc<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init,
        payer = user,
        space = KycAccount::LEN,
        seeds = [crate::fraction_vault::KYC_PREFIX, user.key().as_ref()],
        bump
    )]
    pub kyc_account: Account<'info, KycAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterKyc>,
    email: Option<String>,
    country: Option<String>,
) -> Result<()> {
    if let Some(email) = &email {
        require!(
            email.len() <= KycAccount::MAX_EMAIL_LEN,
            ErrorCode::KycMetadataTooLong
        );
    }
    if let Some(country) = &country {
        require!(
            country.len() <= KycAccount::MAX_COUNTRY_LEN,
            ErrorCode::KycMetadataTooLong
        );
    }

    let kyc_account = &mut ctx.accounts.kyc_account;
    kyc_account.user = ctx.accounts.user.key();
    kyc_account.is_verified = false;
    kyc_account.verification_method = VerificationMethod::AdminApproval;
    kyc_account.verification_level = 0;
    kyc_account.verified_at = 0;
    kyc_account.email = email;
    kyc_account.country = country;

    msg!("KYC registration created for {}", kyc_account.user);

    Ok(())
}
