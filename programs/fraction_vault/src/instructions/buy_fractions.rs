use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

use crate::error::ErrorCode;
use crate::state::{KycAccount, PlatformConfig, Vault};
use crate::utils;

#[derive(Accounts)]
pub struct BuyFractions<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [crate::fraction_vault::VAULT_PREFIX, vault.asset_mint.as_ref()],
        bump,
        has_one = creator_payment_account @ ErrorCode::TokenAccountMismatch,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        seeds = [crate::fraction_vault::PLATFORM_CONFIG_PREFIX],
        bump,
        constraint = platform_config.is_active @ ErrorCode::PlatformInactive,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        seeds = [crate::fraction_vault::FRACTION_MINT_PREFIX, vault.asset_mint.as_ref()],
        bump
    )]
    pub fraction_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::fraction_vault::VAULT_FRACTIONS_PREFIX, vault.asset_mint.as_ref()],
        bump
    )]
    pub vault_fraction_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = fraction_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_fraction_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = buyer_payment_account.owner == buyer.key() @ ErrorCode::OwnerMismatch,
        constraint = buyer_payment_account.mint == platform_config.payment_mint
            @ ErrorCode::TokenAccountMismatch,
    )]
    pub buyer_payment_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub creator_payment_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = platform_payment_account.key() == platform_config.treasury
            @ ErrorCode::TokenAccountMismatch,
    )]
    pub platform_payment_account: Account<'info, TokenAccount>,

    #[account(
        seeds = [crate::fraction_vault::KYC_PREFIX, buyer.key().as_ref()],
        bump,
        constraint = kyc_account.is_eligible() @ ErrorCode::KycNotVerified,
    )]
    pub kyc_account: Account<'info, KycAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BuyFractions>, num_fractions: u64) -> Result<()> {
    // Availability checks and the fractions_sold increment live in one
    // place; the runtime discards the write if anything below fails.
    ctx.accounts.vault.record_sale(num_fractions)?;

    let config = &ctx.accounts.platform_config;
    let gross = utils::purchase_cost(num_fractions, ctx.accounts.vault.price_per_fraction)?;
    utils::check_investment_bounds(
        gross,
        config.min_investment_amount,
        config.max_investment_amount,
    )?;
    let (creator_amount, platform_fee) = utils::split_payment(
        gross,
        config.platform_fee_numerator,
        config.platform_fee_denominator,
    )?;

    // Payment: net to the creator, fee to the treasury.
    transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_payment_account.to_account_info(),
                to: ctx.accounts.creator_payment_account.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        creator_amount,
    )?;

    if platform_fee > 0 {
        transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer_payment_account.to_account_info(),
                    to: ctx.accounts.platform_payment_account.to_account_info(),
                    authority: ctx.accounts.buyer.to_account_info(),
                },
            ),
            platform_fee,
        )?;
    }

    // Shares leave vault custody under the vault PDA's signature.
    let asset_mint_key = ctx.accounts.vault.asset_mint;
    let vault_seeds: &[&[u8]] = &[
        crate::fraction_vault::VAULT_PREFIX,
        asset_mint_key.as_ref(),
        &[ctx.bumps.vault],
    ];

    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault_fraction_account.to_account_info(),
                to: ctx.accounts.buyer_fraction_account.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            &[vault_seeds],
        ),
        num_fractions,
    )?;

    msg!(
        "{} bought {} fractions for {} ({} to creator, {} fee), sold {}/{}",
        ctx.accounts.buyer.key(),
        num_fractions,
        gross,
        creator_amount,
        platform_fee,
        ctx.accounts.vault.fractions_sold,
        ctx.accounts.vault.total_fractions
    );

    Ok(())
}
