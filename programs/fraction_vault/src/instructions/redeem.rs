use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{burn, transfer, Burn, Mint, Token, TokenAccount, Transfer},
};

use crate::error::ErrorCode;
use crate::state::{KycAccount, Vault};

#[derive(Accounts)]
pub struct Redeem<'info> {
    #[account(mut)]
    pub redeemer: Signer<'info>,

    #[account(
        mut,
        close = redeemer,
        seeds = [crate::fraction_vault::VAULT_PREFIX, vault.asset_mint.as_ref()],
        bump,
        has_one = asset_mint @ ErrorCode::TokenAccountMismatch,
    )]
    pub vault: Account<'info, Vault>,

    pub asset_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::fraction_vault::FRACTION_MINT_PREFIX, vault.asset_mint.as_ref()],
        bump
    )]
    pub fraction_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = redeemer_fraction_account.mint == fraction_mint.key()
            @ ErrorCode::TokenAccountMismatch,
        constraint = redeemer_fraction_account.owner == redeemer.key() @ ErrorCode::OwnerMismatch,
    )]
    pub redeemer_fraction_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [crate::fraction_vault::VAULT_ASSET_PREFIX, vault.asset_mint.as_ref()],
        bump
    )]
    pub vault_asset_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = redeemer,
        associated_token::mint = asset_mint,
        associated_token::authority = redeemer,
    )]
    pub redeemer_asset_account: Account<'info, TokenAccount>,

    #[account(
        seeds = [crate::fraction_vault::KYC_PREFIX, redeemer.key().as_ref()],
        bump,
        constraint = kyc_account.is_eligible() @ ErrorCode::KycNotVerified,
    )]
    pub kyc_account: Account<'info, KycAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Redeem>) -> Result<()> {
    let total_fractions = ctx.accounts.vault.total_fractions;

    // Eligibility is the redeemer's live balance, nothing else.
    require!(
        ctx.accounts.redeemer_fraction_account.amount == total_fractions,
        ErrorCode::InsufficientTokens
    );

    let clock = Clock::get()?;

    // Retire the full fraction supply.
    burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.fraction_mint.to_account_info(),
                from: ctx.accounts.redeemer_fraction_account.to_account_info(),
                authority: ctx.accounts.redeemer.to_account_info(),
            },
        ),
        total_fractions,
    )?;

    // Release the NFT from vault custody.
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
                from: ctx.accounts.vault_asset_account.to_account_info(),
                to: ctx.accounts.redeemer_asset_account.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            &[vault_seeds],
        ),
        1,
    )?;

    // The vault record closes to the redeemer when this instruction ends.
    let vault = &mut ctx.accounts.vault;
    vault.is_sale_active = false;
    vault.sale_ended_at = Some(clock.unix_timestamp);

    msg!(
        "NFT {} redeemed by {}, {} fractions burned, vault closed",
        asset_mint_key,
        ctx.accounts.redeemer.key(),
        total_fractions
    );

    Ok(())
}
