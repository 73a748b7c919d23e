use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, transfer, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::error::ErrorCode;
use crate::state::{PlatformConfig, Vault};

#[derive(Accounts)]
pub struct Fractionalize<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [crate::fraction_vault::PLATFORM_CONFIG_PREFIX],
        bump,
        constraint = platform_config.is_active @ ErrorCode::PlatformInactive,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// The NFT being locked: a 1-unit, zero-decimals mint.
    #[account(
        constraint = asset_mint.supply == 1 @ ErrorCode::NotAnNft,
        constraint = asset_mint.decimals == 0 @ ErrorCode::NotAnNft,
    )]
    pub asset_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = creator,
        space = Vault::LEN,
        seeds = [crate::fraction_vault::VAULT_PREFIX, asset_mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// Fresh fraction line for this vault. The PDA seeds tie it to the asset
    /// mint, so it can never collide with an existing line.
    #[account(
        init,
        payer = creator,
        seeds = [crate::fraction_vault::FRACTION_MINT_PREFIX, asset_mint.key().as_ref()],
        bump,
        mint::decimals = crate::fraction_vault::FRACTION_DECIMALS,
        mint::authority = vault,
        mint::freeze_authority = vault,
    )]
    pub fraction_mint: Account<'info, Mint>,

    /// Custody account holding the unsold fraction supply.
    #[account(
        init,
        payer = creator,
        seeds = [crate::fraction_vault::VAULT_FRACTIONS_PREFIX, asset_mint.key().as_ref()],
        bump,
        token::mint = fraction_mint,
        token::authority = vault,
    )]
    pub vault_fraction_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = creator_asset_account.mint == asset_mint.key() @ ErrorCode::TokenAccountMismatch,
        constraint = creator_asset_account.owner == creator.key() @ ErrorCode::OwnerMismatch,
        constraint = creator_asset_account.amount == 1 @ ErrorCode::NotAnNft,
    )]
    pub creator_asset_account: Account<'info, TokenAccount>,

    /// Custody account the NFT is locked into.
    #[account(
        init,
        payer = creator,
        seeds = [crate::fraction_vault::VAULT_ASSET_PREFIX, asset_mint.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = vault,
    )]
    pub vault_asset_account: Account<'info, TokenAccount>,

    /// Where sale proceeds for the creator will be sent on every purchase.
    #[account(
        constraint = creator_payment_account.mint == platform_config.payment_mint
            @ ErrorCode::TokenAccountMismatch,
    )]
    pub creator_payment_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<Fractionalize>,
    total_fractions: u64,
    price_per_fraction: u64,
) -> Result<()> {
    require!(total_fractions > 0, ErrorCode::InvalidTotalFractions);
    require!(price_per_fraction > 0, ErrorCode::InvalidPrice);

    let clock = Clock::get()?;

    let vault = &mut ctx.accounts.vault;
    vault.creator = ctx.accounts.creator.key();
    vault.asset_mint = ctx.accounts.asset_mint.key();
    vault.fraction_mint = ctx.accounts.fraction_mint.key();
    vault.total_fractions = total_fractions;
    vault.price_per_fraction = price_per_fraction;
    vault.fractions_sold = 0;
    vault.is_sale_active = true;
    vault.creator_payment_account = ctx.accounts.creator_payment_account.key();
    vault.created_at = clock.unix_timestamp;
    vault.sale_ended_at = None;

    // Lock the NFT into vault custody.
    transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_asset_account.to_account_info(),
                to: ctx.accounts.vault_asset_account.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        1,
    )?;

    // Mint the full fraction supply into vault custody; the vault PDA is the
    // mint authority.
    let asset_mint_key = ctx.accounts.asset_mint.key();
    let vault_seeds: &[&[u8]] = &[
        crate::fraction_vault::VAULT_PREFIX,
        asset_mint_key.as_ref(),
        &[ctx.bumps.vault],
    ];

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.fraction_mint.to_account_info(),
                to: ctx.accounts.vault_fraction_account.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            &[vault_seeds],
        ),
        total_fractions,
    )?;

    msg!(
        "NFT {} fractionalized into {} shares at {} each, vault {}",
        asset_mint_key,
        total_fractions,
        price_per_fraction,
        ctx.accounts.vault.key()
    );

    Ok(())
}
