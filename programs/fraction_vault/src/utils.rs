use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Gross payment for a purchase, in payment-token minor units.
pub fn purchase_cost(num_fractions: u64, price_per_fraction: u64) -> Result<u64> {
    num_fractions
        .checked_mul(price_per_fraction)
        .ok_or_else(|| ErrorCode::MathOverflow.into())
}

/// Split a gross payment into (creator amount, platform fee).
///
/// The fee is floored, so the creator receives every unit the fee rounding
/// leaves behind and the two parts always sum to `gross`.
pub fn split_payment(gross: u64, fee_numerator: u64, fee_denominator: u64) -> Result<(u64, u64)> {
    let platform_fee = gross
        .checked_mul(fee_numerator)
        .and_then(|scaled| scaled.checked_div(fee_denominator))
        .ok_or(ErrorCode::MathOverflow)?;

    let creator_amount = gross
        .checked_sub(platform_fee)
        .ok_or(ErrorCode::MathOverflow)?;

    Ok((creator_amount, platform_fee))
}

pub fn check_investment_bounds(amount: u64, min: u64, max: u64) -> Result<()> {
    require!(
        amount >= min && amount <= max,
        ErrorCode::InvestmentOutOfBounds
    );
    Ok(())
}

/// Vault record PDA for an asset mint.
pub fn get_vault_address(asset_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[crate::fraction_vault::VAULT_PREFIX, asset_mint.as_ref()],
        &crate::ID,
    )
    .0
}

/// Fraction mint PDA for an asset mint.
pub fn get_fraction_mint_address(asset_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[crate::fraction_vault::FRACTION_MINT_PREFIX, asset_mint.as_ref()],
        &crate::ID,
    )
    .0
}

/// KYC record PDA for a user.
pub fn get_kyc_address(user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[crate::fraction_vault::KYC_PREFIX, user.as_ref()],
        &crate::ID,
    )
    .0
}

/// Platform configuration singleton PDA.
pub fn get_platform_config_address() -> Pubkey {
    Pubkey::find_program_address(&[crate::fraction_vault::PLATFORM_CONFIG_PREFIX], &crate::ID).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_cost_multiplies() {
        assert_eq!(purchase_cost(100, 50).unwrap(), 5000);
        assert_eq!(purchase_cost(1, 1).unwrap(), 1);
    }

    #[test]
    fn purchase_cost_fails_closed_on_overflow() {
        assert_eq!(
            purchase_cost(u64::MAX, 2),
            Err(ErrorCode::MathOverflow.into())
        );
    }

    #[test]
    fn split_payment_five_percent() {
        let (creator_amount, platform_fee) = split_payment(10_000, 500, 10_000).unwrap();
        assert_eq!(platform_fee, 500);
        assert_eq!(creator_amount, 9_500);
    }

    #[test]
    fn split_payment_floors_fee_and_conserves_gross() {
        // 999 * 500 / 10000 = 49.95, floored to 49
        let (creator_amount, platform_fee) = split_payment(999, 500, 10_000).unwrap();
        assert_eq!(platform_fee, 49);
        assert_eq!(creator_amount, 950);
        assert_eq!(creator_amount + platform_fee, 999);
    }

    #[test]
    fn split_payment_zero_fee() {
        let (creator_amount, platform_fee) = split_payment(10_000, 0, 10_000).unwrap();
        assert_eq!(platform_fee, 0);
        assert_eq!(creator_amount, 10_000);
    }

    #[test]
    fn split_payment_overflow_fails_closed() {
        assert_eq!(
            split_payment(u64::MAX, u64::MAX, 1),
            Err(ErrorCode::MathOverflow.into())
        );
    }

    #[test]
    fn investment_bounds_are_inclusive() {
        check_investment_bounds(10, 10, 100).unwrap();
        check_investment_bounds(100, 10, 100).unwrap();
        assert_eq!(
            check_investment_bounds(9, 10, 100),
            Err(ErrorCode::InvestmentOutOfBounds.into())
        );
        assert_eq!(
            check_investment_bounds(101, 10, 100),
            Err(ErrorCode::InvestmentOutOfBounds.into())
        );
    }

    #[test]
    fn pda_helpers_are_deterministic_and_distinct() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();

        assert_eq!(get_vault_address(&mint_a), get_vault_address(&mint_a));
        assert_ne!(get_vault_address(&mint_a), get_vault_address(&mint_b));
        assert_ne!(get_vault_address(&mint_a), get_fraction_mint_address(&mint_a));

        let user = Pubkey::new_unique();
        assert_eq!(get_kyc_address(&user), get_kyc_address(&user));
        assert_ne!(get_kyc_address(&user), get_platform_config_address());
    }
}
