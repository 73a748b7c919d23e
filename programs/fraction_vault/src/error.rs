use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Total fractions must be greater than 0")]
    InvalidTotalFractions,
    #[msg("Price per fraction must be greater than 0")]
    InvalidPrice,
    #[msg("Amount must be greater than 0")]
    InvalidAmount,
    #[msg("Fee numerator must not exceed denominator and denominator must be > 0")]
    InvalidFeeRatio,
    #[msg("Minimum investment must not exceed maximum investment")]
    InvalidBounds,
    #[msg("Verification level must be between 1 and 3")]
    InvalidVerificationLevel,
    #[msg("Email or country string exceeds the maximum length")]
    KycMetadataTooLong,
    #[msg("Admin authority required")]
    Unauthorized,
    #[msg("KYC verification required")]
    KycNotVerified,
    #[msg("Platform is not active")]
    PlatformInactive,
    #[msg("Sale is not active")]
    SaleNotActive,
    #[msg("Not enough fractions remaining for purchase")]
    InsufficientFractions,
    #[msg("Payment amount outside the configured investment bounds")]
    InvestmentOutOfBounds,
    #[msg("Redemption requires the full fraction supply")]
    InsufficientTokens,
    #[msg("Vault is not ready for redemption")]
    VaultNotReadyForRedemption,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Asset mint is not an NFT")]
    NotAnNft,
    #[msg("Token account owner mismatch")]
    OwnerMismatch,
    #[msg("Token account or mint mismatch")]
    TokenAccountMismatch,
    #[msg("Vault account already exists")]
    VaultAccountAlreadyExists,
    #[msg("KYC account already exists")]
    KycAccountAlreadyExists,
}
