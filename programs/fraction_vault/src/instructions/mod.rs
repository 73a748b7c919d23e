pub mod buy_fractions;
pub mod fractionalize;
pub mod initialize;
pub mod redeem;
pub mod register_kyc;
pub mod update_config;
pub mod verify_kyc;

pub use buy_fractions::*;
pub use fractionalize::*;
pub use initialize::*;
pub use redeem::*;
pub use register_kyc::*;
pub use update_config::*;
pub use verify_kyc::*;
