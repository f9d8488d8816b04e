//! Canonical names of commonly traded asset pairs
//!
//! Kraken keys public results by these names, even when a request used the
//! alternate form (e.g. `XBTEUR`).

pub const XXBTZEUR: &str = "XXBTZEUR";
pub const XXBTZUSD: &str = "XXBTZUSD";
pub const XXBTZGBP: &str = "XXBTZGBP";
pub const XXBTZJPY: &str = "XXBTZJPY";
pub const XXBTZCAD: &str = "XXBTZCAD";
pub const XETHZEUR: &str = "XETHZEUR";
pub const XETHZUSD: &str = "XETHZUSD";
pub const XETHZGBP: &str = "XETHZGBP";
pub const XETHXXBT: &str = "XETHXXBT";
pub const XLTCZEUR: &str = "XLTCZEUR";
pub const XLTCZUSD: &str = "XLTCZUSD";
pub const XLTCXXBT: &str = "XLTCXXBT";
pub const XXRPZEUR: &str = "XXRPZEUR";
pub const XXRPZUSD: &str = "XXRPZUSD";
pub const XXRPXXBT: &str = "XXRPXXBT";
pub const XXLMZEUR: &str = "XXLMZEUR";
pub const XXLMZUSD: &str = "XXLMZUSD";
pub const XXLMXXBT: &str = "XXLMXXBT";
pub const XZECZEUR: &str = "XZECZEUR";
pub const XZECZUSD: &str = "XZECZUSD";
pub const XZECXXBT: &str = "XZECXXBT";
pub const XXMRZEUR: &str = "XXMRZEUR";
pub const XXMRZUSD: &str = "XXMRZUSD";
pub const XXMRXXBT: &str = "XXMRXXBT";
pub const XETCZEUR: &str = "XETCZEUR";
pub const XETCZUSD: &str = "XETCZUSD";
pub const XETCXXBT: &str = "XETCXXBT";
pub const XETCXETH: &str = "XETCXETH";
