//! VRF random-number client and headless wallet screen.

pub mod config;
pub mod lifecycle;
pub mod network;
pub mod observability;
pub mod preferences;
pub mod vrf;
pub mod wallet;

pub use config::schema::BridgeConfig;
pub use lifecycle::Shutdown;
pub use vrf::{RandomNumberClient, RandomNumberRequest, RandomNumberResult};
