//! Wallet integration subsystem.
//!
//! # Data Flow
//! ```text
//! user action
//!     → controller.rs (WalletController)
//!     → plugin.rs (WalletPlugin, keyed by the persisted network)
//!     → session.rs (login flag + account id)
//!     → StatusDisplay (heading, login label, contract output)
//! ```
//!
//! # Security Constraints
//! - Key handling stays inside the plugin
//! - Plugin replies are rendered verbatim

pub mod controller;
pub mod plugin;
pub mod session;

pub use controller::{DetachedWallet, LogDisplay, StatusDisplay, WalletController};
pub use plugin::{ContractCall, WalletError, WalletPlugin};
pub use session::WalletSession;
