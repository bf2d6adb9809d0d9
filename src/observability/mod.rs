//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stdout via tracing-subscriber fmt layer
//! ```
//!
//! # Design Decisions
//! - Each VRF request runs in a span carrying a UUID request id
//! - Display updates are logged under the `vrf_wallet_bridge::display` target

pub mod logging;

pub use logging::init_logging;
