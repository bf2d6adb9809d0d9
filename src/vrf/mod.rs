//! Verifiable-random-number subsystem.
//!
//! # Data Flow
//! ```text
//! VrfConfig / caller
//!     → RandomNumberRequest (network, numWords, auth token)
//!     → client.rs (POST <endpoint>?network=..&numWords=..)
//!     → types.rs (JSON → RandomNumberResult)
//!     → ResultSink (closure, oneshot, controller)
//! ```
//!
//! # Security Constraints
//! - The auth token is sent only in the Authorization header
//! - Never log the auth token

pub mod client;
pub mod state;
pub mod types;

pub use client::{RandomNumberClient, ResultSink};
pub use state::{RequestState, StateError};
pub use types::{FailureKind, RandomNumberRequest, RandomNumberResult, VrfError};
