//! Shared building blocks for the Henkaku contract suite.
//!
//! This crate provides:
//! - [`roles`]: role tag names carried by the membership credential and the
//!   client interface every contract uses to read them.
//! - [`allowlist`]: a persistent, namespaced set of addresses used for
//!   explicit grants and issuer lists.

#![no_std]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod allowlist;
pub mod roles;

pub use roles::{CredentialHolder, CredentialHolderClient};
