//! # Role oracle
//!
//! Answers "does this address hold role R?" from the tags the membership
//! credential reports for it. Every lookup is a fresh cross-contract call;
//! nothing is cached, so a tag granted or revoked at the credential holder is
//! visible to the very next authorization check.
//!
//! An address the credential holder has never seen has no tags. Before
//! `initialize` no holder is configured and every lookup comes back empty,
//! which is what `check_access` reports on an uninitialized registry.

use common::CredentialHolderClient;
use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::MEMBERSHIP;

fn credential_holder(env: &Env) -> Option<Address> {
    env.storage().instance().get(&MEMBERSHIP)
}

/// Current tag set of `principal`.
pub fn tags_of(env: &Env, principal: &Address) -> Vec<Symbol> {
    match credential_holder(env) {
        Some(holder) => CredentialHolderClient::new(env, &holder).tags_of(principal),
        None => Vec::new(env),
    }
}

pub fn has_role(env: &Env, principal: &Address, role: &Symbol) -> bool {
    tags_of(env, principal).contains(role)
}

/// Whether `principal` holds at least one of `roles`, resolved with a single
/// lookup.
pub fn has_any_role(env: &Env, principal: &Address, roles: &[Symbol]) -> bool {
    let tags = tags_of(env, principal);
    roles.iter().any(|role| tags.contains(role))
}
