#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

/// Event published when the membership contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when a membership token is minted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMintedEvent {
    pub token_id: u64,
    pub holder: Address,
    pub tags: Vec<Symbol>,
    pub timestamp: u64,
}

/// Event published when a single tag is attached to or removed from a holder.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagChangedEvent {
    pub issuer: Address,
    pub holder: Address,
    pub tag: Symbol,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("INIT"),), data);
}

pub fn publish_issuer_added(env: &Env, issuer: Address) {
    env.events()
        .publish((symbol_short!("ISS_ADD"),), issuer);
}

pub fn publish_token_minted(env: &Env, token_id: u64, holder: Address, tags: Vec<Symbol>) {
    let topics = (symbol_short!("MINT"), holder.clone());
    let data = TokenMintedEvent {
        token_id,
        holder,
        tags,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_tag_granted(env: &Env, issuer: Address, holder: Address, tag: Symbol) {
    let topics = (symbol_short!("TAG_ADD"), holder.clone());
    let data = TagChangedEvent {
        issuer,
        holder,
        tag,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_tag_revoked(env: &Env, issuer: Address, holder: Address, tag: Symbol) {
    let topics = (symbol_short!("TAG_REV"), holder.clone());
    let data = TagChangedEvent {
        issuer,
        holder,
        tag,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
