#![no_std]

//! # Membership credential
//!
//! Non-transferable membership tokens that carry role tags. A holder's role
//! set is the union of the tags on every token they were minted, plus any tag
//! granted individually afterwards. Other contracts read it through
//! [`common::CredentialHolderClient`].
//!
//! Only the admin and registered issuers may mint or change tags.

pub mod events;

use common::allowlist;
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol, Vec,
};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const TOKEN_CTR: Symbol = symbol_short!("TOK_CTR");
const TOKEN: Symbol = symbol_short!("TOKEN");
const HOLDER_TAGS: Symbol = symbol_short!("HLD_TAGS");
const HOLDER_BAL: Symbol = symbol_short!("HLD_BAL");
const ISSUERS: Symbol = symbol_short!("ISSUER");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MembershipError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    TokenNotFound = 5,
}

/// A minted membership token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MembershipToken {
    pub id: u64,
    pub holder: Address,
    pub tags: Vec<Symbol>,
    pub minted_at: u64,
}

fn token_key(id: u64) -> (Symbol, u64) {
    (TOKEN, id)
}

fn holder_tags_key(holder: &Address) -> (Symbol, Address) {
    (HOLDER_TAGS, holder.clone())
}

fn holder_balance_key(holder: &Address) -> (Symbol, Address) {
    (HOLDER_BAL, holder.clone())
}

fn load_tags(env: &Env, holder: &Address) -> Vec<Symbol> {
    env.storage()
        .persistent()
        .get(&holder_tags_key(holder))
        .unwrap_or(Vec::new(env))
}

fn store_tags(env: &Env, holder: &Address, tags: &Vec<Symbol>) {
    let key = holder_tags_key(holder);
    env.storage().persistent().set(&key, tags);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

#[contract]
pub struct MembershipContract;

#[contractimpl]
impl MembershipContract {
    /// Initialize the contract with an admin address.
    pub fn initialize(env: Env, admin: Address) -> Result<(), MembershipError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(MembershipError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, MembershipError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(MembershipError::NotInitialized)
    }

    /// Allow `issuer` (typically another contract) to mint and grant tags.
    pub fn add_issuer(env: Env, admin: Address, issuer: Address) -> Result<(), MembershipError> {
        admin.require_auth();
        if admin != Self::get_admin(env.clone())? {
            return Err(MembershipError::Unauthorized);
        }

        if allowlist::add(&env, &ISSUERS, &issuer) {
            events::publish_issuer_added(&env, issuer);
        }
        Ok(())
    }

    pub fn is_issuer(env: Env, address: Address) -> bool {
        Self::can_issue(&env, &address)
    }

    /// Mint a token carrying `tags` to `holder` and return its id.
    pub fn mint(
        env: Env,
        issuer: Address,
        holder: Address,
        tags: Vec<Symbol>,
    ) -> Result<u64, MembershipError> {
        issuer.require_auth();
        Self::require_issuer(&env, &issuer)?;

        if tags.is_empty() {
            return Err(MembershipError::InvalidInput);
        }

        let id: u64 = env.storage().instance().get(&TOKEN_CTR).unwrap_or(0u64);
        env.storage()
            .instance()
            .set(&TOKEN_CTR, &id.saturating_add(1));

        let token = MembershipToken {
            id,
            holder: holder.clone(),
            tags: tags.clone(),
            minted_at: env.ledger().timestamp(),
        };
        let key = token_key(id);
        env.storage().persistent().set(&key, &token);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        let mut held = load_tags(&env, &holder);
        for tag in tags.iter() {
            if !held.contains(&tag) {
                held.push_back(tag);
            }
        }
        store_tags(&env, &holder, &held);

        let bal_key = holder_balance_key(&holder);
        let balance: u32 = env.storage().persistent().get(&bal_key).unwrap_or(0);
        env.storage()
            .persistent()
            .set(&bal_key, &balance.saturating_add(1));

        events::publish_token_minted(&env, id, holder, tags);

        Ok(id)
    }

    /// Attach a single tag to `holder`. Granting a tag the holder already has
    /// is a no-op.
    pub fn grant_tag(
        env: Env,
        issuer: Address,
        holder: Address,
        tag: Symbol,
    ) -> Result<(), MembershipError> {
        issuer.require_auth();
        Self::require_issuer(&env, &issuer)?;

        let mut held = load_tags(&env, &holder);
        if held.contains(&tag) {
            return Ok(());
        }
        held.push_back(tag.clone());
        store_tags(&env, &holder, &held);

        events::publish_tag_granted(&env, issuer, holder, tag);
        Ok(())
    }

    /// Detach a tag from `holder`, whichever token it came from.
    pub fn revoke_tag(
        env: Env,
        issuer: Address,
        holder: Address,
        tag: Symbol,
    ) -> Result<(), MembershipError> {
        issuer.require_auth();
        Self::require_issuer(&env, &issuer)?;

        let held = load_tags(&env, &holder);
        if !held.contains(&tag) {
            return Ok(());
        }

        let mut remaining = Vec::new(&env);
        for t in held.iter() {
            if t != tag {
                remaining.push_back(t);
            }
        }
        store_tags(&env, &holder, &remaining);

        events::publish_tag_revoked(&env, issuer, holder, tag);
        Ok(())
    }

    pub fn tags_of(env: Env, holder: Address) -> Vec<Symbol> {
        load_tags(&env, &holder)
    }

    pub fn has_tag(env: Env, holder: Address, tag: Symbol) -> bool {
        load_tags(&env, &holder).contains(&tag)
    }

    pub fn balance_of(env: Env, holder: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&holder_balance_key(&holder))
            .unwrap_or(0)
    }

    pub fn get_token(env: Env, token_id: u64) -> Result<MembershipToken, MembershipError> {
        env.storage()
            .persistent()
            .get(&token_key(token_id))
            .ok_or(MembershipError::TokenNotFound)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn can_issue(env: &Env, address: &Address) -> bool {
        let admin: Option<Address> = env.storage().instance().get(&ADMIN);
        admin.as_ref() == Some(address) || allowlist::contains(env, &ISSUERS, address)
    }

    fn require_issuer(env: &Env, issuer: &Address) -> Result<(), MembershipError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(MembershipError::NotInitialized);
        }
        if !Self::can_issue(env, issuer) {
            return Err(MembershipError::Unauthorized);
        }
        Ok(())
    }
}
