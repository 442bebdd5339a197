//! Namespaced address sets kept in persistent storage.
//!
//! Each list is identified by a short symbol so one contract can keep several
//! independent sets (for example explicit grants and issuers). Entries are
//! only ever added; callers enforce their own authorization before writing.

use soroban_sdk::{Address, Env, Symbol};

const LIST_TTL_THRESHOLD: u32 = 5_184_000; // 5,184,000 ledgers ~= 300 days (@ ~5s/ledger)
const LIST_TTL_EXTEND_TO: u32 = 10_368_000; // 10,368,000 ledgers ~= 600 days (@ ~5s/ledger)

fn entry_key(list: &Symbol, address: &Address) -> (Symbol, Address) {
    (list.clone(), address.clone())
}

fn extend_entry_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, LIST_TTL_THRESHOLD, LIST_TTL_EXTEND_TO);
}

/// Adds `address` to `list`.
///
/// Returns `false` when the address was already present, in which case
/// storage is left untouched.
pub fn add(env: &Env, list: &Symbol, address: &Address) -> bool {
    let key = entry_key(list, address);
    if env.storage().persistent().has(&key) {
        extend_entry_ttl(env, &key);
        return false;
    }
    env.storage().persistent().set(&key, &true);
    extend_entry_ttl(env, &key);
    true
}

/// Returns whether `address` is in `list`.
pub fn contains(env: &Env, list: &Symbol, address: &Address) -> bool {
    let key = entry_key(list, address);
    let listed = env.storage().persistent().get(&key).unwrap_or(false);
    if listed {
        extend_entry_ttl(env, &key);
    }
    listed
}
