//! Role tags carried by the membership credential.
//!
//! Tags are plain [`Symbol`]s so the credential holder can store any label;
//! the three below are the ones the quest registry understands.

use soroban_sdk::{contractclient, Address, Env, Symbol, Vec};

pub const ADMIN_ROLE: &str = "ADMIN_ROLE";
pub const MEMBER_ROLE: &str = "MEMBER_ROLE";
pub const QUEST_CREATION_ROLE: &str = "QUEST_CREATION_ROLE";

pub fn admin_role(env: &Env) -> Symbol {
    Symbol::new(env, ADMIN_ROLE)
}

pub fn member_role(env: &Env) -> Symbol {
    Symbol::new(env, MEMBER_ROLE)
}

pub fn quest_creation_role(env: &Env) -> Symbol {
    Symbol::new(env, QUEST_CREATION_ROLE)
}

/// Interface of a contract that holds role tags for addresses.
///
/// Implemented by the membership contract; consumed through the generated
/// [`CredentialHolderClient`].
#[contractclient(name = "CredentialHolderClient")]
pub trait CredentialHolder {
    /// Every tag currently held by `holder`. Unknown holders have none.
    fn tags_of(env: Env, holder: Address) -> Vec<Symbol>;

    /// Attach `tag` to `holder`. `issuer` must be allowed to issue tags.
    fn grant_tag(env: Env, issuer: Address, holder: Address, tag: Symbol);
}
