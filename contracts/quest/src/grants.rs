//! Explicit quest-creation grants and the member-role forward.
//!
//! The grant set only grows. Callers must authorize
//! [`Operation::GrantCreationRole`](crate::policy::Operation) first.

use common::{allowlist, roles::member_role, CredentialHolderClient};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{QuestError, MEMBERSHIP};

const QUEST_CREATORS: Symbol = symbol_short!("QC_GRANT");

pub fn is_quest_creator(env: &Env, principal: &Address) -> bool {
    allowlist::contains(env, &QUEST_CREATORS, principal)
}

/// Returns `false` if `principal` already held the grant.
pub fn add_quest_creator(env: &Env, principal: &Address) -> bool {
    allowlist::add(env, &QUEST_CREATORS, principal)
}

/// Ask the credential holder to tag `principal` with `MEMBER_ROLE`, issuing
/// as this contract. Any refusal from the holder surfaces as
/// [`QuestError::Unauthorized`].
pub fn forward_member_role(env: &Env, principal: &Address) -> Result<(), QuestError> {
    let holder: Address = env
        .storage()
        .instance()
        .get(&MEMBERSHIP)
        .ok_or(QuestError::NotInitialized)?;

    match CredentialHolderClient::new(env, &holder).try_grant_tag(
        &env.current_contract_address(),
        principal,
        &member_role(env),
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(QuestError::Unauthorized),
    }
}
