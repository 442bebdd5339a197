//! # Access policy
//!
//! Maps an operation and a caller to allow/deny. Clauses are OR-ed:
//!
//! | Operation                 | Allowed when                                                    |
//! |---------------------------|-----------------------------------------------------------------|
//! | Create, Update, Close     | owner, explicit quest-creation grant, `ADMIN_ROLE` or `QUEST_CREATION_ROLE` |
//! | ReadAll, ReadOne          | `MEMBER_ROLE`, or anyone allowed to Create                      |
//! | GrantCreationRole         | owner                                                           |
//!
//! There is no per-record ownership: any address allowed to create may update
//! or close any quest. The owner and grant checks read local storage and run
//! before the credential lookup.

use common::roles::{admin_role, member_role, quest_creation_role};
use soroban_sdk::{contracttype, Address, Env};

use crate::{grants, rbac, QuestError, OWNER};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Create,
    Update,
    Close,
    ReadAll,
    ReadOne,
    GrantCreationRole,
}

pub fn is_owner(env: &Env, principal: &Address) -> bool {
    let owner: Option<Address> = env.storage().instance().get(&OWNER);
    owner.as_ref() == Some(principal)
}

fn has_local_authority(env: &Env, principal: &Address) -> bool {
    is_owner(env, principal) || grants::is_quest_creator(env, principal)
}

fn can_manage_quests(env: &Env, principal: &Address) -> bool {
    has_local_authority(env, principal)
        || rbac::has_any_role(
            env,
            principal,
            &[admin_role(env), quest_creation_role(env)],
        )
}

fn can_read_quests(env: &Env, principal: &Address) -> bool {
    has_local_authority(env, principal)
        || rbac::has_any_role(
            env,
            principal,
            &[member_role(env), admin_role(env), quest_creation_role(env)],
        )
}

pub fn is_allowed(env: &Env, operation: Operation, principal: &Address) -> bool {
    match operation {
        Operation::Create | Operation::Update | Operation::Close => {
            can_manage_quests(env, principal)
        }
        Operation::ReadAll | Operation::ReadOne => can_read_quests(env, principal),
        Operation::GrantCreationRole => is_owner(env, principal),
    }
}

pub fn authorize(env: &Env, operation: Operation, principal: &Address) -> Result<(), QuestError> {
    if !is_allowed(env, operation, principal) {
        return Err(QuestError::Unauthorized);
    }
    Ok(())
}
