#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::QuestLayout;

/// Event published when the registry is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub membership: Address,
    pub layout: QuestLayout,
    pub timestamp: u64,
}

/// Event published when a bilingual quest is saved.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestSavedEvent {
    pub quest_id: u64,
    pub creator: Address,
    pub timestamp: u64,
}

/// Event published when a jp/en quest pair is saved.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestPairSavedEvent {
    pub group_id: u64,
    pub jp_id: u64,
    pub en_id: u64,
    pub creator: Address,
    pub timestamp: u64,
}

/// Event published when a record's mutable fields are replaced.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestUpdatedEvent {
    pub quest_id: u64,
    pub editor: Address,
    pub timestamp: u64,
}

/// Event published when a quest is closed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestClosedEvent {
    pub quest_id: u64,
    pub closed_by: Address,
    pub ended_at: u64,
}

/// Event published when an address receives a role through the registry.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGrantedEvent {
    pub granter: Address,
    pub grantee: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, owner: Address, membership: Address, layout: QuestLayout) {
    let data = InitializedEvent {
        owner,
        membership,
        layout,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("INIT"),), data);
}

pub fn publish_quest_saved(env: &Env, quest_id: u64, creator: Address) {
    let topics = (symbol_short!("Q_SAVE"), creator.clone());
    let data = QuestSavedEvent {
        quest_id,
        creator,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_quest_pair_saved(
    env: &Env,
    group_id: u64,
    jp_id: u64,
    en_id: u64,
    creator: Address,
) {
    let topics = (symbol_short!("Q_PAIR"), creator.clone());
    let data = QuestPairSavedEvent {
        group_id,
        jp_id,
        en_id,
        creator,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_quest_updated(env: &Env, quest_id: u64, editor: Address) {
    let topics = (symbol_short!("Q_UPD"), quest_id);
    let data = QuestUpdatedEvent {
        quest_id,
        editor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_quest_closed(env: &Env, quest_id: u64, closed_by: Address, ended_at: u64) {
    let topics = (symbol_short!("Q_CLOSE"), quest_id);
    let data = QuestClosedEvent {
        quest_id,
        closed_by,
        ended_at,
    };
    env.events().publish(topics, data);
}

pub fn publish_creator_granted(env: &Env, granter: Address, grantee: Address) {
    let topics = (symbol_short!("GRT_QCR"), grantee.clone());
    let data = RoleGrantedEvent {
        granter,
        grantee,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_member_granted(env: &Env, granter: Address, grantee: Address) {
    let topics = (symbol_short!("GRT_MBR"), grantee.clone());
    let data = RoleGrantedEvent {
        granter,
        grantee,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
