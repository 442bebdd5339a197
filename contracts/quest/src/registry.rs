//! Quest storage and record lifecycle.
//!
//! Records live in persistent storage under `(prefix, id)`; ids are 0-based
//! and equal to the record's position in the sequence. Two instance counters
//! track the sequence:
//!
//! - `REC_CTR`: number of stored records (next record id)
//! - `QST_CTR`: number of logical quests (next group id)
//!
//! In the paired layout, group `g` always occupies records `2g` (jp) and
//! `2g + 1` (en) since both are appended by one call.
//!
//! Nothing here checks authorization; entry points in `lib.rs` do that
//! before calling in. Every function validates the addressed record before
//! its first write.

use soroban_sdk::{symbol_short, Env, Symbol, Vec};

use crate::types::{Locale, LocalizedQuest, LocalizedQuestInput, Quest, QuestInput};
use crate::QuestError;

const RECORD_CTR: Symbol = symbol_short!("REC_CTR");
const QUEST_CTR: Symbol = symbol_short!("QST_CTR");
const QUEST: Symbol = symbol_short!("QUEST");
const LOCALIZED: Symbol = symbol_short!("LQUEST");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

// ── Counters ─────────────────────────────────────────────────────────────────

pub fn record_count(env: &Env) -> u64 {
    env.storage().instance().get(&RECORD_CTR).unwrap_or(0u64)
}

pub fn quest_count(env: &Env) -> u64 {
    env.storage().instance().get(&QUEST_CTR).unwrap_or(0u64)
}

fn bump_counters(env: &Env, records: u64) {
    let next_records = record_count(env).saturating_add(records);
    let next_quests = quest_count(env).saturating_add(1);
    env.storage().instance().set(&RECORD_CTR, &next_records);
    env.storage().instance().set(&QUEST_CTR, &next_quests);
}

/// Timestamp recorded by a close. `0` is reserved for open quests, so a
/// ledger still at time zero records `1`.
pub fn close_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp().max(1)
}

// ── Bilingual layout ─────────────────────────────────────────────────────────

fn quest_key(id: u64) -> (Symbol, u64) {
    (QUEST, id)
}

fn store_quest(env: &Env, quest: &Quest) {
    let key = quest_key(quest.id);
    env.storage().persistent().set(&key, quest);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_quest(env: &Env, id: u64) -> Option<Quest> {
    env.storage().persistent().get(&quest_key(id))
}

pub fn append_quest(env: &Env, input: QuestInput) -> Quest {
    let quest = Quest {
        id: record_count(env),
        title: input.title,
        description: input.description,
        category: input.category,
        limitation: input.limitation,
        amount: input.amount,
        ended_at: 0,
    };
    store_quest(env, &quest);
    bump_counters(env, 1);
    quest
}

pub fn all_quests(env: &Env) -> Vec<Quest> {
    let mut quests = Vec::new(env);
    for id in 0..record_count(env) {
        if let Some(quest) = load_quest(env, id) {
            quests.push_back(quest);
        }
    }
    quests
}

/// Replace the mutable fields of an open quest. `id` and `ended_at` are kept.
pub fn update_quest(env: &Env, id: u64, input: QuestInput) -> Result<Quest, QuestError> {
    let mut quest = load_quest(env, id).ok_or(QuestError::QuestNotFound)?;
    if !quest.is_open() {
        return Err(QuestError::QuestClosed);
    }

    quest.title = input.title;
    quest.description = input.description;
    quest.category = input.category;
    quest.limitation = input.limitation;
    quest.amount = input.amount;

    store_quest(env, &quest);
    Ok(quest)
}

pub fn close_quest(env: &Env, id: u64) -> Result<Quest, QuestError> {
    let mut quest = load_quest(env, id).ok_or(QuestError::QuestNotFound)?;
    if !quest.is_open() {
        return Err(QuestError::AlreadyClosed);
    }

    quest.ended_at = close_timestamp(env);
    store_quest(env, &quest);
    Ok(quest)
}

// ── Paired layout ────────────────────────────────────────────────────────────

fn localized_key(id: u64) -> (Symbol, u64) {
    (LOCALIZED, id)
}

fn store_localized(env: &Env, quest: &LocalizedQuest) {
    let key = localized_key(quest.id);
    env.storage().persistent().set(&key, quest);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_localized(env: &Env, id: u64) -> Option<LocalizedQuest> {
    env.storage().persistent().get(&localized_key(id))
}

fn localized_record(
    id: u64,
    group_id: u64,
    locale: Locale,
    input: LocalizedQuestInput,
) -> LocalizedQuest {
    LocalizedQuest {
        id,
        group_id,
        locale,
        title: input.title,
        description: input.description,
        category: input.category,
        limitation: input.limitation,
        amount: input.amount,
        ended_at: 0,
    }
}

/// Append a jp record and an en record sharing a fresh group id.
pub fn append_pair(
    env: &Env,
    jp: LocalizedQuestInput,
    en: LocalizedQuestInput,
) -> (LocalizedQuest, LocalizedQuest) {
    let group_id = quest_count(env);
    let first_id = record_count(env);

    let jp = localized_record(first_id, group_id, Locale::Jp, jp);
    let en = localized_record(first_id.saturating_add(1), group_id, Locale::En, en);

    store_localized(env, &jp);
    store_localized(env, &en);
    bump_counters(env, 2);

    (jp, en)
}

pub fn all_localized(env: &Env) -> Vec<LocalizedQuest> {
    let mut quests = Vec::new(env);
    for id in 0..record_count(env) {
        if let Some(quest) = load_localized(env, id) {
            quests.push_back(quest);
        }
    }
    quests
}

/// The jp and en records of `group_id`, in that order.
pub fn load_group(
    env: &Env,
    group_id: u64,
) -> Result<(LocalizedQuest, LocalizedQuest), QuestError> {
    if group_id >= quest_count(env) {
        return Err(QuestError::QuestNotFound);
    }
    let jp_id = group_id.checked_mul(2).ok_or(QuestError::QuestNotFound)?;
    let jp = load_localized(env, jp_id).ok_or(QuestError::QuestNotFound)?;
    let en = load_localized(env, jp_id.saturating_add(1)).ok_or(QuestError::QuestNotFound)?;

    if jp.group_id != group_id || en.group_id != group_id {
        return Err(QuestError::QuestNotFound);
    }
    Ok((jp, en))
}

/// Replace the mutable fields of one open locale record. `id`, `group_id`,
/// `locale` and `ended_at` are kept.
pub fn update_localized(
    env: &Env,
    id: u64,
    input: LocalizedQuestInput,
) -> Result<LocalizedQuest, QuestError> {
    let mut quest = load_localized(env, id).ok_or(QuestError::QuestNotFound)?;
    if !quest.is_open() {
        return Err(QuestError::QuestClosed);
    }

    quest.title = input.title;
    quest.description = input.description;
    quest.category = input.category;
    quest.limitation = input.limitation;
    quest.amount = input.amount;

    store_localized(env, &quest);
    Ok(quest)
}

/// Close the logical quest that record `id` belongs to. Both locale records
/// receive the same `ended_at`.
pub fn close_group_of(
    env: &Env,
    id: u64,
) -> Result<(LocalizedQuest, LocalizedQuest), QuestError> {
    let addressed = load_localized(env, id).ok_or(QuestError::QuestNotFound)?;
    if !addressed.is_open() {
        return Err(QuestError::AlreadyClosed);
    }

    let (mut jp, mut en) = load_group(env, addressed.group_id)?;
    let ended_at = close_timestamp(env);
    jp.ended_at = ended_at;
    en.ended_at = ended_at;

    store_localized(env, &jp);
    store_localized(env, &en);
    Ok((jp, en))
}
