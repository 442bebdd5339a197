//! # Property-Based Test Generators
//!
//! Composable `proptest` strategies for quest payloads and action sequences.
//!
//! Generators produce plain Rust values ([`QuestSeed`]) rather than Soroban
//! `String`s, since those need an `Env`. The harness converts a seed into a
//! contract payload at execution time.

extern crate std;

use proptest::prelude::*;
use soroban_sdk::{Env, String as SorobanString};
use std::string::String;
use std::vec::Vec;

use quest::{LocalizedQuestInput, LocalizedText, QuestInput};

/// Longest title/description the registry accepts, in bytes.
pub const MAX_TEXT_BYTES: usize = 256;
/// Longest category/limitation the registry accepts, in bytes.
pub const MAX_LABEL_BYTES: usize = 64;

// ── Quest Seeds ──────────────────────────────────────────────────────────────

/// Env-free description of one quest payload.
#[derive(Debug, Clone)]
pub struct QuestSeed {
    pub title_jp: String,
    pub title_en: String,
    pub description_jp: String,
    pub description_en: String,
    pub category: String,
    pub limitation: String,
    pub amount: i128,
}

impl QuestSeed {
    /// The sample quest used across the scenario tests.
    pub fn sample() -> Self {
        Self {
            title_jp: "日本語1".into(),
            title_en: "Foobar".into(),
            description_jp: "fobar".into(),
            description_en: "foobar".into(),
            category: "foo".into(),
            limitation: "per week 40".into(),
            amount: 100,
        }
    }

    pub fn to_input(&self, env: &Env) -> QuestInput {
        QuestInput {
            title: LocalizedText {
                jp: SorobanString::from_str(env, &self.title_jp),
                en: SorobanString::from_str(env, &self.title_en),
            },
            description: LocalizedText {
                jp: SorobanString::from_str(env, &self.description_jp),
                en: SorobanString::from_str(env, &self.description_en),
            },
            category: SorobanString::from_str(env, &self.category),
            limitation: SorobanString::from_str(env, &self.limitation),
            amount: self.amount,
        }
    }

    pub fn jp_input(&self, env: &Env) -> LocalizedQuestInput {
        self.localized(env, &self.title_jp, &self.description_jp)
    }

    pub fn en_input(&self, env: &Env) -> LocalizedQuestInput {
        self.localized(env, &self.title_en, &self.description_en)
    }

    fn localized(&self, env: &Env, title: &str, description: &str) -> LocalizedQuestInput {
        LocalizedQuestInput {
            title: SorobanString::from_str(env, title),
            description: SorobanString::from_str(env, description),
            category: SorobanString::from_str(env, &self.category),
            limitation: SorobanString::from_str(env, &self.limitation),
            amount: self.amount,
        }
    }
}

// ── Scalar Generators ────────────────────────────────────────────────────────

fn ascii_strategy(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'z'), min..=max)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Non-empty display text. Mixes multi-byte Japanese samples with ASCII.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(std::vec!["日本語1", "ジャパニーズ", "クエスト", "週40時間"])
            .prop_map(String::from),
        6 => ascii_strategy(1, 40),
        1 => Just("x".repeat(MAX_TEXT_BYTES)),
    ]
}

/// Category or limitation label; may be empty.
pub fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => Just(String::new()),
        2 => prop::sample::select(std::vec!["foo", "bar", "per week 40", "once"])
            .prop_map(String::from),
        5 => ascii_strategy(1, 20),
        1 => Just("y".repeat(MAX_LABEL_BYTES)),
    ]
}

/// Reward amounts, biased toward boundaries.
pub fn amount_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        1 => Just(0i128),
        1 => Just(1i128),
        1 => Just(i128::MAX),
        7 => (1i128..=1_000_000i128),
    ]
}

/// Strategy for time durations in seconds.
pub fn duration_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(0u64),
        1 => Just(1u64),
        3 => (1u64..=86_400u64),
        2 => (1u64..=604_800u64),
    ]
}

/// Strategy for payloads the registry accepts.
pub fn quest_seed_strategy() -> impl Strategy<Value = QuestSeed> {
    (
        (text_strategy(), text_strategy()),
        (text_strategy(), text_strategy()),
        (label_strategy(), label_strategy()),
        amount_strategy(),
    )
        .prop_map(
            |((title_jp, title_en), (description_jp, description_en), (category, limitation), amount)| {
                QuestSeed {
                    title_jp,
                    title_en,
                    description_jp,
                    description_en,
                    category,
                    limitation,
                    amount,
                }
            },
        )
}

/// One way of breaking an otherwise valid payload.
#[derive(Debug, Clone)]
pub enum Defect {
    EmptyTitleJp,
    EmptyTitleEn,
    EmptyDescription,
    OversizeTitle,
    OversizeLabel,
    NegativeAmount(i128),
}

impl Defect {
    pub fn apply(&self, seed: &mut QuestSeed) {
        match self {
            Defect::EmptyTitleJp => seed.title_jp.clear(),
            Defect::EmptyTitleEn => seed.title_en.clear(),
            Defect::EmptyDescription => seed.description_en.clear(),
            Defect::OversizeTitle => seed.title_en = "z".repeat(MAX_TEXT_BYTES + 1),
            Defect::OversizeLabel => seed.category = "z".repeat(MAX_LABEL_BYTES + 1),
            Defect::NegativeAmount(amount) => seed.amount = *amount,
        }
    }
}

pub fn defect_strategy() -> impl Strategy<Value = Defect> {
    prop_oneof![
        Just(Defect::EmptyTitleJp),
        Just(Defect::EmptyTitleEn),
        Just(Defect::EmptyDescription),
        Just(Defect::OversizeTitle),
        Just(Defect::OversizeLabel),
        prop_oneof![Just(i128::MIN), (-1_000_000i128..=-1i128)].prop_map(Defect::NegativeAmount),
    ]
}

/// Strategy for payloads the registry must reject with `InvalidInput`.
pub fn invalid_quest_seed_strategy() -> impl Strategy<Value = QuestSeed> {
    (quest_seed_strategy(), defect_strategy()).prop_map(|(mut seed, defect)| {
        defect.apply(&mut seed);
        seed
    })
}

// ── Action Generators ────────────────────────────────────────────────────────

/// Every registry action the state explorer can drive.
///
/// `user_index` selects from a pool of test users (modular indexing); the
/// registry owner is not in the pool, so users start with no permissions.
#[derive(Debug, Clone)]
pub enum QuestAction {
    /// Save a quest (or a jp/en pair in the paired layout).
    Save { user_index: usize, seed: QuestSeed },
    /// Replace quest/record `quest_index`.
    Update {
        user_index: usize,
        quest_index: u64,
        seed: QuestSeed,
    },
    /// Close quest/record `quest_index`.
    Close { user_index: usize, quest_index: u64 },
    /// List every record.
    ReadAll { user_index: usize },
    /// Owner grants the quest-creation role.
    GrantCreator { user_index: usize },
    /// Owner forwards `MEMBER_ROLE` to the membership contract.
    GrantMember { user_index: usize },
    /// Advance time.
    AdvanceTime { delta: u64 },
}

/// Weights favour writes once users are likely to hold roles.
pub fn quest_action_strategy(num_users: usize) -> impl Strategy<Value = QuestAction> {
    let user_idx = 0..num_users;

    prop_oneof![
        25 => (user_idx.clone(), quest_seed_strategy())
            .prop_map(|(u, seed)| QuestAction::Save { user_index: u, seed }),
        10 => (user_idx.clone(), 0u64..=8u64, quest_seed_strategy())
            .prop_map(|(u, q, seed)| QuestAction::Update { user_index: u, quest_index: q, seed }),
        15 => (user_idx.clone(), 0u64..=8u64)
            .prop_map(|(u, q)| QuestAction::Close { user_index: u, quest_index: q }),
        10 => user_idx.clone().prop_map(|u| QuestAction::ReadAll { user_index: u }),
        12 => user_idx.clone().prop_map(|u| QuestAction::GrantCreator { user_index: u }),
        8 => user_idx.prop_map(|u| QuestAction::GrantMember { user_index: u }),
        20 => duration_strategy().prop_map(|d| QuestAction::AdvanceTime { delta: d }),
    ]
}

/// Strategy for 1 to `max_len` actions.
pub fn quest_action_sequence(
    num_users: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<QuestAction>> {
    prop::collection::vec(quest_action_strategy(num_users), 1..=max_len)
}

// ── Historical Pattern Generators ────────────────────────────────────────────

/// Common operator workflows, replayed as fixed action sequences.
#[derive(Debug, Clone)]
pub enum UsagePattern {
    /// Owner grants a creator who posts, edits and closes one quest.
    CreatorLifecycle,
    /// A stranger is turned away, then granted, then succeeds.
    GrantAfterRejection,
    /// Members read while creators post and close concurrently.
    MembersReadWhileCreatorsWrite,
    /// Closing the same quest repeatedly over time.
    RepeatedClose,
}

pub fn pattern_to_actions(pattern: &UsagePattern, num_users: usize) -> Vec<QuestAction> {
    let second = 1 % num_users.max(1);
    match pattern {
        UsagePattern::CreatorLifecycle => std::vec![
            QuestAction::GrantCreator { user_index: 0 },
            QuestAction::Save { user_index: 0, seed: QuestSeed::sample() },
            QuestAction::AdvanceTime { delta: 3_600 },
            QuestAction::Update { user_index: 0, quest_index: 0, seed: QuestSeed::sample() },
            QuestAction::Close { user_index: 0, quest_index: 0 },
            QuestAction::ReadAll { user_index: 0 },
        ],
        UsagePattern::GrantAfterRejection => std::vec![
            QuestAction::Save { user_index: 0, seed: QuestSeed::sample() },
            QuestAction::ReadAll { user_index: 0 },
            QuestAction::GrantCreator { user_index: 0 },
            QuestAction::Save { user_index: 0, seed: QuestSeed::sample() },
            QuestAction::ReadAll { user_index: 0 },
        ],
        UsagePattern::MembersReadWhileCreatorsWrite => std::vec![
            QuestAction::GrantCreator { user_index: 0 },
            QuestAction::GrantMember { user_index: second },
            QuestAction::Save { user_index: 0, seed: QuestSeed::sample() },
            QuestAction::ReadAll { user_index: second },
            QuestAction::Save { user_index: second, seed: QuestSeed::sample() },
            QuestAction::Close { user_index: second, quest_index: 0 },
            QuestAction::Close { user_index: 0, quest_index: 0 },
            QuestAction::ReadAll { user_index: second },
        ],
        UsagePattern::RepeatedClose => std::vec![
            QuestAction::GrantCreator { user_index: 0 },
            QuestAction::Save { user_index: 0, seed: QuestSeed::sample() },
            QuestAction::Close { user_index: 0, quest_index: 0 },
            QuestAction::AdvanceTime { delta: 86_400 },
            QuestAction::Close { user_index: 0, quest_index: 0 },
            QuestAction::Update { user_index: 0, quest_index: 0, seed: QuestSeed::sample() },
        ],
    }
}

pub fn usage_pattern_strategy() -> impl Strategy<Value = UsagePattern> {
    prop_oneof![
        Just(UsagePattern::CreatorLifecycle),
        Just(UsagePattern::GrantAfterRejection),
        Just(UsagePattern::MembersReadWhileCreatorsWrite),
        Just(UsagePattern::RepeatedClose),
    ]
}
