use soroban_sdk::{contracttype, String};

/// Record shape a registry instance stores, fixed at initialization.
///
/// The two shapes index differently: `Bilingual` stores one record per
/// logical quest, `Paired` stores a jp record followed by an en record.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestLayout {
    Bilingual,
    Paired,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Locale {
    Jp,
    En,
}

/// Text given in both supported locales.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocalizedText {
    pub jp: String,
    pub en: String,
}

/// Caller-supplied fields of a bilingual quest.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestInput {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub category: String,
    pub limitation: String,
    pub amount: i128,
}

/// A stored bilingual quest. `ended_at == 0` while the quest is open.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quest {
    pub id: u64,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub category: String,
    pub limitation: String,
    pub amount: i128,
    pub ended_at: u64,
}

/// Caller-supplied fields of one locale of a paired quest.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocalizedQuestInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub limitation: String,
    pub amount: i128,
}

/// A stored single-locale record. Records sharing `group_id` form one
/// logical quest.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocalizedQuest {
    pub id: u64,
    pub group_id: u64,
    pub locale: Locale,
    pub title: String,
    pub description: String,
    pub category: String,
    pub limitation: String,
    pub amount: i128,
    pub ended_at: u64,
}

impl Quest {
    pub fn is_open(&self) -> bool {
        self.ended_at == 0
    }
}

impl LocalizedQuest {
    pub fn is_open(&self) -> bool {
        self.ended_at == 0
    }
}
