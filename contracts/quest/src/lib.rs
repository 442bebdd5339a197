#![no_std]

//! # Quest registry
//!
//! An append-only registry of bilingual (jp/en) quests with role-gated
//! creation, update, closure and reads.
//!
//! - **Authorization**: see [`policy`]. Two permission sources compose: an
//!   explicit quest-creation grant kept by this contract ([`grants`]) and
//!   role tags read live from a membership credential contract ([`rbac`]).
//! - **Layouts**: a registry stores either one bilingual record per quest or
//!   a jp/en record pair per quest sharing a `group_id`; the choice is made
//!   once at [`QuestContract::initialize`]. Entry points belonging to the
//!   other layout fail with [`QuestError::LayoutMismatch`].
//! - **Lifecycle**: `Open → Closed`. `ended_at == 0` means open; closing
//!   sets it once and it never changes again. Closed quests cannot be
//!   updated.

pub mod events;
pub mod grants;
pub mod policy;
pub mod rbac;
pub mod registry;
pub mod types;
pub mod validation;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol, Vec};

pub use policy::Operation;
pub use types::{
    Locale, LocalizedQuest, LocalizedQuestInput, LocalizedText, Quest, QuestInput, QuestLayout,
};

// ── Storage keys ─────────────────────────────────────────────────────────────

pub(crate) const OWNER: Symbol = symbol_short!("OWNER");
pub(crate) const MEMBERSHIP: Symbol = symbol_short!("MBR_CTR");
const LAYOUT: Symbol = symbol_short!("LAYOUT");
const INITIALIZED: Symbol = symbol_short!("INIT");

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum QuestError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    QuestNotFound = 4,
    InvalidInput = 5,
    AlreadyClosed = 6,
    QuestClosed = 7,
    LayoutMismatch = 8,
}

#[contract]
pub struct QuestContract;

#[contractimpl]
impl QuestContract {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Bootstrap the registry.
    ///
    /// * `owner`:      privileged address; may always manage quests and is
    ///                  the only one allowed to grant roles.
    /// * `membership`: credential contract queried for role tags.
    /// * `layout`:     record shape stored by this instance; cannot change.
    pub fn initialize(
        env: Env,
        owner: Address,
        membership: Address,
        layout: QuestLayout,
    ) -> Result<(), QuestError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(QuestError::AlreadyInitialized);
        }

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&MEMBERSHIP, &membership);
        env.storage().instance().set(&LAYOUT, &layout);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, owner, membership, layout);

        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, QuestError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(QuestError::NotInitialized)
    }

    pub fn get_membership(env: Env) -> Result<Address, QuestError> {
        env.storage()
            .instance()
            .get(&MEMBERSHIP)
            .ok_or(QuestError::NotInitialized)
    }

    pub fn get_layout(env: Env) -> Result<QuestLayout, QuestError> {
        Self::layout(&env)
    }

    pub fn version() -> u32 {
        1
    }

    // ── Bilingual layout ──────────────────────────────────────────────────────

    /// Save a new bilingual quest and return its id.
    pub fn save(env: Env, caller: Address, quest: QuestInput) -> Result<u64, QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Bilingual)?;
        policy::authorize(&env, Operation::Create, &caller)?;
        validation::validate_quest(&quest)?;

        let stored = registry::append_quest(&env, quest);
        events::publish_quest_saved(&env, stored.id, caller);

        Ok(stored.id)
    }

    /// Replace every mutable field of quest `index`.
    pub fn update(
        env: Env,
        caller: Address,
        index: u64,
        quest: QuestInput,
    ) -> Result<(), QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Bilingual)?;
        policy::authorize(&env, Operation::Update, &caller)?;
        validation::validate_quest(&quest)?;

        let updated = registry::update_quest(&env, index, quest)?;
        events::publish_quest_updated(&env, updated.id, caller);

        Ok(())
    }

    pub fn get_quests(env: Env, caller: Address) -> Result<Vec<Quest>, QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Bilingual)?;
        policy::authorize(&env, Operation::ReadAll, &caller)?;

        Ok(registry::all_quests(&env))
    }

    pub fn get_quest(env: Env, caller: Address, index: u64) -> Result<Quest, QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Bilingual)?;
        policy::authorize(&env, Operation::ReadOne, &caller)?;

        registry::load_quest(&env, index).ok_or(QuestError::QuestNotFound)
    }

    // ── Paired layout ─────────────────────────────────────────────────────────

    /// Save a jp/en pair as one logical quest and return its group id.
    ///
    /// Both payloads are validated before anything is written.
    pub fn save_pair(
        env: Env,
        caller: Address,
        jp: LocalizedQuestInput,
        en: LocalizedQuestInput,
    ) -> Result<u64, QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Paired)?;
        policy::authorize(&env, Operation::Create, &caller)?;
        validation::validate_localized_quest(&jp)?;
        validation::validate_localized_quest(&en)?;

        let (jp, en) = registry::append_pair(&env, jp, en);
        events::publish_quest_pair_saved(&env, jp.group_id, jp.id, en.id, caller);

        Ok(jp.group_id)
    }

    /// Replace the mutable fields of record `index`; its locale and group are
    /// kept.
    pub fn update_localized(
        env: Env,
        caller: Address,
        index: u64,
        quest: LocalizedQuestInput,
    ) -> Result<(), QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Paired)?;
        policy::authorize(&env, Operation::Update, &caller)?;
        validation::validate_localized_quest(&quest)?;

        let updated = registry::update_localized(&env, index, quest)?;
        events::publish_quest_updated(&env, updated.id, caller);

        Ok(())
    }

    pub fn get_localized_quests(
        env: Env,
        caller: Address,
    ) -> Result<Vec<LocalizedQuest>, QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Paired)?;
        policy::authorize(&env, Operation::ReadAll, &caller)?;

        Ok(registry::all_localized(&env))
    }

    pub fn get_localized_quest(
        env: Env,
        caller: Address,
        index: u64,
    ) -> Result<LocalizedQuest, QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Paired)?;
        policy::authorize(&env, Operation::ReadOne, &caller)?;

        registry::load_localized(&env, index).ok_or(QuestError::QuestNotFound)
    }

    /// Both locale records of a logical quest, jp first.
    pub fn get_quest_from_lang(
        env: Env,
        caller: Address,
        group_id: u64,
    ) -> Result<Vec<LocalizedQuest>, QuestError> {
        caller.require_auth();
        Self::require_layout(&env, QuestLayout::Paired)?;
        policy::authorize(&env, Operation::ReadOne, &caller)?;

        let (jp, en) = registry::load_group(&env, group_id)?;
        let mut pair = Vec::new(&env);
        pair.push_back(jp);
        pair.push_back(en);
        Ok(pair)
    }

    // ── Shared lifecycle ──────────────────────────────────────────────────────

    /// Close quest `index` and return its `ended_at`.
    ///
    /// In the paired layout `index` addresses a record and the whole logical
    /// quest (both locales) is closed. Closing a closed quest fails with
    /// [`QuestError::AlreadyClosed`].
    pub fn close_quest(env: Env, caller: Address, index: u64) -> Result<u64, QuestError> {
        caller.require_auth();
        let layout = Self::layout(&env)?;
        policy::authorize(&env, Operation::Close, &caller)?;

        match layout {
            QuestLayout::Bilingual => {
                let quest = registry::close_quest(&env, index)?;
                events::publish_quest_closed(&env, quest.id, caller, quest.ended_at);
                Ok(quest.ended_at)
            }
            QuestLayout::Paired => {
                let (jp, en) = registry::close_group_of(&env, index)?;
                events::publish_quest_closed(&env, jp.id, caller.clone(), jp.ended_at);
                events::publish_quest_closed(&env, en.id, caller, en.ended_at);
                Ok(jp.ended_at)
            }
        }
    }

    /// Whether record `index` exists and is still open.
    pub fn is_open(env: Env, caller: Address, index: u64) -> Result<bool, QuestError> {
        caller.require_auth();
        let layout = Self::layout(&env)?;
        policy::authorize(&env, Operation::ReadOne, &caller)?;

        let open = match layout {
            QuestLayout::Bilingual => registry::load_quest(&env, index).map(|q| q.is_open()),
            QuestLayout::Paired => registry::load_localized(&env, index).map(|q| q.is_open()),
        };
        open.ok_or(QuestError::QuestNotFound)
    }

    /// Number of logical quests.
    pub fn quest_count(env: Env) -> u64 {
        registry::quest_count(&env)
    }

    /// Number of stored records; twice `quest_count` in the paired layout.
    pub fn record_count(env: Env) -> u64 {
        registry::record_count(&env)
    }

    // ── Grants ────────────────────────────────────────────────────────────────

    /// Let `principal` create, update and close quests. Granting twice is a
    /// no-op.
    pub fn add_quest_creation_role(
        env: Env,
        caller: Address,
        principal: Address,
    ) -> Result<(), QuestError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        policy::authorize(&env, Operation::GrantCreationRole, &caller)?;

        if grants::add_quest_creator(&env, &principal) {
            events::publish_creator_granted(&env, caller, principal);
        }
        Ok(())
    }

    /// Have the membership contract tag `principal` with `MEMBER_ROLE`.
    ///
    /// This contract must be a registered issuer on the membership contract.
    pub fn add_member_role(
        env: Env,
        caller: Address,
        principal: Address,
    ) -> Result<(), QuestError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        policy::authorize(&env, Operation::GrantCreationRole, &caller)?;

        grants::forward_member_role(&env, &principal)?;
        events::publish_member_granted(&env, caller, principal);
        Ok(())
    }

    pub fn has_quest_creation_role(env: Env, principal: Address) -> bool {
        grants::is_quest_creator(&env, &principal)
    }

    pub fn check_access(env: Env, principal: Address, operation: Operation) -> bool {
        policy::is_allowed(&env, operation, &principal)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), QuestError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(QuestError::NotInitialized);
        }
        Ok(())
    }

    fn layout(env: &Env) -> Result<QuestLayout, QuestError> {
        env.storage()
            .instance()
            .get(&LAYOUT)
            .ok_or(QuestError::NotInitialized)
    }

    fn require_layout(env: &Env, expected: QuestLayout) -> Result<(), QuestError> {
        if Self::layout(env)? != expected {
            return Err(QuestError::LayoutMismatch);
        }
        Ok(())
    }
}
