#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use membership::{MembershipContract, MembershipContractClient};
use quest::{
    LocalizedQuestInput, LocalizedText, QuestContract, QuestContractClient, QuestInput,
    QuestLayout,
};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

/// Registry entry points plus time advancement. Text is generated from a
/// length so most payloads are valid and some exceed the size limits.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Save { title_len: u16, amount: i64 },
    Update { index: u8, title_len: u16, amount: i64 },
    Close { index: u8 },
    GrantCreator,
    GrantMember,
    AdvanceTime { delta: u16 },
}

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    pub paired: bool,
    pub actions: Vec<FuzzAction>,
}

fn text(env: &Env, len: u16) -> String {
    let raw = "q".repeat(usize::from(len % 300));
    String::from_str(env, &raw)
}

fn bilingual(env: &Env, title_len: u16, amount: i64) -> QuestInput {
    QuestInput {
        title: LocalizedText {
            jp: text(env, title_len),
            en: text(env, title_len),
        },
        description: LocalizedText {
            jp: String::from_str(env, "fobar"),
            en: String::from_str(env, "foobar"),
        },
        category: String::from_str(env, "foo"),
        limitation: String::from_str(env, "per week 40"),
        amount: i128::from(amount),
    }
}

fn localized(env: &Env, title_len: u16, amount: i64) -> LocalizedQuestInput {
    LocalizedQuestInput {
        title: text(env, title_len),
        description: String::from_str(env, "foobar"),
        category: String::from_str(env, "foo"),
        limitation: String::from_str(env, "per week 40"),
        amount: i128::from(amount),
    }
}

/// `(id, ended_at)` of every record, in id order.
fn closures(client: &QuestContractClient, owner: &Address, layout: QuestLayout) -> Vec<(u64, u64)> {
    match layout {
        QuestLayout::Bilingual => client
            .get_quests(owner)
            .iter()
            .map(|q| (q.id, q.ended_at))
            .collect(),
        QuestLayout::Paired => client
            .get_localized_quests(owner)
            .iter()
            .map(|q| (q.id, q.ended_at))
            .collect(),
    }
}

fuzz_target!(|input: FuzzInput| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1);

    let layout = if input.paired {
        QuestLayout::Paired
    } else {
        QuestLayout::Bilingual
    };
    let per_quest: u64 = if input.paired { 2 } else { 1 };

    let owner = Address::generate(&env);
    let membership_id = env.register(MembershipContract, ());
    let membership = MembershipContractClient::new(&env, &membership_id);
    membership.initialize(&owner);

    let contract_id = env.register(QuestContract, ());
    let client = QuestContractClient::new(&env, &contract_id);
    if client.try_initialize(&owner, &membership_id, &layout).is_err() {
        return;
    }
    membership.add_issuer(&owner, &contract_id);

    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    let mut before = closures(&client, &owner, layout);

    for (i, action) in input.actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Save { title_len, amount } => {
                let _ = match layout {
                    QuestLayout::Bilingual => client
                        .try_save(caller, &bilingual(&env, title_len, amount))
                        .map(|_| ()),
                    QuestLayout::Paired => client
                        .try_save_pair(
                            caller,
                            &localized(&env, title_len, amount),
                            &localized(&env, title_len, amount),
                        )
                        .map(|_| ()),
                };
            }
            FuzzAction::Update { index, title_len, amount } => {
                let index = u64::from(index);
                let _ = match layout {
                    QuestLayout::Bilingual => client
                        .try_update(caller, &index, &bilingual(&env, title_len, amount))
                        .map(|_| ()),
                    QuestLayout::Paired => client
                        .try_update_localized(caller, &index, &localized(&env, title_len, amount))
                        .map(|_| ()),
                };
            }
            FuzzAction::Close { index } => {
                let _ = client.try_close_quest(caller, &u64::from(index));
            }
            FuzzAction::GrantCreator => {
                let _ = client.try_add_quest_creation_role(&owner, caller);
            }
            FuzzAction::GrantMember => {
                let _ = client.try_add_member_role(&owner, caller);
            }
            FuzzAction::AdvanceTime { delta } => {
                let ts = env.ledger().timestamp().saturating_add(u64::from(delta));
                env.ledger().set_timestamp(ts);
            }
        }

        // ── Post-action invariant checks ──
        let records = client.record_count();
        assert_eq!(
            records,
            client.quest_count() * per_quest,
            "INVARIANT VIOLATION: record/quest counters diverged"
        );

        let after = closures(&client, &owner, layout);
        assert_eq!(after.len() as u64, records, "INVARIANT VIOLATION: unreadable record");
        for (position, (id, _)) in after.iter().enumerate() {
            assert_eq!(*id, position as u64, "INVARIANT VIOLATION: id gap");
        }
        for ((id, old), (_, new)) in before.iter().zip(after.iter()) {
            if *old != 0 {
                assert_eq!(old, new, "INVARIANT VIOLATION: quest {} reclosed", id);
            }
        }
        before = after;
    }
});
