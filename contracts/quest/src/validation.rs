use soroban_sdk::String;

use crate::types::{LocalizedQuestInput, LocalizedText, QuestInput};
use crate::QuestError;

const MAX_TEXT_LEN: u32 = 256;
const MAX_LABEL_LEN: u32 = 64;

/// Titles and descriptions are required: non-empty and at most
/// `MAX_TEXT_LEN` bytes.
pub fn validate_text(text: &String) -> Result<(), QuestError> {
    let len = text.len();
    if len == 0 || len > MAX_TEXT_LEN {
        return Err(QuestError::InvalidInput);
    }
    Ok(())
}

/// Category and limitation are free-form and may be empty.
pub fn validate_label(label: &String) -> Result<(), QuestError> {
    if label.len() > MAX_LABEL_LEN {
        return Err(QuestError::InvalidInput);
    }
    Ok(())
}

pub fn validate_amount(amount: i128) -> Result<(), QuestError> {
    if amount < 0 {
        return Err(QuestError::InvalidInput);
    }
    Ok(())
}

fn validate_localized_text(text: &LocalizedText) -> Result<(), QuestError> {
    validate_text(&text.jp)?;
    validate_text(&text.en)
}

pub fn validate_quest(quest: &QuestInput) -> Result<(), QuestError> {
    validate_localized_text(&quest.title)?;
    validate_localized_text(&quest.description)?;
    validate_label(&quest.category)?;
    validate_label(&quest.limitation)?;
    validate_amount(quest.amount)
}

pub fn validate_localized_quest(quest: &LocalizedQuestInput) -> Result<(), QuestError> {
    validate_text(&quest.title)?;
    validate_text(&quest.description)?;
    validate_label(&quest.category)?;
    validate_label(&quest.limitation)?;
    validate_amount(quest.amount)
}
