//! Static sample data: the read-once input collaborator.
//!
//! The wallet displays a fixed profile, balance, card deck, and expense list.
//! This module supplies the built-in set and an optional JSON override file so
//! the deck and list can be swapped without recompiling. Data is read once at
//! startup and immutable thereafter; there is no persistence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{CardEntry, ExpenseEntry, Result, WalletdeckError};

/// Everything the UI needs at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    /// Profile name for the greeting and badge.
    pub profile_name: String,
    /// Pre-formatted total balance string.
    pub balance: String,
    /// Ordered card deck.
    pub cards: Vec<CardEntry>,
    /// Ordered expense list.
    pub expenses: Vec<ExpenseEntry>,
}

impl SampleData {
    /// The built-in data set.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profile_name: "Avery Quinn".to_string(),
            balance: "$1,000,821".to_string(),
            cards: vec![
                CardEntry::new("card-aurora", "Aurora"),
                CardEntry::new("card-meridian", "Meridian"),
            ],
            expenses: vec![
                ExpenseEntry::new("exp-prime", "◈", "Prime Delivery", "Membership", "$14.99"),
                ExpenseEntry::new("exp-video", "►", "StreamBox Premium", "Streaming", "$11.99"),
                ExpenseEntry::new("exp-design", "✦", "Canvas Pro", "Design Tools", "$12.00"),
                ExpenseEntry::new("exp-music", "♪", "Tempo Music", "Streaming", "$9.99"),
                ExpenseEntry::new("exp-cloud", "☁", "VaultDrive 2TB", "Cloud Storage", "$9.99"),
                ExpenseEntry::new("exp-fitness", "♥", "PulseFit Club", "Membership", "$29.00"),
                ExpenseEntry::new("exp-news", "✉", "Morning Brief", "Subscription", "$4.00"),
                ExpenseEntry::new("exp-games", "▲", "ArcadePass", "Entertainment", "$16.99"),
            ],
        }
    }

    /// Loads a data set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, fails to parse, or the
    /// deck contains duplicate card ids (which would break the shared-identity
    /// lookup between the deck slot and the detail image).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let data: Self = serde_json::from_str(&contents)?;
        data.validate()?;
        Ok(data)
    }

    /// Checks the uniqueness invariants on card and expense ids.
    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for card in &self.cards {
            if !seen.insert(card.id.as_str()) {
                return Err(WalletdeckError::Config(format!(
                    "duplicate card id: {}",
                    card.id
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(expense.id.as_str()) {
                return Err(WalletdeckError::Config(format!(
                    "duplicate expense id: {}",
                    expense.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_data_satisfies_id_invariants() {
        let data = SampleData::builtin();
        assert!(data.validate().is_ok());
        assert!(!data.cards.is_empty());
        assert!(!data.expenses.is_empty());
    }

    #[test]
    fn loads_data_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let json = serde_json::to_string(&SampleData::builtin()).expect("serialize");
        file.write_all(json.as_bytes()).expect("write");

        let data = SampleData::from_file(file.path()).expect("load");
        assert_eq!(data.profile_name, "Avery Quinn");
        assert_eq!(data.cards.len(), 2);
    }

    #[test]
    fn rejects_duplicate_card_ids() {
        let mut data = SampleData::builtin();
        data.cards.push(data.cards[0].clone());

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let json = serde_json::to_string(&data).expect("serialize");
        file.write_all(json.as_bytes()).expect("write");

        assert!(SampleData::from_file(file.path()).is_err());
    }
}
