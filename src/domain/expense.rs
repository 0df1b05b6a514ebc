//! Expense entry domain model.
//!
//! This module defines [`ExpenseEntry`], one spend line in the detail view's
//! vertical list. Entries are static, read-only, and ordered: display order is
//! array order, and an entry's position in that order determines its staggered
//! reveal delay. The delay is a derived property computed by the reveal presenter,
//! never stored on the entry itself.

use serde::{Deserialize, Serialize};

/// One spend line in the expense list.
///
/// # Fields
///
/// - `id`: opaque identity token, unique within the list
/// - `product_icon`: short glyph rendered before the product label
/// - `product_label`: product or merchant name
/// - `spend_category`: secondary line under the label (e.g. "Membership")
/// - `amount_label`: pre-formatted amount string (real currency formatting is
///   out of scope; the label is displayed verbatim)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    pub product_icon: String,
    pub product_label: String,
    pub spend_category: String,
    pub amount_label: String,
}

impl ExpenseEntry {
    /// Creates an expense entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        product_icon: impl Into<String>,
        product_label: impl Into<String>,
        spend_category: impl Into<String>,
        amount_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_icon: product_icon.into(),
            product_label: product_label.into(),
            spend_category: spend_category.into(),
            amount_label: amount_label.into(),
        }
    }

    /// Returns today's date formatted for the row's trailing caption.
    ///
    /// The original app stamps every row with the current date; this is display
    /// chrome, not transaction data.
    #[must_use]
    pub fn display_date() -> String {
        chrono::Local::now().format("%m/%d/%Y").to_string()
    }
}
