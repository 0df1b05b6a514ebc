//! Payment card domain model.
//!
//! This module defines [`CardEntry`], the immutable record describing one card in
//! the deck. The entry's `id` is the shared-identity join key between the small
//! deck slot and the large detail image: both render sites key off the same id,
//! which is what makes the expansion read as one continuous object instead of a
//! cut between two unrelated views.

use serde::{Deserialize, Serialize};

/// One payment card in the deck.
///
/// Created once at deck initialization from static configuration and immutable
/// thereafter. The `id` must be stable for the lifetime of the card and unique
/// within the deck — no two concurrently-displayed entries may share an id,
/// otherwise the suppressed-slot lookup loses its anchor.
///
/// # Fields
///
/// - `id`: opaque identity token, the join key for the detail transition
/// - `image_ref`: name of the card artwork to render
/// - `rotation_degrees`: rendering hint; deck slots draw the card rotated
///   (the original lays cards sideways in the horizontal scroller)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub id: String,
    pub image_ref: String,
    #[serde(default)]
    pub rotation_degrees: i16,
}

impl CardEntry {
    /// Creates a card entry with the deck's default sideways rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use walletdeck::domain::CardEntry;
    ///
    /// let card = CardEntry::new("card-aurora", "Aurora");
    /// assert_eq!(card.id, "card-aurora");
    /// assert_eq!(card.rotation_degrees, -90);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_ref: image_ref.into(),
            rotation_degrees: -90,
        }
    }
}
