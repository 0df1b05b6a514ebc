//! Composable UI component renderers.
//!
//! One file per visual region, mirroring the original's view decomposition:
//!
//! - [`header`]: greeting and profile badge
//! - [`balance`]: total balance summary
//! - [`deck`]: horizontal card stack with suppressed-slot handling
//! - [`detail`]: expanded card overlay (back affordance, image, panel)
//! - [`expenses`]: staggered expense rows inside the panel

mod balance;
mod deck;
mod detail;
mod expenses;
mod header;

pub use balance::render_balance;
pub use deck::render_deck;
pub use detail::render_detail;
pub use header::render_header;
