//! Session implementation submodules.
//!
//! Each submodule contains `impl SessionInner` / `impl SearchSession`
//! blocks for one concern. The struct definitions remain in `lib.rs`.

mod builder;
mod events;
mod search;
mod state;
mod suggestions;

pub use builder::{SearchSessionBuilder, SuggestionOrdering};
pub use events::SearchEvents;
pub use search::{SearchOutcome, SkipReason};
pub(crate) use state::SessionState;
