//! Data models shared by the session, the view and the remote service.
//!
//! Wire types mirror the JSON the search service speaks; the rest are the
//! controller's own state records.

mod counters;
mod history;
mod notification;
mod responses;

pub use counters::*;
pub use history::*;
pub use notification::*;
pub use responses::*;
