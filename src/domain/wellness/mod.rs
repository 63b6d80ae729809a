//! Wellness vocabulary - the closed set of capability domains, the
//! activities they award, and the payloads users send.

mod activity;
mod domain;
mod payload;

pub use activity::ActivityType;
pub use domain::WellnessDomain;
pub use payload::{InputPayload, MediaReference, PayloadKind};
