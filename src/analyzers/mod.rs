//! The statistics engine: four independent analyses over one filtered
//! view of the trip records.
//!
//! Every mode-style selection in this module uses the same deterministic
//! tie-break (smallest key wins, see [`utility`]) so repeated runs over
//! the same data always report the same winner.

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;
