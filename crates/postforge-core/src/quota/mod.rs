//! Per-client daily quota carried in a cookie.
//!
//! The server keeps no counter. Each request presents
//! `request_count_<YYYY-MM-DD>`; a successful generation answers with the
//! same cookie incremented and expiring at the end of the day.

mod clock;
mod cookie;
mod tracker;

pub use clock::{end_of_day_in, Clock, FixedClock, SystemClock};
pub use cookie::{find_cookie, parse_count};
pub use tracker::{admit, issue_cookie, read_quota, snapshot};
