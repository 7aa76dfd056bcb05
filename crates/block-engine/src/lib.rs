//! # block-engine
//!
//! Deterministic day-availability resolution and UTC time projection for
//! booking calendars.
//!
//! A rendering layer calls into this crate once per visible day (~42 cells
//! per month grid): the resolver decides whether the day is blocked — by a
//! weekday rule or by specific block records — and the projector converts a
//! block's UTC-stored times into the viewer's timezone for display. Both
//! operations are pure, synchronous, and never raise to the caller:
//! malformed input degrades to the most conservative result (not blocked;
//! show the raw time) with an advisory log via the `log` facade.
//!
//! ## Modules
//!
//! - [`resolver`] — (date, weekday set, block records) → block verdict
//! - [`projector`] — (date, UTC time, IANA zone) → localized display string
//! - [`types`] — presence-tagged date/weekday/block input types
//! - [`error`] — error types (internal; the public operations never raise)

pub mod error;
pub mod projector;
pub mod resolver;
pub mod types;

pub use error::BlockError;
pub use projector::{convert_time_of_day, format_range, TzDatabase, ZoneProvider};
pub use resolver::{resolve_date, BlockKind, BlockVerdict};
pub use types::{DateInput, SpecificBlock, WeekdaySet};
