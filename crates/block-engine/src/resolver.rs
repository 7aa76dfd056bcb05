//! Day availability resolution — decides whether a calendar day is blocked.
//!
//! Weekday blocks take precedence over specific blocks: a weekday-blocked
//! day never reports specific-block matches, even when some exist. Specific
//! blocks are evaluated in input order and ALL matches surface in the
//! verdict, so the rendering layer can list every rule covering a day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::types::{DateInput, ParsedDate, SpecificBlock, WeekdaySet};

/// Which rule kind produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Weekday,
    Specific,
    Available,
}

/// The resolver's result for a single calendar day.
///
/// `matched_blocks` borrows the caller's records (input order, never
/// mutated) and is empty unless `kind` is [`BlockKind::Specific`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockVerdict<'a> {
    pub blocked: bool,
    pub kind: BlockKind,
    #[serde(rename = "matchedBlocks")]
    pub matched_blocks: Vec<&'a SpecificBlock>,
}

impl BlockVerdict<'_> {
    fn available() -> Self {
        Self {
            blocked: false,
            kind: BlockKind::Available,
            matched_blocks: Vec::new(),
        }
    }
}

/// Decide whether `date` is blocked, and by which rule(s).
///
/// Evaluation order is a firm contract:
///
/// 1. If `weekday_blocks` is non-empty and contains the day's weekday
///    (`0` = Sunday), the day is weekday-blocked and specific blocks are
///    not consulted at all.
/// 2. Otherwise every entry of `specific_blocks` is tested in order (`None`
///    entries skipped) and all matching blocks are collected.
///
/// The call never fails: an unparsable `date` yields the available verdict
/// and a malformed block field makes that block non-matching, with an
/// advisory log either way. Output depends only on the inputs — no clock
/// reads, no randomness.
pub fn resolve_date<'a>(
    date: &DateInput,
    weekday_blocks: &WeekdaySet,
    specific_blocks: &'a [Option<SpecificBlock>],
) -> BlockVerdict<'a> {
    let day = match date.parse() {
        ParsedDate::Valid(d) => d,
        _ => {
            log::warn!("unparsable calendar date {:?}, treating day as available", date);
            return BlockVerdict::available();
        }
    };

    // 0 = Sunday, matching the persisted weekday convention.
    let weekday = day.weekday().num_days_from_sunday() as u8;
    if weekday_blocks.contains(weekday) {
        return BlockVerdict {
            blocked: true,
            kind: BlockKind::Weekday,
            matched_blocks: Vec::new(),
        };
    }

    let matched_blocks: Vec<&SpecificBlock> = specific_blocks
        .iter()
        .flatten()
        .filter(|block| block_covers(block, day))
        .collect();

    if matched_blocks.is_empty() {
        BlockVerdict::available()
    } else {
        BlockVerdict {
            blocked: true,
            kind: BlockKind::Specific,
            matched_blocks,
        }
    }
}

/// Test whether a single block covers `day`.
///
/// A block whose start is valid and end is absent matches only its start
/// day. A valid range on the same calendar day behaves exactly like the
/// single-day case (its time-of-day fields annotate the match, they never
/// gate it). A range spanning different days matches the closed interval
/// `start <= day <= end`.
///
/// A present-but-unparsable endpoint makes the block ambiguous and it never
/// matches; same for a reversed range (`end < start`).
fn block_covers(block: &SpecificBlock, day: NaiveDate) -> bool {
    match (block.start(), block.end()) {
        (ParsedDate::Valid(start), ParsedDate::Absent) => day == start,
        (ParsedDate::Valid(start), ParsedDate::Valid(end)) => {
            if start == end {
                day == start
            } else if end < start {
                log::warn!("block range {}..{} is reversed, skipping", start, end);
                false
            } else {
                start <= day && day <= end
            }
        }
        (ParsedDate::Valid(_), ParsedDate::Invalid) | (ParsedDate::Invalid, _) => {
            log::warn!("block has an unparsable date endpoint, skipping");
            false
        }
        (ParsedDate::Absent, _) => false,
    }
}
