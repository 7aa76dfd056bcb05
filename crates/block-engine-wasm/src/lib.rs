//! WASM bindings for block-engine.
//!
//! Exposes day-availability resolution and time projection to the
//! JavaScript rendering layer via `wasm-bindgen`. Complex inputs cross the
//! boundary as JSON strings.
//!
//! The rendering layer calls these once per visible calendar cell, so none
//! of the exports throw: malformed boundary JSON degrades the same way the
//! core degrades — to the available verdict or the unconverted time.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p block-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir dist/wasm/ \
//!   target/wasm32-unknown-unknown/release/block_engine_wasm.wasm
//! ```

use block_engine::types::{DateInput, SpecificBlock, WeekdaySet};
use wasm_bindgen::prelude::*;

/// JSON of the available verdict, used when serialization itself fails.
const AVAILABLE_JSON: &str = r#"{"blocked":false,"kind":"available","matchedBlocks":[]}"#;

/// Decide whether a calendar day is blocked.
///
/// # Arguments
/// - `date` -- ISO date string (e.g., "2024-01-15")
/// - `weekday_blocks_json` -- JSON array of blocked weekdays, 0 = Sunday
///   (e.g., "[0,6]")
/// - `specific_blocks_json` -- JSON array of block records; `null` entries
///   are permitted and skipped
///
/// Returns a JSON string `{"blocked", "kind", "matchedBlocks"}` where
/// `matchedBlocks` carries the original records (opaque fields included)
/// in input order. Unparsable arguments degrade to the available verdict.
#[wasm_bindgen(js_name = "resolveDate")]
pub fn resolve_date(date: &str, weekday_blocks_json: &str, specific_blocks_json: &str) -> String {
    let weekday_blocks: WeekdaySet =
        serde_json::from_str(weekday_blocks_json).unwrap_or_default();
    let specific_blocks: Vec<Option<SpecificBlock>> =
        serde_json::from_str(specific_blocks_json).unwrap_or_default();

    let verdict = block_engine::resolve_date(
        &DateInput::from(date),
        &weekday_blocks,
        &specific_blocks,
    );

    serde_json::to_string(&verdict).unwrap_or_else(|_| AVAILABLE_JSON.to_string())
}

/// Convert a UTC-stored time to the viewer's timezone.
///
/// # Arguments
/// - `date` -- ISO date string the time is anchored to
/// - `time` -- `HH:mm` or `HH:mm:ss` UTC wall-clock time
/// - `timezone` -- IANA zone identifier (e.g., "America/Sao_Paulo")
///
/// Returns the local `HH:mm`, or the normalized input time when conversion
/// is not possible.
#[wasm_bindgen(js_name = "convertTimeOfDay")]
pub fn convert_time_of_day(
    date: Option<String>,
    time: Option<String>,
    timezone: Option<String>,
) -> String {
    let date = date.map(DateInput::Iso);
    block_engine::convert_time_of_day(date.as_ref(), time.as_deref(), timezone.as_deref())
}

/// Format a converted `"HH:mm - HH:mm"` time range for display.
///
/// Both endpoints anchor to the same `date`; a single present endpoint is
/// returned alone and two absent endpoints give `""`.
#[wasm_bindgen(js_name = "formatTimeRange")]
pub fn format_time_range(
    date: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    timezone: Option<String>,
) -> String {
    let date = date.map(DateInput::Iso);
    block_engine::format_range(
        date.as_ref(),
        start_time.as_deref(),
        end_time.as_deref(),
        timezone.as_deref(),
    )
}
