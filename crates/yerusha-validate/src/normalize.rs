//! Value normalization, applied exactly once per resolved value before any
//! check runs. Checks never see raw text.

/// Unicode space variants that spreadsheet exports smuggle into values:
/// no-break space, figure space, narrow no-break space.
const SPACE_VARIANTS: [char; 3] = ['\u{00A0}', '\u{2007}', '\u{202F}'];

/// Marker a pilcrow is rewritten to: two consecutive line breaks.
const LINE_BREAK: &str = "<br/><br/>";

/// Normalize a raw metadata value.
///
/// Missing values become the empty string, every pilcrow becomes a double
/// line-break marker, space variants become ordinary spaces, and surrounding
/// whitespace is trimmed. Idempotent.
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let replaced: String = raw
        .replace('¶', LINE_BREAK)
        .chars()
        .map(|c| if SPACE_VARIANTS.contains(&c) { ' ' } else { c })
        .collect();
    replaced.trim().to_string()
}
