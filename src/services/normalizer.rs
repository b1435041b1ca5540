//! Converts raw per-team CSV text into typed draft-pick records.
//!
//! Columns are resolved by header name rather than fixed position: the
//! core columns must all be present or the file is rejected, while the
//! enrichment columns added by later pipeline stages resolve independently
//! and default to absent. Row parsing is defensive throughout; a bad row
//! costs that row, never the file.

use crate::error::ParseError;
use crate::models::DraftPick;
use crate::services::alias::all_team_codes;
use crate::services::trade::trade_origin;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Split one CSV line on commas, honoring quote-wrapped fields with
/// doubled-quote escaping.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }
    fields.push(current);
    fields
}

/// Name -> index map of one source file's columns
#[derive(Debug, Clone)]
struct HeaderMap {
    year: usize,
    round: usize,
    pick: usize,
    player: usize,
    position: usize,
    height: usize,
    weight: usize,
    age: usize,
    pre_draft_team: usize,
    class: usize,
    draft_trades: usize,
    years_of_service: usize,

    nba_id: Option<usize>,
    origin_country: Option<usize>,
    played_until_year: Option<usize>,
    is_defunct: Option<usize>,
    plays_for: Option<usize>,
    awards: Option<usize>,
}

impl HeaderMap {
    fn parse(fields: &[String]) -> Result<Self, ParseError> {
        let find = |names: &[&str]| -> Option<usize> {
            fields.iter().position(|f| {
                let folded = f.trim().to_lowercase();
                names.contains(&folded.as_str())
            })
        };
        let require = |names: &[&str]| -> Result<usize, ParseError> {
            find(names).ok_or_else(|| ParseError::MissingColumn(names[0].to_string()))
        };

        Ok(Self {
            year: require(&["year"])?,
            round: require(&["rd", "round"])?,
            pick: require(&["pick"])?,
            player: require(&["player"])?,
            position: require(&["pos", "position"])?,
            height: require(&["ht", "height"])?,
            weight: require(&["wt", "weight"])?,
            age: require(&["age"])?,
            pre_draft_team: require(&["pre-draft team", "pre draft team"])?,
            class: require(&["class"])?,
            draft_trades: require(&["draft trades", "trades"])?,
            years_of_service: require(&["yos", "years of service"])?,

            nba_id: find(&["nba_id"]),
            origin_country: find(&["origin_country"]),
            played_until_year: find(&["played_until_year"]),
            is_defunct: find(&["is_defunct"]),
            plays_for: find(&["plays_for"]),
            awards: find(&["awards"]),
        })
    }

    /// Minimum field count a row needs to cover every required column
    fn required_width(&self) -> usize {
        [
            self.year,
            self.round,
            self.pick,
            self.player,
            self.position,
            self.height,
            self.weight,
            self.age,
            self.pre_draft_team,
            self.class,
            self.draft_trades,
            self.years_of_service,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

/// True for the empty-cell spellings the upstream tooling produces
fn is_absent(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") || trimmed.eq_ignore_ascii_case("none")
}

/// Permissive integer parse; tolerates the float spellings ("210.0") that
/// appear after upstream numeric coercion
fn parse_num(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if is_absent(trimmed) {
        return None;
    }
    if let Ok(n) = trimmed.parse::<u64>() {
        return Some(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Some(f as u64),
        _ => None,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Permissively decode the embedded award map.
///
/// The value is a serialized map nested inside a CSV column, so it may be
/// wrapped in an extra quote layer, carry doubled or backslash-escaped
/// quotes, or use single-quoted key syntax. Any failure yields `None`.
pub fn parse_award_map(raw: &str) -> Option<HashMap<String, u32>> {
    let mut text = raw.trim().to_string();
    if is_absent(&text) {
        return None;
    }

    // Strip one level of wrapping quotes
    for wrapper in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(wrapper) && text.ends_with(wrapper) {
            text = text[1..text.len() - 1].to_string();
            break;
        }
    }

    // Un-escape doubled and backslash-escaped quotes
    text = text.replace("\"\"", "\"").replace("\\\"", "\"");

    // Single-quoted map syntax: only safe to rewrite when the text does
    // not already use standard quotes
    if !text.contains('"') {
        text = text.replace('\'', "\"");
    }

    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            warn!("Unparseable award map '{}': {}", raw, e);
            return None;
        }
    };

    let object = match value {
        serde_json::Value::Object(map) => map,
        _ => {
            warn!("Award map is not an object: {}", raw);
            return None;
        }
    };

    let mut awards = HashMap::with_capacity(object.len());
    for (name, count) in object {
        match count.as_u64() {
            Some(n) => {
                awards.insert(name, n as u32);
            }
            None => {
                warn!("Award map has non-numeric count for '{}': {}", name, raw);
                return None;
            }
        }
    }
    Some(awards)
}

/// Parse one team's CSV file into its record set.
///
/// `team_code` is the franchise whose file this is; rows whose trade chain
/// originates with that franchise (under any historical spelling) are
/// picks it traded away on draft night and are excluded, since they appear
/// in the acquiring franchise's own file.
pub fn parse_team_file(team_code: &str, contents: &str) -> Result<Vec<DraftPick>, ParseError> {
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());

    let header_line = lines.next().ok_or(ParseError::EmptyFile)?;
    let header = HeaderMap::parse(&split_csv_line(header_line))?;
    let required_width = header.required_width();

    let mut picks = Vec::new();
    for (line_number, line) in lines.enumerate() {
        let fields = split_csv_line(line);
        if fields.len() < required_width {
            warn!(
                "{}: row {} has {} fields, need {}; skipping",
                team_code,
                line_number + 2,
                fields.len(),
                required_width
            );
            continue;
        }

        let field = |idx: usize| fields.get(idx).map(|s| s.trim()).unwrap_or("");
        let optional = |idx: Option<usize>| idx.map(field).filter(|v| !is_absent(v));

        let year = parse_num(field(header.year)).unwrap_or(0) as u16;

        let draft_trades = if is_absent(field(header.draft_trades)) {
            None
        } else {
            Some(field(header.draft_trades).to_string())
        };

        // Draft-night trade-away filtering: the filing team selected this
        // pick and sent it elsewhere, so it belongs to the acquirer's file
        if let Some(origin) = draft_trades.as_deref().and_then(trade_origin) {
            let own_codes = all_team_codes(team_code, Some(year));
            if own_codes.iter().any(|c| c.eq_ignore_ascii_case(origin)) {
                debug!(
                    "{}: excluding pick traded away on draft night ({})",
                    team_code,
                    field(header.player)
                );
                continue;
            }
        }

        picks.push(DraftPick {
            year,
            round: parse_num(field(header.round)).unwrap_or(0) as u32,
            pick: parse_num(field(header.pick)).unwrap_or(0) as u32,
            player: field(header.player).to_string(),
            position: field(header.position).to_string(),
            height: (!is_absent(field(header.height)))
                .then(|| field(header.height).to_string()),
            weight: parse_num(field(header.weight)).map(|n| n as u32),
            age: parse_num(field(header.age)).map(|n| n as u32),
            pre_draft_team: field(header.pre_draft_team).to_string(),
            class: field(header.class).to_string(),
            team: team_code.to_uppercase(),
            draft_trades,
            years_of_service: parse_num(field(header.years_of_service)).unwrap_or(0) as u32,
            nba_id: header.nba_id.map(field).and_then(parse_num),
            origin_country: optional(header.origin_country).map(str::to_string),
            played_until_year: header
                .played_until_year
                .map(field)
                .and_then(parse_num)
                .map(|n| n as u16),
            is_defunct: header.is_defunct.map(field).and_then(parse_bool),
            plays_for: optional(header.plays_for).map(str::to_string),
            awards: header.awards.map(field).and_then(parse_award_map),
        });
    }

    Ok(picks)
}
