//! CSV export of a visible record list.
//!
//! Column order is fixed and mirrors the input format, so an export can be
//! fed back through the normalizer: `Year, Rd, Pick, Player, Pos, HT, WT,
//! Age, Pre-Draft Team, Class, Draft Trades, YOS, nba_id, origin_country,
//! played_until_year, is_defunct, plays_for, awards`.

use crate::models::DraftPick;
use std::collections::BTreeMap;

const HEADER: &str = "Year,Rd,Pick,Player,Pos,HT,WT,Age,Pre-Draft Team,Class,Draft Trades,YOS,nba_id,origin_country,played_until_year,is_defunct,plays_for,awards";

/// Flatten newlines to spaces (rows are line-delimited on re-parse), then
/// quote-wrap a field containing the delimiter or a quote, doubling
/// internal quotes
pub fn escape_field(value: &str) -> String {
    let flat = value.replace("\r\n", " ").replace(['\r', '\n'], " ");
    if flat.contains(',') || flat.contains('"') {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Serialize records to CSV text in the documented column order
pub fn export_csv(records: &[DraftPick]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for record in records {
        // Stable key order so equal record sets export identically
        let awards = record.awards.as_ref().map(|map| {
            let ordered: BTreeMap<&str, u32> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
            serde_json::to_string(&ordered).unwrap_or_default()
        });

        let fields = [
            record.year.to_string(),
            record.round.to_string(),
            record.pick.to_string(),
            record.player.clone(),
            record.position.clone(),
            record.height.clone().unwrap_or_default(),
            opt(&record.weight),
            opt(&record.age),
            record.pre_draft_team.clone(),
            record.class.clone(),
            record.draft_trades.clone().unwrap_or_default(),
            record.years_of_service.to_string(),
            opt(&record.nba_id),
            record.origin_country.clone().unwrap_or_default(),
            opt(&record.played_until_year),
            opt(&record.is_defunct),
            record.plays_for.clone().unwrap_or_default(),
            awards.unwrap_or_default(),
        ];

        let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}
