//! Shared builders for integration tests

use draftboard::models::DraftPick;

/// Header row matching the raw per-team source files
pub const CORE_HEADER: &str = "Year,Rd,Pick,Player,Pos,HT,WT,Age,Pre-Draft Team,Class,Draft Trades,YOS";

/// Header row matching the enriched source files
pub const ENRICHED_HEADER: &str = "Year,Rd,Pick,Player,Pos,HT,WT,Age,Pre-Draft Team,Class,Draft Trades,YOS,nba_id,origin_country,played_until_year,is_defunct,plays_for,awards";

/// A plain draft pick with sensible defaults; tests mutate what they need
pub fn sample_pick(year: u16, round: u32, in_round: u32, player: &str, team: &str) -> DraftPick {
    DraftPick {
        year,
        round,
        pick: in_round,
        player: player.to_string(),
        position: "G".to_string(),
        height: Some("6-4".to_string()),
        weight: Some(200),
        age: Some(20),
        pre_draft_team: "Kentucky".to_string(),
        class: "Fr".to_string(),
        team: team.to_string(),
        draft_trades: None,
        years_of_service: 4,
        nba_id: None,
        origin_country: Some("USA".to_string()),
        played_until_year: None,
        is_defunct: None,
        plays_for: None,
        awards: None,
    }
}
