use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Picks per round in the standard draft structure, used to derive the
/// overall pick number from (round, pick).
pub const ROUND_SIZE: u32 = 30;

/// Career status of a player relative to a reference year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerStatus {
    Active,
    Retired,
    /// No last-played year available; matches neither bucket
    Unknown,
}

impl CareerStatus {
    /// Convert to display string
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerStatus::Active => "active",
            CareerStatus::Retired => "retired",
            CareerStatus::Unknown => "unknown",
        }
    }
}

/// One draft selection as ultimately possessed by a franchise.
///
/// The `team` field is the acquiring franchise after draft-night trades;
/// the normalizer guarantees a team's record set never contains picks that
/// team traded away on draft night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub year: u16,
    pub round: u32,
    pub pick: u32,
    pub player: String,
    /// Short position code, may encode multiple positions (e.g. "GF")
    pub position: String,
    /// Raw "feet-inches" string (e.g. "6-8"), absent when unlisted
    pub height: Option<String>,
    pub weight: Option<u32>,
    pub age: Option<u32>,
    pub pre_draft_team: String,
    pub class: String,
    /// Franchise code this record is filed under
    pub team: String,
    /// Raw trade chain text ("CHA to BOS BOS to ATL"), None when untraded
    pub draft_trades: Option<String>,
    pub years_of_service: u32,

    // Enrichment fields, absent when the enriched source is unavailable
    pub nba_id: Option<u64>,
    pub origin_country: Option<String>,
    pub played_until_year: Option<u16>,
    pub is_defunct: Option<bool>,
    pub plays_for: Option<String>,
    /// Flat award-name -> count map decoded from the embedded sub-field
    pub awards: Option<HashMap<String, u32>>,
}

impl DraftPick {
    /// Position across the entire draft, independent of round. Saturates
    /// on out-of-range source values rather than overflowing.
    pub fn overall_pick(&self) -> u32 {
        self.round
            .saturating_sub(1)
            .saturating_mul(ROUND_SIZE)
            .saturating_add(self.pick)
    }

    /// Individual position letters, with any leading starter/bench
    /// designator prefix stripped ("sGF" -> ['G', 'F'])
    pub fn position_letters(&self) -> Vec<char> {
        position_letters(&self.position)
    }

    /// Listed height converted to inches ("6-8" -> 80)
    pub fn height_inches(&self) -> Option<u32> {
        parse_height_inches(self.height.as_deref()?)
    }

    /// Whether the source row carried any trade text at all. Whether the
    /// text encodes a real transfer is the trade parser's call.
    pub fn has_trade_text(&self) -> bool {
        self.draft_trades
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }

    /// Career status at `reference_year`. A player whose last recorded
    /// season is within one year of the reference is considered active;
    /// with no last-played year the status is unknown.
    pub fn career_status(&self, reference_year: u16) -> CareerStatus {
        match self.played_until_year {
            Some(last) if last.saturating_add(1) >= reference_year => CareerStatus::Active,
            Some(_) => CareerStatus::Retired,
            None => CareerStatus::Unknown,
        }
    }
}

/// Strip any leading designator characters, then split into the real
/// position letters (G/F/C).
pub fn position_letters(position: &str) -> Vec<char> {
    position
        .trim()
        .chars()
        .skip_while(|c| !matches!(c, 'G' | 'F' | 'C'))
        .filter(|c| matches!(c, 'G' | 'F' | 'C'))
        .collect()
}

/// Parse a "feet-inches" string into total inches. Values that would
/// overflow are treated as unparseable.
pub fn parse_height_inches(raw: &str) -> Option<u32> {
    let (feet, inches) = raw.trim().split_once('-')?;
    let feet = feet.trim().parse::<u32>().ok()?;
    let inches = inches.trim().parse::<u32>().ok()?;
    feet.checked_mul(12)?.checked_add(inches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(round: u32, in_round: u32) -> DraftPick {
        DraftPick {
            year: 2008,
            round,
            pick: in_round,
            player: "Test Player".to_string(),
            position: "GF".to_string(),
            height: Some("6-8".to_string()),
            weight: Some(210),
            age: Some(19),
            pre_draft_team: "Kentucky".to_string(),
            class: "Fr".to_string(),
            team: "BOS".to_string(),
            draft_trades: None,
            years_of_service: 5,
            nba_id: None,
            origin_country: None,
            played_until_year: None,
            is_defunct: None,
            plays_for: None,
            awards: None,
        }
    }

    #[test]
    fn test_overall_pick_derivation() {
        assert_eq!(pick(1, 1).overall_pick(), 1);
        assert_eq!(pick(2, 5).overall_pick(), 35);
        assert_eq!(pick(1, 30).overall_pick(), 30);
    }

    #[test]
    fn test_position_letters_strips_prefix() {
        assert_eq!(position_letters("GF"), vec!['G', 'F']);
        assert_eq!(position_letters("sC"), vec!['C']);
        assert_eq!(position_letters(""), Vec::<char>::new());
    }

    #[test]
    fn test_height_inches() {
        assert_eq!(parse_height_inches("6-8"), Some(80));
        assert_eq!(parse_height_inches("7-0"), Some(84));
        assert_eq!(parse_height_inches("tall"), None);
    }

    #[test]
    fn test_out_of_range_numerics_never_panic() {
        // Source rows are untrusted; extreme values must degrade, not
        // overflow
        let mut p = pick(u32::MAX, u32::MAX);
        assert_eq!(p.overall_pick(), u32::MAX);

        p.played_until_year = Some(u16::MAX);
        assert_eq!(p.career_status(2025), CareerStatus::Active);

        assert_eq!(parse_height_inches("400000000-0"), None);
        assert_eq!(parse_height_inches("6-4294967295"), None);
    }

    #[test]
    fn test_career_status() {
        let mut p = pick(1, 1);
        assert_eq!(p.career_status(2025), CareerStatus::Unknown);

        p.played_until_year = Some(2025);
        assert_eq!(p.career_status(2025), CareerStatus::Active);

        p.played_until_year = Some(2024);
        assert_eq!(p.career_status(2025), CareerStatus::Active);

        p.played_until_year = Some(2019);
        assert_eq!(p.career_status(2025), CareerStatus::Retired);
    }
}
