//! Draft-night trade chain parsing.
//!
//! Source trade text reads like `"CHA to BOS BOS to ATL"`: segments
//! separated by the literal `" to "` token, where each segment after the
//! first starts with the receiving team's code followed by concatenation
//! noise from the upstream format. The parsed chain is alias-resolved and
//! deduplicated so renames never show up as a team trading with itself.

use crate::services::alias::{canonical_team, display_team};

/// Longest plausible franchise abbreviation in trade text
const MAX_CODE_LEN: usize = 4;

/// Parse a raw trade string into the ordered chain of franchises the pick
/// passed through, in display form.
///
/// Returns an empty vector for untraded picks and for chains that collapse
/// to a single franchise after alias resolution (a rename is not a trade).
/// A non-empty result always has length >= 2.
pub fn parse_trade_chain(raw: &str, year: Option<u16>) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut canonical_chain: Vec<String> = Vec::new();
    let mut display_chain: Vec<String> = Vec::new();

    for (index, segment) in trimmed.split(" to ").enumerate() {
        let token = if index == 0 {
            let origin = segment.trim();
            if origin.is_empty() || origin.len() > MAX_CODE_LEN {
                continue;
            }
            origin
        } else {
            // Only the leading token is the receiver; the rest of the
            // segment is noise from the source format
            match segment.split_whitespace().next() {
                Some(first) if first.len() <= MAX_CODE_LEN => first,
                _ => continue,
            }
        };

        let canonical = canonical_team(token, year);

        // Collapse consecutive duplicates so a mid-chain rename does not
        // read as a trade to itself
        if canonical_chain.last() == Some(&canonical) {
            continue;
        }

        canonical_chain.push(canonical);
        display_chain.push(display_team(token, year));
    }

    if canonical_chain.len() < 2 {
        return Vec::new();
    }
    display_chain
}

/// The origin (first) franchise token of a trade string, if any. This is
/// the team that selected the pick before trading it away.
pub fn trade_origin(raw: &str) -> Option<&str> {
    let origin = raw.trim().split(" to ").next()?.trim();
    if origin.is_empty() || origin.len() > MAX_CODE_LEN {
        None
    } else {
        Some(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_chain() {
        assert_eq!(
            parse_trade_chain("CHA to BOS", Some(2015)),
            vec!["CHA", "BOS"]
        );
    }

    #[test]
    fn test_multi_hop_chain_with_noise() {
        // Concatenated artifacts after the receiver code are discarded
        assert_eq!(
            parse_trade_chain("CHA to BOS BOS to ATL", Some(2015)),
            vec!["CHA", "BOS", "ATL"]
        );
    }

    #[test]
    fn test_degenerate_same_team_chain_is_empty() {
        assert!(parse_trade_chain("ATL to ATL", None).is_empty());
    }

    #[test]
    fn test_consecutive_duplicates_collapse() {
        assert_eq!(
            parse_trade_chain("ATL to BOS to BOS to NYK", None),
            vec!["ATL", "BOS", "NYK"]
        );
    }

    #[test]
    fn test_rename_only_chain_is_empty() {
        // NJN -> BKN is the same franchise, so no user-visible trade
        assert!(parse_trade_chain("NJN to BKN", Some(2013)).is_empty());
    }

    #[test]
    fn test_rename_inside_real_chain() {
        // SEA and OKC collapse, the trade to BOS survives
        assert_eq!(
            parse_trade_chain("SEA to OKC to BOS", Some(2008)),
            vec!["SEA", "BOS"]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse_trade_chain("", None).is_empty());
        assert!(parse_trade_chain("   ", None).is_empty());
    }

    #[test]
    fn test_malformed_segment_skipped() {
        // Middle segment has no plausible leading code; chain continues
        assert_eq!(
            parse_trade_chain("ATL to somethinglong to NYK", None),
            vec!["ATL", "NYK"]
        );
    }

    #[test]
    fn test_irregular_whitespace() {
        assert_eq!(
            parse_trade_chain("  ATL to   BOS   extra ", None),
            vec!["ATL", "BOS"]
        );
    }

    #[test]
    fn test_trade_origin() {
        assert_eq!(trade_origin("CHA to BOS"), Some("CHA"));
        assert_eq!(trade_origin(""), None);
        assert_eq!(trade_origin("somethinglong to BOS"), None);
    }
}
