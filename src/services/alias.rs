//! Team identity resolution across franchise relocations and renames.
//!
//! A single on-court franchise may have used several codes over NBA
//! history (SEA -> OKC, VAN -> MEM, ...), and draft-trade text can refer
//! to a team by any era-appropriate code. `canonical_team` collapses any
//! spelling to the stable franchise identifier for equality comparisons;
//! `display_team` keeps the historically accurate code for rendering.

/// Every code the resolver knows about, current codes included. Used to
/// enumerate historical spellings of one franchise.
const KNOWN_CODES: &[&str] = &[
    "ATL", "BAL", "BKN", "BOS", "BRK", "BUF", "CHA", "CHH", "CHI", "CHP", "CHZ", "CIN", "CLE",
    "DAL", "DEN", "DET", "FTW", "GSW", "HOU", "IND", "KCK", "KCO", "LAC", "LAL", "MEM", "MIA",
    "MIL", "MIN", "MLH", "MNL", "NJ", "NJN", "NOH", "NOJ", "NOK", "NOP", "NYK", "OKC", "ORL",
    "PHI", "PHO", "PHW", "PHX", "POR", "ROC", "SAC", "SAS", "SDC", "SDR", "SEA", "SFW", "STL",
    "SYR", "TOR", "TRI", "UTA", "VAN", "WAS", "WSB",
];

/// Returns the stable franchise identifier for a code, using the draft
/// year to split codes that denoted different franchises in different
/// eras. Total: unknown codes resolve to themselves.
pub fn canonical_team(code: &str, year: Option<u16>) -> String {
    let upper = code.trim().to_uppercase();

    let mapped = match upper.as_str() {
        // Relocations
        "SEA" => "OKC",
        "VAN" => "MEM",
        "NJN" | "NJ" | "BRK" => "BKN",
        "NOH" | "NOK" => "NOP",
        "NOJ" => "UTA",
        "SDR" => "HOU",
        "SDC" | "BUF" => "LAC",
        "SFW" | "PHW" => "GSW",
        "SYR" => "PHI",
        "FTW" => "DET",
        "MNL" => "LAL",
        "STL" | "MLH" | "TRI" => "ATL",
        "KCK" | "KCO" | "CIN" | "ROC" => "SAC",
        "WSB" | "CHZ" | "CHP" => "WAS",
        // Era split: the original Baltimore Bullets folded in 1954; the
        // 1963-72 Bullets are the franchise now in Washington. With no
        // year the most recent mapping wins.
        "BAL" => match year {
            Some(y) if y <= 1954 => "BAL",
            _ => "WAS",
        },
        // Renames in place
        "CHH" => "CHA",
        "PHO" => "PHX",
        other => other,
    };

    if mapped == upper {
        upper
    } else {
        mapped.to_string()
    }
}

/// Like `canonical_team`, but preserves the era-appropriate identity:
/// `SEA` stays `SEA` so chains read historically, while pure spelling
/// variants collapse to one preferred form.
pub fn display_team(code: &str, _year: Option<u16>) -> String {
    let upper = code.trim().to_uppercase();

    let preferred = match upper.as_str() {
        "NJ" => "NJN",
        "BRK" => "BKN",
        "PHO" => "PHX",
        "NOK" => "NOH",
        "PHW" => "SFW",
        "CHP" => "CHZ",
        "KCO" => "KCK",
        other => other,
    };

    if preferred == upper {
        upper
    } else {
        preferred.to_string()
    }
}

/// Every raw code that resolves to the same franchise as `code` for the
/// given year. Used to detect "this franchise traded the pick away" under
/// any historical spelling.
pub fn all_team_codes(code: &str, year: Option<u16>) -> Vec<String> {
    let target = canonical_team(code, year);

    let mut codes: Vec<String> = KNOWN_CODES
        .iter()
        .filter(|candidate| canonical_team(candidate, year) == target)
        .map(|s| s.to_string())
        .collect();

    // Unknown codes are their own (only) spelling
    if codes.is_empty() {
        codes.push(target);
    }
    codes
}
