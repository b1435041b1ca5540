//! The filter/sort/paginate pipeline over the in-memory record set.
//!
//! Everything here is a pure function of (records, filter state, reference
//! year): the source slice is never mutated and no wall-clock time is
//! consulted, so repeated runs over the same inputs agree.

use crate::models::{
    CareerFilter, CareerStatus, DraftPick, FilterState, PageRequest, PageSize, SortDirection,
    SortKey, SortSpec, TradeStatus, YearFilter,
};
use crate::services::alias::canonical_team;
use crate::services::text::{contains_folded, eq_folded};
use crate::services::trade::parse_trade_chain;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Numeric record fields whose min/max seed the range-filter bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Year,
    Overall,
    Age,
    Weight,
    HeightInches,
    YearsOfService,
}

/// Compute the visible record list for a filter state: predicate pass,
/// stable sort, then page slicing.
pub fn visible_picks(
    records: &[DraftPick],
    filter: &FilterState,
    reference_year: u16,
) -> Vec<DraftPick> {
    let mut visible: Vec<DraftPick> = records
        .iter()
        .filter(|pick| matches_filter(pick, filter, reference_year))
        .cloned()
        .collect();

    sort_picks(&mut visible, filter.sort);
    paginate(visible, filter.page)
}

/// Whether one record passes every active filter dimension. Dimensions
/// compose via AND; a default/empty dimension is no constraint.
pub fn matches_filter(pick: &DraftPick, filter: &FilterState, reference_year: u16) -> bool {
    matches_team(pick, &filter.teams)
        && matches_year(pick, filter.year)
        && matches_round(pick, filter)
        && filter.pick_range.contains(pick.overall_pick())
        && matches_pre_draft_team(pick, &filter.pre_draft_teams)
        && matches_position(pick, &filter.positions)
        && filter.age_range.contains(pick.age)
        && filter.height_range.contains(pick.height_inches())
        && filter.weight_range.contains(pick.weight)
        && matches_trade_status(pick, filter.trade_status)
        && matches_career(pick, filter.career, reference_year)
        && matches_country(pick, &filter.countries)
        && contains_folded(&pick.player, &filter.search)
}

fn matches_team(pick: &DraftPick, teams: &[String]) -> bool {
    if teams.is_empty() {
        return true;
    }
    let own = canonical_team(&pick.team, Some(pick.year));
    teams
        .iter()
        .any(|t| canonical_team(t, Some(pick.year)) == own)
}

fn matches_year(pick: &DraftPick, year: YearFilter) -> bool {
    match year {
        YearFilter::Any => true,
        YearFilter::Range { from, to } => pick.year >= from && pick.year <= to,
        YearFilter::Exact { year } => pick.year == year,
    }
}

fn matches_round(pick: &DraftPick, filter: &FilterState) -> bool {
    filter.rounds.is_empty() || filter.rounds.iter().any(|r| r.matches(pick.round))
}

fn matches_pre_draft_team(pick: &DraftPick, teams: &[String]) -> bool {
    teams.is_empty() || teams.iter().any(|t| eq_folded(t, &pick.pre_draft_team))
}

fn matches_position(pick: &DraftPick, positions: &[char]) -> bool {
    if positions.is_empty() {
        return true;
    }
    let letters = pick.position_letters();
    positions.iter().any(|p| letters.contains(p))
}

fn matches_trade_status(pick: &DraftPick, status: TradeStatus) -> bool {
    if status == TradeStatus::All {
        return true;
    }
    // A chain that collapses to one franchise is not a trade
    let traded = pick
        .draft_trades
        .as_deref()
        .map(|raw| !parse_trade_chain(raw, Some(pick.year)).is_empty())
        .unwrap_or(false);
    match status {
        TradeStatus::All => true,
        TradeStatus::Traded => traded,
        TradeStatus::Untraded => !traded,
    }
}

fn matches_career(pick: &DraftPick, career: CareerFilter, reference_year: u16) -> bool {
    match career {
        CareerFilter::All => true,
        // Unknown last-played year matches neither bucket
        CareerFilter::Active => pick.career_status(reference_year) == CareerStatus::Active,
        CareerFilter::Retired => pick.career_status(reference_year) == CareerStatus::Retired,
    }
}

fn matches_country(pick: &DraftPick, countries: &[String]) -> bool {
    if countries.is_empty() {
        return true;
    }
    match pick.origin_country.as_deref() {
        Some(country) => countries.iter().any(|c| eq_folded(c, country)),
        None => false,
    }
}

/// Typed extraction for the comparator, so sorting is exhaustive over the
/// record's fields instead of doing dynamic key lookup
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Int(i64),
    Text(String),
    Missing,
}

fn sort_value(pick: &DraftPick, key: SortKey) -> SortValue {
    fn text(value: &str) -> SortValue {
        SortValue::Text(value.trim().to_lowercase())
    }
    fn opt_int(value: Option<u32>) -> SortValue {
        value.map(|v| SortValue::Int(v as i64)).unwrap_or(SortValue::Missing)
    }

    match key {
        SortKey::Year => SortValue::Int(pick.year as i64),
        SortKey::Round => SortValue::Int(pick.round as i64),
        SortKey::Pick => SortValue::Int(pick.pick as i64),
        SortKey::Overall => SortValue::Int(pick.overall_pick() as i64),
        SortKey::Player => text(&pick.player),
        SortKey::Position => text(&pick.position),
        SortKey::Height => opt_int(pick.height_inches()),
        SortKey::Weight => opt_int(pick.weight),
        SortKey::Age => opt_int(pick.age),
        SortKey::PreDraftTeam => text(&pick.pre_draft_team),
        SortKey::Class => text(&pick.class),
        SortKey::Team => text(&pick.team),
        SortKey::YearsOfService => SortValue::Int(pick.years_of_service as i64),
    }
}

/// Compare two values for one key; absent values sort last regardless of
/// direction
fn compare_values(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    let natural = match (a, b) {
        (SortValue::Missing, SortValue::Missing) => return Ordering::Equal,
        (SortValue::Missing, _) => return Ordering::Greater,
        (_, SortValue::Missing) => return Ordering::Less,
        (SortValue::Int(x), SortValue::Int(y)) => x.cmp(y),
        (SortValue::Text(x), SortValue::Text(y)) => x.cmp(y),
        // Mixed shapes only occur if a key produced both; order by kind
        (SortValue::Int(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Int(_)) => Ordering::Greater,
    };
    match direction {
        SortDirection::Ascending => natural,
        SortDirection::Descending => natural.reverse(),
    }
}

/// Stable sort: the default order is year descending then overall draft
/// position ascending; an override key sorts stably on top of that order,
/// so equal keys keep the default relative order.
pub fn sort_picks(picks: &mut [DraftPick], sort: Option<SortSpec>) {
    picks.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| a.overall_pick().cmp(&b.overall_pick()))
    });

    if let Some(spec) = sort {
        picks.sort_by(|a, b| {
            compare_values(
                &sort_value(a, spec.key),
                &sort_value(b, spec.key),
                spec.direction,
            )
        });
    }
}

/// Slice the filtered-and-sorted list down to one page
pub fn paginate(picks: Vec<DraftPick>, page: PageRequest) -> Vec<DraftPick> {
    match page.per_page {
        PageSize::All => picks,
        PageSize::Limit(per_page) => picks
            .into_iter()
            .skip(page.page.saturating_mul(per_page))
            .take(per_page)
            .collect(),
    }
}

/// Distinct pre-draft teams across the full record set, sorted
pub fn distinct_pre_draft_teams(records: &[DraftPick]) -> Vec<String> {
    let set: BTreeSet<String> = records
        .iter()
        .map(|p| p.pre_draft_team.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    set.into_iter().collect()
}

/// Min/max of a numeric field across all records, used to seed the range
/// filters. `None` when no record carries the field.
pub fn numeric_bounds(records: &[DraftPick], field: NumericField) -> Option<(u32, u32)> {
    let mut bounds: Option<(u32, u32)> = None;
    for record in records {
        let value = match field {
            NumericField::Year => Some(record.year as u32),
            NumericField::Overall => Some(record.overall_pick()),
            NumericField::Age => record.age,
            NumericField::Weight => record.weight,
            NumericField::HeightInches => record.height_inches(),
            NumericField::YearsOfService => Some(record.years_of_service),
        };
        if let Some(v) = value {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
    }
    bounds
}
