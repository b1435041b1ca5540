use serde::{Deserialize, Serialize};

/// Year constraint, one mode active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode")]
pub enum YearFilter {
    /// No year constraint
    Any,
    /// Inclusive year range
    Range { from: u16, to: u16 },
    /// Exactly one draft year
    Exact { year: u16 },
}

/// One selectable round token; exact rounds and the aggregate
/// "third round or later" bucket compose via OR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundFilter {
    Exact(u32),
    ThreeOrLater,
}

impl RoundFilter {
    pub fn matches(&self, round: u32) -> bool {
        match self {
            RoundFilter::Exact(r) => round == *r,
            RoundFilter::ThreeOrLater => round >= 3,
        }
    }
}

/// Overall-pick-number constraint; `max: None` means open-ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl PickRange {
    pub fn contains(&self, overall: u32) -> bool {
        overall >= self.min && self.max.map(|m| overall <= m).unwrap_or(true)
    }
}

impl Default for PickRange {
    fn default() -> Self {
        Self { min: 1, max: None }
    }
}

/// Inclusive numeric range over an optional record field; records missing
/// the field fail any active bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl NumericRange {
    pub fn is_unconstrained(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: Option<u32>) -> bool {
        if self.is_unconstrained() {
            return true;
        }
        match value {
            Some(v) => {
                self.min.map(|m| v >= m).unwrap_or(true) && self.max.map(|m| v <= m).unwrap_or(true)
            }
            None => false,
        }
    }
}

/// Trade-status bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    #[default]
    All,
    Traded,
    Untraded,
}

/// Career-status bucket; records with no last-played year only appear
/// under `All`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerFilter {
    #[default]
    All,
    Active,
    Retired,
}

/// Sortable record fields. Enumerated so the comparator is exhaustive
/// rather than doing dynamic key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Year,
    Round,
    Pick,
    Overall,
    Player,
    Position,
    Height,
    Weight,
    Age,
    PreDraftTeam,
    Class,
    Team,
    YearsOfService,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Sort override; when absent the default order is year descending then
/// pick ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Page size, where `All` disables slicing entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    All,
    Limit(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: usize,
    pub per_page: PageSize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: PageSize::All,
        }
    }
}

/// The full bundle of independent filter dimensions. Empty collections and
/// default variants mean "no constraint" for their dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub teams: Vec<String>,
    pub year: YearFilter,
    pub rounds: Vec<RoundFilter>,
    pub pick_range: PickRange,
    pub pre_draft_teams: Vec<String>,
    pub positions: Vec<char>,
    pub age_range: NumericRange,
    pub height_range: NumericRange,
    pub weight_range: NumericRange,
    pub trade_status: TradeStatus,
    pub career: CareerFilter,
    pub countries: Vec<String>,
    /// Free-text player-name search, matched accent-insensitively
    pub search: String,
    pub sort: Option<SortSpec>,
    pub page: PageRequest,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            teams: Vec::new(),
            year: YearFilter::Any,
            rounds: Vec::new(),
            pick_range: PickRange::default(),
            pre_draft_teams: Vec::new(),
            positions: Vec::new(),
            age_range: NumericRange::default(),
            height_range: NumericRange::default(),
            weight_range: NumericRange::default(),
            trade_status: TradeStatus::All,
            career: CareerFilter::All,
            countries: Vec::new(),
            search: String::new(),
            sort: None,
            page: PageRequest::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_range_open_upper_bound() {
        let range = PickRange { min: 10, max: None };
        assert!(range.contains(10));
        assert!(range.contains(5000));
        assert!(!range.contains(9));

        let bounded = PickRange {
            min: 1,
            max: Some(30),
        };
        assert!(bounded.contains(30));
        assert!(!bounded.contains(31));
    }

    #[test]
    fn test_numeric_range_missing_value() {
        let unconstrained = NumericRange::default();
        assert!(unconstrained.contains(None));
        assert!(unconstrained.contains(Some(42)));

        let bounded = NumericRange {
            min: Some(18),
            max: Some(25),
        };
        assert!(bounded.contains(Some(20)));
        assert!(!bounded.contains(Some(30)));
        assert!(!bounded.contains(None));
    }

    #[test]
    fn test_round_filter_aggregate_bucket() {
        assert!(RoundFilter::ThreeOrLater.matches(3));
        assert!(RoundFilter::ThreeOrLater.matches(7));
        assert!(!RoundFilter::ThreeOrLater.matches(2));
        assert!(RoundFilter::Exact(2).matches(2));
    }
}
