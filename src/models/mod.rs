//! Data models for the draft-pick browser

pub mod filter;
pub mod pick;
pub mod team;

pub use filter::{
    CareerFilter, FilterState, NumericRange, PageRequest, PageSize, PickRange, RoundFilter,
    SortDirection, SortKey, SortSpec, TradeStatus, YearFilter,
};
pub use pick::{CareerStatus, DraftPick, ROUND_SIZE};
pub use team::{TeamDirectory, TeamEntry};
