//! Analysis logic for profile reports
//!
//! This module contains pure business logic for ranking profile items,
//! separated from the TUI presentation layer.

pub mod ranking;

pub use ranking::{
    cumulative_rescale, format_percentage, percentage_of_total, rank_items, RankedItem, Ranking,
    DEFAULT_TOP_ITEMS,
};
