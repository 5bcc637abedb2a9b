pub mod formatter;

pub use formatter::{
    format_breakdown, format_comparison_table, format_json, format_score, format_scored_table,
    format_strategy_list, should_use_colors, ScoredComparison,
};
