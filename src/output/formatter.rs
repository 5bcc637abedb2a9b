use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::scoring::{is_comparable, ScoreBreakdown, Strategy};

/// A comparison with its calculated score for display
#[derive(Debug, Clone, Serialize)]
pub struct ScoredComparison {
    pub name: String,
    pub strategy: Strategy,
    pub score: f64,
    pub comparable: bool,
}

impl ScoredComparison {
    pub fn new(name: String, strategy: Strategy, score: f64) -> Self {
        Self {
            name,
            strategy,
            score,
            comparable: is_comparable(score),
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals, or "n/a" for the no-comparison sentinel
pub fn format_score(score: f64) -> String {
    if is_comparable(score) {
        format!("{:.2}", score)
    } else {
        "n/a".to_string()
    }
}

/// Right-align a score in `width` columns, colored by how close the match is
fn colored_score(score: f64, width: usize, use_colors: bool) -> String {
    let text = format!("{:>width$}", format_score(score), width = width);
    if !use_colors {
        return text;
    }
    if !is_comparable(score) {
        text.dimmed().to_string()
    } else if score <= 0.2 {
        text.green().to_string()
    } else if score >= 0.8 {
        text.red().to_string()
    } else {
        text.yellow().to_string()
    }
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}

/// Format scored comparisons as rows: Name, Strategy, Score.
/// No headers.
pub fn format_scored_table(rows: &[ScoredComparison], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No comparisons found.".to_string();
    }

    let width = name_width(rows.iter().map(|r| r.name.as_str()));
    let strategy_width = name_width(Strategy::ALL.iter().map(|s| s.name()));

    rows.iter()
        .map(|row| {
            let strategy = format!("{:<w$}", row.strategy.name(), w = strategy_width);
            let strategy = if use_colors {
                strategy.cyan().to_string()
            } else {
                strategy
            };
            format!(
                "{:<width$}  {}  {}",
                row.name,
                strategy,
                colored_score(row.score, 4, use_colors),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format each comparison under every strategy, one column per strategy.
/// Scores are in `Strategy::ALL` order.
pub fn format_comparison_table(rows: &[(String, [f64; 3])], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No comparisons found.".to_string();
    }

    let width = name_width(rows.iter().map(|(name, _)| name.as_str()));
    let columns: Vec<usize> = Strategy::ALL.iter().map(|s| s.name().len()).collect();

    let header = {
        let names: Vec<String> = Strategy::ALL
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        let line = format!("{:<width$}  {}", "", names.join("  "), width = width);
        if use_colors {
            line.bold().to_string()
        } else {
            line
        }
    };

    let body = rows.iter().map(|(name, scores)| {
        let cells: Vec<String> = scores
            .iter()
            .zip(&columns)
            .map(|(score, w)| colored_score(*score, *w, use_colors))
            .collect();
        format!("{:<width$}  {}", name, cells.join("  "), width = width)
    });

    std::iter::once(header)
        .chain(body)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format scored comparisons as a pretty-printed JSON array
pub fn format_json(rows: &[ScoredComparison]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("Failed to serialize scores as JSON")
}

/// Multi-line description of how a score was reached (for verbose mode)
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut lines = vec![format!(
        "  {}: {} points of {} available",
        breakdown.strategy, breakdown.points, breakdown.available
    )];

    match breakdown.ratio {
        Some(ratio) => lines.push(format!("  Ratio: {:.4}", ratio)),
        None => lines.push("  No meaningful comparison".to_string()),
    }

    for adjustment in &breakdown.adjustments {
        lines.push(format!(
            "  Bounded ({}): {:.2} -> {:.2}",
            adjustment.label, adjustment.before, adjustment.after
        ));
    }

    lines.push(format!("  Score: {}", format_score(breakdown.score)));
    lines.join("\n")
}

/// List every strategy with its description
pub fn format_strategy_list(use_colors: bool) -> String {
    let width = name_width(Strategy::ALL.iter().map(|s| s.name()));
    Strategy::ALL
        .iter()
        .map(|s| {
            let name = format!("{:<width$}", s.name(), width = width);
            let name = if use_colors {
                name.bold().to_string()
            } else {
                name
            };
            format!("{}  {}", name, s.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
