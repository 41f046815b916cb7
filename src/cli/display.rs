// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the facetrank CLI.
//!
//! Box drawing, ranked-result tables, diagnostics callouts - the little
//! touches that make CLI output feel polished. Respects `NO_COLOR` for the
//! purists and non-TTY detection for pipelines, where everything degrades
//! to plain text.

use facetrank::{Diagnostics, RankOutcome, RankedOutcome};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print section header: ┌─ LABEL ─────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}┐{}",
        if use_colors() { GRAY } else { "" },
        label_part,
        "─".repeat(remaining),
        if use_colors() { RESET } else { "" }
    );
}

/// Print a content line: │ content         │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let border = if use_colors() { GRAY } else { "" };
    let reset = if use_colors() { RESET } else { "" };
    println!("{}│{}{}{}{}│{}", border, reset, content, " ".repeat(pad), border, reset);
}

/// Print section footer: └─────────────────┘
pub fn section_bottom() {
    let border = if use_colors() { GRAY } else { "" };
    let reset = if use_colors() { RESET } else { "" };
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTCOME RENDERING
// ═══════════════════════════════════════════════════════════════════════════

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:>8.2}", p),
        None => format!("{:>8}", "-"),
    }
}

fn format_delta(delta: f64) -> String {
    if delta.is_finite() {
        format!("{:>7.2}", delta)
    } else {
        format!("{:>7}", "∞")
    }
}

/// Render the ranked table: rank, sku, name, price, score, matches, Δbudget.
fn render_ranked(ranked: &RankedOutcome) {
    section_top(&format!(
        "RESULTS {}/{}",
        ranked.items.len(),
        ranked.total
    ));

    row(&styled(
        &[DIM],
        &format!(
            " {:>3}  {:<10} {:<24} {:>8}  {:>5}  {:>5}  {:>7}",
            "#", "SKU", "NAME", "PRICE", "SCORE", "FACET", "ΔBUDGET"
        ),
    ));

    for (position, (item, trace)) in ranked.items.iter().zip(&ranked.debug).enumerate() {
        let mut name = item.name.clone();
        if name.len() > 24 {
            name.truncate(21);
            name.push_str("...");
        }
        row(&format!(
            " {:>3}  {:<10} {:<24} {}  {:>5.1}  {:>2}/{:<2}  {}",
            position + 1,
            item.sku,
            name,
            format_price(item.price),
            trace.score,
            trace.matched_count,
            trace.total_asked,
            format_delta(trace.budget_delta),
        ));
    }

    if ranked.budget_relaxed {
        row("");
        row(&styled(
            &[YELLOW],
            " ⚠ budget relaxed: nothing fit the budget, showing closest matches",
        ));
    }

    section_bottom();
}

/// Render request diagnostics, if any.
pub fn render_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_clean() {
        return;
    }

    section_top("DIAGNOSTICS");
    for key in &diagnostics.unknown_facet_keys {
        row(&styled(
            &[YELLOW],
            &format!(" unknown facet: '{}'", key),
        ));
    }
    for (key, values) in &diagnostics.unknown_facet_values {
        row(&styled(
            &[YELLOW],
            &format!(" unknown {} value(s): {}", key, values.join(", ")),
        ));
    }
    section_bottom();
}

/// Render a full outcome to stdout.
pub fn render_outcome(outcome: &RankOutcome) {
    match outcome {
        RankOutcome::Ranked(ranked) => {
            render_ranked(ranked);
            render_diagnostics(&ranked.diagnostics);
        }
        RankOutcome::NoMatch(no_match) => {
            section_top("NO MATCH");
            row(&styled(
                &[RED],
                " no catalog item satisfied the requested criteria",
            ));
            if no_match.budget_relaxed {
                row(&styled(
                    &[DIM],
                    " (budget was relaxed and it still was not enough)",
                ));
            }
            section_bottom();
            render_diagnostics(&no_match.diagnostics);
        }
        RankOutcome::EmptyCatalog(empty) => {
            section_top("EMPTY CATALOG");
            row(&styled(&[RED], " the catalog contains no items"));
            section_bottom();
            render_diagnostics(&empty.diagnostics);
        }
    }
}

/// One `label: value` summary line for the inspect command.
pub fn summary_line(label: &str, value: &str) {
    row(&format!(" {:<18} {}", styled(&[GREEN], label), value));
}
