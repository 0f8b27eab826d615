////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Parse trace diagnostic rendering.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::span::Span;
use crate::trace::Outcome;
use crate::trace::TraceNode;
use crate::trace::TraceTree;


////////////////////////////////////////////////////////////////////////////////
// Trace rendering.
////////////////////////////////////////////////////////////////////////////////

/// Renders the given trace as a multi-line diagnostic pinned to the input
/// line containing the failure.
///
/// The affected input line is shown first. Below it, one marker row is drawn
/// per trace node, children before parents, leftmost first: successful spans
/// as `\--/` runs (`-` when one character wide, `|` when zero-width), failure
/// points as `V`. The node's outcome and label are printed in a column
/// aligned past the longest span. The output is deterministic for a given
/// tree; the exact glyph layout is not otherwise part of the contract.
pub fn render_trace(tree: &TraceTree, text: &str) -> String {
    let focus = focus_pos(tree);
    let lines = line_spans(text);
    let (line_idx, line_start, line_end) = focus_line(&lines, focus);
    let line_text: String = text.chars()
        .skip(line_start)
        .take(line_end - line_start)
        .collect();

    // Lay out one marker row per node, post order, root excluded.
    let mut rows: Vec<(usize, String, &'static str, String)> = Vec::new();
    tree.visit_post_order(tree.root(), &mut |id, node| {
        if id == tree.root() {
            return;
        }
        if let Some((col, glyphs)) = marker(node, line_start, line_end) {
            rows.push((col, glyphs, outcome_text(node.outcome),
                node.label.to_string()));
        }
    });

    let label_col = rows.iter()
        .map(|(col, glyphs, _, _)| col + glyphs.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    out.push_str(&format!("--> {}:{}\n",
        line_idx + 1,
        focus.saturating_sub(line_start) + 1));
    out.push_str(&format!(" | {}\n", line_text));
    for (col, glyphs, outcome, label) in rows {
        let mut row = String::new();
        row.push_str(&" ".repeat(col));
        row.push_str(&glyphs);
        let width = col + glyphs.chars().count();
        row.push_str(&" ".repeat(label_col - width));
        row.push_str(outcome);
        row.push(' ');
        row.push_str(&label);
        out.push_str(&format!(" | {}\n", row));
    }
    out
}

/// Returns the focus position of the trace: the furthest extent reached by a
/// failing node, or the root's extent if nothing failed.
fn focus_pos(tree: &TraceTree) -> usize {
    let mut focus = None;
    tree.visit_post_order(tree.root(), &mut |_, node| {
        if node.outcome == Outcome::Failure {
            let end = node.end.unwrap_or(node.start);
            if focus.map_or(true, |f| end > f) {
                focus = Some(end);
            }
        }
    });
    focus.unwrap_or_else(|| {
        let root = tree.node(tree.root());
        root.end.unwrap_or(root.start)
    })
}

/// Returns the `(start, end)` character offsets of every line in the text,
/// excluding line terminators.
fn line_spans(text: &str) -> Vec<(usize, usize)> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for c in text.chars() {
        if c == '\n' {
            lines.push((start, offset));
            start = offset + 1;
        }
        offset += 1;
    }
    lines.push((start, offset));
    lines
}

/// Returns the index and bounds of the line containing the given offset.
fn focus_line(lines: &[(usize, usize)], pos: usize)
    -> (usize, usize, usize)
{
    for (idx, &(start, end)) in lines.iter().enumerate() {
        if pos <= end {
            return (idx, start, end);
        }
    }
    let idx = lines.len() - 1;
    let (start, end) = lines[idx];
    (idx, start, end)
}

/// Returns the marker column and glyphs for the given node, clamped to the
/// focus line, or None if the node lies entirely outside it.
fn marker(node: &TraceNode, line_start: usize, line_end: usize)
    -> Option<(usize, String)>
{
    match node.outcome {
        Outcome::Failure => {
            let at = node.end.unwrap_or(node.start);
            if at < line_start || at > line_end {
                return None;
            }
            Some((at - line_start, "V".to_string()))
        },
        _ => {
            let end = node.end.unwrap_or(node.start);
            if end < line_start || node.start > line_end {
                return None;
            }
            let clamped = Span::new(
                node.start.max(line_start),
                end.min(line_end));
            let glyphs = if clamped.is_empty() {
                "|".to_string()
            } else if clamped.len() == 1 {
                "-".to_string()
            } else {
                let mut g = String::from("\\");
                g.push_str(&"-".repeat(clamped.len() - 2));
                g.push('/');
                g
            };
            Some((clamped.start - line_start, glyphs))
        },
    }
}

/// Returns the rendered outcome of a node.
fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Pending => "pending",
        Outcome::Success => "success",
        Outcome::Failure => "failure",
    }
}
