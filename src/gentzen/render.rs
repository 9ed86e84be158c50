//! ASCII layout of sequent proof trees
//!
//! Column widths are computed bottom-up (a node needs room for its own
//! text and for its children side by side), then text positions are
//! assigned top-down with any slack split evenly across the child
//! columns. Each node with children is followed by a horizontal rule
//! spanning its text and its children's texts.

use super::engine::ProofNode;

const COLUMN_GAP: usize = 4;

/// Render the proof tree rooted at `root`
pub fn render_tree(root: &ProofNode) -> String {
    let mut canvas: Vec<String> = Vec::new();
    paint(root, 0, width(root), 0, &mut canvas);
    let lines: Vec<&str> = canvas.iter().map(|line| line.trim_end()).collect();
    lines.join("\n")
}

/// Minimum column width for the subtree rooted at `node`
fn width(node: &ProofNode) -> usize {
    let own = node.sequent.to_string().len();
    if node.children.is_empty() {
        own
    } else {
        let children: usize = node.children.iter().map(width).sum::<usize>()
            + COLUMN_GAP * (node.children.len() - 1);
        own.max(children)
    }
}

/// Append `text` to `row`, padding with spaces up to `column`
///
/// Painting proceeds depth-first left to right, so writes to any row
/// arrive in increasing column order.
fn write_at(canvas: &mut Vec<String>, row: usize, column: usize, text: &str) {
    while canvas.len() <= row {
        canvas.push(String::new());
    }
    let line = &mut canvas[row];
    if line.len() < column {
        let padding = column - line.len();
        line.push_str(&" ".repeat(padding));
    }
    line.push_str(text);
}

/// Paint the subtree into its `[start, start + span)` column, returning
/// the extent of the node's own text
fn paint(
    node: &ProofNode,
    start: usize,
    span: usize,
    depth: usize,
    canvas: &mut Vec<String>,
) -> (usize, usize) {
    let text = node.sequent.to_string();
    let text_start = start + (span - text.len()) / 2;
    write_at(canvas, depth * 2, text_start, &text);
    let extent = (text_start, text_start + text.len());

    if node.children.is_empty() {
        return extent;
    }

    let natural: usize = node.children.iter().map(width).sum::<usize>()
        + COLUMN_GAP * (node.children.len() - 1);
    let slack = span - natural;
    let share = slack / node.children.len();
    let remainder = slack % node.children.len();

    let mut cursor = start;
    let (mut low, mut high) = extent;
    for (index, child) in node.children.iter().enumerate() {
        let child_span = width(child) + share + usize::from(index < remainder);
        let (child_low, child_high) = paint(child, cursor, child_span, depth + 1, canvas);
        low = low.min(child_low);
        high = high.max(child_high);
        cursor += child_span + COLUMN_GAP;
    }

    write_at(canvas, depth * 2 + 1, low, &"-".repeat(high - low));
    extent
}
