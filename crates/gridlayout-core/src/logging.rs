//! Logging and debugging facilities for gridlayout.
//!
//! This module provides:
//! - Target and span names for filtering the `tracing` output per subsystem
//! - [`TreeFormatter`] for rendering a view hierarchy as indented text
//! - [`PerfSpan`] for timing measure/layout passes
//!
//! # Tracing Integration
//!
//! gridlayout is instrumented with the `tracing` crate. Install a subscriber
//! in your application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("gridlayout::grid=debug")
//!     .init();
//! ```

use std::fmt::Write as FmtWrite;

/// Span names used throughout gridlayout for tracing.
pub mod span_names {
    /// Measure pass of a container.
    pub const MEASURE: &str = "gridlayout::measure";
    /// Layout (positioning) pass of a container.
    pub const LAYOUT: &str = "gridlayout::layout";
    /// Paint pass of a container.
    pub const DRAW: &str = "gridlayout::draw";
    /// Child rebuild after an adapter notification.
    pub const REBUILD: &str = "gridlayout::rebuild";
}

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "gridlayout_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "gridlayout_core::signal";
    /// Grid container target.
    pub const GRID: &str = "gridlayout::grid";
    /// Data adapter target.
    pub const ADAPTER: &str = "gridlayout::adapter";
    /// Configuration loading target.
    pub const CONFIG: &str = "gridlayout::config";
    /// Performance spans.
    pub const PERF: &str = "gridlayout::perf";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed lines.
    Compact,
}

/// A node of a debug tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DebugNode {
    /// The text printed for this node.
    pub label: String,
    /// Child nodes, printed below and indented.
    pub children: Vec<DebugNode>,
}

impl DebugNode {
    /// Create a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append a child (builder pattern).
    pub fn with_child(mut self, child: DebugNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Renders [`DebugNode`] trees as text.
#[derive(Debug, Clone)]
pub struct TreeFormatter {
    style: TreeStyle,
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new(TreeStyle::default())
    }
}

impl TreeFormatter {
    /// Create a formatter with the given style.
    pub fn new(style: TreeStyle) -> Self {
        Self { style }
    }

    /// Format a whole tree.
    pub fn format(&self, root: &DebugNode) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{}", root.label);
        self.format_children(root, "", &mut output);
        output
    }

    fn format_children(&self, node: &DebugNode, indent: &str, output: &mut String) {
        let (tee, corner, bar) = match self.style {
            TreeStyle::Ascii => ("+-- ", "`-- ", "|   "),
            TreeStyle::Unicode => ("\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} ", "\u{2502}   "),
            TreeStyle::Compact => ("- ", "- ", "  "),
        };

        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { corner } else { tee };
            let _ = writeln!(output, "{indent}{connector}{}", child.label);

            let next_indent = if is_last {
                format!("{indent}    ")
            } else {
                format!("{indent}{bar}")
            };
            self.format_children(child, &next_indent, output);
        }
    }
}

/// A guard that keeps a tracing span entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::debug_span!(target: "gridlayout::perf", "perf", operation);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DebugNode {
        DebugNode::new("GridView")
            .with_child(DebugNode::new("child 0").with_child(DebugNode::new("frame")))
            .with_child(DebugNode::new("child 1"))
    }

    #[test]
    fn test_tree_format_unicode() {
        let output = TreeFormatter::default().format(&sample());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "GridView");
        assert_eq!(lines[1], "\u{251c}\u{2500}\u{2500} child 0");
        assert_eq!(lines[2], "\u{2502}   \u{2514}\u{2500}\u{2500} frame");
        assert_eq!(lines[3], "\u{2514}\u{2500}\u{2500} child 1");
    }

    #[test]
    fn test_tree_format_ascii() {
        let output = TreeFormatter::new(TreeStyle::Ascii).format(&sample());
        assert!(output.contains("+-- child 0"));
        assert!(output.contains("|   `-- frame"));
        assert!(output.contains("`-- child 1"));
    }

    #[test]
    fn test_empty_tree() {
        let output = TreeFormatter::new(TreeStyle::Compact).format(&DebugNode::new("root"));
        assert_eq!(output, "root\n");
    }

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new("test_operation");
    }
}
