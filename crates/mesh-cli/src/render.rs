//! Text rendering of trees, hierarchies and tables

use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use mesh_tree::{EnrichmentStat, HierarchyNode, PathTree, TableRow, Term};
use std::fmt::Write;

/// Column headers of the result table
pub const HEADER: [&str; 6] = [
    "Name",
    "Description",
    "Num. query",
    "Num. reference",
    "P-value",
    "Enrichment",
];

const INDENT: &str = "  ";

/// Small p-values switch to scientific notation
pub fn format_p_value(p_value: f64) -> String {
    if p_value != 0.0 && p_value.abs() < 1e-3 {
        format!("{:.2e}", p_value)
    } else {
        format!("{:.4}", p_value)
    }
}

fn format_stat(stat: &EnrichmentStat) -> String {
    format!(
        "p={} query={} reference={} enrichment={:.2}",
        format_p_value(stat.p_value),
        stat.query_mapped,
        stat.reference_mapped,
        stat.enrichment_score
    )
}

/// One line per node below the root, indented by depth
pub fn render_tree(tree: &PathTree<'_, EnrichmentStat>) -> String {
    let mut out = String::new();
    for (depth, id) in tree.walk().skip(1) {
        let node = tree.node(id);
        let indent = INDENT.repeat(depth - 1);
        let line = match node.payload() {
            Some(stat) => format!(
                "{}{} [{}] {}",
                indent,
                node.label().bold(),
                node.path(),
                format_stat(stat).dimmed()
            ),
            None => format!("{}{} [{}]", indent, node.label().cyan(), node.path()),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

/// The vocabulary hierarchy below `root`, one path per line
pub fn render_hierarchy(root: &HierarchyNode<'_>) -> String {
    let mut out = String::new();
    for branch in &root.branches {
        render_branch(&mut out, branch, 1);
    }
    out
}

fn render_branch(out: &mut String, node: &HierarchyNode<'_>, depth: usize) {
    let names: Vec<&str> = node.terms.iter().map(|t| t.name.as_str()).collect();
    let indent = INDENT.repeat(depth - 1);
    if names.is_empty() {
        let _ = writeln!(out, "{}{}", indent, node.path.to_string().cyan());
    } else {
        let _ = writeln!(out, "{}{} {}", indent, node.path.to_string().cyan(), names.join(", "));
    }
    for branch in &node.branches {
        render_branch(out, branch, depth + 1);
    }
}

/// Compound identifiers with the heading each is annotated with
pub fn render_annotations(rows: &[(&str, &Term)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["CID", "Name", "Tree numbers"]);

    for (cid, term) in rows {
        table.add_row(vec![cid.to_string(), term.name.clone(), term.ids.join(", ")]);
    }
    table
}

/// Result table with the standard columns
pub fn render_table(rows: &[TableRow<'_, EnrichmentStat>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(HEADER.to_vec());

    for row in rows {
        table.add_row(vec![
            row.name().to_string(),
            row.description().to_string(),
            row.payload.query_mapped.to_string(),
            row.payload.reference_mapped.to_string(),
            format_p_value(row.payload.p_value),
            format!("{:.2}", row.payload.enrichment_score),
        ]);
    }
    table
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mesh_tree::PathTreeIndex;

    fn stat(p_value: f64) -> EnrichmentStat {
        EnrichmentStat {
            query_mapped: 6,
            reference_mapped: 30,
            p_value,
            enrichment_score: 2.0,
        }
    }

    fn index() -> PathTreeIndex {
        PathTreeIndex::build(vec![
            Term::new("Aspirin", "Analgesic", ["D02.241.223", "D27.505.696"]),
            Term::new("Caffeine", "Stimulant", ["D02.241.511"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_format_p_value() {
        assert_eq!(format_p_value(0.05), "0.0500");
        assert_eq!(format_p_value(0.0), "0.0000");
        assert_eq!(format_p_value(0.00012), "1.20e-4");
    }

    #[test]
    fn test_render_tree_indents_by_depth() {
        colored::control::set_override(false);
        let index = index();
        let tree = index.project([("Aspirin", stat(0.01)), ("Caffeine", stat(0.2))]);
        let text = render_tree(&tree);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "D27 [D27]");
        assert_eq!(lines[1], "  505 [D27.505]");
        assert!(lines[2].starts_with("    Aspirin [D27.505.696] p=0.0100"));
        assert_eq!(lines[3], "D02 [D02]");
        assert!(lines.iter().any(|l| l.starts_with("    Caffeine [D02.241.511]")));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_render_hierarchy_depth_limit() {
        colored::control::set_override(false);
        let index = index();
        let text = render_hierarchy(&index.hierarchy().pruned(2));
        assert_eq!(text, "D02\n  D02.241\nD27\n  D27.505\n");

        let full = render_hierarchy(&index.hierarchy());
        assert!(full.contains("    D02.241.511 Caffeine\n"));
    }

    #[test]
    fn test_render_annotations() {
        let index = index();
        let aspirin = index.term("Aspirin").unwrap();
        let text = render_annotations(&[("2244", aspirin)]).to_string();
        assert!(text.contains("Tree numbers"));
        assert!(text.contains("2244"));
        assert!(text.contains("D02.241.223, D27.505.696"));
    }

    #[test]
    fn test_render_table_rows() {
        let index = index();
        let rows = index.table([("Caffeine", stat(0.2))]);
        let text = render_table(&rows).to_string();
        assert!(text.contains("Num. reference"));
        assert!(text.contains("Caffeine"));
        assert!(text.contains("0.2000"));
    }
}
