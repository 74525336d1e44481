//! Report rendering: institution summary and department listings.
//!
//! Everything here returns `String`s; printing (and coloring) stays at
//! the CLI edge.

use itertools::Itertools;

use crate::domain::{DepartmentRoster, Money, OrgTree, Role};

const BANNER: &str =
    "==============================================================";

/// Format a signed amount as `₱` currency with thousands separators.
///
/// The sign leads the currency symbol: `-₱55,000.00`.
pub fn format_money(amount: Money) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .join(",");
    format!("{sign}₱{grouped}.{frac_part}")
}

fn title_block(title: &str) -> String {
    let padding = (60usize.saturating_sub(title.len())) / 2;
    format!("{BANNER}\n{}{title}\n{BANNER}\n", " ".repeat(padding))
}

/// Render one department's role-partitioned component listing.
pub fn render_roster(roster: &DepartmentRoster) -> String {
    let mut out = String::new();
    out.push_str(&format!("• Department: {}\n", roster.name));
    out.push_str(&format!("• Number of Students: {}\n", roster.student_count));
    out.push_str(&format!("• Budget: {}\n", format_money(roster.budget)));
    out.push('\n');
    out.push_str("• Components:\n");
    for teacher in &roster.teachers {
        out.push_str(&format!("  • Teacher: {}\n", teacher.name));
        out.push_str(&format!("    - Subject: {}\n", teacher.subject));
        out.push_str(&format!("    - Salary: {}\n", format_money(teacher.salary)));
        out.push('\n');
    }
    for student in &roster.students {
        out.push_str(&format!("  • Student: {}\n", student.name));
        out.push_str(&format!("    - ID: {}\n", student.id));
        out.push_str(&format!(
            "    - Tuition Fee: {}\n",
            format_money(student.tuition_fee)
        ));
        out.push('\n');
    }
    out
}

/// Render the full institution report: summary, then one section per
/// college under the root, each with its department listings.
pub fn render_report(tree: &OrgTree) -> String {
    let mut out = String::new();
    let Some(root) = tree.root() else {
        return out;
    };
    let Some(root_node) = tree.get_node(root) else {
        return out;
    };

    out.push_str(&title_block("UNIVERSITY STRUCTURE"));
    out.push('\n');
    out.push_str(&format!("• University: {}\n", root_node.data.name));
    out.push_str(&format!(
        "• Number of Students: {}\n",
        tree.student_count(root)
    ));
    out.push_str(&format!("• Budget: {}\n", format_money(tree.budget(root))));
    out.push('\n');

    for &child in &root_node.children {
        let Some(child_node) = tree.get_node(child) else {
            continue;
        };
        if child_node.data.role() != Role::College {
            continue;
        }
        out.push_str(&title_block(&child_node.data.name.to_uppercase()));
        out.push('\n');
        out.push_str(&format!(
            "• Number of Students: {}\n",
            tree.student_count(child)
        ));
        out.push_str(&format!(
            "• Budget: {}\n",
            format_money(tree.budget(child))
        ));
        out.push('\n');
        for roster in tree.department_rosters(child) {
            out.push_str(BANNER);
            out.push('\n');
            out.push_str(&render_roster(&roster));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrgUnit;

    #[test]
    fn given_amounts_when_formatting_then_currency_layout_matches() {
        assert_eq!(format_money(0.0), "₱0.00");
        assert_eq!(format_money(-55_000.0), "-₱55,000.00");
        assert_eq!(format_money(1_234_567.5), "₱1,234,567.50");
        assert_eq!(format_money(95_000.0), "₱95,000.00");
        assert_eq!(format_money(999.999), "₱1,000.00");
    }

    #[test]
    fn given_interleaved_department_when_rendering_then_teachers_listed_first() {
        let mut tree = OrgTree::new();
        let root = tree.insert_node(OrgUnit::college("U"), None);
        let college = tree.insert_node(OrgUnit::college("C"), Some(root));
        let dept = tree.insert_node(OrgUnit::department("D"), Some(college));
        tree.insert_node(OrgUnit::student("S1", "ID1", 100.0), Some(dept));
        tree.insert_node(OrgUnit::teacher("T1", "Math", 200.0), Some(dept));

        let report = render_report(&tree);
        let teacher_pos = report.find("• Teacher: T1").unwrap();
        let student_pos = report.find("• Student: S1").unwrap();
        assert!(teacher_pos < student_pos);
        assert!(report.contains("• University: U"));
        assert!(report.contains("• Budget: ₱100.00"));
    }

    #[test]
    fn given_empty_tree_when_rendering_then_empty_string() {
        let tree = OrgTree::new();
        assert_eq!(render_report(&tree), "");
    }
}
