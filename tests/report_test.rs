//! Tests for the report rendering layer

use campus::report::{format_money, render_report, render_roster};
use campus::util::testing;
use campus::load_roster;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// Money Formatting
// ============================================================

#[test]
fn given_reference_amounts_when_formatting_then_currency_matches() {
    assert_eq!(format_money(-55_000.0), "-₱55,000.00");
    assert_eq!(format_money(-225_000.0), "-₱225,000.00");
    assert_eq!(format_money(95_000.0), "₱95,000.00");
    assert_eq!(format_money(0.0), "₱0.00");
}

#[test]
fn given_fractional_amounts_when_formatting_then_two_decimals() {
    assert_eq!(format_money(1_234_567.5), "₱1,234,567.50");
    assert_eq!(format_money(-0.25), "-₱0.25");
    assert_eq!(format_money(100.0), "₱100.00");
}

// ============================================================
// Full Report
// ============================================================

#[test]
fn given_university_roster_when_rendering_then_summary_and_sections_present() {
    let tree = load_roster("tests/resources/rosters/university.toml").unwrap();
    let report = render_report(&tree);

    assert!(report.contains("UNIVERSITY STRUCTURE"));
    assert!(report.contains("• University: New Era University"));
    assert!(report.contains("• Number of Students: 12"));
    assert!(report.contains("• Budget: -₱225,000.00"));

    // per-college section banners are uppercased
    assert!(report.contains("COLLEGE OF ARTS AND SCIENCES"));
    assert!(report.contains("COLLEGE OF INFORMATICS AND COMPUTING STUDIES"));

    // component rows
    assert!(report.contains("  • Teacher: Dr. Maria Santos"));
    assert!(report.contains("    - Subject: Molecular Biology"));
    assert!(report.contains("    - Salary: ₱95,000.00"));
    assert!(report.contains("  • Student: Angela Reyes"));
    assert!(report.contains("    - ID: BIO001"));
    assert!(report.contains("    - Tuition Fee: ₱85,000.00"));
}

#[test]
fn given_university_roster_when_rendering_then_teachers_precede_students_per_department() {
    let tree = load_roster("tests/resources/rosters/university.toml").unwrap();
    let root = tree.root().unwrap();

    for roster in tree.department_rosters(root) {
        let rendered = render_roster(&roster);
        let first_teacher = rendered.find("• Teacher:");
        let first_student = rendered.find("• Student:");
        assert!(first_teacher.unwrap() < first_student.unwrap());
    }
}

#[test]
fn given_rendered_report_when_rendering_again_then_identical() {
    let tree = load_roster("tests/resources/rosters/university.toml").unwrap();
    assert_eq!(render_report(&tree), render_report(&tree));
}
