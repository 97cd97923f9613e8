// tests/report_output.rs
use chrono::NaiveDate;
use ultra_profit_rs::report::FixedClock;
use ultra_profit_rs::{Clock, MiningProfile, ReportGenerator, best_coin};

const EXPECTED: &str = include_str!("fixtures/builtin_report.txt");

fn clock_at(h: u32, m: u32, s: u32) -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap(),
    )
}

#[test]
fn builtin_report_matches_fixture() {
    let profile = MiningProfile::builtin();
    let report = ReportGenerator::new(&profile)
        .render(&clock_at(12, 0, 0))
        .unwrap();
    assert_eq!(report, EXPECTED);
}

#[test]
fn repeated_runs_differ_only_in_timestamp() {
    let profile = MiningProfile::builtin();
    let generator = ReportGenerator::new(&profile);

    let first = generator.render(&clock_at(8, 30, 0)).unwrap();
    let second = generator.render(&clock_at(23, 59, 59)).unwrap();

    let first_lines: Vec<&str> = first.lines().collect();
    let second_lines: Vec<&str> = second.lines().collect();
    assert_eq!(first_lines.len(), second_lines.len());

    let (first_last, first_body) = first_lines.split_last().unwrap();
    let (second_last, second_body) = second_lines.split_last().unwrap();
    assert_eq!(first_body, second_body);
    assert_eq!(*first_last, "🕐 Calculated: 2026-10-15 08:30:00");
    assert_eq!(*second_last, "🕐 Calculated: 2026-10-15 23:59:59");
}

#[test]
fn body_is_byte_identical_across_calls() {
    let profile = MiningProfile::builtin();
    let generator = ReportGenerator::new(&profile);

    let mut a = Vec::new();
    let mut b = Vec::new();
    generator.write_body(&mut a).unwrap();
    generator.write_body(&mut b).unwrap();
    assert_eq!(a, b);
    assert!(EXPECTED.starts_with(std::str::from_utf8(&a).unwrap()));

    let saved = format!("saved ${:.0}/year", generator.electricity_cost().yearly);
    assert!(EXPECTED.contains(&saved));
}

#[test]
fn best_marker_and_conclusion() {
    let profile = MiningProfile::builtin();
    assert_eq!(best_coin(&profile.coins).unwrap().symbol, "ERG");

    let report = ReportGenerator::new(&profile)
        .render(&clock_at(0, 0, 0))
        .unwrap();
    let marked: Vec<&str> = report.lines().filter(|l| l.starts_with("🏆 BEST")).collect();
    assert_eq!(marked, vec!["🏆 BEST ERG (35 MH/s):"]);
    assert!(report.contains("   Normal Daily Cost: $0.101\n"));
    assert!(report.contains(
        "🎉 CONCLUSION:\n\
         =============\n\
         \x20  • Your i7-1065G7 can generate $150-200/month\n\
         \x20  • With FREE electricity: 100% of mining revenue = profit\n\
         \x20  • 24/7 mining maximizes earnings\n\
         \x20  • Ultra-optimization: +300% performance boost\n\
         \x20  • Real money mining is now ACTIVE!\n"
    ));
}

#[test]
fn system_clock_line_has_expected_shape() {
    let stamp = ultra_profit_rs::SystemClock.timestamp();
    let bytes = stamp.as_bytes();
    assert_eq!(bytes.len(), 19);
    assert_eq!(bytes[4], b'-');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
}
