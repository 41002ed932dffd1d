use core::time::Duration;
use std::ffi::OsString;
use std::path::Path;

use super::{percentile, Bencher, Mode, Opts, Output, OutputKind, Report};
use crate::error::ErrorKind;
use crate::totals::Totals;

fn parse(args: &[&str]) -> anyhow::Result<Opts> {
    Opts::parse_from(args.iter().map(OsString::from))
}

#[test]
fn test_parse_defaults() {
    let opts = parse(&[]).unwrap();
    assert_eq!(opts.mode, Mode::Default);
    assert_eq!(opts.path(), None);
    assert_eq!(opts.input_name(), "<stdin>");
    assert_eq!(opts.level(), log::LevelFilter::Info);
}

#[test]
fn test_parse_path_and_flags() {
    let opts = parse(&["--verbose", "schematic.txt", "--bench", "--count", "3"]).unwrap();
    assert_eq!(opts.mode, Mode::Bench);
    assert_eq!(opts.path(), Some(Path::new("schematic.txt")));
    assert_eq!(opts.count, Some(3));
    assert_eq!(opts.level(), log::LevelFilter::Debug);

    let opts = parse(&["--trace", "-"]).unwrap();
    assert_eq!(opts.path(), None);
    assert_eq!(opts.level(), log::LevelFilter::Trace);

    let opts = parse(&["--", "--odd-name"]).unwrap();
    assert_eq!(opts.path(), Some(Path::new("--odd-name")));
}

#[test]
fn test_parse_errors() {
    assert!(parse(&["--unknown"]).is_err());
    assert!(parse(&["a.txt", "b.txt"]).is_err());
    assert!(parse(&["--bench", "--bench"]).is_err());
    assert!(parse(&["--count"]).is_err());
    assert!(parse(&["--warmup", "soon"]).is_err());
}

#[test]
fn test_output_normal() {
    let mut o = Output::new(Vec::new(), OutputKind::Normal);
    o.totals(&Totals::new(4361, 467835)).unwrap();

    let out = String::from_utf8(o.into_inner()).unwrap();
    assert_eq!(out, "Sum of part numbers: 4361\nSum of gear ratios: 467835\n");
}

#[test]
fn test_output_json() {
    let mut o = Output::new(Vec::new(), OutputKind::Json);
    o.totals(&Totals::new(4361, 467835)).unwrap();
    o.info("hello").unwrap();

    let out = String::from_utf8(o.into_inner()).unwrap();
    let mut lines = out.lines();

    let totals: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(totals["type"], "totals");
    assert_eq!(totals["data"]["numbers"], 4361);
    assert_eq!(totals["data"]["gear_ratios"], 467835);

    let message: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(message["type"], "message");
    assert_eq!(message["data"]["kind"], "info");
    assert_eq!(message["data"]["output"], "hello");
}

#[test]
fn test_percentiles() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
    assert_eq!(percentile(&samples, 5000), Duration::from_millis(51));
    assert_eq!(percentile(&samples, 9900), Duration::from_millis(100));
    assert_eq!(percentile(&[], 5000), Duration::default());

    let report = Report::from_sorted(&samples);
    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.avg, Duration::from_micros(50500));
}

#[test]
fn test_bencher_runs_count_times() {
    let opts = parse(&["--bench", "--warmup", "0", "--count", "4"]).unwrap();
    let mut o = Output::new(Vec::new(), OutputKind::Json);
    let mut runs = 0;

    Bencher::new()
        .iter(&opts, &mut o, || {
            runs += 1;
            crate::scan(crate::Lines::new(b"1*2\n"))
        })
        .unwrap();

    assert_eq!(runs, 4);

    let out = String::from_utf8(o.into_inner()).unwrap();
    let lines = out
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .collect::<Vec<_>>();

    let totals = lines.iter().find(|line| line["type"] == "totals").unwrap();
    assert_eq!(totals["data"]["numbers"], 3);
    assert_eq!(totals["data"]["gear_ratios"], 2);

    let report = lines.iter().find(|line| line["type"] == "report").unwrap();
    assert_eq!(report["data"]["count"], 4);
}

#[test]
fn test_bencher_reports_disagreement() {
    let opts = parse(&["--warmup", "0", "--count", "2"]).unwrap();
    let mut o = Output::new(Vec::new(), OutputKind::Normal);
    let mut n = 0;

    Bencher::new()
        .iter(&opts, &mut o, || {
            n += 1;
            Ok::<_, crate::Error>(Totals::new(n, 0))
        })
        .unwrap_err();

    let out = String::from_utf8(o.into_inner()).unwrap();
    assert!(out.starts_with("info: "));
    assert!(out.contains("error: "));
}

#[test]
fn test_bencher_returns_scan_error() {
    let opts = parse(&["--warmup", "0", "--count", "2"]).unwrap();
    let mut o = Output::new(Vec::new(), OutputKind::Json);

    let error = Bencher::new()
        .iter(&opts, &mut o, || crate::scan(crate::Lines::new(b"..\n...\n")))
        .unwrap_err();

    let error = error.downcast::<crate::Error>().unwrap();
    assert!(matches!(
        error.into_kind(),
        ErrorKind::InconsistentWidth {
            expected: 2,
            actual: 3
        }
    ));

    let out = String::from_utf8(o.into_inner()).unwrap();
    let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
    assert_eq!(last["type"], "message");
    assert_eq!(last["data"]["kind"], "error");
}

#[test]
fn test_error_context() {
    let error = crate::scan(crate::Lines::new(b"..\n...\n")).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InconsistentWidth { .. }));

    let error = super::error_context("input.txt", error);
    assert_eq!(error.to_string(), "input.txt:2:0");
    assert_eq!(
        format!("{:#}", error),
        "input.txt:2:0: inconsistent width; expected 2, but got 3 (at 2:0)"
    );
}
