use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{field, init_ledger, ledger_lines, rtl, setup_ledger};

#[test]
fn test_init_creates_empty_ledger() {
    let (home, ledger) = setup_ledger("init");

    init_ledger(home.path(), &ledger);

    assert!(fs::metadata(&ledger).is_ok());
    assert!(ledger_lines(&ledger).is_empty());

    rtl(home.path())
        .args(["--ledger", &ledger, "status"])
        .assert()
        .success()
        .stdout(contains("The current overtime is 00h 00m"))
        .stdout(contains("Nothing logged today yet."));
}

#[test]
fn test_start_end_pair_records_worked_minutes() {
    let (home, ledger) = setup_ledger("pair");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "0700", "--day", "2026-10-12"])
        .assert()
        .success()
        .stdout(contains("First entry of 2026-10-12."));

    rtl(home.path())
        .args(["--ledger", &ledger, "end", "--at", "13:30", "--day", "2026-10-12"])
        .assert()
        .success()
        .stdout(contains("(390 min)"));

    let lines = ledger_lines(&ledger);
    assert_eq!(lines.len(), 2);
    assert_eq!(field(&lines[0], 4), "start");
    assert_eq!(field(&lines[1], 2), "1330");
    assert_eq!(field(&lines[1], 3), "390");
    assert_eq!(field(&lines[1], 4), "end");
}

#[test]
fn test_multiple_pairs_on_one_day() {
    let (home, ledger) = setup_ledger("multi");
    init_ledger(home.path(), &ledger);

    for (cmd, at) in [("start", "1020"), ("end", "1305"), ("start", "1315"), ("end", "1630")] {
        rtl(home.path())
            .args(["--ledger", &ledger, cmd, "--at", at, "--day", "2026-10-13"])
            .assert()
            .success();
    }

    let lines = ledger_lines(&ledger);
    assert_eq!(field(&lines[1], 3), "165");
    assert_eq!(field(&lines[3], 3), "195");
}

#[test]
fn test_end_without_start_is_zero() {
    let (home, ledger) = setup_ledger("bare_end");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "0745", "--day", "2026-10-10"])
        .assert()
        .success();

    rtl(home.path())
        .args(["--ledger", &ledger, "end", "--at", "1205", "--day", "2026-10-12"])
        .assert()
        .success()
        .stdout(contains("No start found for 2026-10-12"));

    let lines = ledger_lines(&ledger);
    assert_eq!(field(&lines[1], 3), "0");
}

#[test]
fn test_end_crossing_midnight_is_refused() {
    let (home, ledger) = setup_ledger("midnight");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "2200", "--day", "2026-10-14"])
        .assert()
        .success();

    rtl(home.path())
        .args(["--ledger", &ledger, "end", "--at", "0600", "--day", "2026-10-15"])
        .assert()
        .failure()
        .stderr(contains("previous day"));

    assert_eq!(ledger_lines(&ledger).len(), 1);
}

#[test]
fn test_add_and_sub_adjust_balance() {
    let (home, ledger) = setup_ledger("adjust");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "add", "90"])
        .assert()
        .success()
        .stdout(contains("Overtime adjusted by +90 min."));

    rtl(home.path())
        .args(["--ledger", &ledger, "sub", "30"])
        .assert()
        .success();

    // start carries the balance forward
    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "0800", "--day", "2026-10-12"])
        .assert()
        .success();

    let lines = ledger_lines(&ledger);
    assert_eq!(field(&lines[0], 5), "90");
    assert_eq!(field(&lines[1], 2), "-30");
    assert_eq!(field(&lines[1], 4), "overtime");
    assert_eq!(field(&lines[1], 5), "60");
    assert_eq!(field(&lines[2], 5), "60");

    rtl(home.path())
        .args(["--ledger", &ledger, "status"])
        .assert()
        .success()
        .stdout(contains("+01h 00m"));
}

#[test]
fn test_list_sorts_backdated_entries() {
    let (home, ledger) = setup_ledger("sorted");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "0800", "--day", "2026-10-14"])
        .assert()
        .success();
    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "0800", "--day", "2026-10-13"])
        .assert()
        .success();

    let output = rtl(home.path())
        .args(["--ledger", &ledger, "list"])
        .output()
        .expect("failed to list entries");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("2026-10-13").expect("backdated entry listed");
    let second = stdout.find("2026-10-14").expect("later entry listed");
    assert!(first < second, "entries must be sorted by timestamp:\n{stdout}");
}

#[test]
fn test_list_skips_corrupt_records() {
    let (home, ledger) = setup_ledger("corrupt");
    fs::write(
        &ledger,
        concat!(
            "good-1;2026-10-12T07:00:00Z;700;0;start;0;\n",
            "this is not a record\n",
            "\n",
            "good-2;2026-10-12T11:30:00Z;1330;390;end;0;\n",
        ),
    )
    .unwrap();

    rtl(home.path())
        .args(["--ledger", &ledger, "list"])
        .assert()
        .success()
        .stdout(contains("good-1").and(contains("good-2")))
        .stdout(contains("this is not").not());
}

#[test]
fn test_list_by_day() {
    let (home, ledger) = setup_ledger("by_day");
    init_ledger(home.path(), &ledger);

    for day in ["2026-10-12", "2026-10-13"] {
        rtl(home.path())
            .args(["--ledger", &ledger, "start", "--at", "0900", "--day", day])
            .assert()
            .success();
    }

    rtl(home.path())
        .args(["--ledger", &ledger, "list", "--day", "2026-10-13"])
        .assert()
        .success()
        .stdout(contains("2026-10-13").and(contains("2026-10-12").not()));
}

#[test]
fn test_close_day_with_daily_target_policy() {
    let (home, ledger) = setup_ledger("close");
    let conf_dir = home.path().join(".rtimeledger");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("rtimeledger.conf"),
        format!("ledger: {ledger}\nday_close_policy: daily_target\ndaily_target: 8h\n"),
    )
    .unwrap();

    rtl(home.path())
        .args(["start", "--at", "0800", "--day", "2026-10-12"])
        .assert()
        .success();
    rtl(home.path())
        .args(["end", "--at", "1700", "--day", "2026-10-12"])
        .assert()
        .success();

    rtl(home.path())
        .args(["close", "--day", "2026-10-12"])
        .assert()
        .success()
        .stdout(contains("overtime adjusted by +60 min"));

    let lines = ledger_lines(&ledger);
    assert_eq!(lines.len(), 3);
    assert_eq!(field(&lines[2], 4), "overtime");
    assert_eq!(field(&lines[2], 5), "60");
}

#[test]
fn test_close_day_without_policy_is_a_no_op() {
    let (home, ledger) = setup_ledger("close_none");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "0800", "--day", "2026-10-12"])
        .assert()
        .success();

    rtl(home.path())
        .args(["--ledger", &ledger, "close", "--day", "2026-10-12"])
        .assert()
        .success()
        .stdout(contains("Nothing to close for 2026-10-12."));

    assert_eq!(ledger_lines(&ledger).len(), 1);
}

#[test]
fn test_export_csv_and_json() {
    let (home, ledger) = setup_ledger("export");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "0700", "--day", "2026-10-12"])
        .assert()
        .success();
    rtl(home.path())
        .args(["--ledger", &ledger, "end", "--at", "1330", "--day", "2026-10-12"])
        .assert()
        .success();

    let csv_out = home.path().join("out.csv");
    rtl(home.path())
        .args([
            "--ledger",
            &ledger,
            "export",
            "--format",
            "csv",
            "--file",
            csv_out.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let csv = fs::read_to_string(&csv_out).unwrap();
    assert!(csv.starts_with("id,date,time,kind,entry_time,worked_time,over_time"));
    assert!(csv.contains(",2026-10-12,13:30,end,1330,390,0"));

    let json_out = home.path().join("out.json");
    rtl(home.path())
        .args([
            "--ledger",
            &ledger,
            "export",
            "--format",
            "json",
            "--file",
            json_out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_prompt_session_from_stdin() {
    let (home, ledger) = setup_ledger("prompt");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "prompt"])
        .write_stdin("a\n15\nn\nstart\n0900\n2026-10-12\nq\n")
        .assert()
        .success()
        .stdout(contains("Overtime adjusted by +15 min."))
        .stdout(contains("Logged start at 09:00 on 2026-10-12."))
        .stdout(contains("Bye."));

    let lines = ledger_lines(&ledger);
    assert_eq!(lines.len(), 2);
    assert_eq!(field(&lines[1], 5), "15");
}

#[test]
fn test_invalid_time_is_rejected() {
    let (home, ledger) = setup_ledger("bad_time");
    init_ledger(home.path(), &ledger);

    rtl(home.path())
        .args(["--ledger", &ledger, "start", "--at", "2575"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rtl(home.path())
        .args(["--ledger", &ledger, "end", "--day", "someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert!(ledger_lines(&ledger).is_empty());
}
