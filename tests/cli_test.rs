use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_calc_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("profit-share"));
    cmd.arg("calc").arg("tests/fixtures/jobs.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "#,customer,job_number,vets,per_vet,total_vets,reps,per_rep,total_reps,ride_alongs,per_ride_along,total_ride_along,combined,profit",
        ))
        .stdout(predicate::str::contains(
            "1,Smith,J-100,2,\"$2,200.00\",\"$4,400.00\",,,,,,,\"$4,400.00\",\"$3,600.00\"",
        ))
        .stdout(predicate::str::contains(
            "2,Lopez,J-101,1,\"$1,170.00\",\"$1,170.00\",1,$570.00,$570.00,2,$250.00,$500.00,\"$1,740.00\",\"$5,760.00\"",
        ))
        .stdout(predicate::str::contains(
            "TOTAL,,,,,\"$5,570.00\",,,$570.00,,,$500.00,\"$6,140.00\",\"$9,360.00\"",
        ));

    Ok(())
}

#[test]
fn test_cli_summary() {
    let mut cmd = Command::new(cargo_bin!("profit-share"));
    cmd.arg("summary").arg("tests/fixtures/jobs.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Job 1 (Smith / J-100): after fees $8,000.00, margin 88.9%, vet rate 55%, rep rate 40%",
        ))
        .stdout(predicate::str::contains("margin 40.0%, vet rate 45%, rep rate 30%"))
        .stdout(predicate::str::contains(
            "house fee $1,000.00, dealer fee $0.00, credit card fee $0.00, ride along per person $0.00",
        ))
        .stdout(predicate::str::contains(
            "house fee $0.00, dealer fee $800.00, credit card fee $60.00, ride along per person $200.00",
        ))
        .stdout(predicate::str::contains("TOTAL VET PAYOUT: $5,570.00"))
        .stdout(predicate::str::contains("COMBINED PAYOUT: $6,140.00"))
        .stdout(predicate::str::contains("TOTAL PROFIT: $9,360.00"));
}

#[test]
fn test_cli_missing_input_file() {
    let mut cmd = Command::new(cargo_bin!("profit-share"));
    cmd.arg("calc").arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}

#[test]
fn test_cli_totals_match_library() {
    use profit_share::domain::format::format_currency;
    use profit_share::domain::payout::aggregate;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("random_jobs.csv");
    let jobs = common::random_jobs(20);
    common::write_jobs_csv(&input, &jobs).expect("Failed to write jobs CSV");

    let output = Command::new(cargo_bin!("profit-share"))
        .arg("calc")
        .arg(&input)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), jobs.len() + 1);

    let total = records.last().unwrap();
    let expected = aggregate(&jobs);
    assert_eq!(&total[0], "TOTAL");
    assert_eq!(&total[5], format_currency(expected.total_vet_payout));
    assert_eq!(&total[8], format_currency(expected.total_rep_payout));
    assert_eq!(&total[11], format_currency(expected.total_ride_along_payout));
    assert_eq!(&total[12], format_currency(expected.total_combined_payout()));
    assert_eq!(&total[13], format_currency(expected.total_profit()));
}
