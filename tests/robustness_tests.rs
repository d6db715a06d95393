use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_garbage_amounts_count_as_zero() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "customerName, cashCheck, laborMaterial, numVets, numReps").unwrap();
    writeln!(csv, "Valid, 1000, 0, 1, 0").unwrap();
    writeln!(csv, "Garbage, not_a_number, ???, many, ").unwrap();
    writeln!(csv, "Partial, 12., , 1.").unwrap();

    let mut cmd = Command::new(cargo_bin!("profit-share"));
    cmd.arg("calc").arg(csv.path());

    cmd.assert()
        .success()
        // 100% margin, one vet at 55%
        .stdout(predicate::str::contains(
            "1,Valid,N/A,1,$550.00,$550.00,,,,,,,$550.00,$450.00",
        ))
        .stdout(predicate::str::contains(
            "2,Garbage,N/A,,,,,,,,,,$0.00,$0.00",
        ))
        .stdout(predicate::str::contains(
            "3,Partial,N/A,1,$6.60,$6.60,,,,,,,$6.60,$5.40",
        ));
}

#[test]
fn test_zero_headcount_pays_nobody() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "jobNumber,cashCheck,rideAlong,rideAlongBonus,numRideAlongs").unwrap();
    writeln!(csv, "J-9,5000,300,50,0").unwrap();

    let mut cmd = Command::new(cargo_bin!("profit-share"));
    cmd.arg("calc").arg(csv.path());

    cmd.assert()
        .success()
        // ride-along is still charged against profit, but nobody is paid per head
        .stdout(predicate::str::contains(
            "1,N/A,J-9,,,,,,,,,,$0.00,\"$4,650.00\"",
        ));
}

#[test]
fn test_unrelated_csv_is_rejected() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "type, client, tx, amount").unwrap();
    writeln!(csv, "deposit, 1, 1, 1.0").unwrap();

    let mut cmd = Command::new(cargo_bin!("profit-share"));
    cmd.arg("calc").arg(csv.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("CSV header names no job fields"));
}

#[test]
fn test_huge_amounts_do_not_crash() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "contractAmount,houseFeePercent,cashCheck,laborMaterial,numVets,rideAlong,numRideAlongs").unwrap();
    writeln!(csv, "1e28,100,,,,,").unwrap();
    writeln!(csv, ",,79228162514264337593543950335,-1,,,").unwrap();
    writeln!(csv, ",,1e27,,1e-20,,").unwrap();
    writeln!(csv, ",,,,,1e20,1e-10").unwrap();

    for command in ["calc", "summary"] {
        Command::new(cargo_bin!("profit-share"))
            .arg(command)
            .arg(csv.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("TOTAL"));
    }
}

#[test]
fn test_list_with_corrupt_store_prints_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("reports.json");
    std::fs::write(&store, "not json").unwrap();

    Command::new(cargo_bin!("profit-share"))
        .env_remove("PROFIT_SHARE_DB_PATH")
        .env_remove("RUST_LOG")
        .arg("--store")
        .arg(&store)
        .arg("list")
        .assert()
        .success()
        .stdout("key,name,date,jobs\n")
        .stderr(predicate::str::contains("could not open report store"));
}
