use assert_cmd::Command;
use std::fs;

fn motifscan() -> Command {
    Command::cargo_bin("motifscan").unwrap()
}

#[test]
fn literal_reports_one_based() {
    motifscan()
        .arg("literal")
        .write_stdin("XXFLAREYY\n")
        .assert()
        .success()
        .stdout("The length was: 9\nFound it at 3\n");
}

#[test]
fn literal_without_match_prints_only_length() {
    motifscan()
        .arg("literal")
        .write_stdin("MKVLAAGGQ\n")
        .assert()
        .success()
        .stdout("The length was: 9\n");
}

#[test]
fn literal_rejects_short_sequence() {
    motifscan()
        .arg("literal")
        .write_stdin("AB\n")
        .assert()
        .code(1)
        .stdout("The length was: 2\n");
}

#[test]
fn penta_reads_two_tokens() {
    motifscan()
        .arg("penta")
        .write_stdin("MKFLAREQQFLARE\nFLARE\n")
        .assert()
        .success()
        .stdout("The length was: 14\nFound it at 3\nFound it at 10\n");
}

#[test]
fn penta_rejects_wrong_motif_length() {
    motifscan()
        .arg("penta")
        .write_stdin("MKFLAREQQ FLAR")
        .assert()
        .code(1)
        .stdout("The length was: 9\n");
}

#[test]
fn penta_requires_motif() {
    motifscan().arg("penta").write_stdin("MKFLAREQQ").assert().code(1).stdout("");
}

#[test]
fn peptide_overlapping_zero_based() {
    motifscan()
        .args(["--zero-based", "peptide"])
        .write_stdin("AAAA AA")
        .assert()
        .success()
        .stdout("The length was: 4\nFound it at 0\nFound it at 1\nFound it at 2\n");
}

#[test]
fn peptide_rejects_longer_motif() {
    motifscan().arg("peptide").write_stdin("ABC ABCD").assert().code(1);
}

#[test]
fn gc_content() {
    motifscan()
        .arg("gc")
        .write_stdin("GCAT\n")
        .assert()
        .success()
        .stdout("The length was: 4\nThe GC content is: 50.000000\n");
}

#[test]
fn net_charge() {
    motifscan()
        .arg("charge")
        .write_stdin("MKKRDE\n")
        .assert()
        .success()
        .stdout("The length was: 6\nThe total charge is: 1\n");
}

#[test]
fn suffix() {
    motifscan()
        .arg("suffix")
        .write_stdin("MKVEAA")
        .assert()
        .success()
        .stdout("The length was: 6\nEnds with EAA\n");
    motifscan()
        .arg("suffix")
        .write_stdin("MKVEAG")
        .assert()
        .success()
        .stdout("The length was: 6\nDoesn't end with EAA\n");
    motifscan().arg("suffix").write_stdin("AA").assert().code(1).stdout("");
}

#[test]
fn input_ceiling() {
    let long = "K".repeat(1001);
    motifscan().arg("charge").write_stdin(long.clone()).assert().code(1);
    motifscan()
        .args(["--no-limit", "charge"])
        .write_stdin(long)
        .assert()
        .success()
        .stdout("The length was: 1001\nThe total charge is: 1001\n");
}

#[test]
fn literal_rejects_four_letter_motif() {
    let assert = motifscan()
        .args(["literal", "--motif", "FLAR"])
        .write_stdin("XXFLAREYY\n")
        .assert()
        .code(1)
        .stdout("The length was: 9\n");
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("the motif has length 4 but exactly 5 is required"));
}

#[test]
fn motif_ceiling() {
    let assert = motifscan()
        .args(["--max-motif-len", "3", "peptide"])
        .write_stdin("MKFLARE FLARE\n")
        .assert()
        .code(1)
        .stdout("");
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("the motif has length 5, exceeding the limit of 3"));
    motifscan()
        .args(["--max-motif-len", "5", "peptide"])
        .write_stdin("MKFLARE FLARE\n")
        .assert()
        .success()
        .stdout("The length was: 7\nFound it at 3\n");
}

#[test]
fn orfs_from_file() {
    let path = std::env::temp_dir().join(format!("motifscan-orfs-{}.txt", std::process::id()));
    fs::write(&path, "ccatgg\ncctaacc\n").unwrap();

    motifscan()
        .arg("orfs")
        .arg(&path)
        .assert()
        .success()
        .stdout(format!(
            "Processing file: {}\n\
             Sequence type: DNA\n\n\
             Original: 1 sequences, longest = 9\n\
             Complement: 0 sequences, longest = 0\n\n\
             Best: Original\n\n\
             Start: 3, End: 11, Sequence length: 9, Codons length: 3\n\
             ATG GCC TAA\n\n",
            path.display()
        ));

    fs::remove_file(&path).unwrap();
}

#[test]
fn orfs_without_frames_fails() {
    let path = std::env::temp_dir().join(format!("motifscan-no-orfs-{}.txt", std::process::id()));
    fs::write(&path, "GGGCCCAAA\n").unwrap();

    motifscan()
        .arg("orfs")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(format!(
            "Processing file: {}\n\
             Sequence type: DNA\n\n\
             Original: 0 sequences, longest = 0\n\
             Complement: 0 sequences, longest = 0\n\n\
             No subsequences found.\n",
            path.display()
        ));

    fs::remove_file(&path).unwrap();
}

#[test]
fn orfs_rna_has_no_strand_choice() {
    let path = std::env::temp_dir().join(format!("motifscan-rna-orfs-{}.txt", std::process::id()));
    fs::write(&path, "augaaauga\n").unwrap();

    let assert = motifscan().arg("orfs").arg(&path).assert().success().stdout(format!(
        "Processing file: {}\n\
         Sequence type: RNA\n\n\
         Start: 1, End: 9, Sequence length: 9, Codons length: 3\n\
         AUG AAA UGA\n\n",
        path.display()
    ));
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(!stdout.contains("Best:"));

    fs::remove_file(&path).unwrap();
}
