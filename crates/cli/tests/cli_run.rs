//! Binary-level tests: run `notegraph` against a temp vault

use assert_cmd::Command;
use std::fs;
use std::path::Path;

fn write_vault(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

#[test]
fn renders_a_small_vault() {
    let vault = tempfile::tempdir().unwrap();
    write_vault(
        vault.path(),
        &[
            ("a/one.md", "# One\n\nLinks to [[two]].\n"),
            ("a/two.md", "# Two\n\nNo links here.\n"),
        ],
    );

    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("graph.html");

    Command::cargo_bin("notegraph")
        .unwrap()
        .arg(vault.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains(r#"{ id: "a/one.md", name: "One", category: 0, value:"#));
    assert!(page.contains(r#"{ source: "a/one.md", target: "two.md" }"#));
    assert!(page.contains(r#"{ name: "a" }"#));
}

#[test]
fn quotes_in_notes_reach_the_page_escaped() {
    let vault = tempfile::tempdir().unwrap();
    write_vault(vault.path(), &[("note.md", "# A \"quoted\" title\n")]);

    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("graph.html");

    Command::cargo_bin("notegraph")
        .unwrap()
        .arg(vault.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains(r#"name: "A \"quoted\" title""#));
}

#[test]
fn empty_vault_exits_cleanly_without_output() {
    let vault = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("graph.html");

    Command::cargo_bin("notegraph")
        .unwrap()
        .arg(vault.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(!output.exists());
}

#[test]
fn json_dump_is_written_when_requested() {
    let vault = tempfile::tempdir().unwrap();
    write_vault(vault.path(), &[("one.md", "# One\n")]);

    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("graph.html");
    let json = out_dir.path().join("graph.json");

    Command::cargo_bin("notegraph")
        .unwrap()
        .arg(vault.path())
        .arg("--output")
        .arg(&output)
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    let dump = fs::read_to_string(&json).unwrap();
    assert!(dump.contains("\"id\": \"one.md\""));
}

#[test]
fn unwritable_output_path_is_fatal() {
    let vault = tempfile::tempdir().unwrap();
    write_vault(vault.path(), &[("one.md", "# One\n")]);

    Command::cargo_bin("notegraph")
        .unwrap()
        .arg(vault.path())
        .arg("--output")
        .arg(vault.path().join("no-such-dir/graph.html"))
        .assert()
        .failure();
}
