use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `uitag` command isolated from the user's config directory.
fn uitag(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("uitag").unwrap();
    cmd.arg("--config").arg(config_dir.path());
    cmd.env_remove("UITAG_LOG");
    cmd
}

fn run_script(config_dir: &TempDir, script: &str) -> assert_cmd::assert::Assert {
    uitag(config_dir).arg("run").write_stdin(script).assert()
}

#[test]
fn test_types_lists_selectable_types() {
    let temp = TempDir::new().unwrap();
    uitag(&temp)
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("blocked"))
        .stdout(predicate::str::contains("required"))
        .stdout(predicate::str::contains("undefined").not());
}

#[test]
fn test_config_prints_defaults() {
    let temp = TempDir::new().unwrap();
    uitag(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""preassigned_type": "unassigned""#))
        .stdout(predicate::str::contains(r#""attribute_prefix": "data-""#));
}

#[test]
fn test_config_reads_file_and_debug_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("uitag.json"),
        r#"{ "preassigned_type": "related" }"#,
    )
    .unwrap();
    uitag(&temp)
        .arg("--debug")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""preassigned_type": "related""#))
        .stdout(predicate::str::contains(r#""debug": true"#));
}

#[test]
fn test_invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("uitag.json"),
        r#"{ "preassigned_type": "undefined" }"#,
    )
    .unwrap();
    uitag(&temp)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("preassigned_type"));
}

#[test]
fn test_assign_moves_tag_out_of_pool() {
    let temp = TempDir::new().unwrap();
    run_script(
        &temp,
        r##"
set tags ["#3","#10","#2"]
set target tags
id #3
type blocked
confirm
show
attrs
"##,
    )
    .success()
    .stdout(predicate::str::contains("3 tags available"))
    .stdout(predicate::str::contains("Assigned #3 as blocked"))
    .stdout(predicate::str::contains("pool     #10, #2"))
    .stdout(predicate::str::contains(r##"data-tags   = ["#10","#2"]"##));
}

#[test]
fn test_assigned_attribute_declares_tags() {
    let temp = TempDir::new().unwrap();
    run_script(
        &temp,
        r##"
set tags ["#7","#8"]
set target tags
set assigned ["#7"]
show
"##,
    )
    .success()
    .stdout(predicate::str::contains("pool     #8"))
    .stdout(predicate::str::contains("unassigned"))
    .stdout(predicate::str::contains("declared"));
}

#[test]
fn test_assigned_before_target_is_drawn_later() {
    let temp = TempDir::new().unwrap();
    run_script(
        &temp,
        r##"
set tags ["#7","#8"]
set assigned ["#7"]
attrs
set target tags
show
"##,
    )
    .success()
    .stdout(predicate::str::contains(r##"data-tags     = ["#8"]"##))
    .stdout(predicate::str::contains("Rendered 1 declared tags into 'tags'"))
    .stdout(predicate::str::contains("pool     #8"))
    .stdout(predicate::str::contains("declared"));
}

#[test]
fn test_unset_clears_candidate_and_pool() {
    let temp = TempDir::new().unwrap();
    run_script(
        &temp,
        r##"
set tags ["#1","#2"]
id #5
type blocked
unset id
unset tags
show
attrs
"##,
    )
    .success()
    .stdout(predicate::str::contains("pool     (empty)"))
    .stdout(predicate::str::contains("session  empty"))
    .stdout(predicate::str::contains("data-type = blocked"))
    .stdout(predicate::str::contains("data-tags").not())
    .stdout(predicate::str::contains("data-id").not());
}

#[test]
fn test_session_walks_through_states() {
    let temp = TempDir::new().unwrap();
    run_script(
        &temp,
        r##"
set target tags
id #5
show
type blocked
show
confirm
snapshot
"##,
    )
    .success()
    .stdout(predicate::str::contains("id entered (#5)"))
    .stdout(predicate::str::contains("ready (#5 as blocked)"))
    .stdout(predicate::str::contains(r#""state": "empty""#))
    .stdout(predicate::str::contains(r##""added": [
    "#5"
  ]"##));
}

#[test]
fn test_remove_restores_sorted_pool() {
    let temp = TempDir::new().unwrap();
    run_script(
        &temp,
        r##"
set target tags
set tags ["#2","#10"]
id #2
type related
confirm
remove #2
show
"##,
    )
    .success()
    .stdout(predicate::str::contains("Removed #2"))
    .stdout(predicate::str::contains("pool     #2, #10"));
}

#[test]
fn test_confirm_when_not_ready_warns() {
    let temp = TempDir::new().unwrap();
    run_script(&temp, "set target tags\nid #5\nconfirm\nshow\n")
        .success()
        .stdout(predicate::str::contains("Nothing to confirm"))
        .stdout(predicate::str::contains("session  empty"));
}

#[test]
fn test_missing_target_is_a_noop() {
    let temp = TempDir::new().unwrap();
    run_script(
        &temp,
        r##"
set tags ["#1"]
set target #sidebar
id #1
type blocked
confirm
show
"##,
    )
    .success()
    .stdout(predicate::str::contains("Target '#sidebar' not found"))
    .stdout(predicate::str::contains("pool     #1"))
    .stdout(predicate::str::contains("assigned (none)"));
}

#[test]
fn test_custom_target_container() {
    let temp = TempDir::new().unwrap();
    uitag(&temp)
        .args(["--target", "sidebar", "run"])
        .write_stdin("set target sidebar\nid #4\ntype depends\nconfirm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned #4 as depends"));
}

#[test]
fn test_malformed_tags_abort_with_line_number() {
    let temp = TempDir::new().unwrap();
    run_script(&temp, "set target tags\nset tags [#1\nshow\n")
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("tags"));
}

#[test]
fn test_removing_unassigned_tag_fails() {
    let temp = TempDir::new().unwrap();
    run_script(&temp, "set tags [\"#1\"]\nremove #1\n")
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("not assigned"));
}

#[test]
fn test_unknown_event_is_rejected_before_replay() {
    let temp = TempDir::new().unwrap();
    run_script(&temp, "// nothing yet\nset target tags\nassign #1\n")
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_script_from_file_with_debug_snapshots() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("flow.tag");
    fs::write(&script, "set target tags\nid #9\n").unwrap();

    let assert = uitag(&temp)
        .arg("--debug")
        .arg("run")
        .arg(&script)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches(r#""state":"#).count(), 2);
    assert!(stdout.contains(r#""state": "id_entered""#));
}

#[test]
fn test_unknown_type_warns_and_stays_unset() {
    let temp = TempDir::new().unwrap();
    run_script(&temp, "id #5\ntype blockd\nshow\n")
        .success()
        .stdout(predicate::str::contains("Unknown type 'blockd'"))
        .stdout(predicate::str::contains("id entered (#5)"));
}
