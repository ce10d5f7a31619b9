//! CLI integration tests driving the `ccman` binary against an isolated
//! home directory.

use ccman_testing::{TestWorld, fixtures};
use predicates::prelude::*;
use serde_json::json;

#[test]
fn list_shows_tracked_projects() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["list"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("/home/dev/alpha"))
        .stdout(predicate::str::contains("3 projects"));
}

#[test]
fn list_without_config_reports_empty() {
    let world = TestWorld::new();
    world
        .run(&["list"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("No projects tracked"));
}

#[test]
fn corrupt_config_fails_loudly() {
    let world = TestWorld::new().with_raw_config(b"{ definitely not json");
    world
        .run(&["list"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("Corrupt configuration file"));
    // The broken file is left in place for backup restore.
    assert_eq!(
        world.read_config_bytes().unwrap(),
        b"{ definitely not json"
    );
}

#[test]
fn remove_without_yes_is_a_dry_run() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["remove", "/home/dev/beta"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Would remove 1 project(s)"));

    let config = world.read_config().unwrap();
    assert!(config["projects"].get("/home/dev/beta").is_some());
    assert!(world.backup_files().is_empty());
}

#[test]
fn remove_with_yes_removes_and_backs_up() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    let before = world.read_config_bytes().unwrap();

    world
        .run(&["remove", "/home/dev/beta", "--yes"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Removed 1 project(s)"));

    let config = world.read_config().unwrap();
    assert!(config["projects"].get("/home/dev/beta").is_none());
    assert!(config["projects"].get("/home/dev/alpha").is_some());
    // Pass-through top-level fields survive the rewrite.
    assert_eq!(config["numStartups"], json!(57));
    assert_eq!(config["autoUpdaterStatus"], json!("enabled"));

    let backups = world.backup_files();
    assert_eq!(backups.len(), 1);
    let backup_bytes =
        std::fs::read(world.backup_dir().join(&backups[0])).unwrap();
    assert_eq!(backup_bytes, before);
}

#[test]
fn remove_empty_history_strategy_targets_only_stale() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["remove", "--empty-history", "--yes"])
        .unwrap()
        .success();

    let config = world.read_config().unwrap();
    assert!(config["projects"].get("/home/dev/stale").is_none());
    assert!(config["projects"].get("/home/dev/alpha").is_some());
    assert!(config["projects"].get("/home/dev/beta").is_some());
}

#[test]
fn history_retain_keeps_last_entries() {
    let world =
        TestWorld::new().with_config(fixtures::config_with_history("/home/dev/busy", 10));
    world
        .run(&["history", "retain", "3", "/home/dev/busy"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Dropped 7 history entries"));

    let config = world.read_config().unwrap();
    let history = config["projects"]["/home/dev/busy"]["history"]
        .as_array()
        .unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["display"], "cmd-7");
    assert_eq!(history[2]["display"], "cmd-9");
}

#[test]
fn history_clear_requires_target() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["history", "clear"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("Specify project paths or --all"));
}

#[test]
fn history_clear_all_empties_every_project() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["history", "clear", "--all"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Cleared 4 history entries"));

    let config = world.read_config().unwrap();
    for (_, project) in config["projects"].as_object().unwrap() {
        assert_eq!(project["history"].as_array().unwrap().len(), 0);
    }
}

#[test]
fn mcp_enable_moves_server_between_lists() {
    let world = TestWorld::new().with_config(json!({
        "projects": {
            "/home/dev/alpha": {
                "disabledMcpjsonServers": ["linear"]
            }
        }
    }));

    world
        .run(&["mcp", "enable", "/home/dev/alpha", "linear"])
        .unwrap()
        .success();

    let config = world.read_config().unwrap();
    let project = &config["projects"]["/home/dev/alpha"];
    assert_eq!(project["enabledMcpjsonServers"], json!(["linear"]));
    assert_eq!(project["disabledMcpjsonServers"], json!([]));
}

#[test]
fn mcp_add_and_remove_registration() {
    let world = TestWorld::new().with_config(fixtures::sample_config());

    world
        .run(&[
            "mcp",
            "add",
            "/home/dev/beta",
            "sqlite",
            r#"{"command": "sqlite-mcp", "args": ["--db", "dev.db"]}"#,
        ])
        .unwrap()
        .success();
    let config = world.read_config().unwrap();
    assert_eq!(
        config["projects"]["/home/dev/beta"]["mcpServers"]["sqlite"]["command"],
        json!("sqlite-mcp")
    );

    world
        .run(&["mcp", "remove", "/home/dev/beta", "sqlite"])
        .unwrap()
        .success();
    let config = world.read_config().unwrap();
    assert!(
        config["projects"]["/home/dev/beta"]["mcpServers"]
            .as_object()
            .unwrap()
            .is_empty()
    );
}

#[test]
fn mcp_add_rejects_non_object_config() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["mcp", "add", "/home/dev/beta", "sqlite", "[1,2]"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn backup_create_list_restore_cycle() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    let original = world.read_config_bytes().unwrap();

    world.run(&["backup", "create"]).unwrap().success();
    world
        .run(&["backup", "list"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("claude_"));

    // Mangle the live file, then restore the snapshot.
    world
        .run(&["remove", "/home/dev/alpha", "/home/dev/beta", "--yes"])
        .unwrap()
        .success();
    let backups = world.backup_files();
    let oldest = backups
        .iter()
        .min()
        .expect("at least one backup")
        .clone();

    world
        .run(&["backup", "restore", &oldest])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Restored"));
    assert_eq!(world.read_config_bytes().unwrap(), original);
}

#[test]
fn restore_unknown_backup_fails() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["backup", "restore", "claude_20200101_000000_000000.json"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("Backup not found"));
}

#[test]
fn no_backup_flag_skips_snapshots() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["--no-backup", "remove", "/home/dev/beta", "--yes"])
        .unwrap()
        .success();
    assert!(world.backup_files().is_empty());
}

#[test]
fn stats_reports_totals_and_account() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    world
        .run(&["stats"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Projects: 3"))
        .stdout(predicate::str::contains("History entries: 4"))
        .stdout(predicate::str::contains("dev@example.com"));
}

#[test]
fn add_then_show_round_trip() {
    let world = TestWorld::new().with_config(fixtures::sample_config());
    let project = world.temp_dir().join("new-project");
    std::fs::create_dir(&project).unwrap();
    let project = project.to_string_lossy().to_string();

    world.run(&["add", &project]).unwrap().success();
    world
        .run(&["show", &project])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Directory exists: yes"));
}
