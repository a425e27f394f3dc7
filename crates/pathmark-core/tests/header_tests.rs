//! Header synchronization on disk

mod common;

use common::{workspace, workspace_with};
use pathmark_core::{HeaderAction, SettingsLayer};
use pathmark_test_utils::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn inserts_then_reports_unchanged() {
    let project = TestProject::with_git("app");
    let file = project.write("src/app.py", "import os\n");
    let ws = workspace(&project);

    let first = ws.sync_header(&file, None, false).unwrap();
    let second = ws.sync_header(&file, None, false).unwrap();

    assert_eq!(first.action, HeaderAction::Inserted);
    assert_eq!(second.action, HeaderAction::Unchanged);
    assert_eq!(project.read("src/app.py"), "# Path: src/app.py\nimport os\n");
}

#[test]
fn moved_file_gets_updated_header() {
    let project = TestProject::with_git("site");
    let file = project.write(
        "new/loc.html",
        "<!-- Path: old/loc.html -->\n<p>hello</p>\n",
    );

    let outcome = workspace(&project).sync_header(&file, None, false).unwrap();

    assert_eq!(outcome.action, HeaderAction::Updated);
    assert_eq!(outcome.path, "new/loc.html");
    assert_eq!(
        project.read("new/loc.html"),
        "<!-- Path: new/loc.html -->\n<p>hello</p>\n"
    );
}

#[test]
fn dry_run_leaves_file_untouched() {
    let project = TestProject::with_git("app");
    let file = project.write("main.go", "package main\n");

    let outcome = workspace(&project).sync_header(&file, None, true).unwrap();

    assert_eq!(outcome.action, HeaderAction::Inserted);
    assert!(outcome.diff.unwrap().contains("+// Path: main.go"));
    assert_eq!(project.read("main.go"), "package main\n");
}

#[test]
fn language_override_selects_comment_style() {
    let project = TestProject::with_git("app");
    let file = project.write("query.txt", "SELECT 1;\n");

    workspace(&project)
        .sync_header(&file, Some("sql"), false)
        .unwrap();

    assert_eq!(project.read("query.txt"), "-- Path: query.txt\nSELECT 1;\n");
}

#[rstest]
#[case(Some("File"), "# File: tool.py\n")]
#[case(Some("   "), "# Path: tool.py\n")]
#[case(None, "# Path: tool.py\n")]
fn label_setting_is_applied(#[case] label: Option<&str>, #[case] expected: &str) {
    let project = TestProject::with_git("app");
    let file = project.write("tool.py", "");
    let overrides = SettingsLayer {
        label: label.map(str::to_string),
        ..Default::default()
    };

    workspace_with(&project, overrides)
        .sync_header(&file, None, false)
        .unwrap();

    assert_eq!(project.read("tool.py"), expected);
}

#[test]
fn include_workspace_folder_prefixes_header() {
    let project = TestProject::with_git("app");
    project.settings("includeWorkspaceFolder = true\n");
    let file = project.write("src/lib.rs", "pub fn f() {}\n");

    workspace(&project).sync_header(&file, None, false).unwrap();

    assert_eq!(
        project.read("src/lib.rs"),
        "// Path: app/src/lib.rs\npub fn f() {}\n"
    );
}

#[test]
fn file_outside_root_gets_absolute_header() {
    let project = TestProject::new("loose");
    let file = project.write("script.sh", "#!/bin/sh\necho hi\n");

    workspace(&project).sync_header(&file, None, false).unwrap();

    assert_eq!(
        project.read("script.sh"),
        format!("#!/bin/sh\n# Path: {}\necho hi\n", file.display())
    );
}

#[test]
fn missing_file_is_an_error() {
    let project = TestProject::with_git("app");
    let file = project.root().join("absent.py");

    assert!(workspace(&project).sync_header(&file, None, false).is_err());
}

#[test]
fn bom_file_keeps_bom_first_and_single_header() {
    let project = TestProject::with_git("app");
    let file = project.write("bin/run.py", "\u{feff}#!/usr/bin/env python3\nrun()\n");
    let ws = workspace(&project);

    let first = ws.sync_header(&file, None, false).unwrap();
    let second = ws.sync_header(&file, None, false).unwrap();

    assert_eq!(first.action, HeaderAction::Inserted);
    assert_eq!(second.action, HeaderAction::Unchanged);
    assert_eq!(
        project.read("bin/run.py"),
        "\u{feff}#!/usr/bin/env python3\n# Path: bin/run.py\nrun()\n"
    );
}
