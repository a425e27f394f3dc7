//! Scenarios across settings, root discovery, header sync and disk writes

use std::fs;

use pathmark_content::{CommentStyle, Document, HeaderSpec, synchronize};
use pathmark_core::{HeaderAction, HostEvent, SettingsLayer, SettingsResolver, Workspace};
use pathmark_test_utils::TestProject;
use pretty_assertions::assert_eq;

fn workspace(project: &TestProject) -> Workspace {
    let resolver =
        SettingsResolver::new().with_global_config_dir(project.outside().join("global"));
    Workspace::new(project.root(), resolver)
}

#[test]
fn rename_then_save_rewrites_only_the_header() {
    let project = TestProject::with_git("app");
    project.settings("autoInsertOnOpen = true\n");
    let body = "def main():\r\n    pass\r\n";
    let old = project.write("old/name.py", &format!("#!/usr/bin/env python3\r\n\r\n{body}"));
    let ws = workspace(&project);

    ws.on_event(HostEvent::Open, &old).unwrap();
    let new = project.root().join("new/name.py");
    fs::create_dir_all(new.parent().unwrap()).unwrap();
    fs::rename(&old, &new).unwrap();
    let saved = ws.on_event(HostEvent::Save, &new).unwrap();

    assert_eq!(saved.action, HeaderAction::Updated);
    assert_eq!(
        project.read("new/name.py"),
        format!("#!/usr/bin/env python3\r\n\r\n# Path: new/name.py\r\n{body}")
    );
}

#[test]
fn yaml_project_settings_are_honoured() {
    let project = TestProject::new("docs");
    fs::write(
        project.root().join(".pathmark.yaml"),
        "label: Source\nincludeWorkspaceFolder: true\n",
    )
    .unwrap();
    let file = project.write("guide/intro.md", "# Intro\n");

    workspace(&project).sync_header(&file, None, false).unwrap();

    assert_eq!(
        project.read("guide/intro.md"),
        "<!-- Source: docs/guide/intro.md -->\n# Intro\n"
    );
}

#[test]
fn toml_settings_win_over_json_at_same_root() {
    let project = TestProject::new("both");
    project.settings("label = \"Toml\"\n");
    fs::write(project.root().join(".pathmark.json"), r#"{"label": "Json"}"#).unwrap();
    let file = project.write("a.rs", "");

    workspace(&project).sync_header(&file, None, false).unwrap();

    assert_eq!(project.read("a.rs"), "// Toml: a.rs\n");
}

#[test]
fn global_settings_apply_below_project_settings() {
    let project = TestProject::with_git("app");
    let global = project.outside().join("global");
    fs::create_dir_all(&global).unwrap();
    fs::write(
        global.join("config.toml"),
        "label = \"Global\"\nincludeWorkspaceFolder = true\n",
    )
    .unwrap();
    project.settings("label = \"Project\"\n");
    let file = project.write("x.lua", "return 1\n");

    workspace(&project).sync_header(&file, None, false).unwrap();

    assert_eq!(project.read("x.lua"), "-- Project: app/x.lua\nreturn 1\n");
}

#[test]
fn nested_roots_pick_the_deepest() {
    let project = TestProject::with_git("outer");
    pathmark_test_utils::marker::fake_git_dir(&project.root().join("vendor/inner"));
    let file = project.write("vendor/inner/lib.c", "int x;\n");

    let resolved = workspace(&project).relative_path(&file).unwrap();

    assert_eq!(resolved.path_text(), "lib.c");
    assert_eq!(resolved.root.unwrap().name, "inner");
}

#[test]
fn cli_overrides_apply_last() {
    let project = TestProject::with_git("app");
    project.settings("label = \"Project\"\n");
    let file = project.write("s.css", "a {}\n");
    let resolver = SettingsResolver::new()
        .with_global_config_dir(project.outside().join("global"))
        .with_overrides(SettingsLayer {
            label: Some("Cli".into()),
            ..Default::default()
        });

    Workspace::new(project.root(), resolver)
        .sync_header(&file, None, false)
        .unwrap();

    assert_eq!(project.read("s.css"), "/* Cli: s.css */\na {}\n");
}

#[test]
fn disk_result_matches_pure_decision() {
    let project = TestProject::with_git("app");
    let source = "\n\n\nSELECT 1;\n";
    let file = project.write("db/q.sql", source);

    workspace(&project).sync_header(&file, None, false).unwrap();

    let doc = Document::new(source, "sql");
    let spec = HeaderSpec::new(CommentStyle::resolve("sql"), "Path", "db/q.sql");
    let edit = synchronize(&doc, &spec).unwrap().to_edit(&doc).unwrap();
    assert_eq!(project.read("db/q.sql"), edit.apply(source));
}
