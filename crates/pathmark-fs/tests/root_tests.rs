use assert_fs::prelude::*;
use pathmark_fs::{NormalizedPath, ProjectMarker, ProjectRoots, absolutize};
use pathmark_test_utils::TestProject;
use rstest::rstest;

#[rstest]
#[case(ProjectMarker::Git)]
#[case(ProjectMarker::Mercurial)]
#[case(ProjectMarker::Subversion)]
fn discovers_root_from_vcs_marker(#[case] marker: ProjectMarker) {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("proj").child(marker.as_str()).create_dir_all().unwrap();
    temp.child("proj/src/deep/mod.rs").touch().unwrap();

    let cwd = temp.path();
    let file = absolutize(&temp.path().join("proj/src/deep/mod.rs"), cwd);
    let root = ProjectRoots::discover().root_for(&file).unwrap();

    assert_eq!(root.name, "proj");
    assert_eq!(root.relative(&file).unwrap().as_str(), "src/deep/mod.rs");
}

#[test]
fn discovers_root_from_settings_file() {
    let project = TestProject::new("configured");
    project.settings("label = \"File\"\n");
    let file_path = project.write("lib/a.ts", "");

    let file = absolutize(&file_path, project.root());
    let root = ProjectRoots::discover().root_for(&file).unwrap();

    assert_eq!(root.path, NormalizedPath::new(project.root()));
}

#[test]
fn nearest_marker_wins_for_nested_projects() {
    let outer = TestProject::with_git("outer");
    outer.write("inner/.git/HEAD", "ref: refs/heads/main\n");
    let file_path = outer.write("inner/src/main.rs", "");

    let file = absolutize(&file_path, outer.root());
    let root = ProjectRoots::discover().root_for(&file).unwrap();

    assert_eq!(root.name, "inner");
}

#[test]
fn explicit_roots_override_discovery() {
    let project = TestProject::with_git("repo");
    let file_path = project.write("packages/web/src/index.ts", "");

    let roots = ProjectRoots::explicit(["packages/web"], project.root());
    let file = absolutize(&file_path, project.root());
    let root = roots.root_for(&file).unwrap();

    assert_eq!(root.name, "web");
    assert_eq!(root.relative(&file).unwrap().as_str(), "src/index.ts");
}

#[test]
fn file_outside_explicit_roots_has_no_root() {
    let project = TestProject::with_git("repo");
    let outside = project.outside().join("loose.txt");
    std::fs::write(&outside, "").unwrap();

    let roots = ProjectRoots::explicit([project.root()], project.root());
    let file = absolutize(&outside, project.root());

    assert!(roots.root_for(&file).is_none());
}

#[test]
fn absolutize_resolves_relative_paths_against_cwd() {
    let project = TestProject::new("cwd");
    project.write("src/a.rs", "");

    let file = absolutize(std::path::Path::new("src/../src/a.rs"), project.root());

    assert_eq!(file, NormalizedPath::new(project.root().join("src/a.rs")));
}

#[test]
fn absolutize_keeps_missing_tail_lexical() {
    let project = TestProject::new("missing");

    let file = absolutize(std::path::Path::new("not/yet/created.rs"), project.root());

    assert_eq!(
        file,
        NormalizedPath::new(project.root()).join("not/yet/created.rs")
    );
}

#[cfg(unix)]
#[test]
fn absolutize_below_missing_top_level_dir_stays_single_rooted() {
    let file = absolutize(
        std::path::Path::new("/pathmark-missing-top/app/main.rs"),
        std::path::Path::new("/"),
    );

    assert_eq!(file.as_str(), "/pathmark-missing-top/app/main.rs");
}
