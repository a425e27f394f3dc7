//! Concurrent triggers on the same document

use std::sync::{Arc, Barrier};
use std::thread;

use pathmark_core::{HostEvent, SettingsResolver, Workspace};
use pathmark_test_utils::TestProject;
use pretty_assertions::assert_eq;

#[test]
fn concurrent_header_syncs_converge_to_one_header() {
    let project = TestProject::with_git("app");
    project.settings("autoInsertOnOpen = true\n");
    let file = project.write("src/main.rs", "fn main() {}\n");
    let resolver =
        SettingsResolver::new().with_global_config_dir(project.outside().join("global"));
    let workspace = Arc::new(Workspace::new(project.root(), resolver));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let workspace = Arc::clone(&workspace);
            let barrier = Arc::clone(&barrier);
            let file = file.clone();
            thread::spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    workspace.sync_header(&file, None, false).map(|_| ())
                } else {
                    workspace.on_event(HostEvent::Save, &file);
                    Ok(())
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(
        project.read("src/main.rs"),
        "// Path: src/main.rs\nfn main() {}\n"
    );
}
