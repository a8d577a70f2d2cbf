use assert_fs::TempDir;
use assert_fs::prelude::*;
use res_move::{
    FsHost, MoveOperation, MoveUnitQueue, PathMapping, Project, SearchFlags, SelectedFile,
    Selection, build_units,
};

/// Selecting a bare qualified directory (`values-fr`) never triggers sibling
/// expansion; it is exactly one unit and moves as a whole tree.
#[test]
fn bare_directory_is_one_unit() {
    let temp = TempDir::new().unwrap();
    let base = temp.child("proj");
    base.create_dir_all().unwrap();

    temp.child("proj/app/res/values/strings.xml")
        .write_str("<resources/>")
        .unwrap();
    temp.child("proj/app/res/values-fr/strings.xml")
        .write_str("<resources/>")
        .unwrap();
    temp.child("proj/core/.keep").touch().unwrap();

    let dir = base.path().join("app/res/values-fr");
    let project = Project::discover(base.path()).unwrap();
    let selection = Selection::new(vec![SelectedFile::new(&dir, true)]);
    let current = selection.check_enablement(&project, Some("res")).unwrap();
    let target = project.module("core").unwrap();

    let units = build_units(&selection, '-');
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].len(), 1, "no sibling grouping in directory mode");
    assert_eq!(units[0].primary().unwrap().path(), dir);

    let mut host = FsHost::new(false);
    let report = MoveOperation::new(
        &mut host,
        PathMapping::new(current.root(), target.root()),
        MoveUnitQueue::from_units(units),
        SearchFlags::all(),
    )
    .run();

    assert!(report.is_clean());
    assert!(
        base.path()
            .join("core/res/values-fr/strings.xml")
            .is_file()
    );
    assert!(!dir.exists());
    assert!(
        base.path().join("app/res/values/strings.xml").is_file(),
        "the base values directory stays behind"
    );
}

/// Several selected directories keep their original order, one unit each.
#[test]
fn multiple_directories_one_unit_each_in_order() {
    let temp = TempDir::new().unwrap();
    let base = temp.child("proj");
    base.create_dir_all().unwrap();
    temp.child("proj/app/res/values-fr/strings.xml")
        .write_str("fr")
        .unwrap();
    temp.child("proj/app/res/values-de/strings.xml")
        .write_str("de")
        .unwrap();
    temp.child("proj/core/.keep").touch().unwrap();

    let fr = base.path().join("app/res/values-fr");
    let de = base.path().join("app/res/values-de");
    let selection = Selection::new(vec![
        SelectedFile::new(&fr, true),
        SelectedFile::new(&de, true),
    ]);

    let units = build_units(&selection, '-');
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].primary().unwrap().path(), fr);
    assert_eq!(units[1].primary().unwrap().path(), de);
}
