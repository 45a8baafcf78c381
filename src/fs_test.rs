use super::mock::MockFs;
use super::*;

#[test]
fn test_mock_fs_file_operations() {
    let fs = MockFs::new();

    fs.add_file("/project/kit.json", "{}");
    assert!(fs.exists(Path::new("/project/kit.json")));
    assert!(!fs.exists(Path::new("/project/missing.json")));

    let content = fs.read_to_string(Path::new("/project/kit.json")).unwrap();
    assert_eq!(content, "{}");

    fs.write(Path::new("/project/a.ts"), b"export {}").unwrap();
    assert_eq!(fs.content("/project/a.ts").as_deref(), Some("export {}"));
    assert_eq!(fs.written_paths(), vec!["/project/a.ts".to_string()]);
}

#[test]
fn test_mock_fs_write_failure() {
    let fs = MockFs::new();
    fs.fail_writes_to("/project/locked.ts");

    assert!(fs.write(Path::new("/project/locked.ts"), b"x").is_err());
    assert!(!fs.exists(Path::new("/project/locked.ts")));
}

#[test]
fn test_real_fs_write_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src/components/ui/button.tsx");

    RealFs.write(&path, b"export const Button = 1;").unwrap();

    assert!(RealFs.exists(&path));
    assert_eq!(
        RealFs.read_to_string(&path).unwrap(),
        "export const Button = 1;"
    );
}
