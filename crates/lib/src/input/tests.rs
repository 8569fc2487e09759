use super::Input;

#[test]
fn test_missing_file_is_empty() {
    let input = Input::load("this/path/does/not/exist.txt");
    assert!(input.is_empty());
    assert_eq!(input.len(), 0);
    assert_eq!(input.lines().count(), 0);
}

#[test]
fn test_line_terminators_are_stripped() {
    let input = Input::from_text("a\r\nb\nc");
    assert_eq!(input.lines().collect::<Vec<_>>(), ["a", "b", "c"]);

    let input = Input::from_text("a\nb\n");
    assert_eq!(input.lines().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn test_blank_lines_are_kept() {
    let input = Input::from_text("seeds: 1\n\nmap:\n");
    assert_eq!(input.lines().collect::<Vec<_>>(), ["seeds: 1", "", "map:"]);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let input = Input::from_bytes(b"ok\n\xff1\n");
    assert_eq!(input.get(0), Some("ok"));
    assert_eq!(input.get(1), Some("\u{FFFD}1"));
    assert_eq!(input.get(2), None);
}

#[test]
fn test_numbered_lines() {
    let input = Input::from_lines(["x", "y"]);
    assert_eq!(input.numbered().collect::<Vec<_>>(), [(1, "x"), (2, "y")]);
}

#[test]
fn test_load_reads_file() {
    let path = std::env::temp_dir().join(format!("lib-input-{}.txt", std::process::id()));
    std::fs::write(&path, "1abc2\npqr3stu8vwx\n").unwrap();
    let input = Input::load(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(input.lines().collect::<Vec<_>>(), ["1abc2", "pqr3stu8vwx"]);
}
