use chrono::{Datelike, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const TASKS: &str = r#"[{"prefix":"wk","task":"Work"},{"prefix":"hm","task":"Home"}]"#;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

struct Output {
    ok: bool,
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

/// Command for the binary inside `dir`. HOME and the XDG config dir point
/// into `dir` so a developer's own config never leaks in.
fn noter_command(dir: &Path, args: &[&str], envs: &[(&str, &Path)]) -> Command {
    let bin = std::env::var("CARGO_BIN_EXE_noter").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("noter.exe");
        } else {
            path.push("noter");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .current_dir(dir)
        .env_remove("NOTES_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NOTER_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (k, v) in envs {
        cmd.env(k, v);
    }
    cmd
}

fn run_noter(dir: &Path, args: &[&str], input: &str, envs: &[(&str, &Path)]) -> Output {
    run_noter_bytes(dir, args, input.as_bytes(), envs)
}

/// Run the binary with stdin fed from `input`
fn run_noter_bytes(dir: &Path, args: &[&str], input: &[u8], envs: &[(&str, &Path)]) -> Output {
    let mut child = noter_command(dir, args, envs).spawn().expect("run noter");
    // The child may exit before reading (fatal config errors), so a broken
    // pipe here is expected
    let _ = child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input);
    let output = child.wait_with_output().expect("wait noter");
    Output {
        ok: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

fn today_file(root: &Path) -> PathBuf {
    let today = Local::now().date_naive();
    root.join(format!("{}.{}", today.month(), today.year()))
        .join(format!("{}.{}.{}.txt", today.day(), today.month(), today.year()))
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|c| c.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

#[test]
fn saves_note_to_todays_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);

    let out = run_noter(dir.path(), &[], "wk fixed the bug\n", &[]);
    assert!(out.ok, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Available tasks:"));
    assert!(out.stdout.contains("Usage: [PREFIX] [NOTE]"));
    assert!(out.stdout.contains("Enter note: "));
    assert!(out.stdout.contains("Note saved: ["));

    let lines = read_lines(&today_file(&dir.path().join("notes")));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('['));
    assert!(lines[0].ends_with("] [Work] fixed the bug"), "line: {}", lines[0]);
}

#[test]
fn notes_dir_env_sets_root() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);
    let root = dir.path().join("elsewhere");

    let out = run_noter(dir.path(), &[], "hm water plants\n", &[("NOTES_DIR", &root)]);
    assert!(out.ok, "stderr: {}", out.stderr);

    let lines = read_lines(&today_file(&root));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] [Home] water plants"));
    assert!(!dir.path().join("notes").exists());
}

#[test]
fn config_file_sets_tasks_and_root() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = dir.path().join("conf").join("my-tasks.json");
    write_file(&tasks, TASKS);
    let root = dir.path().join("from-config");
    write_file(
        &dir.path().join(".noter.toml"),
        &format!(
            "tasks_file = {:?}\nnotes_dir = {:?}\n",
            tasks.display().to_string(),
            root.display().to_string()
        ),
    );

    let out = run_noter(dir.path(), &[], "wk via config\n", &[]);
    assert!(out.ok, "stderr: {}", out.stderr);
    assert_eq!(read_lines(&today_file(&root)).len(), 1);
}

#[test]
fn notes_dir_env_beats_config_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);
    let config_root = dir.path().join("from-config");
    let env_root = dir.path().join("from-env");
    write_file(
        &dir.path().join(".noter.toml"),
        &format!("notes_dir = {:?}\n", config_root.display().to_string()),
    );

    let out = run_noter(dir.path(), &[], "wk env wins\n", &[("NOTES_DIR", &env_root)]);
    assert!(out.ok, "stderr: {}", out.stderr);

    let lines = read_lines(&today_file(&env_root));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] [Work] env wins"));
    assert!(!config_root.exists());
}

#[test]
fn invalid_utf8_line_does_not_end_capture() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);

    let out = run_noter_bytes(
        dir.path(),
        &[],
        b"wk caf\xe9 latte\nwk second note\n",
        &[],
    );
    assert!(out.ok, "stderr: {}", out.stderr);
    assert_eq!(out.stdout.matches("Note saved: [").count(), 2);

    let lines = read_lines(&today_file(&dir.path().join("notes")));
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] [Work] caf\u{FFFD} latte"), "line: {}", lines[0]);
    assert!(lines[1].ends_with("] [Work] second note"), "line: {}", lines[1]);
}

#[test]
fn writes_notes_in_submission_order() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);

    let out = run_noter(dir.path(), &[], "wk one\nhm two\nwk three\n", &[]);
    assert!(out.ok, "stderr: {}", out.stderr);

    let lines = read_lines(&today_file(&dir.path().join("notes")));
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("] [Work] one"));
    assert!(lines[1].ends_with("] [Home] two"));
    assert!(lines[2].ends_with("] [Work] three"));
}

#[test]
fn rejected_lines_write_nothing_and_loop_continues() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);

    let out = run_noter(dir.path(), &[], "\n   \nwk\nzz some note\n", &[]);
    assert!(out.ok, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Please use format: PREFIX NOTE"));
    assert!(out.stdout.contains("Unknown prefix: zz"));
    assert!(!out.stdout.contains("Note saved"));
    // One usage line per read, including the read that hits end of input
    assert_eq!(out.stdout.matches("Usage: [PREFIX] [NOTE]").count(), 5);
    assert!(!dir.path().join("notes").exists());
}

#[test]
fn missing_tasks_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_noter(dir.path(), &[], "wk never saved\n", &[]);
    assert!(!out.ok);
    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("Cannot read task file tasks.json"), "stderr: {}", out.stderr);
    assert!(!out.stdout.contains("Enter note:"));
    assert!(!dir.path().join("notes").exists());
}

#[test]
fn malformed_tasks_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), r#"[{"prefix":"wk"}]"#);

    let out = run_noter(dir.path(), &[], "wk never saved\n", &[]);
    assert!(!out.ok);
    assert!(out.stderr.contains("Malformed task file"), "stderr: {}", out.stderr);
}

#[test]
fn invalid_timezone_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);

    let out = run_noter(dir.path(), &["--timezone", "Mars/Olympus"], "", &[]);
    assert!(!out.ok);
    assert!(out.stderr.contains("Invalid timezone: Mars/Olympus"));
}

#[test]
fn tasks_flag_overrides_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = dir.path().join("alt.json");
    write_file(&tasks, r#"[{"prefix":"rd","task":"Reading"}]"#);

    let out = run_noter(
        dir.path(),
        &["--tasks", "alt.json", "--no-color"],
        "rd chapter 3\n",
        &[],
    );
    assert!(out.ok, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Reading"));
    assert!(!out.stdout.contains('\u{1b}'));
    let lines = read_lines(&today_file(&dir.path().join("notes")));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] [Reading] chapter 3"));
}

#[test]
fn color_always_stripes_task_table() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);

    let out = run_noter(dir.path(), &["--color", "always"], "", &[]);
    assert!(out.ok, "stderr: {}", out.stderr);
    assert!(out.stdout.contains('\u{1b}'));
}

#[test]
fn files_and_search_flags_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_noter(dir.path(), &["-f", "-s"], "", &[]);
    assert!(!out.ok);
    assert_eq!(out.code, Some(2));
}

#[test]
fn missing_search_helper_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_noter(dir.path(), &["--files"], "", &[]);
    assert!(!out.ok);
    assert!(
        out.stderr.contains("Search helper not found: ./search-files.sh"),
        "stderr: {}",
        out.stderr
    );
}

#[cfg(unix)]
#[test]
fn search_flags_delegate_to_helpers() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    for (name, marker) in [("search-files.sh", "files"), ("search-content.sh", "content")] {
        let script = dir.path().join(name);
        write_file(
            &script,
            &format!("#!/bin/sh\necho {marker} > ran-{marker}\necho \"$NOTES_DIR\" >> ran-{marker}\n"),
        );
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let out = run_noter(dir.path(), &["-f"], "", &[]);
    assert!(out.ok, "stderr: {}", out.stderr);
    assert!(!out.stdout.contains("Enter note:"));
    let ran = fs::read_to_string(dir.path().join("ran-files")).unwrap();
    assert!(ran.starts_with("files\n"));
    assert!(ran.contains("./notes"));
    assert!(!dir.path().join("ran-content").exists());

    let out = run_noter(dir.path(), &["--search"], "", &[]);
    assert!(out.ok, "stderr: {}", out.stderr);
    assert!(dir.path().join("ran-content").exists());
}

#[cfg(unix)]
#[test]
fn helper_exit_status_is_propagated() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("search-content.sh");
    write_file(&script, "#!/bin/sh\nexit 4\n");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let out = run_noter(dir.path(), &["-s"], "", &[]);
    assert_eq!(out.code, Some(4));
}

#[cfg(unix)]
#[test]
fn sigint_exits_cleanly_without_duplicating_last_note() {
    use std::io::Read;
    use std::time::{Duration, Instant};

    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("tasks.json"), TASKS);
    let day_file = today_file(&dir.path().join("notes"));

    let mut child = noter_command(dir.path(), &[], &[]).spawn().expect("run noter");
    // Held open until the child exits so the loop can only end via the signal
    let mut stdin = child.stdin.take().expect("stdin");
    stdin.write_all(b"wk one\n").unwrap();
    stdin.flush().unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while read_lines(&day_file).is_empty() {
        assert!(Instant::now() < deadline, "note was never saved");
        std::thread::sleep(Duration::from_millis(20));
    }

    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("run kill");
    assert!(status.success());

    let mut stdout = String::new();
    child
        .stdout
        .take()
        .expect("stdout")
        .read_to_string(&mut stdout)
        .unwrap();
    let status = child.wait().expect("wait noter");
    drop(stdin);

    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("Exiting..."), "stdout: {stdout}");
    let lines = read_lines(&day_file);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] [Work] one"));
}
