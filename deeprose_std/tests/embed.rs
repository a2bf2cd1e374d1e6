use deeprose_std::embed::{check, embed, embed_with_settings, header_path, CheckOutcome};
use deeprose_std::error::EmbedError;
use deeprose_std::settings::{EmbedSettings, HeaderFormat, NewlineMode};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const EXPECTED_SAY_HI: &str = "\n#ifndef STDLIB_HEADER__\n#define STDLIB_HEADER__\n\n/* this code was generated using the script create_stdlib_header.py */\n\nconst char * const stdlib = {\"say \\\"hi\\\"\\n\"};\n\n#endif\n";

fn write_input(dir: &Path, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join("stdlib.deeprose");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn embed_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), b"say \"hi\"\n");

    let stats = embed(&input, dir.path()).unwrap();

    let output = fs::read_to_string(dir.path().join("stdlib.h")).unwrap();
    assert_eq!(output, EXPECTED_SAY_HI);
    assert_eq!(stats.output_path, header_path(dir.path()));
    assert_eq!(stats.input_bytes, 9);
    assert_eq!(stats.output_bytes, EXPECTED_SAY_HI.len());
    assert_eq!(stats.escaped_bytes, 3);
}

#[test]
fn embed_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), b"");

    embed(&input, dir.path()).unwrap();

    let output = fs::read_to_string(dir.path().join("stdlib.h")).unwrap();
    assert!(output.contains("\nconst char * const stdlib = {\"\"};\n"));
}

#[test]
fn embed_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), b"(print 'a' \"b\" \\c)\r\n");
    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");
    fs::create_dir(&out_a).unwrap();
    fs::create_dir(&out_b).unwrap();

    embed(&input, &out_a).unwrap();
    embed(&input, &out_b).unwrap();
    embed(&input, &out_b).unwrap();

    assert_eq!(
        fs::read(out_a.join("stdlib.h")).unwrap(),
        fs::read(out_b.join("stdlib.h")).unwrap()
    );
}

#[test]
fn embed_overwrites_existing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), b"say \"hi\"\n");
    fs::write(dir.path().join("stdlib.h"), "stale content that is longer than the new header, stale stale stale stale stale stale stale stale stale stale stale stale stale stale").unwrap();

    embed(&input, dir.path()).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("stdlib.h")).unwrap(), EXPECTED_SAY_HI);
}

#[test]
fn embed_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does_not_exist.deeprose");

    let err = embed(&input, dir.path()).unwrap_err();

    match &err {
        EmbedError::Input(e) => {
            assert_eq!(e.error.kind(), ErrorKind::NotFound);
            assert_eq!(e.path, input);
        }
        EmbedError::Output(_) => panic!("expected input error, got {err:?}"),
    }
    assert!(err.to_string().contains("does_not_exist.deeprose"));
    assert!(!dir.path().join("stdlib.h").exists());
}

#[test]
fn embed_missing_input_keeps_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("stdlib.h");
    fs::write(&existing, "previous").unwrap();

    let result = embed(&dir.path().join("missing.deeprose"), dir.path());

    assert!(matches!(result, Err(EmbedError::Input(_))));
    assert_eq!(fs::read_to_string(&existing).unwrap(), "previous");
}

#[test]
fn embed_missing_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), b"x");
    let output_dir = dir.path().join("missing");

    let err = embed(&input, &output_dir).unwrap_err();

    match err {
        EmbedError::Output(e) => assert_eq!(e.path, output_dir.join("stdlib.h")),
        EmbedError::Input(_) => panic!("expected output error"),
    }
    assert!(!output_dir.exists());
}

#[test]
fn embed_output_dir_is_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), b"x");

    let result = embed(&input, &input);

    assert!(matches!(result, Err(EmbedError::Output(_))));
    assert_eq!(fs::read(&input).unwrap(), b"x");
}

#[test]
fn embed_byte_array() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), b"; header comment\nab\r\n");
    let settings = EmbedSettings {
        format: HeaderFormat::ByteArray,
        newlines: NewlineMode::Universal,
    };

    let stats = embed_with_settings(&input, dir.path(), &settings).unwrap();

    let output = fs::read_to_string(dir.path().join("stdlib.h")).unwrap();
    assert!(output.contains("const char stdlib[] = {97, 98, 10, };\n"));
    assert_eq!(stats.stripped_bytes, 17);
}

#[test]
fn check_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), b"say \"hi\"\n");
    let settings = EmbedSettings::default();

    assert_eq!(check(&input, dir.path(), &settings).unwrap(), CheckOutcome::Missing);

    embed(&input, dir.path()).unwrap();
    assert_eq!(check(&input, dir.path(), &settings).unwrap(), CheckOutcome::UpToDate);

    fs::write(&input, b"say \"bye\"\n").unwrap();
    assert_eq!(check(&input, dir.path(), &settings).unwrap(), CheckOutcome::Differs);

    // check never writes
    assert_eq!(fs::read_to_string(dir.path().join("stdlib.h")).unwrap(), EXPECTED_SAY_HI);
}

#[test]
fn check_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = check(&dir.path().join("missing.deeprose"), dir.path(), &EmbedSettings::default());
    assert!(matches!(result, Err(EmbedError::Input(_))));
}
