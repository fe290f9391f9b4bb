//! Load → save behavior against real files.

use core_actions::io_ops::{OpenStatus, open_file, write_file};
use proptest::prelude::*;

fn round_trip(content: &[u8]) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, content).unwrap();
    let mut state = open_file(&path).into_state();
    write_file(&mut state, None).unwrap();
    std::fs::read(&path).unwrap()
}

#[test]
fn lf_terminated_file_is_byte_identical() {
    assert_eq!(round_trip(b"one\ntwo\n"), b"one\ntwo\n");
}

#[test]
fn unterminated_file_gains_final_lf() {
    assert_eq!(round_trip(b"one\ntwo"), b"one\ntwo\n");
}

#[test]
fn empty_file_saves_single_lf() {
    assert_eq!(round_trip(b""), b"\n");
}

#[test]
fn missing_file_is_created_on_save() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("new.txt");
    let outcome = open_file(&path);
    assert_eq!(outcome.status, OpenStatus::Missing);
    let mut state = outcome.into_state();
    let mut pos = core_text::Position::origin();
    state.active_buffer_mut().insert_byte(&mut pos, b'x');
    write_file(&mut state, None)?;
    assert_eq!(std::fs::read(&path)?, b"x\n");
    Ok(())
}

proptest! {
    #[test]
    fn load_save_idempotence(lines in prop::collection::vec("[ -~\t\r]{0,10}", 0..6), terminated in any::<bool>()) {
        let mut content = lines.join("\n").into_bytes();
        if terminated && !content.is_empty() {
            content.push(b'\n');
        }
        let saved = round_trip(&content);
        if content.is_empty() {
            prop_assert_eq!(saved, b"\n".to_vec());
        } else if content.ends_with(b"\n") {
            prop_assert_eq!(saved, content);
        } else {
            let mut expected = content.clone();
            expected.push(b'\n');
            prop_assert_eq!(saved, expected);
        }
    }
}
