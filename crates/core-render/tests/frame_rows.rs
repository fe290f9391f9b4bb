use core_model::View;
use core_render::{build_frame, style::StyleFlags};
use core_state::EditorState;
use core_text::{Buffer, Position};
use pretty_assertions::assert_eq;

fn state(text: &str) -> EditorState {
    EditorState::new(Buffer::from_str(text))
}

#[test]
fn ansi_row_with_cursor_mid_line() {
    let st = state("hello\nworld");
    let f = build_frame(&st, &View::new(Position::new(0, 1), 0), 2);
    assert_eq!(
        f.rows[0].to_ansi(),
        "\x1b[90m1  \x1b[0mh\x1b[7m \x1b[0mello"
    );
    assert_eq!(f.rows[1].to_ansi(), "\x1b[90m2  \x1b[0mworld");
}

#[test]
fn empty_document_shows_cursor_space_then_filler() {
    let st = EditorState::new(Buffer::new());
    let f = build_frame(&st, &View::default(), 3);
    assert_eq!(
        f.ansi_rows(),
        vec![
            "\x1b[90m1  \x1b[0m\x1b[7m \x1b[0m".to_string(),
            "~".to_string(),
            "~".to_string(),
        ]
    );
}

#[test]
fn scrolled_view_numbers_from_first_line() {
    let text: String = (1..=12).map(|i| format!("l{i}\n")).collect();
    let st = state(&text);
    let f = build_frame(&st, &View::new(Position::new(11, 0), 9), 3);
    let plain: Vec<String> = f.rows.iter().map(|r| r.plain_text()).collect();
    assert_eq!(plain, vec!["10  l10", "11  l11", "12   l12"]);
    assert!(f.rows[2].has_cursor());
}

#[test]
fn gutter_width_tracks_total_line_count() {
    let text: String = (0..100).map(|_| "x\n").collect();
    let st = state(&text);
    let f = build_frame(&st, &View::new(Position::new(50, 0), 0), 1);
    assert_eq!(f.rows[0].spans[0].text, "1    ");
    assert_eq!(f.rows[0].spans[0].style, StyleFlags::DIM);
}

#[test]
fn tab_bytes_pass_through() {
    let st = state("\tx");
    let f = build_frame(&st, &View::new(Position::new(0, 2), 0), 1);
    assert_eq!(f.rows[0].plain_text(), "1  \tx ");
}

#[test]
fn cursor_on_tab_keeps_tab_after_highlight() {
    let st = state("a\tb");
    let f = build_frame(&st, &View::new(Position::new(0, 1), 0), 1);
    assert_eq!(f.rows[0].to_ansi(), "\x1b[90m1  \x1b[0ma\x1b[7m \x1b[0m\tb");
}
