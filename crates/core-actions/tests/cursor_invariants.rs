mod common;
use common::*;

use core_events::KeyCode;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        proptest::char::range('a', 'e').prop_map(KeyCode::Char),
        Just(KeyCode::Char(' ')),
        Just(KeyCode::Tab),
        Just(KeyCode::Enter),
        Just(KeyCode::Backspace),
        Just(KeyCode::Delete),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Home),
        Just(KeyCode::End),
        Just(KeyCode::PageUp),
        Just(KeyCode::PageDown),
    ]
}

proptest! {
    #[test]
    fn cursor_stays_valid(seed in "[a-c\t\n]{0,30}", keys in proptest::collection::vec(key_strategy(), 0..80)) {
        let mut m = model_with(&seed, 4, 12);
        for k in keys {
            press(&mut m, k);
            let doc = &m.state().document;
            let v = m.view();
            prop_assert!(v.cursor.row <= doc.len());
            prop_assert!(v.cursor.col <= doc.row_len(v.cursor.row));
            for row in doc.rows() {
                prop_assert!(!row.render().contains('\t'));
                prop_assert_eq!(row.render().chars().count(), row.render_len());
            }
            m.scroll();
            let v = m.view();
            let rx = v.render_col(&m.state().document);
            prop_assert!(v.cursor.row >= v.row_offset && v.cursor.row < v.row_offset + v.viewport_rows);
            prop_assert!(rx >= v.col_offset && rx < v.col_offset + v.viewport_cols);
        }
    }
}
