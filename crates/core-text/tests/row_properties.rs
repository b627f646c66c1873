use core_text::{Row, TAB_STOP, expand_tabs};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, char),
    Delete(usize),
    Append(String),
    Split(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let ch = prop_oneof![Just('\t'), Just(' '), proptest::char::range('a', 'z')];
    prop_oneof![
        (0usize..40, ch).prop_map(|(at, c)| Op::Insert(at, c)),
        (0usize..40).prop_map(Op::Delete),
        "[a-c\t]{0,6}".prop_map(Op::Append),
        (0usize..40).prop_map(Op::Split),
    ]
}

proptest! {
    #[test]
    fn render_never_contains_tabs(seed in "[a-z\t ]{0,20}", ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut row = Row::new(seed);
        for op in ops {
            match op {
                Op::Insert(at, c) => row.insert_char(at, c),
                Op::Delete(at) => { row.delete_char(at); }
                Op::Append(s) => row.append_str(&s),
                Op::Split(at) => { row.split_off(at); }
            }
            prop_assert!(!row.render().contains('\t'));
            prop_assert_eq!(row.render().chars().count(), row.render_len());
            prop_assert_eq!(row.render(), expand_tabs(row.chars()));
            prop_assert_eq!(row.cx_to_rx(row.len()), row.render_len());
        }
    }

    #[test]
    fn rx_to_cx_inverts_cx_to_rx(text in "[a-z\t]{0,24}") {
        let row = Row::new(text);
        for cx in 0..=row.len() {
            prop_assert_eq!(row.rx_to_cx(row.cx_to_rx(cx)), cx);
        }
    }
}

#[test]
fn tab_stops_align_after_text() {
    for prefix in 0..TAB_STOP {
        let text = format!("{}\t", "x".repeat(prefix));
        assert_eq!(Row::new(text).render_len(), TAB_STOP);
    }
}
