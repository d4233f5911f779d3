use equate::ocr::{select_equations, Fragment};

fn fragment(kind: &str, text: &str) -> Fragment {
    Fragment {
        kind: kind.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn formula_fragments_are_always_selected() {
    assert!(fragment("formula", "x=2").is_equation());
    assert!(fragment("formula", "").is_equation());
}

#[test]
fn plain_prose_is_never_selected() {
    assert!(!fragment("plain text", "hello").is_equation());
    assert!(!fragment("text", "the quick brown fox").is_equation());
}

#[test]
fn text_regions_with_operator_then_digit_are_selected() {
    assert!(fragment("text region", "x=2").is_equation());
    assert!(fragment("isolated", "3 + 4").is_equation());
    assert!(fragment("text", "total = -5").is_equation());
    assert!(fragment("text", "2 x 3").is_equation());
}

#[test]
fn unknown_kinds_are_not_selected() {
    // Operator content does not rescue a fragment whose type is neither
    // formula nor text-like.
    assert!(!fragment("figure", "x=2").is_equation());
}

#[test]
fn selection_preserves_order_and_trims() {
    let fragments = vec![
        fragment("formula", "  x^2 = 4  "),
        fragment("plain text", "solve the following"),
        fragment("isolated", " 2x = 6 "),
    ];
    assert_eq!(select_equations(&fragments), vec!["x^2 = 4", "2x = 6"]);
}

#[test]
fn fragment_deserializes_from_engine_json() {
    let frags: Vec<Fragment> = serde_json::from_str(
        r#"[{"type": "formula", "text": "x+1=2"}, {"type": "text", "text": "hello"}]"#,
    )
    .expect("deserialize fragments");
    assert_eq!(select_equations(&frags), vec!["x+1=2"]);
}
