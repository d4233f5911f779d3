use equate::word_problem::{extract, looks_like_word_problem};

#[test]
fn prose_detection() {
    assert!(looks_like_word_problem("what plus 5 equals 10"));
    assert!(looks_like_word_problem("What is the answer?"));
    assert!(looks_like_word_problem("Solve for the total"));
    assert!(looks_like_word_problem("how many apples remain"));
    assert!(!looks_like_word_problem("x + 1 = 2"));
    assert!(!looks_like_word_problem("whatever + 1 = 2"));
}

#[test]
fn basic_extraction() {
    let cases = vec![
        ("what plus 5 equals 10", "x+5=10"),
        ("what minus 3 equals 7", "x-3=7"),
        ("what times 3 equals 12", "x*3=12"),
        ("what divided by 4 equals 2", "x/4=2"),
        ("What plus 2 minus 1 equals 4", "x+2-1=4"),
    ];

    for (input, expected) in cases {
        assert_eq!(extract(input), expected, "extraction mismatch for {input:?}");
    }
}

#[test]
fn punctuation_is_trimmed_from_tokens() {
    assert_eq!(extract("what plus 5 equals 10?"), "x+5=10");
}

#[test]
fn passthrough_when_not_matched() {
    // Without both "what" and "equals" the input is returned unchanged.
    assert_eq!(extract("x + 1 = 2"), "x + 1 = 2");
    assert_eq!(extract("find the sum of 2 and 3"), "find the sum of 2 and 3");
    assert_eq!(extract("what plus 5 is 10"), "what plus 5 is 10");
}

#[test]
fn degenerate_case_has_no_right_hand_side() {
    // As many operation words as numbers: no "= n" is appended and the
    // equation builder rejects the result downstream.
    assert_eq!(extract("what plus 5 equals"), "x+5");
}
