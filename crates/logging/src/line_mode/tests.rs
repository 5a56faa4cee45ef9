use super::LineMode;

#[test]
fn newline_is_the_default() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
}

#[test]
fn converts_to_and_from_bool() {
    assert_eq!(LineMode::from(true), LineMode::WithNewline);
    assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

    let append: bool = LineMode::WithoutNewline.into();
    assert!(!append);
}
