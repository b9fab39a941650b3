use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_keeps_label_order() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("unclosed `{`: expected `}`, found end of file")
        .with_label(Position::new(3, 1), "found end of file")
        .with_secondary_label(Position::new(1, 11), "`{` opened here")
        .with_note("while parsing a block");

    assert_eq!(
        diag.labels,
        vec![
            Label::primary(Position::new(3, 1), "found end of file"),
            Label::secondary(Position::new(1, 11), "`{` opened here"),
        ]
    );
    assert_eq!(diag.notes, vec!["while parsing a block".to_string()]);
    assert!(diag.suggestions.is_empty());
}

#[test]
fn display_lists_labels_notes_and_help() {
    let diag = Diagnostic::error(ErrorCode::E1006)
        .with_message("map types are not implemented")
        .with_label(Position::new(1, 9), "found `map`")
        .with_note("while parsing a type")
        .with_suggestion("only named types and `[]T` slices are supported");

    assert_eq!(
        diag.to_string(),
        "error[E1006]: map types are not implemented\n  \
         --> 1:9: found `map`\n  \
         = note: while parsing a type\n  \
         = help: only named types and `[]T` slices are supported"
    );
}

#[test]
fn secondary_label_has_no_arrow() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("unclosed `(`")
        .with_secondary_label(Position::new(2, 4), "opened here");
    assert_eq!(
        diag.to_string(),
        "error[E1003]: unclosed `(`\n      2:4: opened here"
    );
}
