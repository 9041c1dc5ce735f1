use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2001.as_str(), "E2001");
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_type_error(),
        ];
        assert_eq!(
            phases.iter().filter(|p| **p).count(),
            1,
            "{code} must belong to exactly one phase"
        );
        assert!(code.as_str().starts_with('E'));
        assert!(!code.summary().is_empty());
    }
}

#[test]
fn test_names_are_unique() {
    let mut names: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ErrorCode::ALL.len());
}

#[test]
fn test_from_str() {
    assert_eq!("e2002".parse(), Ok(ErrorCode::E2002));
    assert_eq!("UNCLOSED_DELIMITER".parse(), Ok(ErrorCode::E1005));
    assert_eq!("E7777".parse::<ErrorCode>(), Err(()));
}
