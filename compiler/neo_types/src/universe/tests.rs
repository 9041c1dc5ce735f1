use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_preseeded_ids() {
    let universe = TypeUniverse::new();
    assert_eq!(universe.len(), 6);
    assert_eq!(*universe.get(TypeId::VOID), TypeKind::Void);
    assert_eq!(*universe.get(TypeId::TRUE), TypeKind::True);
    assert_eq!(*universe.get(TypeId::FALSE), TypeKind::False);
    assert_eq!(*universe.get(TypeId::INVALID), TypeKind::Invalid);
    assert_eq!(*universe.get(TypeId::UNKNOWN), TypeKind::Unknown);
    assert_eq!(
        *universe.get(TypeId::BOOL),
        TypeKind::Union {
            left: TypeId::TRUE,
            right: TypeId::FALSE
        }
    );
}

#[test]
fn test_union_with_self_is_noop() {
    let mut universe = TypeUniverse::new();
    assert_eq!(universe.push_union(TypeId::VOID, TypeId::VOID), TypeId::VOID);
    assert_eq!(universe.len(), 6);
}

#[test]
fn test_union_is_deduplicated_in_either_order() {
    let mut universe = TypeUniverse::new();
    assert_eq!(universe.push_union(TypeId::TRUE, TypeId::FALSE), TypeId::BOOL);
    assert_eq!(universe.push_union(TypeId::FALSE, TypeId::TRUE), TypeId::BOOL);

    let a = universe.push_union(TypeId::BOOL, TypeId::VOID);
    let b = universe.push_union(TypeId::VOID, TypeId::BOOL);
    assert_eq!(a, b);
    assert_eq!(universe.len(), 7);
}

#[test]
fn test_subtyping_against_bool() {
    let universe = TypeUniverse::new();
    assert!(universe.is_subtype_of(TypeId::TRUE, TypeId::BOOL));
    assert!(universe.is_subtype_of(TypeId::FALSE, TypeId::BOOL));
    assert!(universe.is_subtype_of(TypeId::BOOL, TypeId::BOOL));
    assert!(!universe.is_subtype_of(TypeId::VOID, TypeId::BOOL));
    assert!(!universe.is_subtype_of(TypeId::TRUE, TypeId::FALSE));
    assert!(!universe.is_subtype_of(TypeId::BOOL, TypeId::TRUE));
}

#[test]
fn test_subtyping_nested_unions() {
    let mut universe = TypeUniverse::new();
    let bool_or_void = universe.push_union(TypeId::BOOL, TypeId::VOID);
    assert!(universe.is_subtype_of(TypeId::TRUE, bool_or_void));
    assert!(universe.is_subtype_of(TypeId::BOOL, bool_or_void));
    assert!(universe.is_subtype_of(TypeId::VOID, bool_or_void));
    assert!(!universe.is_subtype_of(bool_or_void, TypeId::BOOL));

    let void_or_true = universe.push_union(TypeId::VOID, TypeId::TRUE);
    assert!(universe.is_subtype_of(void_or_true, bool_or_void));
}

#[test]
fn test_display() {
    let mut universe = TypeUniverse::new();
    assert_eq!(universe.display(TypeId::VOID), "Void");
    assert_eq!(universe.display(TypeId::BOOL), "Bool");
    assert_eq!(universe.display(TypeId::INVALID), "Invalid");
    let u = universe.push_union(TypeId::VOID, TypeId::TRUE);
    assert_eq!(universe.display(u), "Void | True");
    let nested = universe.push_union(TypeId::BOOL, TypeId::VOID);
    assert_eq!(universe.display(nested), "Void | Bool");
}
