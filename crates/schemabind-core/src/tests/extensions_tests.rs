use crate::ast;
use crate::extensions::extract_extensions;
use crate::extensions::ExtensionKind;
use crate::type_defs::parse_type_defs;
use proptest::prelude::*;

fn extension_kinds(document: &ast::schema::Document) -> Vec<ExtensionKind> {
    document.definitions.iter().filter_map(|def| match def {
        ast::schema::Definition::TypeExtension(ext) => Some(ExtensionKind::of(ext)),
        _ => None,
    }).collect()
}

#[test]
fn keeps_five_extension_kinds_in_order() {
    let document = parse_type_defs(concat!(
        "type Query { a: Int }\n",
        "extend enum Color { BLUE }\n",
        "scalar DateTime\n",
        "extend scalar DateTime @foo\n",
        "extend type Query { b: Int }\n",
        "extend union U = A\n",
        "directive @foo on SCALAR\n",
        "extend input Filter { a: Int }\n",
        "extend interface Node { id: ID }",
    )).unwrap();

    let extensions = extract_extensions(&document);
    assert_eq!(extension_kinds(&extensions), vec![
        ExtensionKind::Enum,
        ExtensionKind::Object,
        ExtensionKind::Union,
        ExtensionKind::InputObject,
        ExtensionKind::Interface,
    ]);

    // The input document is untouched.
    assert_eq!(document.definitions.len(), 9);
}

#[test]
fn no_extensions_yields_empty_document() {
    let document = parse_type_defs("type Query { a: Int }").unwrap();
    let extensions = extract_extensions(&document);
    assert!(extensions.definitions.is_empty());
}

#[test]
fn only_scalar_extensions_are_left_out() {
    assert!(!ExtensionKind::Scalar.is_extracted());
    for kind in [
        ExtensionKind::Enum,
        ExtensionKind::InputObject,
        ExtensionKind::Interface,
        ExtensionKind::Object,
        ExtensionKind::Union,
    ] {
        assert!(kind.is_extracted());
    }
}

fn definition_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "type T { a: Int }",
        "extend type T { b: Int }",
        "enum E { A }",
        "extend enum E { B }",
        "scalar S",
        "extend scalar S @d",
        "extend union U = T",
        "extend input I { a: Int }",
        "extend interface N { a: Int }",
        "directive @d on SCALAR",
    ])
}

proptest! {
    #[test]
    fn partition_is_idempotent(
        definitions in prop::collection::vec(definition_strategy(), 0..12),
    ) {
        prop_assume!(!definitions.is_empty());
        let document = parse_type_defs(&definitions.join("\n")).unwrap();

        let once = extract_extensions(&document);
        let twice = extract_extensions(&once);
        prop_assert_eq!(once.to_string(), twice.to_string());

        prop_assert!(extension_kinds(&once).iter().all(|kind| kind.is_extracted()));
        prop_assert_eq!(once.definitions.len(), extension_kinds(&once).len());
    }
}
