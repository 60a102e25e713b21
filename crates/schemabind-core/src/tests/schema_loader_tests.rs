use crate::type_defs::load_schema_from_path;
use crate::type_defs::LoadSchemaError;
use crate::type_defs::SchemaLoader;
use crate::ReadContentError;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, rel_path: &str, content: &str) -> PathBuf {
    let path = dir.path().join(rel_path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_single_file() -> Result<(), LoadSchemaError> {
    let dir = tempfile::tempdir().unwrap();
    let file_path = write_file(&dir, "schema.txt", "\ntype Query { a: Int }\n\n");

    assert_eq!(load_schema_from_path(&file_path)?, "type Query { a: Int }");
    Ok(())
}

#[test]
fn load_directory_in_sorted_order() -> Result<(), LoadSchemaError> {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir, "b.graphql", "type B { b: Int }");
    write_file(&dir, "a.gql", "type Query { a: Int }");
    write_file(&dir, "nested/c.graphqls", "extend type Query { c: Int }");
    write_file(&dir, "notes.md", "not graphql {");

    assert_eq!(
        load_schema_from_path(dir.path())?,
        "type Query { a: Int }\n\ntype B { b: Int }\n\nextend type Query { c: Int }",
    );
    Ok(())
}

#[test]
fn custom_file_extensions() -> Result<(), LoadSchemaError> {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir, "a.graphql", "type A { a: Int }");
    write_file(&dir, "b.sdl", "type Query { b: Int }");

    let loaded = SchemaLoader::new().file_exts([".sdl"]).load(dir.path())?;
    assert_eq!(loaded, "type Query { b: Int }");
    Ok(())
}

#[test]
fn syntax_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir, "a.graphql", "type Query { a: Int }");
    let bad_path = write_file(&dir, "b.graphql", "type Broken {");

    let result = load_schema_from_path(dir.path());
    assert!(matches!(
        result,
        Err(LoadSchemaError::SchemaFileSyntaxError { file_path, .. }) if file_path == bad_path
    ));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing_path = dir.path().join("missing.graphql");

    assert_eq!(
        load_schema_from_path(&missing_path),
        Err(LoadSchemaError::ReadContentError(
            ReadContentError::NotAFile { path: missing_path.clone() },
        )),
    );
}

#[test]
fn leading_byte_order_mark_is_dropped() -> Result<(), LoadSchemaError> {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "schema.graphql", "\u{feff}type Query { a: Int }");

    assert_eq!(load_schema_from_path(&path)?, "type Query { a: Int }");
    Ok(())
}

#[test]
fn non_utf8_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.graphql");
    std::fs::write(&path, b"type Query \xff").unwrap();

    assert_eq!(
        load_schema_from_path(&path),
        Err(LoadSchemaError::ReadContentError(
            ReadContentError::InvalidUtf8 { path: path.clone(), valid_up_to: 11 },
        )),
    );
}
