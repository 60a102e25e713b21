mod schema_builder_tests;
mod types_validator_tests;

use crate::ast;
use crate::type_defs::parse_type_defs;

fn parse(type_defs: &str) -> ast::schema::Document {
    parse_type_defs(type_defs).expect("type definitions should parse")
}
