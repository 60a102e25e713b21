use crate::ast;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos). Positions
/// refer to the joined type-definitions document that a
/// [`Schema`](crate::Schema) was built from.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub line: usize,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_ast_position(pos: &ast::Pos) -> Self {
        Self::Schema(FilePosition {
            col: pos.column,
            line: pos.line,
        })
    }

    pub fn as_file_position(&self) -> Option<&FilePosition> {
        if let Self::Schema(pos) = self {
            Some(pos)
        } else {
            None
        }
    }
}
