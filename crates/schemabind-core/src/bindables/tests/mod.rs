
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::type_defs::parse_type_defs;

const TYPE_DEFS: &str = concat!(
    "type Query { hello: String, userName: String, node: Node, search: SearchResult }\n",
    "type Mutation { ping: Boolean }\n",
    "interface Node { id: ID!, label: String }\n",
    "type User implements Node { id: ID!, label: String, firstName: String }\n",
    "type Post implements Node { id: ID!, label: String }\n",
    "union SearchResult = User | Post\n",
    "enum Color { RED GREEN }\n",
    "scalar DateTime",
);

fn build_schema() -> Schema {
    let document = parse_type_defs(TYPE_DEFS).expect("type definitions should parse");
    SchemaBuilder::build_ast_schema(&document).expect("schema should build")
}
