mod extensions_tests;
mod schema_loader_tests;
