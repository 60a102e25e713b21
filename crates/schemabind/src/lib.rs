pub use schemabind_core::*;
