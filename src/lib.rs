// src/lib.rs
//
// Workspace facade: re-exports the zipdb-core API so demos and downstream
// experiments can depend on a single crate name.

pub use zipdb_core::*;

pub mod prelude {
    pub use zipdb_core::prelude::*;
}
