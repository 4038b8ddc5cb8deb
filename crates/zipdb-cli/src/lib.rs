//! zipdb-cli
//! ==========
//!
//! Command-line interface for the `zipdb-core` postal-code database.
//!
//! This crate primarily provides a binary (`zipdb-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install zipdb-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! zipdb-cli --help
//! zipdb-cli stats
//! zipdb-cli lookup 44102
//! zipdb-cli radius 41.4993 -81.6944 10
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`zipdb-core`] crate directly.
//!
//! [`zipdb-core`]: https://docs.rs/zipdb-core
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
