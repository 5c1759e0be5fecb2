//! foodframe-cli
//! =============
//!
//! Terminal host for the `foodframe-core` recommendation widget.
//!
//! The binary (`foodframe`) plays the part of the host runtime: a JSON file
//! stands in for browser storage, `--username` stands in for the user
//! context, and opened URLs are printed instead of launched.
//!
//! Quick start
//! -----------
//!
//! ```text
//! foodframe recommend Tokyo
//! foodframe show
//! foodframe --username kompreni --no-storage show
//! foodframe cities
//! foodframe interactive
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod host;
pub mod render;
pub mod store;
