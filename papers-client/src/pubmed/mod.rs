//! PubMed client for finding papers and resolving their details
//!
//! The client talks to two NCBI E-utilities endpoints:
//! - `client/mod.rs` - Core client struct, constructors and ESearch identifier search
//! - `client/summary` - ESummary per-identifier details mapped to [`PaperRecord`]

pub mod client;
pub mod models;
pub(crate) mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use models::{Author, PaperRecord};
