//! # Ocean UI Catalog Architecture
//!
//! This is a **UI-agnostic catalog library** for the Ocean UI component set.
//! The CLI is one client of it; nothing inside the library assumes a
//! terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI layer (main.rs + args.rs)                             │
//! │  - Parses arguments, colors output, owns stdout/stderr     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API layer (api.rs)                                        │
//! │  - Thin facade; loads the catalog once, dispatches         │
//! │  - Returns structured CmdResult values                     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                             │
//! │  - Pure business logic over the loaded catalog             │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Catalog layer (catalog.rs, store/)                        │
//! │  - CatalogSource trait: bundled data or a JSON file        │
//! │  - Loaded once, immutable for the life of the process      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The filter pipeline
//!
//! All browsing goes through [`filter::apply`]: category, then tags, then
//! fuzzy text search, in that order, because only the text stage reorders.
//! [`query`] maps the same state to and from a URL-style query string so a
//! filtered view can be shared as plain text.
//!
//! ## Key principle: no I/O in the core
//!
//! From `api.rs` inward, code takes plain arguments, returns plain
//! `Result` values, and never touches stdout, stderr, or the process exit
//! code. Failure taxonomy is deliberately narrow: a malformed catalog is
//! fatal at load, everything else (unknown ids, empty results, clipboard
//! trouble) degrades to messages the client renders.
//!
//! ## Module overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic per operation
//! - [`catalog`]: the loaded record collection and facet index
//! - [`store`]: catalog sources (bundled, file)
//! - [`model`]: wire types (`ComponentRecord`, `CatalogDoc`, ...)
//! - [`filter`]: the category/tag/fuzzy-search engine
//! - [`query`]: filter state ↔ query string codec
//! - [`demos`]: component id → terminal preview registry
//! - [`highlight`]: keyword/literal snippet tokenizer
//! - [`config`]: persisted theme preference
//! - [`clipboard`]: best-effort snippet copying
//! - [`error`]: error types

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod demos;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod model;
pub mod query;
pub mod store;
