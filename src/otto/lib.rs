//! # Otto Architecture
//!
//! Otto is a personal assistant that keeps an address book and a notebook,
//! and can tidy a folder of downloads. The core is a **UI-agnostic library**;
//! the interactive prompt in the binary is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prompts, prints replies             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Input (input.rs) + API Layer (api.rs)                      │
//! │  - Command lines parsed into a closed `Command` enum        │
//! │  - Facade owning the in-memory books, saves on request      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic on ContactBook / NoteBook                 │
//! │  - Returns `CmdResult`: data to list plus leveled messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collections, validated fields and storage                  │
//! │  - contacts.rs, notes.rs, fields.rs, model.rs               │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The file sorter (`sorter`) sits beside the core: it only touches the
//! folder it is given and shares nothing with the books.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>` and never writes to stdout or stderr. Dates that
//! depend on "today" are passed in, so the command layer is testable
//! without a clock.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`input`]: command-line parsing
//! - [`contacts`] / [`notes`]: the two in-memory collections
//! - [`fields`]: validated value types (phone, email, birthday)
//! - [`model`]: `Record` and `Note`
//! - [`store`]: storage abstraction and implementations
//! - [`sorter`]: the file sorter
//! - [`config`]: configuration management
//! - [`error`]: error types
//! - `cli`: prompt loop and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod contacts;
pub mod error;
pub mod fields;
pub mod input;
pub mod model;
pub mod notes;
pub mod sorter;
pub mod store;
