//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student record library**: an in-memory record store
//! with validated mutations, search, and grade statistics. The interactive menu
//! shipped as the `roster` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, tables, colors                       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! │  - Returns records, Options and Results                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Id assignment, all-or-nothing updates, search, stats     │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Found Nothing vs. Invalid
//!
//! Lookups that find nothing return `None`. Mutations with bad input return
//! `Err(ValidationError)` and leave the store untouched. The two never mix: an
//! unknown id is not an error, and a validation failure is never reported as
//! "not found".
//!
//! ## Example
//!
//! ```
//! use roster::api::{RosterApi, StudentUpdate};
//!
//! let mut api = RosterApi::with_sample_data().unwrap();
//! let ada = api.add_record("Ada Lovelace", "Mathematics", 97.0).unwrap();
//! assert_eq!(ada.id(), 1006);
//!
//! // Invalid marks: rejected, nothing changes
//! assert!(api
//!     .update_record(ada.id(), &StudentUpdate::new().with_name("Ada").with_marks(140.0))
//!     .is_err());
//! assert_eq!(api.find_by_id(ada.id()).unwrap().name(), "Ada Lovelace");
//!
//! let stats = api.statistics();
//! assert_eq!(stats.total(), 6);
//! assert_eq!(stats.top_student().unwrap().id(), ada.id());
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Student`, `Grade`) and field validation
//! - [`config`]: Settings for the interactive client
//! - [`error`]: Error types
//! - `cli`: Menu loop, prompting and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
