//! # Taskdeck Architecture
//!
//! Taskdeck is the **query and aggregation layer** of a task tracker. It takes a
//! snapshot of task records from a storage collaborator and returns derived
//! views: filtered lists, ranked lists, summary statistics, pages and tabular
//! exports. It never owns storage and never schedules anything.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Fetches snapshots, reads the clock, applies config       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over owned snapshots                          │
//! │  - Built from attributes/ (filters, fields) and ordering.rs │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (store/, clock.rs)                           │
//! │  - TaskStore trait, InMemoryStore for tests and embedders   │
//! │  - Clock trait, SystemClock and FixedClock                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns regular
//! Rust types. Nothing prints. Logging goes through `tracing`; installing a
//! subscriber is left to the embedder (see [`logging::init_logging`]).
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests of the business logic.
//! 2. **API**: dispatch tests with an in-memory store and a fixed clock.
//! 3. **Integration** (`tests/`): end-to-end flows through [`api::TaskApi`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`attributes`]: Filter criteria and the static field registry
//! - [`ordering`]: Recency, relevance and recommendation orderings
//! - [`model`]: `Task`, `Priority`, `TaskStatus`, creation and patch payloads
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`clock`]: Time source abstraction
//! - [`config`]: Configuration management
//! - [`logging`]: Subscriber bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod ordering;
pub mod store;

pub use api::TaskApi;
pub use error::{Result, TaskError};
pub use model::{NewTask, Priority, Task, TaskId, TaskPatch, TaskStatus};
