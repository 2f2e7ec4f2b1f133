//! # Command Layer
//!
//! This module contains the **core business logic** of taskdeck. Each command
//! lives in its own submodule and implements pure Rust functions over task
//! snapshots and the storage/clock collaborators.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Query commands take an owned snapshot (`Vec<Task>`) and return a new value
//! - Lifecycle commands take a [`TaskStore`](crate::store::TaskStore) plus the
//!   current instant, validate, and hand fully formed records to the store
//! - Nothing is cached between calls
//!
//! ## What Commands Do NOT Do
//!
//! - **Read the clock**: "now" and "today" are always parameters
//! - **Render**: results are plain data; formatting belongs to the caller
//! - **Retry**: errors go straight back to the caller
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests build
//! snapshots by hand or through the store fixtures and check exact outputs.
//!
//! ## Command Modules
//!
//! - [`create`], [`get`], [`update`], [`delete`]: record lifecycle
//! - [`list`]: status/priority filter, newest first
//! - [`search`]: keyword/tag/date filter, soonest due first
//! - [`recommend`]: ranked "what to work on next"
//! - [`summary`]: aggregate statistics
//! - [`page`]: offset pagination
//! - [`export`]: tabular export through a row sink
//! - [`report`]: pending-task report

pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod page;
pub mod recommend;
pub mod report;
pub mod search;
pub mod summary;
pub mod update;
