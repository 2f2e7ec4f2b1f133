//! # Attribute System
//!
//! Two views over the fields of a [`Task`](crate::model::Task):
//!
//! - **Filtering** ([`filter`]): criteria built from optional query parameters and
//!   combined with AND logic into a single [`TaskFilter`].
//! - **Field registry** ([`spec`], [`value`]): the ordered list of
//!   `(name, accessor)` pairs describing a record's shape, used by tabular export.
//!
//! ## Field Registry
//!
//! | Name | Value | Nullable |
//! |------|-------|----------|
//! | `id` | `Int` | no |
//! | `title` | `Text` | no |
//! | `description` | `Text` | yes |
//! | `priority` | `Text` (enum name) | no |
//! | `status` | `Text` (enum name) | no |
//! | `tags` | `Text` | yes |
//! | `created_at` | `Timestamp` | no |
//! | `updated_at` | `Timestamp` | no |
//! | `due_date` | `Date` | yes |
//!
//! ## Usage
//!
//! ```ignore
//! let filter = TaskFilter::new().status(Some("pending")).tag(Some("rust"));
//! let open_rust_tasks = apply(&filter, snapshot);
//!
//! for spec in Task::FIELDS {
//!     println!("{} = {}", spec.name, (spec.get)(&task));
//! }
//! ```

mod filter;
mod spec;
mod value;

pub use filter::{apply, Criterion, TaskFilter};
pub use spec::{field_names, get_spec, FieldSpec, Tabular, TASK_FIELDS};
pub use value::FieldValue;
