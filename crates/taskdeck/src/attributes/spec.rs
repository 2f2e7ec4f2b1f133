//! Field specifications and registry.
//!
//! A record's tabular shape is declared once, statically, as an ordered list of
//! `(name, accessor)` pairs. Export code iterates this list per record instead of
//! knowing the record's fields.

use super::FieldValue;
use crate::model::Task;

/// One exported column: its header name and how to read it from a record.
pub struct FieldSpec<R> {
    /// Header name, matching the Rust field name.
    pub name: &'static str,
    /// Reads the field's current value from a record.
    pub get: fn(&R) -> FieldValue,
}

impl<R> FieldSpec<R> {
    pub fn value(&self, record: &R) -> FieldValue {
        (self.get)(record)
    }
}

impl<R> Clone for FieldSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldSpec<R> {}

impl<R> std::fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec").field("name", &self.name).finish()
    }
}

/// A record type with a fixed, declaration-ordered field list.
pub trait Tabular: Sized + 'static {
    const FIELDS: &'static [FieldSpec<Self>];
}

/// Registry of all task fields, in declaration order.
///
/// This is the single source of truth for the task's exported shape.
/// Adding a field to [`Task`] means adding an entry here.
pub const TASK_FIELDS: &[FieldSpec<Task>] = &[
    FieldSpec {
        name: "id",
        get: |t| FieldValue::Int(t.id),
    },
    FieldSpec {
        name: "title",
        get: |t| FieldValue::Text(t.title.clone()),
    },
    FieldSpec {
        name: "description",
        get: |t| FieldValue::text(t.description.as_deref()),
    },
    FieldSpec {
        name: "priority",
        get: |t| FieldValue::Text(t.priority.name().to_string()),
    },
    FieldSpec {
        name: "status",
        get: |t| FieldValue::Text(t.status.name().to_string()),
    },
    FieldSpec {
        name: "tags",
        get: |t| FieldValue::text(t.tags.as_deref()),
    },
    FieldSpec {
        name: "created_at",
        get: |t| FieldValue::Timestamp(t.created_at),
    },
    FieldSpec {
        name: "updated_at",
        get: |t| FieldValue::Timestamp(t.updated_at),
    },
    FieldSpec {
        name: "due_date",
        get: |t| FieldValue::date(t.due_date),
    },
];

impl Tabular for Task {
    const FIELDS: &'static [FieldSpec<Self>] = TASK_FIELDS;
}

/// Header row for a field list.
pub fn field_names<R>(fields: &[FieldSpec<R>]) -> Vec<&'static str> {
    fields.iter().map(|f| f.name).collect()
}

/// Look up a field by name.
pub fn get_spec<R: Tabular>(name: &str) -> Option<&'static FieldSpec<R>> {
    R::FIELDS.iter().find(|f| f.name == name)
}
