//! Per-call context carried into every log call
//!
//! This module provides:
//! - `LogContext`: an immutable, cheaply cloned bag of typed values
//! - `ContextFields`: the reserved value holding fields that every logger
//!   appends to entries logged with the context

use super::field::Field;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Fields attached to a [`LogContext`]
///
/// Loggers append these after the call-site and logger-level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextFields(pub Vec<Field>);

/// Context passed explicitly to every log call
///
/// Deriving a context with [`LogContext::with_value`] never changes the parent;
/// values are shared behind `Arc`s so clones are cheap.
///
/// # Example
///
/// ```
/// use rust_logger_facade::{Field, LogContext};
///
/// let ctx = LogContext::background()
///     .with_fields(vec![Field::string("request_id", "req-123")]);
///
/// assert_eq!(ctx.fields().len(), 1);
/// assert!(LogContext::background().fields().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct LogContext {
    values: Arc<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl LogContext {
    /// An empty context
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context carrying `value`, replacing any value of the same type
    #[must_use]
    pub fn with_value<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut values = (*self.values).clone();
        values.insert(TypeId::of::<T>(), Arc::new(value));
        Self {
            values: Arc::new(values),
        }
    }

    /// Look up the value stored for type `T`
    pub fn value<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<T>())
    }

    /// Derive a context whose log calls carry `fields`
    #[must_use]
    pub fn with_fields(&self, fields: Vec<Field>) -> Self {
        self.with_value(ContextFields(fields))
    }

    /// Fields attached with [`LogContext::with_fields`], empty if none
    pub fn fields(&self) -> &[Field] {
        self.value::<ContextFields>()
            .map(|f| f.0.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("values", &self.values.len())
            .field("fields", &self.fields())
            .finish()
    }
}
