//! Field extraction from fixed-shape records.
//!
//! A record shape declares its own fields through [`Record`], so a caller
//! can turn it into a [`Context`] and merge extra keys (for example a
//! pre-rendered fragment) before rendering, without declaring a combined type.

use crate::value::{Context, Value};

/// A value with a fixed set of named fields.
pub trait Record {
    /// The record's own fields, in declaration order.
    ///
    /// Nested records are not flattened; a field holding another record
    /// appears under its own name, converted however the author chose.
    fn fields(&self) -> Vec<(&'static str, Value)>;
}

/// A missing record has no fields.
impl<R: Record> Record for Option<R> {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        self.as_ref().map(|r| r.fields()).unwrap_or_default()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        (**self).fields()
    }
}

impl Record for () {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        Vec::new()
    }
}

/// Copies a record's declared fields into a fresh [`Context`].
pub fn to_context<R: Record + ?Sized>(record: &R) -> Context {
    record.fields().into_iter().collect()
}

/// Implements [`Record`] for a struct by listing its fields in order.
///
/// Every listed field must be `Clone` with `Into<Value>`.
///
/// ```
/// use grr_types::{impl_record, to_context, Value};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl_record!(Person { name => "Name", age => "Age" });
///
/// let ctx = to_context(&Person { name: "John".into(), age: 23 });
/// assert_eq!(ctx.get("Age"), Some(&Value::Int(23)));
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident => $name:literal),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<(&'static str, $crate::Value)> {
                ::std::vec![
                    $(($name, $crate::Value::from(::std::clone::Clone::clone(&self.$field)))),*
                ]
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<(&'static str, $crate::Value)> {
                ::std::vec![
                    $((stringify!($field), $crate::Value::from(::std::clone::Clone::clone(&self.$field)))),*
                ]
            }
        }
    };
}
