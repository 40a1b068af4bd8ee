//! Schema-driven record population.
//!
//! A record type describes its fields as an ordered binding table instead of
//! being inspected reflectively: each [`Field`] names the declared field,
//! optionally overrides its lookup key with an alias, and carries a setter
//! from the closed capability set (string, signed/unsigned integer, bool,
//! float, list of string). [`Store::map`] walks the table and assigns each
//! field through the typed accessors, so lookup and conversion failures
//! degrade to zero values and never abort the remaining fields.

use crate::store::Store;

/// A record type that can be populated from a [`Store`].
pub trait Bindable {
    /// The binding table, in field declaration order.
    fn bindings() -> Vec<Field<Self>>
    where
        Self: Sized;
}

/// One field binding: declared name, optional alias key, and typed setter.
#[derive(Debug, Clone, Copy)]
pub struct Field<R> {
    name: &'static str,
    alias: Option<&'static str>,
    setter: Setter<R>,
}

#[derive(Debug, Clone, Copy)]
enum Setter<R> {
    Str(fn(&mut R, String)),
    StrList(fn(&mut R, Vec<String>)),
    Int(fn(&mut R, i64)),
    Uint(fn(&mut R, u64)),
    Bool(fn(&mut R, bool)),
    Float(fn(&mut R, f64)),
    Unsupported,
}

impl<R> Field<R> {
    /// Bind a string field.
    pub fn string(name: &'static str, set: fn(&mut R, String)) -> Self {
        Self::with_setter(name, Setter::Str(set))
    }

    /// Bind a list-of-string field, converted by splitting on `,`.
    pub fn strings(name: &'static str, set: fn(&mut R, Vec<String>)) -> Self {
        Self::with_setter(name, Setter::StrList(set))
    }

    /// Bind a signed integer field.
    pub fn int(name: &'static str, set: fn(&mut R, i64)) -> Self {
        Self::with_setter(name, Setter::Int(set))
    }

    /// Bind an unsigned integer field.
    pub fn uint(name: &'static str, set: fn(&mut R, u64)) -> Self {
        Self::with_setter(name, Setter::Uint(set))
    }

    /// Bind a bool field.
    pub fn bool(name: &'static str, set: fn(&mut R, bool)) -> Self {
        Self::with_setter(name, Setter::Bool(set))
    }

    /// Bind a float field.
    pub fn float(name: &'static str, set: fn(&mut R, f64)) -> Self {
        Self::with_setter(name, Setter::Float(set))
    }

    /// Record a field whose type is outside the supported set. The mapper
    /// leaves it untouched.
    pub fn unsupported(name: &'static str) -> Self {
        Self::with_setter(name, Setter::Unsupported)
    }

    /// Override the lookup key for this field.
    pub fn alias(mut self, key: &'static str) -> Self {
        self.alias = Some(key);
        self
    }

    fn with_setter(name: &'static str, setter: Setter<R>) -> Self {
        Self {
            name,
            alias: None,
            setter,
        }
    }

    fn lookup_key(&self) -> &'static str {
        self.alias.unwrap_or(self.name)
    }
}

impl Store {
    /// Populate `record` from the store, field by field.
    ///
    /// Each field is looked up under its alias if one is set, otherwise its
    /// declared name, and read through the accessor matching its bound type
    /// with a zero-value default. Fields bound as unsupported keep their
    /// current value. This never fails: absent keys and malformed values
    /// assign zero values per the accessor policy.
    pub fn map<R: Bindable>(&self, record: &mut R) {
        for field in R::bindings() {
            let key = field.lookup_key();
            match field.setter {
                Setter::Str(set) => set(record, self.string(key)),
                Setter::StrList(set) => set(record, self.strings(key)),
                Setter::Int(set) => set(record, self.int64(key)),
                Setter::Uint(set) => set(record, self.uint64(key)),
                Setter::Bool(set) => set(record, self.bool(key)),
                Setter::Float(set) => set(record, self.float(key)),
                Setter::Unsupported => {}
            }
        }
    }
}
