//! Structural behaviour shared by every model field.
//!
//! Model types keep each member as `Option<T>`; `T` implements [`ModelField`]
//! so the generated `PartialEq`, `Hash` and `Display` impls can treat strings,
//! numbers, lists, maps and nested shapes uniformly.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value that can sit inside a model field.
pub trait ModelField {
    /// Field-wise equality. Floats compare by bit pattern so `Eq` stays lawful.
    fn field_eq(&self, other: &Self) -> bool;

    /// Hash consistent with [`ModelField::field_eq`].
    fn field_hash<H: Hasher>(&self, state: &mut H);

    /// Renders the value the way it appears in a shape's `Display` output.
    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Folds a builder value into a field slot. Scalars replace the current
    /// value; collections extend it.
    fn merge(slot: &mut Option<Self>, value: Self)
    where
        Self: Sized,
    {
        *slot = Some(value);
    }
}

macro_rules! impl_plain_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ModelField for $ty {
                fn field_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn field_hash<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }

                fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_plain_field!(String, bool, i32, i64, crate::Blob, crate::Timestamp);

// All NaNs collapse to one pattern; 0.0 and -0.0 stay distinct.
fn canonical_bits(value: f32) -> u32 {
    if value.is_nan() {
        f32::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl ModelField for f32 {
    fn field_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(*self).hash(state);
    }

    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl<T: ModelField> ModelField for Vec<T> {
    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.field_eq(b))
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.field_hash(state);
        }
    }

    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.field_fmt(f)?;
        }
        f.write_str("]")
    }

    fn merge(slot: &mut Option<Self>, value: Self) {
        match slot {
            Some(existing) => existing.extend(value),
            None => *slot = Some(value),
        }
    }
}

impl<T: ModelField> ModelField for BTreeMap<String, T> {
    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((ka, va), (kb, vb))| ka == kb && va.field_eq(vb))
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.field_hash(state);
        }
    }

    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=")?;
            value.field_fmt(f)?;
        }
        f.write_str("}")
    }

    fn merge(slot: &mut Option<Self>, value: Self) {
        match slot {
            Some(existing) => existing.extend(value),
            None => *slot = Some(value),
        }
    }
}

/// Equality of two optional slots: both absent, or both present and equal.
pub fn slot_eq<T: ModelField>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.field_eq(b),
        _ => false,
    }
}

/// Hashes an optional slot so that absent and present values never collide
/// structurally.
pub fn slot_hash<T: ModelField, H: Hasher>(slot: &Option<T>, state: &mut H) {
    match slot {
        None => 0u8.hash(state),
        Some(value) => {
            1u8.hash(state);
            value.field_hash(state);
        }
    }
}

/// Adds `key` to a map field, refusing keys that are already present. The map
/// is left untouched on failure.
pub fn insert_unique<T>(
    slot: &mut Option<BTreeMap<String, T>>,
    field: &'static str,
    key: String,
    value: T,
) -> Result<()> {
    let map = slot.get_or_insert_with(BTreeMap::new);
    if map.contains_key(&key) {
        tracing::debug!(field, key = %key, "rejected duplicate map entry");
        return Err(Error::duplicate_key(field, key));
    }
    map.insert(key, value);
    Ok(())
}

/// Builder for the `{Name: value, Name: value}` rendering of a shape.
///
/// Absent fields are skipped, present ones are written in call order.
pub struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    has_fields: bool,
    result: fmt::Result,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self {
            f,
            has_fields: false,
            result,
        }
    }

    pub fn field<T: ModelField>(&mut self, name: &str, slot: &Option<T>) -> &mut Self {
        if let (Some(value), Ok(())) = (slot, self.result) {
            self.result = self.write_field(name, value);
            self.has_fields = true;
        }
        self
    }

    fn write_field<T: ModelField>(&mut self, name: &str, value: &T) -> fmt::Result {
        if self.has_fields {
            self.f.write_str(", ")?;
        }
        self.f.write_str(name)?;
        self.f.write_str(": ")?;
        value.field_fmt(self.f)
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|()| self.f.write_str("}"))
    }
}
