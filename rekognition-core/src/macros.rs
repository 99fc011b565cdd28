//! Generators for model types.
//!
//! Crates invoking these macros must depend on `serde` with the `derive`
//! feature; the generated code refers to `::serde` directly.

/// Declares a model shape.
///
/// Every member becomes a public `Option<T>` field renamed to its wire name.
/// The macro derives the serde mapping and generates field-complete
/// `PartialEq`/`Eq`/`Hash`, a `{Name: value, ...}` `Display`, and one
/// `with_<field>` builder per member.
///
/// ```ignore
/// shape! {
///     /// Position of a point on an image.
///     pub struct Point {
///         x: f32 => "X",
///         y: f32 => "Y",
///     }
/// }
/// ```
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Wire names of every member, in declaration order.
            pub const FIELD_NAMES: &'static [&'static str] = &[$($wire),*];

            $crate::paste::paste! {
                $(
                    #[doc = "Sets `" $field "` and returns `self`. Lists are appended to, maps extended, other values replaced."]
                    #[must_use]
                    pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                        <$ty as $crate::field::ModelField>::merge(&mut self.$field, value.into());
                        self
                    }
                )*
            }
        }

        impl ::core::cmp::PartialEq for $name {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true $(&& $crate::field::slot_eq(&self.$field, &other.$field))*
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            #[allow(unused_variables)]
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $($crate::field::slot_hash(&self.$field, state);)*
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::field::ShapeFormatter::new(f)
                    $(.field($wire, &self.$field))*
                    .finish()
            }
        }

        impl $crate::field::ModelField for $name {
            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn field_hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(self, state);
            }

            fn field_fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Declares a closed set of wire strings.
///
/// The enum converts from any `&str`/`String`; values outside the set are
/// kept verbatim in `Unrecognized` rather than rejected. It serializes as its
/// wire string.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A wire value outside the known set.
            Unrecognized(String),
        }

        impl $name {
            /// Every known wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),*];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)*
                    Self::Unrecognized(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl ::core::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)*
                    other => Self::Unrecognized(other.to_owned()),
                }
            }
        }

        impl ::core::convert::From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)*
                    _ => Self::Unrecognized(value),
                }
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::core::result::Result<Self, D::Error> {
                <String as ::serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl $crate::field::ModelField for $name {
            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn field_hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(self, state);
            }

            fn field_fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Blob;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::BTreeMap;
    use std::hash::{Hash, Hasher};

    crate::string_enum! {
        pub enum Color {
            Red => "RED",
            Green => "GREEN",
        }
    }

    crate::shape! {
        pub struct Swatch {
            name: String => "Name",
            color: Color => "Color",
            weight: f32 => "Weight",
            payload: Blob => "Payload",
            aliases: Vec<String> => "Aliases",
            labels: BTreeMap<String, String> => "Labels",
        }
    }

    crate::shape! {
        pub struct Nothing {}
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn builders_replace_scalars_and_append_lists() {
        let swatch = Swatch::default()
            .with_name("first")
            .with_name("second")
            .with_aliases(["a".to_string()])
            .with_aliases(vec!["b".to_string()]);
        assert_eq!(swatch.name.as_deref(), Some("second"));
        assert_eq!(swatch.aliases, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn display_lists_present_fields_in_order() {
        let swatch = Swatch::default()
            .with_color("RED")
            .with_name("n")
            .with_weight(0.5f32)
            .with_aliases(["x".to_string(), "y".to_string()])
            .with_labels([("k".to_string(), "v".to_string())]);
        assert_eq!(
            swatch.to_string(),
            "{Name: n, Color: RED, Weight: 0.5, Aliases: [x, y], Labels: {k=v}}"
        );
        assert_eq!(Nothing::default().to_string(), "{}");
    }

    #[test]
    fn serde_uses_wire_names_and_skips_absent() {
        let swatch = Swatch::default()
            .with_name("n")
            .with_color(Color::Green)
            .with_payload(vec![1u8, 2, 3]);
        let json = serde_json::to_value(&swatch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Name": "n", "Color": "GREEN", "Payload": "AQID"})
        );
        let back: Swatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, swatch);
    }

    #[test]
    fn equality_and_hash_are_field_complete() {
        let a = Swatch::default().with_name("n").with_weight(f32::NAN);
        let b = Swatch::default().with_name("n").with_weight(f32::NAN);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, b.clone().with_color(Color::Red));
    }

    #[test]
    fn enum_keeps_unknown_values() {
        let c = Color::from("BLUE");
        assert_eq!(c, Color::Unrecognized("BLUE".into()));
        assert!(!c.is_known());
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"BLUE\"");
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
        assert_eq!(Color::VALUES, &["RED", "GREEN"]);
    }
}
