// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Enumerations carried on the wire as fixed SCREAMING_SNAKE_CASE literals.

/// Declares an enum whose variants serialize as fixed string literals.
///
/// Generates:
/// - the enum itself with serde renames for every variant
/// - `ALL`, listing every variant in declaration order
/// - `as_str`, returning the wire literal
/// - `FromStr`, rejecting unknown literals with `DomainError::InvalidEnumValue`
/// - `Display`, writing the wire literal
///
/// Attributes on the enum and its variants pass through, so a default can
/// be declared with `#[derive(Default)]` and `#[default]`.
///
/// ```ignore
/// wire_enum! {
///     /// Lifecycle of a thing.
///     pub enum ThingStatus {
///         Draft => "DRAFT",
///         Live => "LIVE",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $literal:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire literal for this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok(Self::$variant),)+
                    _ => Err($crate::DomainError::InvalidEnumValue {
                        enum_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}
