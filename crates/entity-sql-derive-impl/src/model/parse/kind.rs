// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust type to semantic SQL kind mapping.
//!
//! | Rust Type | Kind |
//! |-----------|------|
//! | `String`, `str`, `&str` | `Text` |
//! | `i8`, `u8` | `TinyInt` |
//! | `i16`, `u16` | `SmallInt` |
//! | `i32`, `u32` | `Integer` |
//! | `i64`, `u64`, `isize`, `usize` | `BigInt` |
//! | `f64` | `Double` |
//! | `f32` | `Float` |
//! | `bool` | `Boolean` |
//! | `Decimal` | `Decimal` |
//! | `NaiveDate` | `Date` |
//! | `NaiveTime` | `Time` |
//! | `NaiveDateTime`, `DateTime<Tz>` | `Timestamp` |
//! | `Option<T>` | kind of `T` |
//! | anything else | `Other("<type>")` |
//!
//! Matching looks at the last path segment only, so `chrono::NaiveDate` and
//! `NaiveDate` map the same way.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericArgument, PathArguments, Type};

/// Semantic SQL kind of a field, emitted as `::entity_sql::SqlKind::*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Character data.
    Text,
    /// 8-bit integer.
    TinyInt,
    /// 16-bit integer.
    SmallInt,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// `f64`.
    Double,
    /// `f32`.
    Float,
    /// `bool`.
    Boolean,
    /// Fixed-point decimal.
    Decimal,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    Timestamp,
    /// Unmapped type, carrying its rendered name.
    Other(String)
}

impl FieldKind {
    /// Classify a field type.
    #[must_use]
    pub fn from_type(ty: &Type) -> Self {
        if let Some(inner) = extract_option_inner(ty) {
            return Self::from_type(inner);
        }

        match ty {
            Type::Reference(reference) => Self::from_type(&reference.elem),
            Type::Group(group) => Self::from_type(&group.elem),
            Type::Paren(paren) => Self::from_type(&paren.elem),
            Type::Path(type_path) => {
                let Some(segment) = type_path.path.segments.last() else {
                    return Self::other(ty);
                };
                match segment.ident.to_string().as_str() {
                    "String" | "str" => Self::Text,
                    "i8" | "u8" => Self::TinyInt,
                    "i16" | "u16" => Self::SmallInt,
                    "i32" | "u32" => Self::Integer,
                    "i64" | "u64" | "isize" | "usize" => Self::BigInt,
                    "f64" => Self::Double,
                    "f32" => Self::Float,
                    "bool" => Self::Boolean,
                    "Decimal" => Self::Decimal,
                    "NaiveDate" => Self::Date,
                    "NaiveTime" => Self::Time,
                    "NaiveDateTime" | "DateTime" => Self::Timestamp,
                    _ => Self::other(ty)
                }
            }
            _ => Self::other(ty)
        }
    }

    fn other(ty: &Type) -> Self {
        let rendered = ty.to_token_stream().to_string().replace(' ', "");
        Self::Other(rendered)
    }
}

impl ToTokens for FieldKind {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let kind = match self {
            Self::Text => quote!(Text),
            Self::TinyInt => quote!(TinyInt),
            Self::SmallInt => quote!(SmallInt),
            Self::Integer => quote!(Integer),
            Self::BigInt => quote!(BigInt),
            Self::Double => quote!(Double),
            Self::Float => quote!(Float),
            Self::Boolean => quote!(Boolean),
            Self::Decimal => quote!(Decimal),
            Self::Date => quote!(Date),
            Self::Time => quote!(Time),
            Self::Timestamp => quote!(Timestamp),
            Self::Other(name) => quote!(Other(#name))
        };
        tokens.extend(quote!(::entity_sql::SqlKind::#kind));
    }
}

/// Extract the inner type from `Option<T>`.
fn extract_option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn kind(ty: Type) -> FieldKind {
        FieldKind::from_type(&ty)
    }

    #[test]
    fn text() {
        assert_eq!(kind(parse_quote!(String)), FieldKind::Text);
        assert_eq!(kind(parse_quote!(&'static str)), FieldKind::Text);
        assert_eq!(kind(parse_quote!(std::string::String)), FieldKind::Text);
    }

    #[test]
    fn integers() {
        assert_eq!(kind(parse_quote!(i8)), FieldKind::TinyInt);
        assert_eq!(kind(parse_quote!(u16)), FieldKind::SmallInt);
        assert_eq!(kind(parse_quote!(i32)), FieldKind::Integer);
        assert_eq!(kind(parse_quote!(u64)), FieldKind::BigInt);
        assert_eq!(kind(parse_quote!(usize)), FieldKind::BigInt);
    }

    #[test]
    fn floats_and_bool() {
        assert_eq!(kind(parse_quote!(f64)), FieldKind::Double);
        assert_eq!(kind(parse_quote!(f32)), FieldKind::Float);
        assert_eq!(kind(parse_quote!(bool)), FieldKind::Boolean);
    }

    #[test]
    fn temporal_and_decimal() {
        assert_eq!(kind(parse_quote!(chrono::NaiveDate)), FieldKind::Date);
        assert_eq!(kind(parse_quote!(NaiveTime)), FieldKind::Time);
        assert_eq!(kind(parse_quote!(NaiveDateTime)), FieldKind::Timestamp);
        assert_eq!(kind(parse_quote!(DateTime<Utc>)), FieldKind::Timestamp);
        assert_eq!(kind(parse_quote!(rust_decimal::Decimal)), FieldKind::Decimal);
    }

    #[test]
    fn option_unwraps() {
        assert_eq!(kind(parse_quote!(Option<String>)), FieldKind::Text);
        assert_eq!(kind(parse_quote!(Option<i64>)), FieldKind::BigInt);
    }

    #[test]
    fn unknown_types_keep_their_name() {
        assert_eq!(
            kind(parse_quote!(Vec<u8>)),
            FieldKind::Other("Vec<u8>".to_string())
        );
        assert_eq!(
            kind(parse_quote!(uuid::Uuid)),
            FieldKind::Other("uuid::Uuid".to_string())
        );
    }

    #[test]
    fn tokens_point_at_facade() {
        let render = |kind: FieldKind| kind.to_token_stream().to_string().replace(' ', "");
        assert_eq!(render(FieldKind::BigInt), "::entity_sql::SqlKind::BigInt");
        assert_eq!(
            render(FieldKind::Other("Uuid".to_string())),
            "::entity_sql::SqlKind::Other(\"Uuid\")"
        );
    }
}
