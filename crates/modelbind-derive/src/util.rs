use syn::{GenericArgument, Ident, PathArguments, Type};

/// Last path segment of a type path (`a::b::Foo<T>` → `Foo`).
pub fn last_ident(ty: &Type) -> Option<&Ident> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            type_path.path.segments.last().map(|segment| &segment.ident)
        }
        Type::Group(group) => last_ident(&group.elem),
        Type::Paren(paren) => last_ident(&paren.elem),
        _ => None,
    }
}

pub fn is_path_ident(ty: &Type, ident: &str) -> bool {
    last_ident(ty).is_some_and(|last| last == ident)
}

/// `T` for `Option<T>`, otherwise `None`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

/// Declared type name inferred from a Rust field type.
///
/// `Option<T>` declares `T`. Returns `None` for untyped fields (`Value`, or
/// types without a path).
pub fn declared_type_name(ty: &Type) -> Option<String> {
    let ty = option_inner(ty).unwrap_or(ty);
    let ident = last_ident(ty)?.to_string();

    let name = match ident.as_str() {
        "bool" => "bool",
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" => "int",
        "f32" | "f64" => "float",
        "String" | "str" => "string",
        "Vec" | "VecDeque" | "ValueMap" | "IndexMap" | "HashMap" | "BTreeMap" => "array",
        "Object" => "object",
        "Value" => return None,
        _ => return Some(ident),
    };

    Some(name.to_string())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::parse_quote;

    #[test]
    fn option_inner_unwraps_one_level() {
        let ty: Type = parse_quote!(Option<Address>);
        let inner = option_inner(&ty).map(|inner| inner.to_token_stream().to_string());

        assert_eq!(inner.as_deref(), Some("Address"));
        assert!(option_inner(&parse_quote!(Address)).is_none());
    }

    #[test]
    fn declared_names_follow_the_rust_type() {
        let cases: [(Type, Option<&str>); 12] = [
            (parse_quote!(bool), Some("bool")),
            (parse_quote!(i64), Some("int")),
            (parse_quote!(usize), Some("int")),
            (parse_quote!(Option<u32>), Some("int")),
            (parse_quote!(f64), Some("float")),
            (parse_quote!(String), Some("string")),
            (parse_quote!(Vec<Value>), Some("array")),
            (parse_quote!(VecDeque<u8>), Some("array")),
            (parse_quote!(BTreeMap<String, i64>), Some("array")),
            (parse_quote!(modelbind::value::Object), Some("object")),
            (parse_quote!(Value), None),
            (parse_quote!(chrono::NaiveDate), Some("NaiveDate")),
        ];

        for (ty, expected) in cases {
            assert_eq!(declared_type_name(&ty).as_deref(), expected);
        }
    }

    #[test]
    fn references_are_untyped() {
        let ty: Type = parse_quote!(&'static str);

        assert_eq!(declared_type_name(&ty), None);
        assert!(!is_path_ident(&ty, "str"));
    }
}
