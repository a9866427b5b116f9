use crate::util::{declared_type_name, is_path_ident, last_ident, option_inner};
use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use modelbind_utils::case::snake_to_camel;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, Generics, Ident, Type};

///
/// ModelInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(model), supports(struct_named))]
struct ModelInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, ModelField>,

    /// Scope name; defaults to the struct ident.
    #[darling(default)]
    name: Option<String>,
}

///
/// ModelField
///

#[derive(FromField)]
#[darling(attributes(model))]
struct ModelField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    state: bool,
    #[darling(default)]
    skip: bool,
    #[darling(default)]
    timestamp: bool,
    #[darling(default)]
    nested: bool,
    #[darling(default)]
    union: Option<String>,
    #[darling(default)]
    kind: Option<String>,
    #[darling(default)]
    rename: Option<String>,
}

///
/// Role
///

enum Role {
    Leaf,
    Union,
    Nested { optional: bool },
    Skipped,
}

///
/// Property
/// One declared field after attribute validation.
///

struct Property {
    ident: Ident,
    name: String,
    role: Role,
    declared: TokenStream,
    timestamp: bool,
}

impl Property {
    fn from_field(ident: Ident, field: ModelField) -> Result<Self, Error> {
        let name = field.rename.unwrap_or_else(|| {
            let raw = ident.to_string();
            snake_to_camel(raw.trim_start_matches("r#"))
        });

        if field.nested && (field.union.is_some() || field.kind.is_some() || field.timestamp) {
            return Err(Error::new_spanned(
                &ident,
                "nested fields cannot also declare `union`, `kind` or `timestamp`",
            ));
        }
        if field.union.is_some() && field.kind.is_some() {
            return Err(Error::new_spanned(
                &ident,
                "`union` and `kind` cannot be combined",
            ));
        }

        let (role, declared) = if let Some(union) = &field.union {
            if !is_path_ident(&field.ty, "Value") {
                return Err(Error::new_spanned(
                    &field.ty,
                    "union fields must have type `Value`",
                ));
            }

            let members: Vec<&str> = union
                .split('|')
                .map(str::trim)
                .filter(|member| !member.is_empty())
                .collect();
            if members.is_empty() {
                return Err(Error::new_spanned(&ident, "union declares no member types"));
            }

            (
                Role::Union,
                quote!(::modelbind::model::DeclaredType::Union(&[#(#members),*])),
            )
        } else if field.nested {
            let optional = option_inner(&field.ty);
            let Some(model) = last_ident(optional.unwrap_or(&field.ty)) else {
                return Err(Error::new_spanned(
                    &field.ty,
                    "nested fields must be a model type or `Option` of one",
                ));
            };
            let model = model.to_string();

            (
                Role::Nested {
                    optional: optional.is_some(),
                },
                quote!(::modelbind::model::DeclaredType::Model(#model)),
            )
        } else {
            let name = match &field.kind {
                Some(kind) => (!kind.is_empty()).then(|| kind.clone()),
                None => declared_type_name(&field.ty),
            };
            let declared = match name {
                Some(name) => quote!(::modelbind::model::DeclaredType::Named(#name)),
                None => quote!(::modelbind::model::DeclaredType::None),
            };

            (Role::Leaf, declared)
        };

        let role = if field.skip { Role::Skipped } else { role };

        Ok(Self {
            ident,
            name,
            role,
            declared,
            timestamp: field.timestamp,
        })
    }

    fn field_model(&self) -> TokenStream {
        let Self {
            name,
            declared,
            timestamp,
            ..
        } = self;
        let collect = !matches!(self.role, Role::Skipped);

        quote! {
            ::modelbind::model::FieldModel {
                name: #name,
                declared: #declared,
                timestamp: #timestamp,
                collect: #collect,
            }
        }
    }

    fn read_arm(&self) -> Option<TokenStream> {
        let Self { ident, name, .. } = self;

        match self.role {
            Role::Leaf | Role::Union => Some(quote! {
                #name => ::core::option::Option::Some(
                    ::modelbind::traits::FieldValue::to_value(&self.#ident)
                ),
            }),
            Role::Nested { optional: true } => Some(quote! {
                #name => self.#ident.is_none().then_some(::modelbind::value::Value::Null),
            }),
            Role::Nested { optional: false } | Role::Skipped => None,
        }
    }

    fn write_arm(&self, index: usize) -> Option<TokenStream> {
        let Self { ident, name, .. } = self;
        let field = quote!(&Self::MODEL_FIELDS[#index]);

        match self.role {
            Role::Leaf => Some(quote! {
                #name => ::modelbind::model::assign(&mut self.#ident, value, Self::MODEL_PATH, #field),
            }),
            Role::Union => Some(quote! {
                #name => ::modelbind::model::assign_union(&mut self.#ident, value, Self::MODEL_PATH, #field),
            }),
            Role::Nested { optional: true } => Some(quote! {
                #name => if value.is_null() {
                    self.#ident = ::core::option::Option::None;
                    ::core::result::Result::Ok(::modelbind::model::FieldWrite::Written)
                } else {
                    ::core::result::Result::Err(
                        ::modelbind::model::reject(&value, Self::MODEL_PATH, #field)
                    )
                },
            }),
            Role::Nested { optional: false } => Some(quote! {
                #name => ::core::result::Result::Err(
                    ::modelbind::model::reject(&value, Self::MODEL_PATH, #field)
                ),
            }),
            Role::Skipped => None,
        }
    }

    fn nested_arms(&self) -> Option<(TokenStream, TokenStream)> {
        let Self { ident, name, .. } = self;

        match self.role {
            Role::Nested { optional: true } => Some((
                quote! {
                    #name => self.#ident
                        .as_ref()
                        .map(|model| model as &dyn ::modelbind::model::Model),
                },
                quote! {
                    #name => self.#ident
                        .as_mut()
                        .map(|model| model as &mut dyn ::modelbind::model::Model),
                },
            )),
            Role::Nested { optional: false } => Some((
                quote! {
                    #name => ::core::option::Option::Some(
                        &self.#ident as &dyn ::modelbind::model::Model
                    ),
                },
                quote! {
                    #name => ::core::option::Option::Some(
                        &mut self.#ident as &mut dyn ::modelbind::model::Model
                    ),
                },
            )),
            _ => None,
        }
    }
}

// derive_model
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let model = match ModelInput::from_derive_input(&input) {
        Ok(model) => model,
        Err(err) => return err.write_errors(),
    };

    expand(model).unwrap_or_else(|err| err.to_compile_error())
}

fn expand(model: ModelInput) -> Result<TokenStream, Error> {
    let ModelInput {
        ident,
        generics,
        data,
        name,
    } = model;
    let name = name.unwrap_or_else(|| ident.to_string());
    let fields = data.take_struct().map(|fields| fields.fields).unwrap_or_default();

    let mut state = None;
    let mut properties = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(field_ident) = field.ident.clone() else {
            continue;
        };

        if field.state {
            if state.is_some() {
                return Err(Error::new_spanned(
                    &field_ident,
                    "only one field can be marked #[model(state)]",
                ));
            }
            state = Some(field_ident);
            continue;
        }

        properties.push(Property::from_field(field_ident, field)?);
    }

    let Some(state) = state else {
        return Err(Error::new_spanned(
            &ident,
            "Model needs one `ModelState` field marked #[model(state)]",
        ));
    };

    let field_models = properties.iter().map(Property::field_model);
    let read_arms = properties.iter().filter_map(Property::read_arm);
    let write_arms = properties
        .iter()
        .enumerate()
        .filter_map(|(index, property)| property.write_arm(index));
    let (nested_arms, nested_mut_arms): (Vec<_>, Vec<_>) =
        properties.iter().filter_map(Property::nested_arms).unzip();

    let ident_str = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #[doc(hidden)]
            pub const MODEL_PATH: &'static str = concat!(module_path!(), "::", #ident_str);

            #[doc(hidden)]
            pub const MODEL_FIELDS: &'static [::modelbind::model::FieldModel] = &[
                #(#field_models),*
            ];
        }

        impl #impl_generics ::modelbind::model::Model for #ident #ty_generics #where_clause {
            fn model_name(&self) -> &str {
                #name
            }

            fn model_path(&self) -> &str {
                Self::MODEL_PATH
            }

            fn fields(&self) -> &'static [::modelbind::model::FieldModel] {
                Self::MODEL_FIELDS
            }

            fn state(&self) -> &::modelbind::model::ModelState {
                &self.#state
            }

            fn state_mut(&mut self) -> &mut ::modelbind::model::ModelState {
                &mut self.#state
            }

            fn read_field(&self, name: &str) -> ::core::option::Option<::modelbind::value::Value> {
                match name {
                    #(#read_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn write_field(
                &mut self,
                name: &str,
                value: ::modelbind::value::Value,
            ) -> ::core::result::Result<
                ::modelbind::model::FieldWrite,
                ::modelbind::error::TypeMismatchError,
            > {
                match name {
                    #(#write_arms)*
                    _ => ::core::result::Result::Ok(::modelbind::model::FieldWrite::Vacant(value)),
                }
            }

            fn nested(&self, name: &str) -> ::core::option::Option<&dyn ::modelbind::model::Model> {
                match name {
                    #(#nested_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn nested_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn ::modelbind::model::Model> {
                match name {
                    #(#nested_mut_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
