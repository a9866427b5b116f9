use proc_macro::TokenStream;

mod model;
mod util;

/// Implement `modelbind::model::Model` for a struct with named fields.
///
/// One field must be marked `#[model(state)]` and have type `ModelState`.
/// Field attributes: `skip`, `timestamp`, `nested`, `union = "a|b"`,
/// `kind = "..."`, `rename = "..."`. Struct attribute: `name = "..."`.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive_model(input.into()).into()
}
