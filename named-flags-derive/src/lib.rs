use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{
    Data, DeriveInput, Error, Fields, FieldsNamed, Ident, Result, ext::IdentExt,
    parse_macro_input, spanned::Spanned,
};

// =============================================================================
// NamedFlags derive
// =============================================================================

/// Implements `Reflect` and `FlagRecord` for a struct of `bool` fields.
///
/// Field `i` in declaration order is bit `i`. Non-struct input, tuple and
/// unit structs and generic types are rejected here. Field types and the
/// field count are checked in `const` assertions, so aliases of `bool` are
/// accepted and the count is compared against the target's word width.
#[proc_macro_derive(NamedFlags)]
pub fn derive_named_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_named_flags_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_named_flags_impl(input: DeriveInput) -> Result<TokenStream2> {
    reject_generics(&input, "NamedFlags")?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields,
            _ => {
                return Err(Error::new_spanned(
                    &input,
                    "NamedFlags requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input,
                "NamedFlags can only be derived for structs",
            ));
        }
    };

    let flags: Vec<&Ident> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .collect();

    // Aliases of `bool` are accepted, so the check goes through the field's
    // reflected kind rather than its spelling.
    let bool_checks = fields.named.iter().zip(&flags).map(|(field, ident)| {
        let ty = &field.ty;
        let msg = format!(
            "NamedFlags fields must be `bool`: `{}` is `{}`",
            ident.unraw(),
            quote!(#ty)
        );
        quote_spanned! {ty.span()=>
            const _: () = assert!(
                matches!(
                    <#ty as ::named_flags::Reflect>::SHAPE.kind(),
                    ::named_flags::Kind::Bool
                ),
                #msg
            );
        }
    });

    let name = &input.ident;
    let count = flags.len();
    let too_many = format!("`{}` has more fields than a usize has bits", name);

    let reflect = generate_reflect(name, &input.data)?;
    let indices = 0..count;
    let set_indices = 0..count;

    Ok(quote! {
        #reflect

        const _: () = assert!(#count <= ::named_flags::WORD_BITS, #too_many);
        #(#bool_checks)*

        impl ::named_flags::FlagRecord for #name {
            #[inline]
            fn cleared() -> Self {
                Self {
                    #(#flags: false,)*
                }
            }

            #[inline]
            fn flag(&self, index: usize) -> bool {
                match index {
                    #(#indices => self.#flags,)*
                    _ => false,
                }
            }

            #[inline]
            #[allow(unused_variables)]
            fn set_flag(&mut self, index: usize, value: bool) {
                match index {
                    #(#set_indices => self.#flags = value,)*
                    _ => {}
                }
            }
        }
    })
}

// =============================================================================
// Reflect derive
// =============================================================================

/// Implements `Reflect` for any struct or enum.
///
/// Never rejects a shape: whether the type can be encoded as flags is left
/// to `named_flags::validate`.
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_reflect_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_reflect_impl(input: DeriveInput) -> Result<TokenStream2> {
    reject_generics(&input, "Reflect")?;
    if let Data::Union(_) = &input.data {
        return Err(Error::new_spanned(
            &input,
            "Reflect cannot be derived for unions",
        ));
    }
    generate_reflect(&input.ident, &input.data)
}

fn generate_reflect(name: &Ident, data: &Data) -> Result<TokenStream2> {
    let name_str = name.unraw().to_string();

    let shape = match data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => record_shape(&name_str, fields),
            Fields::Unnamed(_) => leaf_shape(&name_str, "Tuple"),
            Fields::Unit => leaf_shape(&name_str, "Unit"),
        },
        Data::Enum(_) => leaf_shape(&name_str, "Enum"),
        Data::Union(_) => {
            return Err(Error::new_spanned(name, "unions have no shape"));
        }
    };

    Ok(quote! {
        impl ::named_flags::Reflect for #name {
            const SHAPE: ::named_flags::Shape<'static> = #shape;
        }
    })
}

fn record_shape(name: &str, fields: &FieldsNamed) -> TokenStream2 {
    let fields = fields.named.iter().map(|field| {
        let ty = &field.ty;
        let field_name = field
            .ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .unwrap_or_default();
        quote! { ::named_flags::Field::of::<#ty>(#field_name) }
    });

    quote! {
        {
            const FIELDS: &[::named_flags::Field<'static>] = &[#(#fields),*];
            ::named_flags::Shape::record(#name, FIELDS)
        }
    }
}

fn leaf_shape(name: &str, kind: &str) -> TokenStream2 {
    let kind = Ident::new(kind, proc_macro2::Span::call_site());
    quote! {
        ::named_flags::Shape::leaf(#name, ::named_flags::Kind::#kind)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn reject_generics(input: &DeriveInput, derive: &str) -> Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(Error::new_spanned(
            &input.generics,
            format!("{} cannot be derived for generic types", derive),
        ))
    }
}
