use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;

/// Derives every model gets, unless the struct already derives them itself.
const MODEL_DERIVES: [&str; 4] = ["Clone", "Copy", "Debug", "PartialEq"];

/// Collect the names of all traits listed in `#[derive(...)]` attributes.
fn existing_derives(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<syn::Path, syn::Token![,]>::parse_terminated)
                .ok()
        })
        .flat_map(|paths| paths.into_iter())
        .filter_map(|path| path.segments.last().map(|s| s.ident.to_string()))
        .collect()
}

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Model fields must be named.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field_type = input.fields.iter().map(|f| f.ty.clone()).next();
    let Some(field_type) = field_type else {
        unreachable!("model has 3 fields");
    };
    if input.fields.iter().any(|f| f.ty != field_type) {
        return quote! {
            compile_error!("All 3 components of a model must have the same type.")
        }
        .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let present = existing_derives(&input.attrs);
    let missing = MODEL_DERIVES
        .iter()
        .filter(|name| !present.iter().any(|p| p == *name))
        .map(|name| syn::Ident::new(name, proc_macro2::Span::call_site()))
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        match syn::Attribute::parse_outer.parse2(quote! { #[derive(#(#missing),*)] }) {
            Ok(attr) => input.attrs.extend(attr),
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color from its 3 components.
            pub const fn new(
                #field1: #field_type,
                #field2: #field_type,
                #field3: #field_type,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the 3 components of this color in declaration order.
            pub fn to_array(&self) -> [#field_type; 3] {
                [self.#field1, self.#field2, self.#field3]
            }
        }

        impl #impl_gen From<[#field_type; 3]> for #struct_name #type_gen #where_clause {
            fn from([#field1, #field2, #field3]: [#field_type; 3]) -> Self {
                Self::new(#field1, #field2, #field3)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for [#field_type; 3] #where_clause {
            fn from(value: #struct_name #type_gen) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
