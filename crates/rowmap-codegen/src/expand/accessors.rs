use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Match arms reading each mapped field by index.
    pub(super) fn expand_get_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        let arms = self.record.fields.iter().filter(|f| f.mapped).map(|field| {
            let id = field.id;
            let ident = &field.ident;
            let ty = &field.ty;

            quote!(#id => #rowmap::Result::Ok(<#ty as #rowmap::Primitive>::to_value(&self.#ident)),)
        });

        quote! {
            match field.0 {
                #( #arms )*
                _ => #rowmap::Result::Err(#rowmap::unknown_field::<Self>(field)),
            }
        }
    }

    /// Match arms loading a value into each mapped field by index.
    pub(super) fn expand_set_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        let arms = self.record.fields.iter().filter(|f| f.mapped).map(|field| {
            let id = field.id;
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #id => {
                    self.#ident = <#ty as #rowmap::Primitive>::load(value)?;
                    #rowmap::Result::Ok(())
                }
            }
        });

        quote! {
            match field.0 {
                #( #arms )*
                _ => #rowmap::Result::Err(#rowmap::unknown_field::<Self>(field)),
            }
        }
    }
}
