use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;
        let name = ident.to_string();

        let table = match &self.record.attr.table {
            Some(table) => quote!(#rowmap::Option::Some(#table)),
            None => quote!(#rowmap::Option::None),
        };

        let field_defs = self.record.fields.iter().map(|field| {
            let name = field.ident.to_string();
            let tag = &field.tag;
            quote!(#rowmap::FieldDef::new(#name, #tag))
        });

        let get_body = self.expand_get_body();
        let set_body = self.expand_set_body();

        quote! {
            impl #rowmap::Record for #ident {
                const NAME: &'static str = #name;

                const TABLE: #rowmap::Option<&'static str> = #table;

                const FIELDS: &'static [#rowmap::FieldDef] = &[
                    #( #field_defs, )*
                ];

                fn get(&self, field: #rowmap::FieldId) -> #rowmap::Result<#rowmap::Value> {
                    #get_body
                }

                #[allow(unused_variables)]
                fn set(
                    &mut self,
                    field: #rowmap::FieldId,
                    value: #rowmap::Value,
                ) -> #rowmap::Result<()> {
                    #set_body
                }
            }
        }
    }
}
