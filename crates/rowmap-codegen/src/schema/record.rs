use super::{ErrorSet, Field, RecordAttr};

#[derive(Debug)]
pub(crate) struct Record {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Struct-level attributes
    pub(crate) attr: RecordAttr,

    /// All struct fields, mapped or not, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "generic records are not supported",
            ));
        }

        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(ast, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        let attr = match RecordAttr::from_ast(&ast.attrs) {
            Ok(attr) => Some(attr),
            Err(err) => {
                errs.push(err);
                None
            }
        };

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            attr: attr.unwrap_or_default(),
            fields,
        })
    }
}
