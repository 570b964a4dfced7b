#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// Optional table name override
    pub(crate) table: Option<syn::LitStr>,
}

impl RecordAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut ret = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("table") {
                continue;
            }

            if ret.table.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
            }

            let syn::Meta::NameValue(meta) = &attr.meta else {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `table = \"table_name\"`",
                ));
            };

            let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) = &meta.value
            else {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `table = \"table_name\"`",
                ));
            };

            if lit.value().is_empty() {
                return Err(syn::Error::new_spanned(lit, "table name must not be empty"));
            }

            ret.table = Some(lit.clone());
        }

        Ok(ret)
    }
}
