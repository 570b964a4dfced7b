use super::{tag, Directive, ErrorSet};

/// The value marking a field that maps to no column.
const IGNORE: &str = "-";

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field in the containing struct
    pub(crate) id: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Rendered `key:"value"` directives, in attribute order
    pub(crate) tag: String,

    /// True if the field has a column and therefore needs accessors
    pub(crate) mapped: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut directives = vec![];

        for attr in &field.attrs {
            let Some(directive) = Directive::from_attr(attr) else {
                continue;
            };

            match attr.parse_args::<syn::LitStr>() {
                Ok(lit) => directives.push((directive, lit.value())),
                Err(_) => errs.push(syn::Error::new_spanned(
                    attr,
                    format!("expected `#[{}(\"...\")]`", directive.key()),
                )),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        // The first `sql` directive decides the column.
        let mapped = directives
            .iter()
            .find(|(directive, _)| *directive == Directive::Sql)
            .is_some_and(|(_, value)| !value.is_empty() && value != IGNORE);

        Ok(Self {
            id,
            ident: ident.clone(),
            ty: field.ty.clone(),
            tag: tag::render(directives.iter().map(|(d, value)| (*d, value.as_str()))),
            mapped,
        })
    }
}
