extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `rowmap::Record` for a struct with named fields.
///
/// Field attributes become the field's directives, in the order written:
/// `#[sql("name,type[,pk|unique|null|not_null]")]` maps the field to a
/// column (`#[sql("-")]` skips it), `#[sqlindex("name")]` adds it to an
/// index and `#[sqlforeignkey("table(column)")]` to a foreign key. The
/// struct attribute `#[table = "name"]` overrides the table name.
#[proc_macro_derive(Record, attributes(sql, sqlindex, sqlforeignkey, table))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
