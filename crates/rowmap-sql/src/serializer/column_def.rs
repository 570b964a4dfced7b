use super::{Comma, Delimited, Formatter, Ident, Params, ToSql};

use crate::stmt;
use rowmap_core::schema::{Constraints, ForeignKey};

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, " " Ident(&self.name));

        if !self.ty.is_empty() {
            let ty = &self.ty;
            fmt!(f, " " ty);
        }

        if !self.constraints.is_empty() {
            fmt!(f, " " self.constraints);
        }
    }
}

impl ToSql for Constraints {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Delimited(self.keywords(), " "));
    }
}

impl ToSql for &ForeignKey {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let table = Ident(&self.reference_table);
        let reference_columns = Comma(self.reference_columns.iter().map(Ident));

        fmt!(f, " FOREIGN KEY (" columns ") REFERENCES " table "(" reference_columns ")");
    }
}
