use super::{And, Comma, Delimited, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

/// Separates the definitions of a CREATE TABLE statement.
const DEFINITION_SEPARATOR: &str = ",\n";

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

/// One entry in the parenthesized body of a CREATE TABLE statement.
enum Definition<'a> {
    Column(&'a stmt::ColumnDef),
    PrimaryKey(&'a stmt::CreateTable),
    ForeignKey(&'a rowmap_core::schema::ForeignKey),
}

impl ToSql for Definition<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Definition::Column(column) => column.to_sql(f),
            Definition::PrimaryKey(stmt) => {
                let name = Ident(&stmt.name);
                let columns = Comma(stmt.primary_key.iter().map(Ident));
                fmt!(f, " CONSTRAINT " name "_pk PRIMARY KEY(" columns ")");
            }
            Definition::ForeignKey(foreign_key) => foreign_key.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);

        let primary_key = (!self.primary_key.is_empty()).then_some(Definition::PrimaryKey(self));
        let definitions = self
            .columns
            .iter()
            .map(Definition::Column)
            .chain(primary_key)
            .chain(self.foreign_keys.iter().map(Definition::ForeignKey));

        fmt!(
            f, "CREATE TABLE IF NOT EXISTS " name " (\n" Delimited(definitions, DEFINITION_SEPARATOR) "\n)"
        );
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let index_name = Ident(&self.name);
        let table_name = Ident(&self.on);
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(f, "CREATE INDEX " index_name " ON " table_name " (" columns ")");
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.into);
        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table_name " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let assignments = Comma(&self.assignments);

        fmt!(f, "UPDATE " table_name " SET " assignments self.filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(&self.column);
        fmt!(f, column " = " self.value);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.from);
        fmt!(f, "DELETE FROM " table_name self.filter);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.from);
        fmt!(f, "SELECT * FROM " table_name self.filter);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if self.is_empty() {
            return;
        }

        let conditions = And(self.conditions.iter().map(|(column, value)| Condition(column, value)));
        fmt!(f, " WHERE " conditions);
    }
}

/// `column = ?`
struct Condition<'a>(&'a str, &'a rowmap_core::Value);

impl ToSql for Condition<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = " self.1);
    }
}
