/// A field attribute that becomes one `key:"value"` directive of the
/// field's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Directive {
    /// `#[sql("name,type,...")]`
    Sql,

    /// `#[sqlindex("name")]`
    SqlIndex,

    /// `#[sqlforeignkey("table(column)")]`
    SqlForeignKey,
}

impl Directive {
    pub(crate) const ALL: [Self; 3] = [Self::Sql, Self::SqlIndex, Self::SqlForeignKey];

    pub(crate) fn key(self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::SqlIndex => "sqlindex",
            Self::SqlForeignKey => "sqlforeignkey",
        }
    }

    pub(crate) fn from_attr(attr: &syn::Attribute) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|directive| attr.path().is_ident(directive.key()))
    }
}

/// Render directives as a tag string, quoting and escaping each value.
pub(super) fn render<'a>(directives: impl IntoIterator<Item = (Directive, &'a str)>) -> String {
    let mut tag = String::new();

    for (directive, value) in directives {
        if !tag.is_empty() {
            tag.push(' ');
        }

        tag.push_str(directive.key());
        tag.push_str(":\"");

        for c in value.chars() {
            match c {
                '"' => tag.push_str("\\\""),
                '\\' => tag.push_str("\\\\"),
                '\n' => tag.push_str("\\n"),
                '\r' => tag.push_str("\\r"),
                '\t' => tag.push_str("\\t"),
                c => tag.push(c),
            }
        }

        tag.push('"');
    }

    tag
}
