use crate::FieldId;

use std::{fmt, ops};

/// One persisted record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The record field backing the column.
    pub field: FieldId,

    /// Raw DDL type text, emitted verbatim.
    pub data_type: String,

    /// UNIQUE / NULL / NOT NULL constraints.
    pub constraints: Constraints,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,
}

/// Bit-set over the column constraints a directive can request.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Constraints(u8);

impl Constraints {
    pub const NONE: Self = Self(0);
    pub const UNIQUE: Self = Self(1 << 0);
    pub const NULL: Self = Self(1 << 1);
    pub const NOT_NULL: Self = Self(1 << 2);

    /// Rendering order of the SQL keywords.
    const KEYWORDS: [(Self, &'static str); 3] = [
        (Self::UNIQUE, "UNIQUE"),
        (Self::NULL, "NULL"),
        (Self::NOT_NULL, "NOT NULL"),
    ];

    /// Resolve a constraint token from a column directive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "unique" => Some(Self::UNIQUE),
            "not_null" => Some(Self::NOT_NULL),
            "null" => Some(Self::NULL),
            _ => None,
        }
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// SQL keywords for the set constraints, in UNIQUE, NULL, NOT NULL order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        Self::KEYWORDS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| keyword)
    }
}

impl ops::BitOr for Constraints {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Constraints {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for keyword in self.keywords() {
            write!(f, "{s}{keyword}")?;
            s = " ";
        }
        Ok(())
    }
}

impl fmt::Debug for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constraints({self})")
    }
}
