/// Raw field annotation: space separated `key:"value"` directives.
///
/// Values are double-quoted and may contain backslash escapes. A key may
/// appear more than once; every occurrence is kept in encounter order.
///
/// Parsing is lenient: the scan stops silently at the first malformed
/// directive (missing colon, unquoted value, unterminated quote, or a value
/// that fails to unescape). Directives before the malformation are still
/// visible, everything after it is dropped. Existing annotations rely on this,
/// so it is not reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a>(pub &'a str);

impl<'a> Tag<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// All values attached to `key`; empty if the key never occurs.
    pub fn get(&self, key: &str) -> Vec<String> {
        self.lookup(key).unwrap_or_default()
    }

    /// All values attached to `key`, or `None` if the key never occurs.
    ///
    /// `Some` with an empty list means the key was seen but its first value
    /// could not be unescaped, which also ends the scan.
    pub fn lookup(&self, key: &str) -> Option<Vec<String>> {
        let mut found = false;
        let mut values = vec![];

        for (name, quoted) in self.directives() {
            if name != key {
                continue;
            }

            found = true;

            match unquote(quoted) {
                Some(value) => values.push(value),
                None => break,
            }
        }

        found.then_some(values)
    }

    /// Iterate the `(key, quoted value)` pairs up to the first malformation.
    pub fn directives(&self) -> Directives<'a> {
        Directives { rest: self.0 }
    }
}

/// Iterator over well-formed directives, see [`Tag::directives`].
#[derive(Debug, Clone)]
pub struct Directives<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Directives<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.rest.trim_start_matches(' ');
        let bytes = tag.as_bytes();

        // Scan to colon. A space, a quote or a control character ends the key.
        let mut i = 0;
        while i < bytes.len()
            && bytes[i] > b' '
            && bytes[i] != b':'
            && bytes[i] != b'"'
            && bytes[i] != 0x7f
        {
            i += 1;
        }

        if i == 0 || i + 1 >= bytes.len() || bytes[i] != b':' || bytes[i + 1] != b'"' {
            self.rest = "";
            return None;
        }

        let name = &tag[..i];
        let tag = &tag[i + 1..];
        let bytes = tag.as_bytes();

        // Scan the quoted value, stepping over escaped characters.
        let mut i = 1;
        while i < bytes.len() && bytes[i] != b'"' {
            if bytes[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }

        if i >= bytes.len() {
            self.rest = "";
            return None;
        }

        self.rest = &tag[i + 1..];
        Some((name, &tag[..i + 1]))
    }
}

/// Strip the surrounding quotes and resolve escape sequences.
fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;

    if inner.contains('\n') {
        return None;
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '"' {
            return None;
        }

        if c != '\\' {
            out.push(c);
            continue;
        }

        let escaped = match chars.next()? {
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0b}',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            'x' => ascii_from_radix(&mut chars, 2, 16)?,
            'u' => char_from_radix(&mut chars, 4, 16)?,
            'U' => char_from_radix(&mut chars, 8, 16)?,
            first @ '0'..='7' => {
                let rest: String = chars.by_ref().take(2).collect();
                let digits = format!("{first}{rest}");
                if digits.len() != 3 {
                    return None;
                }
                let code = u32::from_str_radix(&digits, 8).ok()?;
                (code < 0x80).then(|| char::from_u32(code))??
            }
            _ => return None,
        };

        out.push(escaped);
    }

    Some(out)
}

fn char_from_radix(chars: &mut std::str::Chars<'_>, len: usize, radix: u32) -> Option<char> {
    let digits: String = chars.by_ref().take(len).collect();
    if digits.len() != len {
        return None;
    }
    char::from_u32(u32::from_str_radix(&digits, radix).ok()?)
}

// Byte escapes must stay within ASCII so the result is valid UTF-8.
fn ascii_from_radix(chars: &mut std::str::Chars<'_>, len: usize, radix: u32) -> Option<char> {
    char_from_radix(chars, len, radix).filter(char::is_ascii)
}
