/// Identifier quoting rules.
///
/// Identifiers are written bare unless they would not survive the trip:
/// mixed case, characters outside `[a-z0-9_$]`, a leading digit or `$`, or a
/// reserved word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quoting {
    pub open: char,
    pub close: char,
    pub reserved: &'static [&'static str],
}

/// Words that cannot be used as bare identifiers in any of the built-in
/// dialects.
const RESERVED: &[&str] = &[
    "all", "and", "any", "as", "asc", "between", "both", "by", "case", "check", "column",
    "constraint", "create", "cross", "current_date", "current_time", "current_timestamp",
    "default", "delete", "desc", "distinct", "else", "end", "except", "exists", "false",
    "fetch", "for", "foreign", "from", "full", "grant", "group", "having", "in", "inner",
    "insert", "intersect", "into", "is", "join", "key", "leading", "left", "like", "limit",
    "natural", "not", "null", "offset", "on", "or", "order", "outer", "primary",
    "references", "returning", "right", "select", "set", "some", "table", "then", "to",
    "trailing", "true", "union", "unique", "update", "user", "using", "values", "when",
    "where", "with",
];

impl Quoting {
    pub const ANSI: Quoting = Quoting {
        open: '"',
        close: '"',
        reserved: RESERVED,
    };

    pub const MYSQL: Quoting = Quoting {
        open: '`',
        close: '`',
        reserved: RESERVED,
    };

    pub fn needs_quotes(&self, ident: &str) -> bool {
        let mut chars = ident.chars();

        let legal_start = match chars.next() {
            Some(c) => c.is_ascii_lowercase() || c == '_',
            None => false,
        };

        !legal_start
            || !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$')
            || self.reserved.contains(&ident)
    }

    /// Writes `ident` to `dst`, quoted if needed.
    pub fn write(&self, ident: &str, dst: &mut String) {
        if !self.needs_quotes(ident) {
            dst.push_str(ident);
            return;
        }

        dst.push(self.open);
        for c in ident.chars() {
            if c == self.close {
                dst.push(c);
            }
            dst.push(c);
        }
        dst.push(self.close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quote(quoting: &Quoting, ident: &str) -> String {
        let mut dst = String::new();
        quoting.write(ident, &mut dst);
        dst
    }

    #[test]
    fn plain_identifiers_are_bare() {
        assert_eq!(quote(&Quoting::ANSI, "users"), "users");
        assert_eq!(quote(&Quoting::ANSI, "email_address"), "email_address");
        assert_eq!(quote(&Quoting::ANSI, "anon_1"), "anon_1");
        assert_eq!(quote(&Quoting::ANSI, "_x$1"), "_x$1");
    }

    #[test]
    fn quoted_when_needed() {
        assert_eq!(quote(&Quoting::ANSI, "Users"), "\"Users\"");
        assert_eq!(quote(&Quoting::ANSI, "user"), "\"user\"");
        assert_eq!(quote(&Quoting::ANSI, "1st"), "\"1st\"");
        assert_eq!(quote(&Quoting::ANSI, "some name"), "\"some name\"");
        assert_eq!(quote(&Quoting::ANSI, ""), "\"\"");
    }

    #[test]
    fn close_quote_is_doubled() {
        assert_eq!(quote(&Quoting::ANSI, "a\"b"), "\"a\"\"b\"");
        assert_eq!(quote(&Quoting::MYSQL, "a`b"), "`a``b`");
        assert_eq!(quote(&Quoting::MYSQL, "order"), "`order`");
    }
}
