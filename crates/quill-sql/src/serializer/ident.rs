use super::{Formatter, Params, ToSql};

/// An identifier, quoted per the dialect when needed
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let quoting = &f.serializer.dialect.quoting;
        quoting.write(self.0.as_ref(), f.dst);
    }
}
