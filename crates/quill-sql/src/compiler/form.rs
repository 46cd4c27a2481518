/// The statement shape an UPDATE compiled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `UPDATE t SET c=.. WHERE ..`
    SingleTable,

    /// `UPDATE t SET c=.. FROM a, b WHERE ..`
    CorrelatedFrom,

    /// `UPDATE t, a SET t.c=.., a.d=.. WHERE ..`
    MultiTable,
}

impl Form {
    /// SET columns are written `table.column`, so a bare name shared by
    /// several tables can go to the target.
    pub fn qualifies_set(self) -> bool {
        matches!(self, Self::MultiTable)
    }
}
