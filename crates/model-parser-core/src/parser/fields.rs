use super::ModelParser;
use crate::{
    descriptor::FieldInfo,
    schema::{app::Model, db::Column},
    Result,
};
use indexmap::IndexMap;

impl ModelParser<'_> {
    /// Persisted columns of the model's table, in schema order.
    ///
    /// With `ignore_hidden`, the model's hidden attributes are dropped.
    /// Columns named in `filter` are always dropped.
    pub fn extract_fields(
        &self,
        model: &Model,
        ignore_hidden: bool,
        filter: &[String],
    ) -> Result<IndexMap<String, FieldInfo>> {
        let table = model.table();

        let mut columns = self.catalog.columns(&table)?;

        if ignore_hidden {
            columns.retain(|column| !model.hidden().contains(column));
        }

        columns.retain(|column| !filter.contains(column));

        let mut fields = IndexMap::with_capacity(columns.len());

        for name in columns {
            let column = self.catalog.column(&table, &name)?;
            tracing::trace!(%table, column = %name, ty = %column.ty, nullable = column.nullable, "column");
            fields.insert(name, FieldInfo::from(column));
        }

        tracing::debug!(%table, fields = fields.len(), "extracted fields");

        Ok(fields)
    }
}

impl From<Column> for FieldInfo {
    fn from(column: Column) -> Self {
        FieldInfo {
            ty: column.ty.name().to_string(),
            nullable: column.nullable,
        }
    }
}
