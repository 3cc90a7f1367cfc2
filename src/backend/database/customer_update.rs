use crate::error::{AppError, AppResult};
use crate::models::CustomerUpdate;

/// Bind-parameter syntax of the target database
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placeholder {
    /// `$1, $2, ...` (PostgreSQL)
    Dollar,
    /// `?1, ?2, ...` (SQLite)
    Question,
}

impl Placeholder {
    fn render(self, index: usize) -> String {
        match self {
            Placeholder::Dollar => format!("${}", index),
            Placeholder::Question => format!("?{}", index),
        }
    }
}

/// A value to bind for one SET column, in statement order
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    Integer(i32),
}

/// Partial UPDATE ready for execution
///
/// `values` are bound first, in order; the customer id is always the last
/// parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub sql: String,
    pub values: Vec<ColumnValue>,
    pub id: i64,
}

/// Shared SQL generation for customer UPDATE operations
pub struct CustomerUpdateProcessor;

impl CustomerUpdateProcessor {
    /// Build an UPDATE that only touches the columns present in `update`
    pub fn build_update_statement(
        table: &str,
        update: &CustomerUpdate,
        placeholder: Placeholder,
    ) -> AppResult<UpdateStatement> {
        let mut columns: Vec<(&str, ColumnValue)> = Vec::new();
        if let Some(ref name) = update.name {
            columns.push(("name", ColumnValue::Text(name.clone())));
        }
        if let Some(ref email) = update.email {
            columns.push(("email", ColumnValue::Text(email.clone())));
        }
        if let Some(age) = update.age {
            columns.push(("age", ColumnValue::Integer(age)));
        }

        if columns.is_empty() {
            return Err(AppError::Database(format!(
                "Update of customer {} carries no columns",
                update.id
            )));
        }

        let assignments: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = {}", column, placeholder.render(i + 1)))
            .collect();

        let sql = format!(
            "UPDATE {} SET {} WHERE id = {}",
            table,
            assignments.join(", "),
            placeholder.render(columns.len() + 1)
        );

        Ok(UpdateStatement {
            sql,
            values: columns.into_iter().map(|(_, value)| value).collect(),
            id: update.id,
        })
    }
}
