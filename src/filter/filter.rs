use serde_json::Value;

use super::error::FilterError;
use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::types::{FilterData, FilterOrderInfo, SqlResult};

/// Compiles a [`FilterData`] description into a parameterized SELECT for one
/// table. Table and column names are validated; all values travel as bind
/// parameters.
pub struct Filter {
    table_name: String,
    where_data: Option<Value>,
    order_data: Vec<FilterOrderInfo>,
    limit: Option<i32>,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Result<Self, FilterError> {
        let table_name = table_name.into();
        Self::validate_table_name(&table_name)?;
        Ok(Self {
            table_name,
            where_data: None,
            order_data: vec![],
            limit: None,
        })
    }

    pub fn assign(&mut self, data: FilterData) -> Result<&mut Self, FilterError> {
        if let Some(where_clause) = data.where_clause {
            self.where_clause(where_clause)?;
        }
        if let Some(order) = data.order {
            self.order(order)?;
        }
        if let Some(limit) = data.limit {
            self.limit(limit)?;
        }
        Ok(self)
    }

    pub fn where_clause(&mut self, conditions: Value) -> Result<&mut Self, FilterError> {
        FilterWhere::validate(&conditions)?;
        self.where_data = Some(conditions);
        Ok(self)
    }

    pub fn order(&mut self, order_spec: Value) -> Result<&mut Self, FilterError> {
        self.order_data = FilterOrder::validate_and_parse(&order_spec)?;
        Ok(self)
    }

    pub fn limit(&mut self, limit: i32) -> Result<&mut Self, FilterError> {
        if limit < 0 {
            return Err(FilterError::InvalidLimit(
                "Limit must be non-negative".to_string(),
            ));
        }

        let max_limit = crate::config::CONFIG.filter.max_limit.unwrap_or(i32::MAX);
        self.limit = Some(limit.min(max_limit));
        Ok(self)
    }

    pub fn to_sql(&self) -> Result<SqlResult, FilterError> {
        let (where_clause, params) = if let Some(ref where_data) = self.where_data {
            FilterWhere::generate(where_data, 0)?
        } else {
            (String::new(), vec![])
        };
        let order_clause = FilterOrder::generate(&self.order_data)?;
        let limit_clause = match self.limit {
            Some(l) => format!("LIMIT {}", l),
            None => String::new(),
        };

        let query = [
            "SELECT *".to_string(),
            format!("FROM \"{}\"", self.table_name),
            if where_clause.is_empty() {
                String::new()
            } else {
                format!("WHERE {}", where_clause)
            },
            order_clause,
            limit_clause,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Ok(SqlResult { query, params })
    }

    fn validate_table_name(name: &str) -> Result<(), FilterError> {
        if name.is_empty() {
            return Err(FilterError::InvalidTableName(
                "Table name cannot be empty".to_string(),
            ));
        }
        let first = name.chars().next().unwrap();
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            || (!first.is_ascii_alphabetic() && first != '_')
        {
            return Err(FilterError::InvalidTableName(format!(
                "Invalid table name format: {}",
                name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compile(data: FilterData) -> SqlResult {
        let mut filter = Filter::new("products").unwrap();
        filter.assign(data).unwrap();
        filter.to_sql().unwrap()
    }

    #[test]
    fn bare_filter_selects_everything() {
        let sql = compile(FilterData::default());
        assert_eq!(sql.query, "SELECT * FROM \"products\"");
        assert!(sql.params.is_empty());
    }

    #[test]
    fn implicit_equality() {
        let sql = compile(FilterData {
            where_clause: Some(json!({ "category": "books" })),
            ..Default::default()
        });
        assert_eq!(
            sql.query,
            "SELECT * FROM \"products\" WHERE \"category\" = $1"
        );
        assert_eq!(sql.params, vec![json!("books")]);
    }

    #[test]
    fn range_operators_number_params_in_order() {
        let sql = compile(FilterData {
            where_clause: Some(json!({ "price": { "$gte": 10.0, "$lt": 20.0 } })),
            ..Default::default()
        });
        assert_eq!(
            sql.query,
            "SELECT * FROM \"products\" WHERE \"price\" >= $1 AND \"price\" < $2"
        );
        assert_eq!(sql.params, vec![json!(10.0), json!(20.0)]);
    }

    #[test]
    fn or_over_ilike_matches_keyword_search() {
        let sql = compile(FilterData {
            where_clause: Some(json!({
                "$or": [
                    { "name": { "$ilike": "%mug%" } },
                    { "description": { "$ilike": "%mug%" } }
                ]
            })),
            ..Default::default()
        });
        assert_eq!(
            sql.query,
            "SELECT * FROM \"products\" WHERE (\"name\" ILIKE $1) OR (\"description\" ILIKE $2)"
        );
        assert_eq!(sql.params, vec![json!("%mug%"), json!("%mug%")]);
    }

    #[test]
    fn in_list_expands_placeholders() {
        let sql = compile(FilterData {
            where_clause: Some(json!({ "status": { "$in": ["pending", "shipped"] } })),
            ..Default::default()
        });
        assert_eq!(
            sql.query,
            "SELECT * FROM \"products\" WHERE \"status\" IN ($1, $2)"
        );
    }

    #[test]
    fn empty_in_list_matches_nothing() {
        let sql = compile(FilterData {
            where_clause: Some(json!({ "status": { "$in": [] } })),
            ..Default::default()
        });
        assert!(sql.query.ends_with("WHERE 1=0"));
    }

    #[test]
    fn exists_maps_to_null_checks() {
        let sql = compile(FilterData {
            where_clause: Some(json!({ "category": { "$exists": false } })),
            ..Default::default()
        });
        assert!(sql.query.ends_with("WHERE \"category\" IS NULL"));
    }

    #[test]
    fn order_and_limit_render() {
        let sql = compile(FilterData {
            order: Some(json!({ "name": "desc" })),
            limit: Some(5),
            ..Default::default()
        });
        assert_eq!(
            sql.query,
            "SELECT * FROM \"products\" ORDER BY \"name\" DESC LIMIT 5"
        );
    }

    #[test]
    fn negative_limit_is_rejected() {
        let mut filter = Filter::new("products").unwrap();
        assert!(filter.limit(-1).is_err());
    }

    #[test]
    fn hostile_table_name_is_rejected() {
        assert!(Filter::new("products; DROP TABLE users").is_err());
    }

    #[test]
    fn hostile_column_name_is_rejected() {
        let mut filter = Filter::new("products").unwrap();
        let result = filter.where_clause(json!({ "name\"; DROP": 1 }));
        // Column validation happens at SQL generation time
        assert!(result.is_ok());
        assert!(filter.to_sql().is_err());
    }

    #[test]
    fn unsupported_operator_is_rejected() {
        let mut filter = Filter::new("products").unwrap();
        filter.where_clause(json!({ "name": { "$regex": ".*" } })).unwrap();
        assert!(filter.to_sql().is_err());
    }
}
