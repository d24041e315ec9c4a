//! Request bodies for the chart and dataset endpoints.
//!
//! Every field is optional at the deserialization level so that a missing
//! parameter yields a `missing_parameter` error rather than a generic
//! JSON rejection.

use crate::error::AppError;
use serde::Deserialize;
use serde_json::Value;

/// Body naming a single column.
///
/// ```json
/// { "filter": "country" }
/// ```
#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub filter: Option<String>,
}

impl FilterRequest {
    pub fn column(&self) -> Result<&str, AppError> {
        non_empty(&self.filter).ok_or_else(|| {
            AppError::MissingParameter("Filter parameter is required".to_string())
        })
    }
}

/// Body for the constrained bar chart.
///
/// ```json
/// { "filter1": "country", "constrain": "India", "filter2": "likelihood" }
/// ```
#[derive(Debug, Deserialize)]
pub struct ConstrainedFilterRequest {
    pub filter1: Option<String>,
    pub constrain: Option<Value>,
    pub filter2: Option<String>,
}

impl ConstrainedFilterRequest {
    /// Returns `(filter column, constraint value, value column)`.
    pub fn parts(&self) -> Result<(&str, &Value, &str), AppError> {
        let missing = || {
            AppError::MissingParameter(
                "filter1, constrain, and filter2 parameters are required".to_string(),
            )
        };

        let filter1 = non_empty(&self.filter1).ok_or_else(missing)?;
        let filter2 = non_empty(&self.filter2).ok_or_else(missing)?;
        let constrain = match &self.constrain {
            None | Some(Value::Null) => return Err(missing()),
            Some(Value::String(s)) if s.is_empty() => return Err(missing()),
            Some(Value::Array(_)) | Some(Value::Object(_)) => {
                return Err(AppError::InvalidRequest(
                    "constrain must be a string, number or boolean".to_string(),
                ));
            }
            Some(value) => value,
        };

        Ok((filter1, constrain, filter2))
    }
}

/// Body naming two columns.
///
/// ```json
/// { "filter1": "country", "filter2": "likelihood" }
/// ```
#[derive(Debug, Deserialize)]
pub struct PairFilterRequest {
    pub filter1: Option<String>,
    pub filter2: Option<String>,
}

impl PairFilterRequest {
    pub fn columns(&self) -> Result<(&str, &str), AppError> {
        let missing =
            || AppError::MissingParameter("filter1 and filter2 parameters are required".to_string());

        Ok((
            non_empty(&self.filter1).ok_or_else(missing)?,
            non_empty(&self.filter2).ok_or_else(missing)?,
        ))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_must_be_present_and_non_empty() {
        let req: FilterRequest = serde_json::from_value(json!({ "filter": "country" })).unwrap();
        assert_eq!(req.column().unwrap(), "country");

        let req: FilterRequest = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(req.column(), Err(AppError::MissingParameter(_))));

        let req: FilterRequest = serde_json::from_value(json!({ "filter": "" })).unwrap();
        assert!(matches!(req.column(), Err(AppError::MissingParameter(_))));
    }

    #[test]
    fn constraint_accepts_scalars() {
        let req: ConstrainedFilterRequest = serde_json::from_value(
            json!({ "filter1": "start_year", "constrain": 2017, "filter2": "country" }),
        )
        .unwrap();
        let (f1, constrain, f2) = req.parts().unwrap();
        assert_eq!((f1, f2), ("start_year", "country"));
        assert_eq!(constrain, &json!(2017));
    }

    #[test]
    fn constraint_rejects_missing_and_composite_values() {
        let req: ConstrainedFilterRequest =
            serde_json::from_value(json!({ "filter1": "a", "constrain": null, "filter2": "b" }))
                .unwrap();
        assert!(matches!(req.parts(), Err(AppError::MissingParameter(_))));

        let req: ConstrainedFilterRequest =
            serde_json::from_value(json!({ "filter1": "a", "constrain": [1], "filter2": "b" }))
                .unwrap();
        assert!(matches!(req.parts(), Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn pair_requires_both_columns() {
        let req: PairFilterRequest =
            serde_json::from_value(json!({ "filter1": "country" })).unwrap();
        assert!(matches!(req.columns(), Err(AppError::MissingParameter(_))));
    }
}
