//! CDA datasource descriptor

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::traits::{Datasource, DatasourceKind};

/// Points at a data access defined in a CDA file
///
/// # Example
///
/// ```
/// use cpf_core::datasources::{CdaDatasource, Datasource};
///
/// let ds = CdaDatasource::new()
///     .with_path("/public/sales.cda")
///     .with_data_access_id("bySegment")
///     .with_parameter("year", "2013");
///
/// let json = ds.to_json();
/// assert_eq!(json["type"], "CDA");
/// assert_eq!(json["parameters"]["year"], "2013");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdaDatasource {
    /// Repository path of the `.cda` file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Id of the data access inside the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_access_id: Option<String>,
    /// Query parameters, by name
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl CdaDatasource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_data_access_id(mut self, id: impl Into<String>) -> Self {
        self.data_access_id = Some(id.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Set or replace a parameter, returning the previous value
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.parameters.insert(name.into(), value.into())
    }
}

impl Datasource for CdaDatasource {
    fn kind(&self) -> DatasourceKind {
        DatasourceKind::Cda
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "type": DatasourceKind::Cda.as_str(),
            "path": self.path,
            "dataAccessId": self.data_access_id,
            "parameters": self.parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ds = CdaDatasource::new()
            .with_path("/public/sales.cda")
            .with_data_access_id("bySegment")
            .with_parameter("year", "2013");

        assert_eq!(ds.kind(), DatasourceKind::Cda);
        assert_eq!(ds.path.as_deref(), Some("/public/sales.cda"));
        assert_eq!(ds.data_access_id.as_deref(), Some("bySegment"));
        assert_eq!(ds.parameters.get("year").map(String::as_str), Some("2013"));
    }

    #[test]
    fn test_set_parameter() {
        let mut ds = CdaDatasource::new().with_parameter("year", "2012");
        assert_eq!(ds.set_parameter("year", "2013"), Some("2012".to_string()));
        assert_eq!(ds.set_parameter("region", "EU"), None);
        assert_eq!(ds.parameters.len(), 2);
    }

    #[test]
    fn test_to_json() {
        let ds = CdaDatasource::new()
            .with_path("/public/sales.cda")
            .with_data_access_id("bySegment")
            .with_parameter("year", "2013");

        let json = ds.to_json();
        assert_eq!(json["type"], "CDA");
        assert_eq!(json["path"], "/public/sales.cda");
        assert_eq!(json["dataAccessId"], "bySegment");
        assert_eq!(json["parameters"]["year"], "2013");
    }

    #[test]
    fn test_deserialize_descriptor() {
        let ds: CdaDatasource =
            serde_json::from_str(r#"{"path":"/a.cda","dataAccessId":"q1","parameters":{"p":"v"}}"#).unwrap();
        assert_eq!(ds, CdaDatasource::new().with_path("/a.cda").with_data_access_id("q1").with_parameter("p", "v"));

        let empty: CdaDatasource = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CdaDatasource::new());
    }
}
