//! Datasource descriptors and selection by type tag
//!
//! ```rust
//! use cpf_core::datasources::{create_datasource, DatasourceKind};
//!
//! let ds = create_datasource(Some("cda")).expect("cda is supported");
//! assert_eq!(ds.kind(), DatasourceKind::Cda);
//!
//! assert!(create_datasource(Some("sql")).is_none());
//! assert!(create_datasource(None).is_none());
//! ```

mod traits;
mod cda;

pub use traits::{Datasource, DatasourceKind};
pub use cda::CdaDatasource;

/// Create an empty datasource for a type tag
///
/// Tags compare case-insensitively. A missing or unrecognized tag yields
/// `None`; that is not treated as an error.
pub fn create_datasource(kind: Option<&str>) -> Option<Box<dyn Datasource>> {
    match DatasourceKind::from_tag(kind?)? {
        DatasourceKind::Cda => Some(Box::new(CdaDatasource::new())),
    }
}

/// List all supported datasource tags
pub fn supported_datasources() -> Vec<&'static str> {
    DatasourceKind::ALL.iter().map(|k| k.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cda_any_case() {
        for tag in ["CDA", "cda", "Cda"] {
            let ds = create_datasource(Some(tag)).unwrap();
            assert_eq!(ds.kind(), DatasourceKind::Cda);
        }
    }

    #[test]
    fn test_create_unknown() {
        assert!(create_datasource(Some("unknown")).is_none());
        assert!(create_datasource(Some("")).is_none());
        assert!(create_datasource(Some(" cda")).is_none());
    }

    #[test]
    fn test_create_without_tag() {
        assert!(create_datasource(None).is_none());
    }

    #[test]
    fn test_created_datasource_is_empty() {
        let ds = create_datasource(Some("cda")).unwrap();
        let json = ds.to_json();
        assert_eq!(json["type"], "CDA");
        assert!(json["dataAccessId"].is_null());
    }

    #[test]
    fn test_supported_datasources() {
        assert_eq!(supported_datasources(), vec!["CDA"]);
    }
}
