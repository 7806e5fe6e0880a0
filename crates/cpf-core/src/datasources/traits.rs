//! Datasource trait and kinds

use serde::{Deserialize, Serialize};

/// Kinds of datasource the framework knows how to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasourceKind {
    /// Community Data Access query
    #[serde(rename = "CDA")]
    Cda,
}

impl DatasourceKind {
    pub const ALL: &'static [DatasourceKind] = &[DatasourceKind::Cda];

    /// Canonical tag
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasourceKind::Cda => "CDA",
        }
    }

    /// Kind for a tag, ignoring case
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str().eq_ignore_ascii_case(tag))
    }
}

impl std::fmt::Display for DatasourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A description of where a component gets its data
///
/// Implementations only describe the source; running the query belongs to the
/// data access layer.
pub trait Datasource: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> DatasourceKind;

    /// JSON form handed to the client side, always carrying a `type` field
    fn to_json(&self) -> serde_json::Value;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(DatasourceKind::from_tag("CDA"), Some(DatasourceKind::Cda));
        assert_eq!(DatasourceKind::from_tag("cDa"), Some(DatasourceKind::Cda));
        assert_eq!(DatasourceKind::from_tag("cdaX"), None);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(DatasourceKind::Cda.to_string(), "CDA");
        assert_eq!(serde_json::to_string(&DatasourceKind::Cda).unwrap(), "\"CDA\"");
        let parsed: DatasourceKind = serde_json::from_str("\"CDA\"").unwrap();
        assert_eq!(parsed, DatasourceKind::Cda);
    }
}
