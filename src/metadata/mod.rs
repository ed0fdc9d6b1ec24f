//! Public entry points: discover datasets, then drill into one dataset's
//! variables, geography levels, or variable groups.

/// Dataset catalog normalization
pub mod datasets;
/// Geography and group normalization
pub mod geography;
/// Variable dictionary normalization
pub mod variables;

use crate::api::url::build_url;
use crate::api::CensusClient;
use crate::error::ArgumentError;
use crate::table::Table;
use crate::utils::validation::non_empty;

const META_TYPE_VARIABLES: &str = "variables";
const META_TYPE_GEOGRAPHY: &str = "geography";
const META_TYPE_GROUPS: &str = "groups";

/// Parameters for a `get_census_metadata` call.
///
/// Only the dataset `name` is required; everything else defaults to the
/// plain variables listing without label expansion.
#[derive(Debug, Clone)]
pub struct MetadataRequest {
    pub(crate) name: String,
    pub(crate) vintage: Option<i32>,
    pub(crate) meta_type: String,
    pub(crate) variables: Option<Vec<String>>,
    pub(crate) group: Option<String>,
    pub(crate) include_labels: bool,
}

impl MetadataRequest {
    pub fn new(name: impl Into<String>) -> Self {
        MetadataRequest {
            name: name.into(),
            vintage: None,
            meta_type: META_TYPE_VARIABLES.to_string(),
            variables: None,
            group: None,
            include_labels: false,
        }
    }

    /// Reference year of the dataset release.
    pub fn vintage(mut self, vintage: i32) -> Self {
        self.vintage = Some(vintage);
        self
    }

    /// Metadata kind: `variables` (default), `geography`, or `groups`.
    pub fn meta_type(mut self, meta_type: impl Into<String>) -> Self {
        self.meta_type = meta_type.into();
        self
    }

    /// Restrict the variables listing to a single variable name.
    pub fn variable(self, name: impl Into<String>) -> Self {
        self.variables([name.into()])
    }

    /// Restrict the variables listing to the given variable names.
    pub fn variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Address a variable group; takes priority over `meta_type` in the
    /// request path (`groups/<group>`).
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Expand each variable's permitted values into `code` / `code_label`
    /// rows (variables listings only).
    pub fn include_labels(mut self, include_labels: bool) -> Self {
        self.include_labels = include_labels;
        self
    }
}

impl CensusClient {
    /// Overview of the datasets published through the Census Bureau API,
    /// optionally restricted to a survey/program `name` or a `vintage`
    /// year. A no-content response yields an empty table.
    pub fn get_census_apis(
        &self,
        name: Option<&str>,
        vintage: Option<i32>,
    ) -> crate::Result<Table> {
        if let Some(name) = name {
            non_empty(name, "name")?;
        }

        let url = build_url(self.base_url(), vintage, name, None, None);
        match self.get_json(&url)? {
            Some(resp) => Ok(datasets::extract_datasets(&resp)?),
            None => Ok(Table::default()),
        }
    }

    /// Metadata for one dataset, dispatched on the requested kind: the
    /// variable dictionary, the geography hierarchy, or the group listing.
    /// A no-content response yields an empty table.
    pub fn get_census_metadata(&self, request: &MetadataRequest) -> crate::Result<Table> {
        non_empty(&request.name, "name")?;
        non_empty(&request.meta_type, "meta_type")?;
        if let Some(group) = &request.group {
            non_empty(group, "group")?;
        }
        if let Some(variables) = &request.variables {
            for variable in variables {
                non_empty(variable, "variables")?;
            }
        }

        let url = build_url(
            self.base_url(),
            request.vintage,
            Some(&request.name),
            Some(&request.meta_type),
            request.group.as_deref(),
        );
        let Some(resp) = self.get_json(&url)? else {
            return Ok(Table::default());
        };

        match request.meta_type.as_str() {
            META_TYPE_VARIABLES => Ok(variables::extract_variables(
                &resp,
                request.variables.as_deref(),
                request.include_labels,
                META_TYPE_VARIABLES,
            )?),
            META_TYPE_GEOGRAPHY => Ok(geography::extract_geo_or_group(&resp, "fips")?),
            META_TYPE_GROUPS => Ok(geography::extract_geo_or_group(&resp, "groups")?),
            other => Err(ArgumentError::InvalidMetaType {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = MetadataRequest::new("acs/acs5");
        assert_eq!(request.name, "acs/acs5");
        assert_eq!(request.meta_type, "variables");
        assert!(request.vintage.is_none());
        assert!(request.variables.is_none());
        assert!(request.group.is_none());
        assert!(!request.include_labels);
    }

    #[test]
    fn test_request_builder_chain() {
        let request = MetadataRequest::new("acs/acs5")
            .vintage(2020)
            .meta_type("geography")
            .variables(["AGE", "SEX"])
            .group("B01001")
            .include_labels(true);

        assert_eq!(request.vintage, Some(2020));
        assert_eq!(request.meta_type, "geography");
        assert_eq!(
            request.variables,
            Some(vec!["AGE".to_string(), "SEX".to_string()])
        );
        assert_eq!(request.group.as_deref(), Some("B01001"));
        assert!(request.include_labels);
    }

    #[test]
    fn test_single_variable_shorthand() {
        let request = MetadataRequest::new("cps").variable("AGE");
        assert_eq!(request.variables, Some(vec!["AGE".to_string()]));
    }
}
