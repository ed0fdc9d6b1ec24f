//! End-to-end tests of both entry points against a mock Census API server.
//!
//! The client is blocking, so the wiremock server runs on an explicitly
//! owned tokio runtime instead of a `#[tokio::test]` attribute.

use census_metadata::error::{ArgumentError, CensusError, PayloadError, RequestError};
use census_metadata::{CensusClient, MetadataRequest};
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn start_server() -> (Runtime, MockServer) {
    let rt = Runtime::new().expect("tokio runtime");
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

fn mount(rt: &Runtime, server: &MockServer, route: &str, template: ResponseTemplate) {
    rt.block_on(
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(template)
            .mount(server),
    );
}

fn client_for(server: &MockServer) -> CensusClient {
    CensusClient::with_base_url(server.uri()).expect("client creation failed")
}

fn catalog_body() -> Value {
    json!({
        "@type": "dcat:Catalog",
        "dataset": [{
            "c_vintage": 1999,
            "c_dataset": ["acronym"],
            "c_isAggregate": true,
            "distribution": [{"accessURL": "http://url"}],
            "contactPoint": {"hasEmail": "mailto:email@x.com"},
            "title": "T",
            "description": "D"
        }]
    })
}

#[test]
fn overview_normalizes_catalog_payload() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/.json",
        ResponseTemplate::new(200).set_body_json(catalog_body()),
    );

    let table = client_for(&server).get_census_apis(None, None).unwrap();

    assert_eq!(table.n_rows(), 1);
    assert_eq!(table.column("dataset").unwrap(), vec![&json!("acronym")]);
    assert_eq!(table.column("vintage").unwrap(), vec![&json!(1999)]);
    assert_eq!(table.column("type").unwrap(), vec![&json!("Aggregate")]);
    assert_eq!(table.column("api_url").unwrap(), vec![&json!("http://url")]);
    assert_eq!(table.column("contact").unwrap(), vec![&json!("email@x.com")]);
}

#[test]
fn overview_scopes_url_by_name_and_vintage() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/2018/cps.json",
        ResponseTemplate::new(200).set_body_json(catalog_body()),
    );

    let table = client_for(&server)
        .get_census_apis(Some("cps"), Some(2018))
        .unwrap();
    assert_eq!(table.n_rows(), 1);
}

#[test]
fn overview_no_content_short_circuits_to_empty_table() {
    let (rt, server) = start_server();
    mount(&rt, &server, "/.json", ResponseTemplate::new(204));

    let table = client_for(&server).get_census_apis(None, None).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.n_columns(), 0);
}

#[test]
fn overview_error_status_embeds_code_and_url() {
    let (rt, server) = start_server();
    mount(&rt, &server, "/.json", ResponseTemplate::new(404));

    let err = client_for(&server).get_census_apis(None, None).unwrap_err();
    match err {
        CensusError::Request(RequestError::Failed { status, url, .. }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/.json"));
        }
        other => panic!("expected request failure, got {other:?}"),
    }
}

#[test]
fn overview_missing_dataset_key_is_a_payload_error() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/.json",
        ResponseTemplate::new(200).set_body_json(json!({"@type": "dcat:Catalog"})),
    );

    let err = client_for(&server).get_census_apis(None, None).unwrap_err();
    assert!(matches!(
        err,
        CensusError::Payload(PayloadError::MissingKey { key }) if key == "dataset"
    ));
}

#[test]
fn variables_metadata_with_label_expansion() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/2020/acs/acs5/variables.json",
        ResponseTemplate::new(200).set_body_json(json!({
            "variables": {
                "AGE": {
                    "label": "Age",
                    "concept": "Demographics",
                    "values": {"item": {"0": "Under 1 year", "1": "1 year", "2": "2 years"}}
                }
            }
        })),
    );

    let request = MetadataRequest::new("acs/acs5")
        .vintage(2020)
        .include_labels(true);
    let table = client_for(&server).get_census_metadata(&request).unwrap();

    assert_eq!(table.n_rows(), 3);
    assert!(table.has_column("code"));
    assert!(table.has_column("code_label"));
    assert!(table
        .column("name")
        .unwrap()
        .iter()
        .all(|n| **n == json!("AGE")));
}

#[test]
fn geography_metadata_flattens_list_columns() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/2020/acs/acs5/geography.json",
        ResponseTemplate::new(200).set_body_json(json!({
            "fips": [
                {"name": "county", "requires": ["A", "B", "C"]}
            ]
        })),
    );

    let request = MetadataRequest::new("acs/acs5")
        .vintage(2020)
        .meta_type("geography");
    let table = client_for(&server).get_census_metadata(&request).unwrap();

    assert_eq!(table.column("requires").unwrap(), vec![&json!("A, B, C")]);
}

#[test]
fn groups_metadata_tabularizes_group_listing() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/2020/acs/acs5/groups.json",
        ResponseTemplate::new(200).set_body_json(json!({
            "groups": [
                {"name": "B01001", "description": "SEX BY AGE"},
                {"name": "B01002", "description": "MEDIAN AGE BY SEX"}
            ]
        })),
    );

    let request = MetadataRequest::new("acs/acs5")
        .vintage(2020)
        .meta_type("groups");
    let table = client_for(&server).get_census_metadata(&request).unwrap();

    assert_eq!(table.n_rows(), 2);
    assert_eq!(
        table.column("name").unwrap(),
        vec![&json!("B01001"), &json!("B01002")]
    );
}

#[test]
fn group_parameter_routes_to_group_segment() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/2020/acs/acs5/groups/B01001.json",
        ResponseTemplate::new(200).set_body_json(json!({
            "variables": {
                "B01001_001E": {"label": "Estimate!!Total:", "group": "B01001"}
            }
        })),
    );

    let request = MetadataRequest::new("acs/acs5").vintage(2020).group("B01001");
    let table = client_for(&server).get_census_metadata(&request).unwrap();

    assert_eq!(table.n_rows(), 1);
    assert_eq!(table.column("group").unwrap(), vec![&json!("B01001")]);
}

#[test]
fn invalid_meta_type_fails_after_transport() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/2020/acs/acs5/tables.json",
        ResponseTemplate::new(200).set_body_json(json!({})),
    );

    let request = MetadataRequest::new("acs/acs5").vintage(2020).meta_type("tables");
    let err = client_for(&server).get_census_metadata(&request).unwrap_err();

    match err {
        CensusError::Argument(ArgumentError::InvalidMetaType { value }) => {
            assert_eq!(value, "tables");
        }
        other => panic!("expected invalid meta_type error, got {other:?}"),
    }
}

#[test]
fn metadata_no_content_short_circuits_to_empty_table() {
    let (rt, server) = start_server();
    mount(
        &rt,
        &server,
        "/2020/acs/acs5/variables.json",
        ResponseTemplate::new(204),
    );

    let request = MetadataRequest::new("acs/acs5").vintage(2020);
    let table = client_for(&server).get_census_metadata(&request).unwrap();
    assert!(table.is_empty());
}

#[test]
fn blank_name_is_rejected_before_any_request() {
    let (_rt, server) = start_server();
    // no mocks mounted; a network call would fail loudly

    let request = MetadataRequest::new("");
    let err = client_for(&server).get_census_metadata(&request).unwrap_err();
    assert!(matches!(
        err,
        CensusError::Argument(ArgumentError::Empty { parameter }) if parameter == "name"
    ));
}
