//! Assembles request URLs of the form
//! `https://api.census.gov/data/<vintage>/<name>/<segment>.json`.

/// Root of the Census Bureau data API.
pub const CENSUS_BASE_URL: &str = "https://api.census.gov/data";

/// Build the request URL from whichever identifying parts are present.
///
/// A `group` takes priority over `meta_type` for the trailing segment and
/// is addressed as `groups/<group>`. Absent parts are skipped and repeated
/// slashes are collapsed, so a `name` like `acs/acs5` composes cleanly.
pub fn build_url(
    base_url: &str,
    vintage: Option<i32>,
    name: Option<&str>,
    meta_type: Option<&str>,
    group: Option<&str>,
) -> String {
    let segment = match group {
        Some(group) => Some(format!("groups/{}", group)),
        None => meta_type.map(str::to_string),
    };

    let parts: Vec<String> = [vintage.map(|v| v.to_string()), name.map(str::to_string), segment]
        .into_iter()
        .flatten()
        .collect();

    let path: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|piece| !piece.is_empty())
        .collect();

    format!(
        "{}/{}.json",
        base_url.trim_end_matches('/'),
        path.join("/")
    )
}
