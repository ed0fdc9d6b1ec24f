//! Client library for U.S. Census Bureau API metadata: discover which
//! datasets exist, then retrieve the variables, geography levels, or
//! variable groups a chosen dataset exposes. Results come back as flat
//! tables with payload-dependent column sets.
//!
//! ```no_run
//! use census_metadata::{CensusClient, MetadataRequest};
//!
//! let client = CensusClient::new()?;
//!
//! // What datasets exist for vintage 2020?
//! let overview = client.get_census_apis(None, Some(2020))?;
//!
//! // Variables of the ACS 5-year release, with value labels expanded.
//! let request = MetadataRequest::new("acs/acs5")
//!     .vintage(2020)
//!     .include_labels(true);
//! let variables = client.get_census_metadata(&request)?;
//! println!("{} variables", variables.n_rows());
//! # Ok::<(), census_metadata::CensusError>(())
//! ```

pub use error::CensusError;

/// Main layers (dependency flow: entry points → normalizers → table)
pub mod metadata; // Public entry points and payload normalizers
pub mod table; // Tabular result type

/// Support modules (used across layers)
pub mod api; // Census Bureau API transport
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub use api::CensusClient;
pub use metadata::MetadataRequest;
pub use table::Table;

pub type Result<T> = std::result::Result<T, CensusError>;
