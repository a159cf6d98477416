/// Network adapters for the BoM API
mod bom_api_client;
mod caching_part_catalog;

pub use bom_api_client::{BomApiClient, DEFAULT_API_HOST, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use caching_part_catalog::CachingPartCatalog;
