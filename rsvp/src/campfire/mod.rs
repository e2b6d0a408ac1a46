pub mod errors;

pub mod model;
pub mod events;

pub const GRAPHQL_ENDPOINT: &'static str = "https://niantic-social-api.nianticlabs.com/graphql";

/// Query document sent with every request, bundled at compile time.
pub const GRAPHQL_QUERY: &'static str = include_str!("query.graphql");

/// Large enough to fetch every member of an event in a single page.
pub const PAGE_SIZE: u64 = 10_000_000_000;

pub const REQUEST_TIMEOUT_SECS: u64 = 10;
