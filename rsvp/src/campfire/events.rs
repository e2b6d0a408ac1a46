use std::time::Duration;
use failure::Error;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;
use super::model::{Event, GraphQLRequest, GraphQLResponse, Variables};
use super::errors::CampfireError;
use super::{GRAPHQL_QUERY, PAGE_SIZE, REQUEST_TIMEOUT_SECS};

/// Extract the event id from a campfire event URL.
///
/// The id is the last non empty segment of the URL path, so a trailing slash is ignored.
/// Query string and fragment are never part of the id.
pub fn event_id_from_url(url: &str) -> Result<String, Error> {
    let parsed = Url::parse(url)
        .map_err(|cause| CampfireError::InvalidUrl { url: String::from(url), cause })?;
    parsed.path_segments()
        .and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
        .map(String::from)
        .ok_or_else(|| CampfireError::EmptyEventId { url: String::from(url) }.into())
}

fn graphql_request(event_id: &str) -> GraphQLRequest {
    GraphQLRequest {
        query: GRAPHQL_QUERY,
        variables: Variables {
            id: event_id,
            is_logged_in: false,
            page_size: PAGE_SIZE,
        },
    }
}

fn encode_request(request: &GraphQLRequest) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(request)
        .map_err(|cause| CampfireError::EncodeError { cause }.into())
}

fn transport_error(cause: reqwest::Error) -> Error {
    CampfireError::TransportError { cause }.into()
}

fn post_query(endpoint: &str, body: Vec<u8>) -> Result<String, Error> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(transport_error)?;
    let response = client.post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .body(body)
        .send()
        .map_err(transport_error)?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().unwrap_or_default();
        return Err(CampfireError::UnexpectedStatus { status: status.as_u16(), body }.into());
    }
    response.text().map_err(transport_error)
}

fn decode_event(body: String) -> Result<Event, Error> {
    let response: GraphQLResponse = match serde_json::from_str(&body) {
        Ok(response) => response,
        Err(cause) => return Err(CampfireError::DecodeError { cause, body }.into())
    };
    for error in &response.errors {
        warn!("GraphQL error in response: {}", error.message);
    }
    debug!("Response: {:?}", response);
    Ok(response.data.event)
}

fn fetch_event<F: Fn(&str, Vec<u8>) -> Result<String, Error>>(fetch: F, endpoint: &str, event_id: &str) -> Result<Event, Error> {
    encode_request(&graphql_request(event_id))
        .and_then(|body| fetch(endpoint, body))
        .and_then(decode_event)
        .map_err(|err| CampfireError::EventLoadError { event_id: String::from(event_id), cause: err }.into())
}

/// Query `endpoint` for the RSVPs and members of the event `event_id`.
pub fn load_event(endpoint: &str, event_id: &str) -> Result<Event, Error> {
    fetch_event(post_query, endpoint, event_id)
}
