use failure::Error;

#[derive(Debug, Fail)]
pub enum CampfireError {
    #[fail(display = "invalid event URL {}", url)]
    InvalidUrl {
        url: String,
        #[cause] cause: ::url::ParseError
    },
    #[fail(display = "no event id in URL {}", url)]
    EmptyEventId {
        url: String
    },
    #[fail(display = "failed to encode request body")]
    EncodeError {
        #[cause] cause: ::serde_json::Error
    },
    #[fail(display = "failed to send request")]
    TransportError {
        #[cause] cause: ::reqwest::Error
    },
    #[fail(display = "request failed with status code: {}, response: {}", status, body)]
    UnexpectedStatus {
        status: u16,
        body: String
    },
    #[fail(display = "failed to decode response: {}, response: {}", cause, body)]
    DecodeError {
        #[cause] cause: ::serde_json::Error,
        body: String
    },
    #[fail(display = "error while loading event {}", event_id)]
    EventLoadError {
        event_id: String,
        #[cause] cause: Error
    }
}
