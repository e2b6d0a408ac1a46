#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variables<'a> {
    pub id: &'a str,
    pub is_logged_in: bool,
    pub page_size: u64
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: Variables<'a>
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpStatus {
    pub user_id: String,
    pub rsvp_status: String
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub display_name: String
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MemberEdge {
    pub node: Member
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Members {
    pub edges: Vec<MemberEdge>
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub rsvp_statuses: Vec<RsvpStatus>,
    pub members: Members
}

#[derive(Deserialize, Debug, Clone)]
pub struct Data {
    pub event: Event
}

#[derive(Deserialize, Debug, Clone)]
pub struct GraphQLError {
    pub message: String
}

#[derive(Deserialize, Debug, Clone)]
pub struct GraphQLResponse {
    pub data: Data,
    #[serde(default)]
    pub errors: Vec<GraphQLError>
}
