use crate::constants::SUCCESS_OUTCOME;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Filters accepted by `/filterData`. Unset fields are left out of the body
/// and the backend does not filter on them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PullRequestState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mergeable: Option<MergeableState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PullRequestState {
    Open,
    Closed,
    Merged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MergeableState {
    Mergeable,
    Conflicting,
    Unknown,
}

/// Creation date window; without `to_date` it is open-ended.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Timeframe {
    pub from_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
}

impl Timeframe {
    pub fn since(from_date: impl Into<String>) -> Self {
        Self {
            from_date: from_date.into(),
            to_date: None,
        }
    }

    pub fn between(from_date: impl Into<String>, to_date: impl Into<String>) -> Self {
        Self {
            from_date: from_date.into(),
            to_date: Some(to_date.into()),
        }
    }
}

/// Aggregated pull request metrics returned by `/filterData`.
///
/// The averages and per-state counters are computed by the backend and their
/// inner shape is not fixed, so they are kept as raw JSON.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FilterSummary {
    pub avg_comment_turnaround_time: Value,
    pub avg_pull_request_closure_time: Value,
    pub pull_request_status: Map<String, Value>,
    #[serde(deserialize_with = "count_from_number_or_string")]
    pub total_comments: u64,
    pub pull_request_merge_status: Map<String, Value>,
    pub pull_request_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// `{"result": "..."}` body shared by the user and cron endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutcomeResponse {
    pub result: String,
}

impl OutcomeResponse {
    pub fn is_success(&self) -> bool {
        self.result == SUCCESS_OUTCOME
    }
}

// The backend sums stored decimals, which serialize as strings once any record matched.
fn count_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| de::Error::custom(format!("invalid count {s:?}: {e}"))),
    }
}
