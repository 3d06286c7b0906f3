//! GitHub GraphQL client for per-repository language byte counts.
//!
//! One blocking POST per page, cursor pagination, no retries. The transport
//! is a trait so the pagination loop can be tested against a mock.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::error::{LangStatsError, Result};

pub const GRAPHQL_URL: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = "lang-stats";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Repositories owned by the login, most recently updated first, forks
/// excluded. Languages come pre-sorted by byte size descending.
const REPOSITORIES_QUERY: &str = r"
query($login: String!, $cursor: String) {
  user(login: $login) {
    repositories(
      first: 100,
      after: $cursor,
      ownerAffiliations: OWNER,
      isFork: false,
      orderBy: {field: UPDATED_AT, direction: DESC}
    ) {
      pageInfo { hasNextPage endCursor }
      nodes {
        name
        isArchived
        languages(first: 100, orderBy: {field: SIZE, direction: DESC}) {
          edges {
            size
            node { name }
          }
        }
      }
    }
  }
}
";

/// One (language name, byte size) observation from one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEdge {
    pub name: String,
    pub size: u64,
}

/// One repository's language report, flattened from the wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    pub name: Option<String>,
    pub is_archived: bool,
    pub languages: Vec<LanguageEdge>,
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
pub struct UserNode {
    pub repositories: RepositoryPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryPage {
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub languages: Option<LanguageConnection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageConnection {
    #[serde(default)]
    pub edges: Vec<EdgeNode>,
}

#[derive(Debug, Deserialize)]
pub struct EdgeNode {
    pub size: u64,
    pub node: LanguageName,
}

#[derive(Debug, Deserialize)]
pub struct LanguageName {
    pub name: String,
}

impl From<RepositoryNode> for Repository {
    fn from(node: RepositoryNode) -> Self {
        let languages = node
            .languages
            .unwrap_or_default()
            .edges
            .into_iter()
            .map(|edge| LanguageEdge {
                name: edge.node.name,
                size: edge.size,
            })
            .collect();

        Self {
            name: node.name,
            is_archived: node.is_archived,
            languages,
        }
    }
}

// ============================================================================
// Transport
// ============================================================================

/// GraphQL transport abstraction for dependency injection.
pub trait GraphqlTransport {
    /// POST one page request and return the decoded response envelope.
    fn post(&self, login: &str, cursor: Option<&str>) -> Result<GraphqlResponse>;
}

/// Production transport using blocking reqwest with a bearer credential.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct GithubTransport {
    token: String,
    client: reqwest::blocking::Client,
}

impl GithubTransport {
    /// Build a transport holding the API token.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying client cannot be
    /// constructed.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                LangStatsError::Config(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            token: token.into(),
            client,
        })
    }
}

#[cfg(not(tarpaulin_include))]
impl GraphqlTransport for GithubTransport {
    fn post(&self, login: &str, cursor: Option<&str>) -> Result<GraphqlResponse> {
        let body = json!({
            "query": REPOSITORIES_QUERY,
            "variables": { "login": login, "cursor": cursor },
        });

        let response = self
            .client
            .post(GRAPHQL_URL)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("bearer {}", self.token),
            )
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    LangStatsError::Http(format!("Request timeout querying {GRAPHQL_URL}"))
                } else if e.is_connect() {
                    LangStatsError::Http(format!("Failed to connect to {GRAPHQL_URL}"))
                } else {
                    LangStatsError::Http(format!("Request to {GRAPHQL_URL} failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LangStatsError::Http(format!(
                "Request to {GRAPHQL_URL} failed: HTTP {status}"
            )));
        }

        response
            .json()
            .map_err(|e| LangStatsError::Http(format!("Failed to decode response: {e}")))
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Fetch the complete, unpaginated repository set for a login.
///
/// Pages are requested sequentially while the server reports another page,
/// and concatenated in server order.
///
/// # Errors
///
/// Returns a transport error if any request fails, or a protocol error if a
/// response carries a non-empty `errors` payload or no user for the login.
pub fn fetch_repositories(
    login: &str,
    transport: &impl GraphqlTransport,
) -> Result<Vec<Repository>> {
    let mut repositories = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let response = transport.post(login, cursor.as_deref())?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            let joined = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LangStatsError::Api(joined));
        }

        let page = response
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| LangStatsError::Api(format!("No user found for login: {login}")))?
            .repositories;

        repositories.extend(page.nodes.into_iter().map(Repository::from));

        if !page.page_info.has_next_page {
            break;
        }
        cursor = page.page_info.end_cursor;
    }

    Ok(repositories)
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
