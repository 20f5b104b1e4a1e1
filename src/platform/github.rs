//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::RepositorySource;
use crate::types::{
    Branch, BranchCommit, Commit, CommitActivity, CommitAuthor, Contributor, RepoOwner, RepoSpec,
    Repository,
};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Largest page the REST API serves
pub const MAX_PER_PAGE: u8 = 100;

const API_VERSION: &str = "2022-11-28";

#[derive(Deserialize)]
struct ApiOwner {
    login: String,
    avatar_url: String,
}

#[derive(Deserialize)]
struct ApiRepository {
    id: u64,
    name: String,
    full_name: String,
    description: Option<String>,
    html_url: String,
    stargazers_count: u64,
    forks_count: u64,
    watchers_count: u64,
    language: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    pushed_at: Option<String>,
    default_branch: String,
    owner: ApiOwner,
}

#[derive(Deserialize)]
struct ApiGitAuthor {
    name: Option<String>,
    email: Option<String>,
    date: Option<String>,
}

#[derive(Deserialize)]
struct ApiCommitDetail {
    message: String,
    author: Option<ApiGitAuthor>,
}

#[derive(Deserialize)]
struct ApiUser {
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
struct ApiParent {
    sha: String,
}

#[derive(Deserialize)]
struct ApiCommit {
    sha: String,
    html_url: String,
    commit: ApiCommitDetail,
    author: Option<ApiUser>,
    #[serde(default)]
    parents: Vec<ApiParent>,
}

#[derive(Deserialize)]
struct ApiBranchCommit {
    sha: String,
    url: String,
}

#[derive(Deserialize)]
struct ApiBranch {
    name: String,
    commit: ApiBranchCommit,
    #[serde(default)]
    protected: bool,
}

#[derive(Deserialize)]
struct ApiContributor {
    login: Option<String>,
    avatar_url: Option<String>,
    contributions: u64,
    html_url: Option<String>,
}

#[derive(Deserialize)]
struct ApiWeek {
    week: i64,
    total: u64,
    days: Vec<u64>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl From<ApiRepository> for Repository {
    fn from(r: ApiRepository) -> Self {
        Self {
            id: r.id,
            name: r.name,
            full_name: r.full_name,
            description: r.description,
            html_url: r.html_url,
            stargazers_count: r.stargazers_count,
            forks_count: r.forks_count,
            watchers_count: r.watchers_count,
            language: r.language,
            created_at: r.created_at.unwrap_or_default(),
            updated_at: r.updated_at.unwrap_or_default(),
            pushed_at: r.pushed_at.unwrap_or_default(),
            default_branch: r.default_branch,
            owner: RepoOwner {
                login: r.owner.login,
                avatar_url: r.owner.avatar_url,
            },
        }
    }
}

impl From<ApiCommit> for Commit {
    fn from(c: ApiCommit) -> Self {
        let git_author = c.commit.author;
        let (name, email, date) = git_author.map_or((None, None, None), |a| (a.name, a.email, a.date));

        Self {
            sha: c.sha,
            parents: c.parents.into_iter().map(|p| p.sha).collect(),
            message: c.commit.message,
            author: CommitAuthor {
                name: name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| "Unknown".to_string()),
                email: email.unwrap_or_default(),
                date: date.unwrap_or_default(),
                avatar_url: c.author.and_then(|u| u.avatar_url),
            },
            url: c.html_url,
        }
    }
}

impl From<ApiBranch> for Branch {
    fn from(b: ApiBranch) -> Self {
        Self {
            name: b.name,
            commit: BranchCommit {
                sha: b.commit.sha,
                url: b.commit.url,
            },
            protected: b.protected,
        }
    }
}

impl ApiContributor {
    /// Anonymous contributors (no login) are dropped
    fn into_contributor(self) -> Option<Contributor> {
        Some(Contributor {
            login: self.login?,
            avatar_url: self.avatar_url.unwrap_or_default(),
            contributions: self.contributions,
            html_url: self.html_url.unwrap_or_default(),
        })
    }
}

impl From<ApiWeek> for CommitActivity {
    fn from(w: ApiWeek) -> Self {
        Self {
            week: w.week,
            total: w.total,
            days: w.days,
        }
    }
}

/// GitHub service using the REST API over reqwest
pub struct GitHubService {
    client: Client,
    base_url: String,
    spec: RepoSpec,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `spec.host` selects a GitHub Enterprise instance; `token` is optional.
    pub fn new(spec: RepoSpec, token: Option<&str>) -> Result<Self> {
        let base_url = spec.host.as_ref().map_or_else(
            || "https://api.github.com".to_string(),
            |h| format!("https://{h}/api/v3"),
        );
        Self::with_base_url(spec, token, base_url)
    }

    /// Create a service against an explicit API root (tests, proxies)
    pub fn with_base_url(spec: RepoSpec, token: Option<&str>, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("repograph/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| Error::Auth("token contains invalid characters".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            spec,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.base_url,
            urlencoding::encode(&self.spec.owner),
            urlencoding::encode(&self.spec.repo),
            path
        )
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = self.api_url(path);
        debug!("GET {url}");
        let response = self.client.get(&url).query(query).send().await?;
        self.check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        Ok(self.get(path, query).await?.json().await?)
    }

    /// Map non-success responses to crate errors
    async fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let remaining = header_i64(&response, "x-ratelimit-remaining");
        let reset = header_i64(&response, "x-ratelimit-reset");

        if (status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS)
            && remaining == Some(0)
        {
            warn!("Rate limited by GitHub API");
            return Err(Error::RateLimited { reset });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(Error::RepositoryNotFound(self.spec.to_string()));
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| status.to_string());
        Err(Error::GitHubApi(format!("{message} ({})", status.as_u16())))
    }
}

fn header_i64(response: &Response, name: &str) -> Option<i64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

fn per_page(limit: u8) -> String {
    limit.clamp(1, MAX_PER_PAGE).to_string()
}

/// Parse the commit activity body
///
/// The endpoint answers `{}` or an empty body while statistics are being
/// computed; anything that is not a list of weeks counts as no activity.
fn parse_activity(body: &str) -> Vec<CommitActivity> {
    match serde_json::from_str::<Vec<ApiWeek>>(body) {
        Ok(weeks) => weeks.into_iter().map(Into::into).collect(),
        Err(_) => {
            debug!("Commit activity not available yet");
            Vec::new()
        }
    }
}

#[async_trait]
impl RepositorySource for GitHubService {
    async fn fetch_repository(&self) -> Result<Repository> {
        let repo: ApiRepository = self.get_json("", &[]).await?;
        Ok(repo.into())
    }

    async fn fetch_commits(&self, limit: u8) -> Result<Vec<Commit>> {
        let commits: Vec<ApiCommit> = self
            .get_json("/commits", &[("per_page", per_page(limit))])
            .await?;
        debug!("Fetched {} commits for {}", commits.len(), self.spec);
        Ok(commits.into_iter().map(Into::into).collect())
    }

    async fn fetch_branches(&self, limit: u8) -> Result<Vec<Branch>> {
        let branches: Vec<ApiBranch> = self
            .get_json("/branches", &[("per_page", per_page(limit))])
            .await?;
        Ok(branches.into_iter().map(Into::into).collect())
    }

    async fn fetch_contributors(&self, limit: u8) -> Result<Vec<Contributor>> {
        let response = self
            .get("/contributors", &[("per_page", per_page(limit))])
            .await?;

        // Empty repositories answer 204
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let contributors: Vec<ApiContributor> = response.json().await?;
        Ok(contributors
            .into_iter()
            .filter_map(ApiContributor::into_contributor)
            .collect())
    }

    async fn fetch_commit_activity(&self) -> Result<Vec<CommitActivity>> {
        let response = self.get("/stats/commit_activity", &[]).await?;
        if response.status() == StatusCode::ACCEPTED || response.status() == StatusCode::NO_CONTENT {
            debug!("Commit activity for {} is still being computed", self.spec);
            return Ok(Vec::new());
        }
        let body = response.text().await?;
        Ok(parse_activity(&body))
    }

    fn spec(&self) -> &RepoSpec {
        &self.spec
    }
}
