use log::debug;
use reqwest::{header, Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

mod error;
mod invitations;
mod pagination;
mod rate_limit;
mod response;

pub use error::{Error, GithubClientError, GithubClientErrorType, Result};
pub use invitations::RepositoryInvitationsClient;
pub use pagination::{Pagination, PaginationOptions};
pub use rate_limit::Rate;
pub use response::Response;

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const HEADER_LINK: &str = "Link";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";

const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

// Largest page size accepted by the v3 API
const MAX_PER_PAGE: usize = 100;

// Media Type values to access preview APIs
//
// https://developer.github.com/v3/previews/#api-previews

// https://developer.github.com/changes/2016-06-27-repository-invitations/
const MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW: &str =
    "application/vnd.github.swamp-thing-preview+json";

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    github_api_token: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            github_api_token: None,
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn github_api_token<S: Into<String>>(mut self, github_api_token: S) -> Self {
        self.github_api_token = Some(github_api_token.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(MEDIA_TYPE_V3),
        );

        if let Some(token) = &self.github_api_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| e.to_string())?,
            );
        }

        let client = ReqwestClient::builder()
            .user_agent(&user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Client {
            base_url,
            user_agent,
            github_api_token: self.github_api_token,
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise. Always
    /// terminated with a trailing slash.
    base_url: String,

    /// User agent string sent when communicating with GitHub APIs
    user_agent: String,

    /// API token to use when issuing requests to GitHub
    github_api_token: Option<String>,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn is_authenticated(&self) -> bool {
        self.github_api_token.is_some()
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    fn patch(&self, url: &str) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, url);
        debug!("Github Request: {} {}", method, url);
        self.client.request(method, &url)
    }

    // Turn an unsuccessful response into an error, keeping GitHub's error document when the body
    // carries one.
    async fn error(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let payload = match response.bytes().await {
            Ok(payload) => payload,
            Err(e) => return e.into(),
        };

        let client_error = serde_json::from_slice(&payload).unwrap_or_else(|_| {
            debug!(
                "Unrecognized error payload: {}",
                String::from_utf8_lossy(&payload)
            );
            GithubClientError::default()
        });

        Error::GithubClientError(status, client_error)
    }

    // Process a response recieved from Github, collecting pagination and rate limit information,
    // and then deserializes the json response.
    async fn json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<Response<T>> {
        debug!("Github Response: {:#?}", response);

        if !response.status().is_success() {
            return Err(self.error(response).await);
        }

        let pagination = Pagination::from_headers(response.headers());
        let rate = Rate::from_headers(response.headers());
        let payload = response.text().await?;

        match serde_json::from_str(&payload) {
            Ok(t) => Ok(Response::new(pagination, rate, t)),
            Err(e) => {
                debug!("Error deserializing: {}\nContent: {}", e, payload);
                Err(e.into())
            }
        }
    }

    // Endpoints which signal success with `204 No Content` and report missing resources with
    // `404 Not Found`. Any other successful status is reported as `false`.
    async fn no_content(&self, response: reqwest::Response) -> Result<Response<bool>> {
        debug!("Github Response: {:#?}", response);

        let status = response.status();
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(self.error(response).await);
        }

        let pagination = Pagination::from_headers(response.headers());
        let rate = Rate::from_headers(response.headers());

        Ok(Response::new(
            pagination,
            rate,
            status == StatusCode::NO_CONTENT,
        ))
    }

    // Collect every page of a listing endpoint by following the `next` link until GitHub stops
    // providing one.
    async fn json_all<T: DeserializeOwned>(&self, url: &str, media_type: &str) -> Result<Vec<T>> {
        let mut options = PaginationOptions {
            page: None,
            per_page: Some(MAX_PER_PAGE),
        };
        let mut items = Vec::new();

        loop {
            let response = self
                .get(url)
                .header(header::ACCEPT, media_type)
                .query(&options)
                .send()
                .await?;

            let (pagination, _rate, page) = self.json::<Vec<T>>(response).await?.into_parts();
            items.extend(page);

            match pagination.next_page {
                Some(next_page) if options.page != Some(next_page) => {
                    options.page = Some(next_page)
                }
                _ => break,
            }
        }

        Ok(items)
    }

    pub fn repository_invitations(&self) -> RepositoryInvitationsClient {
        RepositoryInvitationsClient::new(self)
    }
}
