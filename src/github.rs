use std::{collections::BTreeMap, sync::mpsc, time::Duration};

use colored::Colorize;
use rayon::{ThreadPoolBuilder, prelude::*};

use crate::{
    error::{AppError, Result},
    model::Repository,
};

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Repositories requested per listing page
pub const PER_PAGE: usize = 100;
/// Number of concurrent commit fetches
pub const FETCH_WORKERS: usize = 10;

/// Status and body of a completed HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP GET used by the fetch pipeline
///
/// Non-success statuses are returned as responses, not errors. `Err` is
/// reserved for transport failures.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by a `ureq` agent
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Builds a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("ghmails/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {url}");
        let request = self.agent.get(url).set("Accept", "application/vnd.github+json");

        match request.call() {
            Ok(response) => {
                let status = response.status();
                let body = response.into_string()?;
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Ok(HttpResponse { status, body })
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// GitHub API endpoints used by the extractor
pub struct GitHub<C: HttpClient> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> GitHub<C> {
    /// # Arguments
    /// * `base_url` - API root, e.g. [`DEFAULT_API_URL`]
    /// * `client` - Transport used for every request
    pub fn new(base_url: &str, client: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn repos_url(&self, username: &str, page: usize) -> String {
        format!(
            "{}/users/{}/repos?page={}&per_page={}",
            self.base_url, username, page, PER_PAGE
        )
    }

    fn commits_url(&self, username: &str, repo_name: &str) -> String {
        format!("{}/repos/{}/{}/commits", self.base_url, username, repo_name)
    }

    /// Lists the names of all public repositories of `username`
    ///
    /// Pages are requested until one comes back empty. Any non-success
    /// status aborts the listing with [`AppError::RepositoryListing`].
    pub fn list_repositories(&self, username: &str) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        let mut page: usize = 1;

        loop {
            let response = self.client.get(&self.repos_url(username, page))?;
            if !response.is_success() {
                return Err(AppError::RepositoryListing { status: response.status });
            }

            let repos: Vec<Repository> = serde_json::from_str(&response.body)?;
            tracing::debug!("page {page}: {} repositories", repos.len());
            if repos.is_empty() {
                break;
            }

            names.extend(repos.into_iter().map(|repo| repo.name));
            page += 1;
        }

        tracing::info!("found {} repositories for {username}", names.len());
        Ok(names)
    }

    /// Fetches the raw commit log of one repository
    ///
    /// Returns `None` after printing a warning when the request fails or
    /// the status is not a success.
    pub fn fetch_commit_log(&self, username: &str, repo_name: &str) -> Option<String> {
        match self.client.get(&self.commits_url(username, repo_name)) {
            Ok(response) if response.is_success() => Some(response.body),
            Ok(response) => {
                tracing::warn!(repo = repo_name, status = response.status, "commit fetch failed");
                println!(
                    "{}",
                    format!(
                        "Warning: Unable to fetch data for {}. Status code: {}",
                        repo_name, response.status
                    )
                    .yellow()
                );
                None
            }
            Err(err) => {
                tracing::warn!(repo = repo_name, error = %err, "commit fetch failed");
                println!(
                    "{}",
                    format!("Warning: Unable to fetch data for {}. {}", repo_name, err).yellow()
                );
                None
            }
        }
    }

    /// Fetches commit logs for every `(username, repository)` pair
    ///
    /// Runs on a dedicated pool of [`FETCH_WORKERS`] threads that is torn
    /// down before returning. `on_result` is called on the calling thread
    /// once per input, in input order, as soon as that log and every log
    /// before it have arrived.
    pub fn fetch_commit_logs<F>(&self, repos: &[(String, String)], mut on_result: F) -> Result<()>
    where
        F: FnMut(Option<String>),
    {
        let pool = ThreadPoolBuilder::new()
            .num_threads(FETCH_WORKERS)
            .thread_name(|i| format!("ghmails-fetch-{i}"))
            .build()?;
        let (sender, receiver) = mpsc::channel::<(usize, Option<String>)>();

        pool.in_place_scope(|scope| {
            scope.spawn(move |_| {
                repos.par_iter().enumerate().for_each_with(
                    sender,
                    |sender, (i, (username, repo_name))| {
                        let commit_log = self.fetch_commit_log(username, repo_name);
                        if sender.send((i, commit_log)).is_err() {
                            tracing::debug!(repo = repo_name.as_str(), "result receiver closed");
                        }
                    },
                );
            });

            // results arrive in completion order; hold early ones until their turn
            let mut pending: BTreeMap<usize, Option<String>> = BTreeMap::new();
            let mut next: usize = 0;
            for (i, commit_log) in receiver.iter() {
                pending.insert(i, commit_log);
                while let Some(commit_log) = pending.remove(&next) {
                    on_result(commit_log);
                    next += 1;
                }
            }
        });

        Ok(())
    }
}
