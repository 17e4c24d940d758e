// src/api/client.rs
use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};
use serde_json::Value;

use super::JobApi;
use crate::{
    Error, Result,
    config::consts::{JOBS_PATH, REQUEST_TIMEOUT_SECS, USER_AGENT},
    job::{JobId, JobRequest, JobStatus},
};

/// Blocking HTTP client for `{host}/api/v1/jobs`.
/// Runs on the caller's thread; the GUI keeps it on its worker thread.
pub struct ApiClient {
    http: Client,
    host: String,
    jobs_url: String,
}

impl ApiClient {
    pub fn new(host: &str) -> Result<Self> {
        Self::with_timeout(host, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(host: &str, timeout: Duration) -> Result<Self> {
        let host = host.trim().trim_end_matches('/').to_string();
        if host.is_empty() {
            return Err(Error::Invalid(s!("API host is empty")));
        }
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(Error::Invalid(format!("API host must start with http:// or https://, got {host:?}")));
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        let jobs_url = join!(&host, JOBS_PATH);
        Ok(Self { http, host, jobs_url })
    }

    pub fn host(&self) -> &str { &self.host }
    pub fn jobs_url(&self) -> &str { &self.jobs_url }

    fn job_url(&self, id: &JobId) -> String {
        format!("{}/{}", self.jobs_url, id)
    }
}

impl JobApi for ApiClient {
    fn submit(&self, request: &JobRequest) -> Result<JobId> {
        logd!("Api: POST {} name={} keywords={}", self.jobs_url, request.name, request.keywords.len());

        let resp = self.http.post(&self.jobs_url).json(request).send()?;
        let status = resp.status();
        let body = resp.text()?;
        logd!("Api: POST → {} ({} bytes)", status, body.len());

        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(Error::Http { status: status.as_u16(), body });
        }

        let v: Value = serde_json::from_str(&body)?;
        v.get("id")
            .and_then(JobId::from_value)
            .ok_or(Error::MissingJobId(body))
    }

    fn status(&self, id: &JobId) -> Result<JobStatus> {
        let url = self.job_url(id);
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        let body = resp.text()?;
        logd!("Api: GET {} → {}", url, status);

        if status != StatusCode::OK {
            return Err(Error::Http { status: status.as_u16(), body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
