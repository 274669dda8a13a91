use super::{Credentials, CredentialsService, ServiceFactory};
use crate::config::CloudBuildConfig;
use crate::error::{CloudBuildError, Result};
use crate::model::{DeleteResponse, IosCredential};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("cloudbuild-creds/", env!("CARGO_PKG_VERSION"));

pub struct HttpServiceFactory {
    config: CloudBuildConfig,
}

impl HttpServiceFactory {
    pub fn new(config: CloudBuildConfig) -> Self {
        Self { config }
    }
}

impl ServiceFactory for HttpServiceFactory {
    fn connect(&self, credentials: Credentials) -> Result<Box<dyn CredentialsService>> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        // reqwest's blocking client defaults to a 30s timeout; unset config means none.
        builder = builder.timeout(self.config.timeout_secs.map(Duration::from_secs));
        let client = builder.build()?;

        debug!(org = %credentials.org_id, url = %self.config.api_url, "connecting");
        Ok(Box::new(HttpService {
            client,
            base_url: self.config.api_url.clone(),
            credentials,
        }))
    }
}

/// Unity Cloud Build REST client for iOS signing credentials.
pub struct HttpService {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpService {
    fn collection_url(&self, project_id: &str) -> String {
        format!(
            "{}/orgs/{}/projects/{}/credentials/signing/ios",
            self.base_url, self.credentials.org_id, project_id
        )
    }

    fn item_url(&self, project_id: &str, cred_id: &str) -> String {
        format!("{}/{}", self.collection_url(project_id), cred_id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Basic {}", self.credentials.api_key))
            .header(ACCEPT, "application/json")
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorized(request).send()?;
        check_status(response)
    }
}

fn signing_form(
    label: &str,
    cert_path: &str,
    profile_path: &str,
    cert_pass: &str,
) -> Result<Form> {
    let form = Form::new()
        .text("label", label.to_string())
        .text("certificatePass", cert_pass.to_string())
        .file("fileCertificate", cert_path)?
        .file("fileProvisioningProfile", profile_path)?;
    Ok(form)
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(CloudBuildError::Remote {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

/// Prefer the service's `{"error": ...}` message, then the raw body, then the reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

impl CredentialsService for HttpService {
    fn get_ios(&self, project_id: &str, cred_id: &str) -> Result<IosCredential> {
        let url = self.item_url(project_id, cred_id);
        debug!(%url, "GET credential");
        let cred = self.send(self.client.get(&url))?.json()?;
        Ok(cred)
    }

    fn get_all_ios(&self, project_id: &str) -> Result<Vec<IosCredential>> {
        let url = self.collection_url(project_id);
        debug!(%url, "GET credentials");
        let creds: Vec<IosCredential> = self.send(self.client.get(&url))?.json()?;
        info!(count = creds.len(), "listed credentials");
        Ok(creds)
    }

    fn update_ios(
        &self,
        project_id: &str,
        cert_id: &str,
        label: &str,
        cert_path: &str,
        profile_path: &str,
        cert_pass: &str,
    ) -> Result<IosCredential> {
        let url = self.item_url(project_id, cert_id);
        let form = signing_form(label, cert_path, profile_path, cert_pass)?;
        debug!(%url, cert_path, profile_path, "PUT credential");
        let cred: IosCredential = self.send(self.client.put(&url).multipart(form))?.json()?;
        info!(id = %cred.credential_id, "updated credential");
        Ok(cred)
    }

    fn upload_ios(
        &self,
        project_id: &str,
        label: &str,
        cert_path: &str,
        profile_path: &str,
        cert_pass: &str,
    ) -> Result<IosCredential> {
        let url = self.collection_url(project_id);
        let form = signing_form(label, cert_path, profile_path, cert_pass)?;
        debug!(%url, cert_path, profile_path, "POST credential");
        let cred: IosCredential = self.send(self.client.post(&url).multipart(form))?.json()?;
        info!(id = %cred.credential_id, "uploaded credential");
        Ok(cred)
    }

    fn delete_ios(&self, project_id: &str, cert_id: &str) -> Result<DeleteResponse> {
        let url = self.item_url(project_id, cert_id);
        debug!(%url, "DELETE credential");
        let response = self.send(self.client.delete(&url))?;
        info!(id = cert_id, "deleted credential");
        Ok(DeleteResponse {
            status: response.status().to_string(),
        })
    }
}
