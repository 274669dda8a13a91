//! # Remote Service
//!
//! Credential CRUD against Unity Cloud Build, abstracted behind [`CredentialsService`] so
//! commands never depend on the transport.
//!
//! A service instance is bound to one [`Credentials`] pair (API key + organization) at
//! construction; every call it issues is authenticated with that pair. Commands obtain an
//! instance through a [`ServiceFactory`] once argument resolution has produced the pair.
//!
//! ## Implementations
//!
//! - [`http::HttpServiceFactory`]: production client over the REST API
//! - [`memory::RecordingFactory`]: records calls and returns canned results, for tests
//!
//! Every remote operation is atomic from the caller's view: it either returns a result or a
//! [`CloudBuildError::Remote`](crate::error::CloudBuildError::Remote) /
//! [`CloudBuildError::Http`](crate::error::CloudBuildError::Http). Nothing is retried.

use crate::error::Result;
use crate::model::{DeleteResponse, IosCredential};
use std::fmt;

pub mod http;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub org_id: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, org_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            org_id: org_id.into(),
        }
    }
}

// Keeps the API key out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("org_id", &self.org_id)
            .finish()
    }
}

pub trait CredentialsService {
    fn get_ios(&self, project_id: &str, cred_id: &str) -> Result<IosCredential>;

    fn get_all_ios(&self, project_id: &str) -> Result<Vec<IosCredential>>;

    fn update_ios(
        &self,
        project_id: &str,
        cert_id: &str,
        label: &str,
        cert_path: &str,
        profile_path: &str,
        cert_pass: &str,
    ) -> Result<IosCredential>;

    fn upload_ios(
        &self,
        project_id: &str,
        label: &str,
        cert_path: &str,
        profile_path: &str,
        cert_pass: &str,
    ) -> Result<IosCredential>;

    fn delete_ios(&self, project_id: &str, cert_id: &str) -> Result<DeleteResponse>;
}

/// Builds a service scoped to one set of credentials.
pub trait ServiceFactory {
    fn connect(&self, credentials: Credentials) -> Result<Box<dyn CredentialsService>>;
}
