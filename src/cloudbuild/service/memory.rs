use super::{Credentials, CredentialsService, ServiceFactory};
use crate::error::{CloudBuildError, Result};
use crate::model::{DeleteResponse, IosCredential};
use std::cell::RefCell;
use std::rc::Rc;

/// A remote call as seen by [`RecordingService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetOne {
        project_id: String,
        cred_id: String,
    },
    GetAll {
        project_id: String,
    },
    Update {
        project_id: String,
        cert_id: String,
        label: String,
        cert_path: String,
        profile_path: String,
        cert_pass: String,
    },
    Upload {
        project_id: String,
        label: String,
        cert_path: String,
        profile_path: String,
        cert_pass: String,
    },
    Delete {
        project_id: String,
        cert_id: String,
    },
}

#[derive(Debug, Default)]
struct Log {
    connections: Vec<Credentials>,
    calls: Vec<Call>,
}

/// Hands out [`RecordingService`]s that share one call log.
///
/// With [`RecordingFactory::failing`], every call returns the given remote error.
#[derive(Debug, Default, Clone)]
pub struct RecordingFactory {
    log: Rc<RefCell<Log>>,
    stored: Vec<IosCredential>,
    failure: Option<(u16, String)>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credentials returned by `get_all_ios`.
    pub fn with_credentials(mut self, creds: Vec<IosCredential>) -> Self {
        self.stored = creds;
        self
    }

    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            failure: Some((status, message.into())),
            ..Self::default()
        }
    }

    pub fn connections(&self) -> Vec<Credentials> {
        self.log.borrow().connections.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().calls.clone()
    }
}

impl ServiceFactory for RecordingFactory {
    fn connect(&self, credentials: Credentials) -> Result<Box<dyn CredentialsService>> {
        self.log.borrow_mut().connections.push(credentials);
        Ok(Box::new(RecordingService {
            log: Rc::clone(&self.log),
            stored: self.stored.clone(),
            failure: self.failure.clone(),
        }))
    }
}

pub struct RecordingService {
    log: Rc<RefCell<Log>>,
    stored: Vec<IosCredential>,
    failure: Option<(u16, String)>,
}

impl RecordingService {
    fn record(&self, call: Call) -> Result<()> {
        self.log.borrow_mut().calls.push(call);
        match &self.failure {
            Some((status, message)) => Err(CloudBuildError::Remote {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn credential(id: &str, label: &str) -> IosCredential {
    IosCredential {
        platform: "ios".into(),
        label: label.into(),
        credential_id: id.into(),
        ..IosCredential::default()
    }
}

impl CredentialsService for RecordingService {
    fn get_ios(&self, project_id: &str, cred_id: &str) -> Result<IosCredential> {
        self.record(Call::GetOne {
            project_id: project_id.into(),
            cred_id: cred_id.into(),
        })?;
        Ok(credential(cred_id, ""))
    }

    fn get_all_ios(&self, project_id: &str) -> Result<Vec<IosCredential>> {
        self.record(Call::GetAll {
            project_id: project_id.into(),
        })?;
        Ok(self.stored.clone())
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
        self.record(Call::Update {
            project_id: project_id.into(),
            cert_id: cert_id.into(),
            label: label.into(),
            cert_path: cert_path.into(),
            profile_path: profile_path.into(),
            cert_pass: cert_pass.into(),
        })?;
        Ok(credential(cert_id, label))
    }

    fn upload_ios(
        &self,
        project_id: &str,
        label: &str,
        cert_path: &str,
        profile_path: &str,
        cert_pass: &str,
    ) -> Result<IosCredential> {
        self.record(Call::Upload {
            project_id: project_id.into(),
            label: label.into(),
            cert_path: cert_path.into(),
            profile_path: profile_path.into(),
            cert_pass: cert_pass.into(),
        })?;
        Ok(credential("new-credential", label))
    }

    fn delete_ios(&self, project_id: &str, cert_id: &str) -> Result<DeleteResponse> {
        self.record(Call::Delete {
            project_id: project_id.into(),
            cert_id: cert_id.into(),
        })?;
        Ok(DeleteResponse {
            status: "204 No Content".into(),
        })
    }
}
