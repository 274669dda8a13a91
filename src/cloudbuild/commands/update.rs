use super::helpers::{base_schema, take_credentials, API_KEY, ORG_ID, PROJECT_ID};
use super::{ActionContext, CmdResult};
use crate::error::Result;
use crate::flags::{FlagSchema, ResolvedFlags};
use crate::registry::Command;
use crate::resolve::{Field, ParamRecord, Params};
use crate::service::Credentials;

pub const NAME: &str = "updateCred";

#[derive(Debug)]
pub struct UpdateParams {
    pub credentials: Credentials,
    pub project_id: String,
    pub cert_id: String,
    pub label: String,
    pub cert_path: String,
    pub profile_path: String,
    pub cert_pass: String,
}

impl Params for UpdateParams {
    const FIELDS: &'static [Field] = &[
        API_KEY,
        ORG_ID,
        PROJECT_ID,
        Field::tagged("cert_id", "certId"),
        Field::new("label"),
        Field::tagged("cert_path", "certPath"),
        Field::tagged("profile_path", "profilePath"),
        Field::tagged("cert_pass", "certPass"),
    ];

    fn from_record(mut record: ParamRecord) -> Self {
        Self {
            credentials: take_credentials(&mut record),
            project_id: record.take("project_id"),
            cert_id: record.take("cert_id"),
            label: record.take("label"),
            cert_path: record.take("cert_path"),
            profile_path: record.take("profile_path"),
            cert_pass: record.take("cert_pass"),
        }
    }
}

pub fn schema() -> FlagSchema {
    base_schema(NAME)
        .with("projectId", "", "Project Id")
        .with("certId", "", "Certificate Id")
        .with("label", "", "Label")
        .with("certPath", "", "Certificate Path")
        .with("profilePath", "", "Provisioning Profile Path")
        .with("certPass", "", "Certificate password")
}

/// `certId` names the credential being replaced; `certPath` is the new certificate file.
pub fn run(flags: &ResolvedFlags, ctx: &mut ActionContext<'_>) -> Result<CmdResult> {
    let params: UpdateParams = ctx.resolve(flags)?;
    let service = ctx.connect(params.credentials)?;
    let cred = service.update_ios(
        &params.project_id,
        &params.cert_id,
        &params.label,
        &params.cert_path,
        &params.profile_path,
        &params.cert_pass,
    )?;
    Ok(CmdResult::Credential(cred))
}

pub fn command() -> Command {
    Command::new(NAME, "Update an iOS credential", schema(), run)
}
