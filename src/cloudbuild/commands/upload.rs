use super::helpers::{base_schema, take_credentials, API_KEY, ORG_ID, PROJECT_ID};
use super::{ActionContext, CmdResult};
use crate::error::Result;
use crate::flags::{FlagSchema, ResolvedFlags};
use crate::registry::Command;
use crate::resolve::{Field, ParamRecord, Params};
use crate::service::Credentials;

pub const NAME: &str = "uploadCred";

#[derive(Debug)]
pub struct UploadParams {
    pub credentials: Credentials,
    pub project_id: String,
    pub label: String,
    pub cert_path: String,
    pub profile_path: String,
    pub cert_pass: String,
}

impl Params for UploadParams {
    const FIELDS: &'static [Field] = &[
        API_KEY,
        ORG_ID,
        PROJECT_ID,
        Field::new("label"),
        Field::tagged("cert_path", "certPath"),
        Field::tagged("profile_path", "profilePath"),
        Field::tagged("cert_pass", "certPass"),
    ];

    fn from_record(mut record: ParamRecord) -> Self {
        Self {
            credentials: take_credentials(&mut record),
            project_id: record.take("project_id"),
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
        .with("label", "", "Label")
        .with("certPath", "", "Certificate Path")
        .with("profilePath", "", "Provisioning Profile Path")
        .with("certPass", "", "Certificate password")
}

pub fn run(flags: &ResolvedFlags, ctx: &mut ActionContext<'_>) -> Result<CmdResult> {
    let params: UploadParams = ctx.resolve(flags)?;
    let service = ctx.connect(params.credentials)?;
    let cred = service.upload_ios(
        &params.project_id,
        &params.label,
        &params.cert_path,
        &params.profile_path,
        &params.cert_pass,
    )?;
    Ok(CmdResult::Credential(cred))
}

pub fn command() -> Command {
    Command::new(NAME, "Upload an iOS credential", schema(), run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CloudBuildError;
    use crate::prompt::scripted::ScriptedPrompter;
    use crate::service::memory::{Call, RecordingFactory};

    fn full_flags() -> ResolvedFlags {
        [
            ("apiKey", "k"),
            ("orgId", "o"),
            ("projectId", "p"),
            ("label", "Dev"),
            ("certPath", "dev.p12"),
            ("profilePath", "dev.mobileprovision"),
            ("certPass", "pw"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn uploads_with_positional_fields_in_order() {
        let mut prompter = ScriptedPrompter::default();
        let factory = RecordingFactory::new();

        let result = run(&full_flags(), &mut ActionContext::new(&mut prompter, &factory)).unwrap();

        assert_eq!(
            factory.calls(),
            vec![Call::Upload {
                project_id: "p".into(),
                label: "Dev".into(),
                cert_path: "dev.p12".into(),
                profile_path: "dev.mobileprovision".into(),
                cert_pass: "pw".into(),
            }]
        );
        assert!(matches!(result, CmdResult::Credential(c) if c.label == "Dev"));
    }

    #[test]
    fn remote_failure_is_propagated_unchanged() {
        let mut prompter = ScriptedPrompter::default();
        let factory = RecordingFactory::failing(400, "invalid certificate");

        let err = run(&full_flags(), &mut ActionContext::new(&mut prompter, &factory)).unwrap_err();

        match err {
            CloudBuildError::Remote { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "invalid certificate");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(factory.calls().len(), 1);
    }
}
