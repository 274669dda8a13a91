use super::helpers::{base_schema, take_credentials, API_KEY, ORG_ID, PROJECT_ID};
use super::{ActionContext, CmdResult};
use crate::error::Result;
use crate::flags::{FlagSchema, ResolvedFlags};
use crate::registry::Command;
use crate::resolve::{Field, ParamRecord, Params};
use crate::service::Credentials;

pub const NAME: &str = "deleteCred";

#[derive(Debug)]
pub struct DeleteParams {
    pub credentials: Credentials,
    pub project_id: String,
    pub cred_id: String,
}

impl Params for DeleteParams {
    // Resolved from `credId`, the same name the schema declares.
    const FIELDS: &'static [Field] = &[
        API_KEY,
        ORG_ID,
        PROJECT_ID,
        Field::tagged("cred_id", "credId"),
    ];

    fn from_record(mut record: ParamRecord) -> Self {
        Self {
            credentials: take_credentials(&mut record),
            project_id: record.take("project_id"),
            cred_id: record.take("cred_id"),
        }
    }
}

pub fn schema() -> FlagSchema {
    base_schema(NAME)
        .with("projectId", "", "Project Id")
        .with("credId", "", "Credential Id")
}

pub fn run(flags: &ResolvedFlags, ctx: &mut ActionContext<'_>) -> Result<CmdResult> {
    let params: DeleteParams = ctx.resolve(flags)?;
    let service = ctx.connect(params.credentials)?;
    let response = service.delete_ios(&params.project_id, &params.cred_id)?;
    Ok(CmdResult::Status(response.status))
}

pub fn command() -> Command {
    Command::new(NAME, "Delete an iOS credential", schema(), run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CloudBuildError;
    use crate::prompt::scripted::ScriptedPrompter;
    use crate::service::memory::{Call, RecordingFactory};

    fn flags() -> ResolvedFlags {
        [("apiKey", "k"), ("orgId", "o"), ("projectId", "p"), ("credId", "c")]
            .into_iter()
            .collect()
    }

    #[test]
    fn deletes_the_flagged_credential() {
        let mut prompter = ScriptedPrompter::default();
        let factory = RecordingFactory::new();

        let result = run(&flags(), &mut ActionContext::new(&mut prompter, &factory)).unwrap();

        assert_eq!(
            factory.calls(),
            vec![Call::Delete {
                project_id: "p".into(),
                cert_id: "c".into(),
            }]
        );
        assert_eq!(result, CmdResult::Status("204 No Content".into()));
    }

    #[test]
    fn not_found_surfaces_without_reprompting() {
        let mut prompter = ScriptedPrompter::default();
        let factory = RecordingFactory::failing(404, "credential not found");

        let err = run(&flags(), &mut ActionContext::new(&mut prompter, &factory)).unwrap_err();

        assert!(matches!(err, CloudBuildError::Remote { status: 404, .. }));
        assert!(err.to_string().contains("credential not found"));
        assert!(prompter.asked().is_empty());
    }
}
