use super::helpers::{base_schema, take_credentials, API_KEY, ORG_ID, PROJECT_ID};
use super::{ActionContext, CmdResult};
use crate::error::Result;
use crate::flags::{FlagSchema, ResolvedFlags};
use crate::registry::Command;
use crate::resolve::{Field, ParamRecord, Params};
use crate::service::Credentials;

pub const NAME: &str = "getCred";

#[derive(Debug)]
pub struct GetParams {
    pub credentials: Credentials,
    pub project_id: String,
    pub cred_id: String,
}

impl Params for GetParams {
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
    let params: GetParams = ctx.resolve(flags)?;
    let service = ctx.connect(params.credentials)?;
    let cred = service.get_ios(&params.project_id, &params.cred_id)?;
    Ok(CmdResult::Credential(cred))
}

pub fn command() -> Command {
    Command::new(NAME, "Get iOS credential details", schema(), run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::ScriptedPrompter;
    use crate::service::memory::{Call, RecordingFactory};

    #[test]
    fn fetches_one_credential() {
        let flags: ResolvedFlags = [
            ("apiKey", "K"),
            ("orgId", "O"),
            ("projectId", "P-1"),
            ("credId", "C-1"),
        ]
        .into_iter()
        .collect();
        let mut prompter = ScriptedPrompter::default();
        let factory = RecordingFactory::new();

        let result = run(&flags, &mut ActionContext::new(&mut prompter, &factory)).unwrap();

        assert!(prompter.asked().is_empty());
        assert_eq!(factory.connections(), vec![Credentials::new("K", "O")]);
        assert_eq!(
            factory.calls(),
            vec![Call::GetOne {
                project_id: "P-1".into(),
                cred_id: "C-1".into(),
            }]
        );
        assert!(matches!(result, CmdResult::Credential(c) if c.credential_id == "C-1"));
    }

    #[test]
    fn prompts_for_missing_credential_id() {
        let flags: ResolvedFlags = [("apiKey", "k"), ("orgId", "o"), ("projectId", "p")]
            .into_iter()
            .collect();
        let mut prompter = ScriptedPrompter::new(["CRED-7"]);
        let factory = RecordingFactory::new();

        run(&flags, &mut ActionContext::new(&mut prompter, &factory)).unwrap();

        assert_eq!(prompter.asked(), &["credId"]);
        assert_eq!(
            factory.calls(),
            vec![Call::GetOne {
                project_id: "p".into(),
                cred_id: "cred-7".into(),
            }]
        );
    }
}
