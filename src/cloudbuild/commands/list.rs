use super::helpers::{base_schema, take_credentials, API_KEY, ORG_ID, PROJECT_ID};
use super::{ActionContext, CmdResult};
use crate::error::Result;
use crate::flags::{FlagSchema, ResolvedFlags};
use crate::registry::Command;
use crate::resolve::{Field, ParamRecord, Params};
use crate::service::Credentials;

pub const NAME: &str = "listCreds";

#[derive(Debug)]
pub struct ListParams {
    pub credentials: Credentials,
    pub project_id: String,
}

impl Params for ListParams {
    const FIELDS: &'static [Field] = &[API_KEY, ORG_ID, PROJECT_ID];

    fn from_record(mut record: ParamRecord) -> Self {
        Self {
            credentials: take_credentials(&mut record),
            project_id: record.take("project_id"),
        }
    }
}

pub fn schema() -> FlagSchema {
    base_schema(NAME).with("projectId", "", "Project Id")
}

pub fn run(flags: &ResolvedFlags, ctx: &mut ActionContext<'_>) -> Result<CmdResult> {
    let params: ListParams = ctx.resolve(flags)?;
    let service = ctx.connect(params.credentials)?;
    let creds = service.get_all_ios(&params.project_id)?;
    Ok(CmdResult::Credentials(creds))
}

pub fn command() -> Command {
    Command::new(NAME, "List all iOS credentials", schema(), run)
}
