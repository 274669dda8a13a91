use crate::flags::FlagSchema;
use crate::resolve::{Field, ParamRecord};
use crate::service::Credentials;

pub const API_KEY: Field = Field::tagged("api_key", "apiKey");
pub const ORG_ID: Field = Field::tagged("org_id", "orgId");
pub const PROJECT_ID: Field = Field::tagged("project_id", "projectId");

/// A schema pre-seeded with the auth flags every command accepts.
pub fn base_schema(command: &str) -> FlagSchema {
    FlagSchema::new(command)
        .with("apiKey", "", "Cloud Build API key")
        .with("orgId", "", "Organization Id")
}

pub fn take_credentials(record: &mut ParamRecord) -> Credentials {
    Credentials::new(record.take(API_KEY.name), record.take(ORG_ID.name))
}
