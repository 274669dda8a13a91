use serde::{Deserialize, Serialize};

/// An iOS signing credential: a certificate paired with a provisioning profile.
///
/// Timestamps are kept as the service sends them and parsed only for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosCredential {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "credentialid")]
    pub credential_id: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_mod: Option<String>,
    #[serde(default)]
    pub certificate: Option<CertificateSummary>,
    #[serde(default)]
    pub provisioning_profile: Option<ProfileSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    #[serde(default)]
    pub cert_name: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub expiration: Option<String>,
    #[serde(default)]
    pub uploaded: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub bundle_id: String,
    #[serde(default)]
    pub expiration: Option<String>,
    #[serde(default)]
    pub is_enterprise_profile: bool,
    #[serde(default, rename = "type")]
    pub profile_type: String,
    #[serde(default)]
    pub num_devices: u32,
    #[serde(default)]
    pub uploaded: Option<String>,
}

/// Outcome of a delete. `status` is the HTTP status line, e.g. `204 No Content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    pub status: String,
}
