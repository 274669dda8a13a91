use chrono::{DateTime, Utc};
use cloudbuild::commands::CmdResult;
use cloudbuild::model::{CertificateSummary, IosCredential, ProfileSummary};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 14;

pub(super) fn render_result(result: &CmdResult) {
    print!("{}", format_result(result, Utc::now()));
}

pub(super) fn format_result(result: &CmdResult, now: DateTime<Utc>) -> String {
    match result {
        CmdResult::Credential(cred) => format_credential(cred, now),
        CmdResult::Credentials(creds) => format_credentials(creds, now),
        CmdResult::Status(status) => format!("{}\n", status.green()),
    }
}

fn format_credentials(creds: &[IosCredential], now: DateTime<Utc>) -> String {
    if creds.is_empty() {
        return "No credentials found.\n".to_string();
    }
    creds
        .iter()
        .map(|c| format_credential(c, now))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_credential(cred: &IosCredential, now: DateTime<Utc>) -> String {
    let title = if cred.label.is_empty() {
        "(no label)".to_string()
    } else {
        cred.label.clone()
    };

    let mut out = format!("{} {}\n", title.bold(), cred.credential_id.yellow());
    if let Some(created) = &cred.created {
        out.push_str(&row("Created", &format_timestamp(created, now)));
    }
    if let Some(modified) = &cred.last_mod {
        out.push_str(&row("Modified", &format_timestamp(modified, now)));
    }
    if let Some(cert) = &cred.certificate {
        out.push_str(&format_certificate(cert, now));
    }
    if let Some(profile) = &cred.provisioning_profile {
        out.push_str(&format_profile(profile, now));
    }
    out
}

fn format_certificate(cert: &CertificateSummary, now: DateTime<Utc>) -> String {
    let mut out = row("Certificate", &cert.cert_name);
    if !cert.team_id.is_empty() {
        out.push_str(&row("  Team", &cert.team_id));
    }
    if !cert.issuer.is_empty() {
        out.push_str(&row("  Issuer", &cert.issuer));
    }
    if let Some(expiration) = &cert.expiration {
        out.push_str(&row("  Expires", &format_timestamp(expiration, now)));
    }
    out
}

fn format_profile(profile: &ProfileSummary, now: DateTime<Utc>) -> String {
    let mut out = row("Profile", &profile.bundle_id);
    let kind = if profile.is_enterprise_profile {
        format!("{} (enterprise)", profile.profile_type)
    } else {
        profile.profile_type.clone()
    };
    if !kind.is_empty() {
        out.push_str(&row("  Type", &kind));
    }
    out.push_str(&row("  Devices", &profile.num_devices.to_string()));
    if let Some(expiration) = &profile.expiration {
        out.push_str(&row("  Expires", &format_timestamp(expiration, now)));
    }
    out
}

fn row(label: &str, value: &str) -> String {
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    format!("  {}{} {}\n", label.dimmed(), " ".repeat(padding), value)
}

/// `2019-03-01 10:00 (2 years ago)`; unparsable values are shown as sent.
fn format_timestamp(raw: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(raw) else {
        return raw.to_string();
    };
    let parsed = parsed.with_timezone(&Utc);
    let formatter = Formatter::new();

    let relative = if parsed <= now {
        let elapsed = now.signed_duration_since(parsed);
        formatter.convert(elapsed.to_std().unwrap_or_default())
    } else {
        let remaining = parsed.signed_duration_since(now);
        let text = formatter.convert(remaining.to_std().unwrap_or_default());
        format!("in {}", text.trim_end_matches(" ago"))
    };

    format!("{} ({})", parsed.format("%Y-%m-%d %H:%M"), relative)
}
