use anyhow::{Result, bail};

use crate::secret_request::Draft;

/// Maximum accepted length of a secret name under strict validation.
pub const MAX_SECRET_NAME_LEN: usize = 255;

/// Opt-in checks for a draft before it is sent.
///
/// The panel itself submits whatever the form holds; this is only used when a
/// caller asks for it (`secretsctl create --strict`).
/// Rules: name and justification non-blank, name at most 255 chars with no
/// whitespace or control characters.
pub fn validate_draft(draft: &Draft) -> Result<()> {
    let name = &draft.secret_name;
    if name.trim().is_empty() {
        bail!("secret name must not be empty");
    }
    if name.chars().count() > MAX_SECRET_NAME_LEN {
        bail!(
            "secret name '{}' exceeds {} characters (got {})",
            name,
            MAX_SECRET_NAME_LEN,
            name.chars().count()
        );
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        bail!("secret name '{}' must not contain whitespace", name);
    }
    if draft.justification.trim().is_empty() {
        bail!("justification must not be empty");
    }
    Ok(())
}
