use crate::domain::model::ObfuscatedEmail;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Standard alphabet, padding optional (browsers' `atob` is just as lenient).
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode one half; anything malformed becomes empty text.
fn decode_half(encoded: Option<&str>) -> String {
    let Some(encoded) = encoded else {
        return String::new();
    };
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    LENIENT
        .decode(compact.as_bytes())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// Rebuild `local@domain`, or return an empty string when either half is
/// missing or undecodable. Callers must not render any mail affordance for
/// an empty result.
pub fn assemble_email(email: Option<&ObfuscatedEmail>) -> String {
    let Some(email) = email else {
        return String::new();
    };
    let local = decode_half(email.local_b64.as_deref());
    let domain = decode_half(email.domain_b64.as_deref());

    if local.is_empty() || domain.is_empty() {
        tracing::debug!("Email halves incomplete, hiding mail affordances");
        return String::new();
    }
    format!("{}@{}", local, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    fn parts(local: Option<&str>, domain: Option<&str>) -> ObfuscatedEmail {
        ObfuscatedEmail {
            local_b64: local.map(|s| s.to_string()),
            domain_b64: domain.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_assemble_email() {
        let email = parts(Some(&STANDARD.encode("a")), Some(&STANDARD.encode("b.com")));
        assert_eq!(assemble_email(Some(&email)), "a@b.com");
    }

    #[test]
    fn test_missing_half_yields_empty() {
        let email = parts(Some(&STANDARD.encode("a")), None);
        assert_eq!(assemble_email(Some(&email)), "");
        assert_eq!(assemble_email(None), "");
    }

    #[test]
    fn test_undecodable_half_yields_empty() {
        let email = parts(Some("!!not base64!!"), Some(&STANDARD.encode("b.com")));
        assert_eq!(assemble_email(Some(&email)), "");
    }

    #[test]
    fn test_unpadded_and_wrapped_input() {
        // "jane" -> "amFuZQ==", "example.org" -> "ZXhhbXBsZS5vcmc="
        let email = parts(Some("amFu\nZQ"), Some("ZXhhbXBsZS5vcmc"));
        assert_eq!(assemble_email(Some(&email)), "jane@example.org");
    }
}
