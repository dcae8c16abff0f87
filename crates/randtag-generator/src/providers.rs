//! Bundled list of mail-provider domains considered safe for generated addresses.

const MAIL_PROVIDERS: &str = include_str!("../resources/mail_providers.txt");

/// Return the bundled mail providers, one per non-empty, non-comment line.
pub fn safe_mail_providers() -> Vec<String> {
    MAIL_PROVIDERS
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_providers_loaded() {
        let providers = safe_mail_providers();
        assert!(!providers.is_empty());
        assert!(providers.iter().any(|p| p == "gmail.com"));
    }

    #[test]
    fn test_providers_are_plain_domains() {
        for provider in safe_mail_providers() {
            assert!(provider.contains('.'), "{provider} has no dot");
            assert!(provider
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-'));
        }
    }
}
