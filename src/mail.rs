use urlencoding::encode;

/// A pre-filled outgoing email draft, handed to whatever mail client the
/// operating environment has registered. Nothing is sent over the network
/// by this site itself.
pub struct MailIntent {
    recipient: &'static str,
    subject: String,
    body: String,
}

impl MailIntent {
    pub fn access_request(recipient: &'static str, name: &str, message: &str) -> Self {
        Self {
            recipient,
            subject: format!("Access Request from {}", name),
            body: message.to_string(),
        }
    }

    /// Encodes the intent as a `mailto:` URI. Subject and body are
    /// percent-encoded per URI-component rules: space is `%20` (never `+`),
    /// newline is `%0A`, and reserved characters like `&`, `=`, `%`, `#`
    /// and `?` are all escaped.
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode(&self.subject),
            encode(&self.body),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_prefixes_name_and_escapes_reserved_characters() {
        let intent = MailIntent::access_request("admin@example.com", "Jane & Doe", "hi");
        let uri = intent.to_uri();
        assert!(uri.contains("subject=Access%20Request%20from%20Jane%20%26%20Doe"));
    }

    #[test]
    fn body_newlines_become_percent_0a() {
        let intent =
            MailIntent::access_request("admin@example.com", "Jane", "line one\nline two");
        let uri = intent.to_uri();
        assert!(uri.ends_with("&body=line%20one%0Aline%20two"));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn full_uri_matches_the_mailto_contract() {
        let intent = MailIntent::access_request(
            "admin@example.com",
            "Test User",
            "Interested in self-hosting.",
        );
        assert_eq!(
            intent.to_uri(),
            "mailto:admin@example.com?subject=Access%20Request%20from%20Test%20User\
             &body=Interested%20in%20self-hosting."
        );
    }

    #[test]
    fn query_delimiters_in_user_input_cannot_split_the_uri() {
        let intent =
            MailIntent::access_request("admin@example.com", "a=b&c", "50% off? #deal");
        let uri = intent.to_uri();
        assert!(uri.contains("subject=Access%20Request%20from%20a%3Db%26c"));
        assert!(uri.ends_with("&body=50%25%20off%3F%20%23deal"));
        // Exactly the two query parameters from the template survive.
        assert_eq!(uri.matches('&').count(), 1);
        assert_eq!(uri.matches('=').count(), 2);
    }

    #[test]
    fn spaces_are_never_encoded_as_plus() {
        let intent = MailIntent::access_request("admin@example.com", "Test User", "a b");
        assert!(!intent.to_uri().contains('+'));
    }
}
