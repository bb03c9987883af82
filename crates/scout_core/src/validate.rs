use std::sync::LazyLock;

use regex::Regex;

use crate::{FlowError, SubmissionRequest};

static EVENT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.ticketmaster\.com/[a-zA-Z0-9-]+/event/[a-zA-Z0-9-]+$")
        .expect("event url pattern compiles")
});

/// True when `url` points at a vendor event page.
pub fn is_vendor_event_url(url: &str) -> bool {
    EVENT_URL.is_match(url)
}

pub fn is_access_code_valid(code: &str) -> bool {
    !code.is_empty()
}

/// Checks both fields in submit order: URL first, then access code.
pub fn validate_submission(url: &str, code: &str) -> Result<SubmissionRequest, FlowError> {
    if !is_vendor_event_url(url) {
        return Err(FlowError::InvalidUrl);
    }
    if !is_access_code_valid(code) {
        return Err(FlowError::MissingAccessCode);
    }
    Ok(SubmissionRequest {
        url: url.to_string(),
        code: code.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_vendor_event_urls() {
        assert!(is_vendor_event_url(
            "https://www.ticketmaster.com/taylor-swift-tour/event/0A005F3B9A1C2D"
        ));
        assert!(is_vendor_event_url("https://www.ticketmaster.com/a/event/b"));
    }

    #[test]
    fn rejects_everything_else() {
        for url in [
            "",
            "http://www.ticketmaster.com/a/event/b",
            "https://ticketmaster.com/a/event/b",
            "https://www.ticketmaster.ca/a/event/b",
            "https://www.ticketmaster.com//event/b",
            "https://www.ticketmaster.com/a/event/",
            "https://www.ticketmaster.com/a/event/b/",
            "https://www.ticketmaster.com/a/event/b?x=1",
            "https://www.ticketmaster.com/a_b/event/c",
            "https://www.ticketmaster.com/a/events/b",
            " https://www.ticketmaster.com/a/event/b",
        ] {
            assert!(!is_vendor_event_url(url), "{url:?} should be rejected");
        }
    }

    #[test]
    fn url_is_checked_before_code() {
        assert_eq!(validate_submission("nope", ""), Err(FlowError::InvalidUrl));
        assert_eq!(
            validate_submission("https://www.ticketmaster.com/a/event/b", ""),
            Err(FlowError::MissingAccessCode)
        );
        let request = validate_submission("https://www.ticketmaster.com/a/event/b", "X1").unwrap();
        assert_eq!(request.code, "X1");
    }
}
