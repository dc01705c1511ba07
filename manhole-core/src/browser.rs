//! Help text for re-enabling location access, keyed by browser family.
//!
//! Detection is a substring check on the user agent and only picks which hint
//! to show.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
    Other,
}

impl Browser {
    /// Guess the browser family from a user-agent string.
    pub fn detect(user_agent: &str) -> Self {
        // Edge and Chrome on iOS both also advertise "Safari/", so order matters.
        if user_agent.contains("Edg/") || user_agent.contains("EdgiOS") {
            Browser::Edge
        } else if user_agent.contains("Firefox/") || user_agent.contains("FxiOS") {
            Browser::Firefox
        } else if user_agent.contains("Chrome/") || user_agent.contains("CriOS") {
            Browser::Chrome
        } else if user_agent.contains("Safari/") {
            Browser::Safari
        } else {
            Browser::Other
        }
    }

    pub fn location_help(&self) -> &'static str {
        match self {
            Browser::Chrome => {
                "In Chrome, click the lock icon in the address bar, open Site settings and set Location to Allow."
            }
            Browser::Firefox => {
                "In Firefox, click the permissions icon in the address bar and clear the blocked Location permission."
            }
            Browser::Safari => {
                "In Safari, open Settings for this website and set Location to Allow."
            }
            Browser::Edge => {
                "In Edge, click the lock icon in the address bar, open Permissions for this site and set Location to Allow."
            }
            Browser::Other => "Check your browser's site permissions and allow location access for this page.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
    const EDGE_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36 Edg/126.0.0.0";
    const SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15";
    const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0";

    #[test]
    fn test_detect_browser_families() {
        assert_eq!(Browser::detect(CHROME_UA), Browser::Chrome);
        assert_eq!(Browser::detect(EDGE_UA), Browser::Edge);
        assert_eq!(Browser::detect(SAFARI_UA), Browser::Safari);
        assert_eq!(Browser::detect(FIREFOX_UA), Browser::Firefox);
        assert_eq!(Browser::detect(""), Browser::Other);
    }

    #[test]
    fn test_every_family_has_help() {
        for browser in [
            Browser::Chrome,
            Browser::Firefox,
            Browser::Safari,
            Browser::Edge,
            Browser::Other,
        ] {
            assert!(!browser.location_help().is_empty());
        }
    }
}
