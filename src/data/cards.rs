//! Top Headline Cards
//! Typed card records for the headline strip. The renderer consumes these
//! structs directly; no markup strings are assembled anywhere.

use serde::{Deserialize, Serialize};

/// One headline card. All fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsCard {
    pub title: String,
    pub summary: String,
    pub image_url: String,
    pub url: String,
}

/// The three sample headline cards shown in the bottom-left pane.
pub fn top_headlines() -> Vec<NewsCard> {
    vec![
        NewsCard {
            title: "Google Patches 107 Android Flaws, Including Two Framework Bugs \
                    Exploited in the Wild"
                .to_string(),
            summary: "Google released monthly security updates including fixes for two \
                      vulnerabilities exploited in the wild."
                .to_string(),
            image_url: "https://i.ibb.co/3mY2Q6p/android-vuln.jpg".to_string(),
            url: "https://thehackernews.com/2025/12/google-patches-107-android-flaws.html"
                .to_string(),
        },
        NewsCard {
            title: "India Orders Phone Makers to Pre-Install Government App to Tackle \
                    Telecom Fraud"
                .to_string(),
            summary: "India's ministry ordered manufacturers to preload a cybersecurity \
                      app on new phones."
                .to_string(),
            image_url: "https://i.ibb.co/tc0QK7W/india-phone.jpg".to_string(),
            url: "https://thehackernews.com/2025/12/india-orders-phone-makers-pre-install-app.html"
                .to_string(),
        },
        NewsCard {
            title: "Enhance Microsoft Intune to Optimize Endpoint Management".to_string(),
            summary: "New recommendations to improve endpoint management and reduce attack \
                      surface."
                .to_string(),
            image_url: "https://i.ibb.co/7bX7s0m/intune.jpg".to_string(),
            url: "https://thehackernews.com/2025/11/enhance-microsoft-intune.html".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_cards_are_complete() {
        let cards = top_headlines();
        assert_eq!(cards.len(), 3);
        for card in &cards {
            assert!(!card.title.is_empty());
            assert!(!card.summary.is_empty());
            assert!(card.image_url.starts_with("https://"));
            assert!(card.url.starts_with("https://"));
        }
    }
}
