//! Video reference codec.
//!
//! A stored video reference is a provider-tagged string of the form
//! `{Provider}id{/Provider}`; untagged strings belong to the default
//! `HTML` provider (local content, no external embed). All functions here
//! are stateless transformations over the reference string and the
//! configured provider list.
//!
//! Note the two distinct "no provider" channels: an empty reference
//! detects as `None`, while a non-empty reference with no matching tags
//! detects as `Some("HTML")`.

use crate::config::{MediaConfig, HTML_PROVIDER};
use crate::owner::MediaOwner;

/// Wrap a raw id in provider tags. `HTML` references stay untagged.
pub fn tag_reference(provider: &str, raw_id: &str) -> String {
    if provider == HTML_PROVIDER {
        raw_id.to_string()
    } else {
        format!("{{{provider}}}{raw_id}{{/{provider}}}")
    }
}

/// Remove the open and close tags of `provider` from a reference. The two
/// tags are stripped independently; neither has to be present.
pub fn strip_tags(reference: &str, provider: &str) -> String {
    reference
        .replace(&format!("{{{provider}}}"), "")
        .replace(&format!("{{/{provider}}}"), "")
}

/// Detect which configured provider a reference belongs to.
///
/// Returns `None` for an empty reference. Providers are scanned in their
/// configured order; the first whose open and close tags are both present
/// wins. A non-empty reference matching nothing is an `HTML` reference.
pub fn detect_provider<'a>(config: &'a MediaConfig, reference: &str) -> Option<&'a str> {
    if reference.is_empty() {
        return None;
    }

    for provider in &config.video_providers {
        let open = format!("{{{provider}}}");
        let close = format!("{{/{provider}}}");
        if reference.contains(&open) && reference.contains(&close) {
            return Some(provider);
        }
    }

    Some(HTML_PROVIDER)
}

/// Expand a reference into a playable embed URL.
///
/// Returns `None` when the reference is empty, belongs to `HTML`, or the
/// detected provider has no configured template.
pub fn embed_url(config: &MediaConfig, reference: &str) -> Option<String> {
    let provider = detect_provider(config, reference)?;
    if provider == HTML_PROVIDER {
        return None;
    }

    let Some(template) = config.video_provider_urls.get(provider) else {
        tracing::warn!(provider = %provider, "No embed template configured for provider");
        return None;
    };

    let video_id = strip_tags(reference, provider);
    Some(template.replace("{video}", &video_id))
}

/// Provider of an owner's stored video reference.
pub fn owner_provider<'a>(config: &'a MediaConfig, owner: &dyn MediaOwner) -> Option<&'a str> {
    detect_provider(config, owner.media_video().unwrap_or(""))
}

/// An owner's video reference with provider tags removed.
pub fn owner_video_without_tags(config: &MediaConfig, owner: &dyn MediaOwner) -> Option<String> {
    let reference = owner.media_video()?;
    let provider = detect_provider(config, reference)?;
    Some(strip_tags(reference, provider))
}

/// Embed URL for an owner's stored video reference.
pub fn owner_embed_url(config: &MediaConfig, owner: &dyn MediaOwner) -> Option<String> {
    embed_url(config, owner.media_video().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MediaConfig {
        MediaConfig::default()
    }

    #[test]
    fn test_tag_reference_wraps_non_html_providers() {
        assert_eq!(
            tag_reference("YouTube", "abc123"),
            "{YouTube}abc123{/YouTube}"
        );
        assert_eq!(tag_reference("HTML", "local.mp4"), "local.mp4");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("{YouTube}abc123{/YouTube}", "YouTube"),
            "abc123"
        );
        // Tags are removed independently of each other.
        assert_eq!(strip_tags("{Vimeo}12345", "Vimeo"), "12345");
        assert_eq!(strip_tags("12345{/Vimeo}", "Vimeo"), "12345");
        // Foreign tags are left in place.
        assert_eq!(
            strip_tags("{YouTube}abc{/YouTube}", "Vimeo"),
            "{YouTube}abc{/YouTube}"
        );
    }

    #[test]
    fn test_detect_provider_empty_is_none() {
        assert_eq!(detect_provider(&config(), ""), None);
    }

    #[test]
    fn test_detect_provider_untagged_is_html() {
        assert_eq!(detect_provider(&config(), "plainstring"), Some("HTML"));
    }

    #[test]
    fn test_detect_provider_tagged() {
        let cfg = config();
        assert_eq!(
            detect_provider(&cfg, "{YouTube}abc123{/YouTube}"),
            Some("YouTube")
        );
        assert_eq!(
            detect_provider(&cfg, "{Dailymotion}xyz{/Dailymotion}"),
            Some("Dailymotion")
        );
        // An open tag alone does not match.
        assert_eq!(detect_provider(&cfg, "{YouTube}abc123"), Some("HTML"));
    }

    #[test]
    fn test_detect_provider_scan_order() {
        let mut cfg = config();
        cfg.video_providers = vec!["Vimeo".to_string(), "YouTube".to_string()];
        // Both providers' tags present: the first configured provider wins.
        let reference = "{YouTube}a{/YouTube}{Vimeo}b{/Vimeo}";
        assert_eq!(detect_provider(&cfg, reference), Some("Vimeo"));
    }

    #[test]
    fn test_embed_url_youtube() {
        assert_eq!(
            embed_url(&config(), "{YouTube}abc123{/YouTube}"),
            Some("https://www.youtube.com/embed/abc123".to_string())
        );
    }

    #[test]
    fn test_embed_url_html_and_empty_are_none() {
        let cfg = config();
        assert_eq!(embed_url(&cfg, "plainstring"), None);
        assert_eq!(embed_url(&cfg, ""), None);
    }

    #[test]
    fn test_embed_url_missing_template_is_none() {
        let mut cfg = config();
        cfg.video_providers.push("PeerTube".to_string());
        assert_eq!(embed_url(&cfg, "{PeerTube}abc{/PeerTube}"), None);
    }

    #[test]
    fn test_embed_url_twitch_parent_domain() {
        let cfg = MediaConfig::with_app_domain("example.com");
        assert_eq!(
            embed_url(&cfg, "{Twitch}12345{/Twitch}"),
            Some("12345&parent=example.com".to_string())
        );
    }
}
