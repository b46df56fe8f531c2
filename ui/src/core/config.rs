//! Page-level configuration.
//!
//! A page can override any option through a JSON block embedded in its
//! markup:
//!
//! ```html
//! <script type="application/json" id="softlight-config">
//!   {"reveal": {"once": false}}
//! </script>
//! ```
//!
//! Missing sections and fields keep their defaults; a malformed block is
//! logged and ignored rather than taking the page down.

use serde::Deserialize;

use crate::fade::FadeOptions;
use crate::nav::NavOptions;
use crate::reveal::RevealOptions;

/// Element id of the embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "softlight-config";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub fade: FadeOptions,
    pub nav: NavOptions,
    pub reveal: RevealOptions,
}

impl PageConfig {
    /// Parse a configuration block. Unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the embedded block from the current document. No block means
    /// defaults; a malformed block logs a warning and means defaults too.
    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Self {
        let raw = crate::core::dom::document()
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());
        match raw {
            None => Self::default(),
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(err) => {
                    crate::core::dom::warn(&format!(
                        "ignoring malformed #{CONFIG_ELEMENT_ID} block: {err}"
                    ));
                    Self::default()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config.fade.selector, FadeOptions::default().selector);
        assert_eq!(config.nav.open_class, NavOptions::default().open_class);
        assert_eq!(config.reveal.threshold, RevealOptions::default().threshold);
    }

    #[test]
    fn partial_override_keeps_sibling_defaults() {
        let config =
            PageConfig::from_json(r#"{"reveal": {"once": false, "threshold": 0.4}}"#).unwrap();
        assert!(!config.reveal.once);
        assert_eq!(config.reveal.threshold, 0.4);
        assert_eq!(config.reveal.selector, RevealOptions::default().selector);
        assert_eq!(config.fade.duration_ms, FadeOptions::default().duration_ms);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = PageConfig::from_json(r#"{"theme": "dark", "fade": {"duration_ms": 250}}"#)
            .unwrap();
        assert_eq!(config.fade.duration_ms, 250.0);
    }

    #[test]
    fn malformed_block_is_an_error() {
        assert!(PageConfig::from_json("not json").is_err());
        assert!(PageConfig::from_json(r#"{"fade": 3}"#).is_err());
    }
}
