use log::debug;
use url::form_urlencoded;
use url::Url;

use crate::errors::{LinkError, LinkResult};

/// A master link split into its components, with the decoded query kept as
/// ordered pairs so repeated parameters survive regeneration.
///
/// `prefix` and `fragment` hold the input text around the query verbatim;
/// rebuilt links never see the parser's normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    url: Url,
    pairs: Vec<(String, String)>,
    prefix: String,
    fragment: Option<String>,
}

/// Splits `raw` into the text before `?` and the `#fragment`, if any.
fn split_raw(raw: &str) -> (&str, Option<&str>) {
    let (before_fragment, fragment) = match raw.find('#') {
        Some(idx) => (&raw[..idx], Some(&raw[idx..])),
        None => (raw, None),
    };
    let prefix = before_fragment
        .split_once('?')
        .map_or(before_fragment, |(prefix, _)| prefix);
    (prefix, fragment)
}

impl ParsedUrl {
    pub fn parse(raw: &str) -> LinkResult<Self> {
        let url = Url::parse(raw).map_err(|e| LinkError::InvalidUrl(format!("{}: {}", raw, e)))?;

        if url.host_str().map_or(true, str::is_empty) {
            return Err(LinkError::InvalidUrl(format!("{}: missing host", raw)));
        }

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        debug!(
            "Parsed URL host={:?} path={} with {} query pair(s)",
            url.host_str(),
            url.path(),
            pairs.len()
        );

        let (prefix, fragment) = split_raw(raw);
        Ok(Self {
            url,
            pairs,
            prefix: prefix.to_string(),
            fragment: fragment.map(str::to_string),
        })
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Every value of `name`, in query order
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Rebuilds the full URL around `query`; everything else is the input text.
    pub fn with_query(&self, query: &str) -> String {
        let mut rebuilt = self.prefix.clone();
        if !query.is_empty() {
            rebuilt.push('?');
            rebuilt.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            rebuilt.push_str(fragment);
        }
        rebuilt
    }

    /// Serializes the query with `replacements` applied. A replaced key keeps
    /// the position of its first occurrence and later occurrences are
    /// dropped; keys not present are appended.
    pub fn query_with(&self, replacements: &[(&str, &str)]) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut written = vec![false; replacements.len()];

        for (key, value) in &self.pairs {
            match replacements.iter().position(|(name, _)| *name == key.as_str()) {
                Some(idx) if written[idx] => {}
                Some(idx) => {
                    serializer.append_pair(key, replacements[idx].1);
                    written[idx] = true;
                }
                None => {
                    serializer.append_pair(key, value);
                }
            }
        }

        for (idx, (name, value)) in replacements.iter().enumerate() {
            if !written[idx] {
                serializer.append_pair(name, value);
            }
        }

        serializer.finish()
    }

    pub fn with_replaced(&self, replacements: &[(&str, &str)]) -> String {
        self.with_query(&self.query_with(replacements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER: &str =
        "https://x.test/lp?utm_source=mail&utm_campaign=promo&tag=a&utm_content=botao_1&tag=b#top";

    #[test]
    fn test_parse_components() {
        let parsed = ParsedUrl::parse(MASTER).unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host(), "x.test");
        assert_eq!(parsed.path(), "/lp");
        assert_eq!(parsed.pairs().len(), 5);
        assert_eq!(parsed.values("tag"), vec!["a", "b"]);
        assert_eq!(parsed.first_value("utm_campaign"), Some("promo"));
        assert_eq!(parsed.first_value("missing"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ParsedUrl::parse("not a url"),
            Err(LinkError::InvalidUrl(_))
        ));
        assert!(matches!(
            ParsedUrl::parse("https://"),
            Err(LinkError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_replace_keeps_order_multiplicity_and_fragment() {
        let parsed = ParsedUrl::parse(MASTER).unwrap();
        let rebuilt =
            parsed.with_replaced(&[("utm_campaign", "promo_base_x"), ("utm_content", "img_2")]);
        assert_eq!(
            rebuilt,
            "https://x.test/lp?utm_source=mail&utm_campaign=promo_base_x&tag=a&utm_content=img_2&tag=b#top"
        );
    }

    #[test]
    fn test_replace_drops_later_duplicates_of_replaced_keys() {
        let parsed =
            ParsedUrl::parse("https://x.test/?utm_campaign=a&utm_campaign=b&k=1").unwrap();
        assert_eq!(parsed.query_with(&[("utm_campaign", "c")]), "utm_campaign=c&k=1");
    }

    #[test]
    fn test_replace_appends_missing_keys() {
        let parsed = ParsedUrl::parse("https://x.test/?k=1").unwrap();
        assert_eq!(parsed.query_with(&[("utm_content", "x")]), "k=1&utm_content=x");
    }

    #[test]
    fn test_values_are_reencoded() {
        let parsed = ParsedUrl::parse("https://x.test/?q=a%20b&utm_campaign=c").unwrap();
        assert_eq!(parsed.first_value("q"), Some("a b"));
        assert_eq!(
            parsed.with_replaced(&[("utm_campaign", "d")]),
            "https://x.test/?q=a+b&utm_campaign=d"
        );
    }

    #[test]
    fn test_with_empty_query_drops_question_mark() {
        let parsed = ParsedUrl::parse("https://x.test/path?a=1").unwrap();
        assert_eq!(parsed.with_query(""), "https://x.test/path");
    }

    #[test]
    fn test_rebuild_passes_host_and_path_through_verbatim() {
        let cases = [
            (
                "https://Conquer.Plus:443/LP?utm_campaign=a&utm_content=b",
                "https://Conquer.Plus:443/LP?utm_campaign=z&utm_content=b",
            ),
            (
                "https://x.test/a/../b?utm_campaign=a#frag",
                "https://x.test/a/../b?utm_campaign=z#frag",
            ),
            (
                "https://x.test?utm_campaign=a",
                "https://x.test?utm_campaign=z",
            ),
            (
                "https://exämple.com/?utm_campaign=a",
                "https://exämple.com/?utm_campaign=z",
            ),
        ];

        for (input, expected) in cases {
            let parsed = ParsedUrl::parse(input).unwrap();
            assert_eq!(parsed.with_replaced(&[("utm_campaign", "z")]), expected);
        }
    }

    #[test]
    fn test_rebuild_without_query_in_input() {
        let parsed = ParsedUrl::parse("https://x.test/lp#top").unwrap();
        assert_eq!(
            parsed.with_replaced(&[("utm_campaign", "c")]),
            "https://x.test/lp?utm_campaign=c#top"
        );
        assert_eq!(parsed.with_query(""), "https://x.test/lp#top");
    }

    #[test]
    fn test_split_raw_question_mark_inside_fragment() {
        assert_eq!(
            split_raw("https://x.test/p?a=1#f?g"),
            ("https://x.test/p", Some("#f?g"))
        );
        assert_eq!(split_raw("https://x.test/p#f?g"), ("https://x.test/p", Some("#f?g")));
    }
}
