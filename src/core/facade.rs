//! Entry point tying validation, option resolution, evaluation and scoping.

use tracing::debug;

use crate::core::exclude::resolve_scope;
use crate::core::options::{resolve, resolve_option, Options};
use crate::core::relation::{evaluate, RelationMap};
use crate::error::{Argument, RelationError};
use crate::types::Component;
use crate::url::psl::{PublicSuffixList, SuffixResolver};
use crate::url::view::{UrlLike, UrlView};

/// The computed relation between two URLs.
///
/// The per-component map is evaluated once, at construction; every query
/// afterwards is a read of that map.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use url_relation::{Component, UrlRelation};
///
/// let url1 = Url::parse("http://www.example.com/dir/index.html")?;
/// let url2 = Url::parse("http://example.com/dir/")?;
///
/// // The common profile ignores `www.` and index files between http(s) URLs
/// assert!(UrlRelation::matches(&url1, &url2, None)?);
///
/// let relation = UrlRelation::new(&url1, &url2, None)?;
/// assert!(relation.up_to(Some(Component::Host), &[])?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct UrlRelation {
    url1: UrlView,
    url2: UrlView,
    options: Option<Options>,
    relations: RelationMap,
}

impl UrlRelation {
    /// Validate both URLs and compute their relation.
    ///
    /// Options left unset (or `None` altogether) use the common profile.
    pub fn new<U1, U2>(url1: &U1, url2: &U2, options: Option<&Options>) -> Result<Self, RelationError>
    where
        U1: UrlLike + ?Sized,
        U2: UrlLike + ?Sized,
    {
        Self::with_resolver(url1, url2, options, &PublicSuffixList)
    }

    /// Like [`UrlRelation::new`], splitting hostnames with `resolver`.
    pub fn with_resolver<U1, U2>(
        url1: &U1,
        url2: &U2,
        options: Option<&Options>,
        resolver: &dyn SuffixResolver,
    ) -> Result<Self, RelationError>
    where
        U1: UrlLike + ?Sized,
        U2: UrlLike + ?Sized,
    {
        let url1 = UrlView::capture(url1, Argument::First)?;
        let url2 = UrlView::capture(url2, Argument::Second)?;
        let relations = evaluate(&url1, &url2, options, resolver);

        Ok(Self {
            url1,
            url2,
            options: options.cloned(),
            relations,
        })
    }

    /// Whether two URLs match under `options`.
    ///
    /// Checks every component up to the option's `target_component`,
    /// skipping `components` when `ignore_components` holds.
    pub fn matches<U1, U2>(url1: &U1, url2: &U2, options: Option<&Options>) -> Result<bool, RelationError>
    where
        U1: UrlLike + ?Sized,
        U2: UrlLike + ?Sized,
    {
        Self::new(url1, url2, options)?.run()
    }

    /// Whether the URLs match through `target`, skipping `ignored` components.
    ///
    /// Fails with [`RelationError::InvalidComponent`] when `target` is `None`.
    pub fn up_to(&self, target: Option<Component>, ignored: &[Component]) -> Result<bool, RelationError> {
        let target = target.ok_or_else(|| RelationError::InvalidComponent("none".to_string()))?;
        Ok(self.check(target, ignored))
    }

    /// The per-component match flags.
    pub fn relations(&self) -> &RelationMap {
        &self.relations
    }

    /// Evaluate using the options' target and exclusions.
    fn run(&self) -> Result<bool, RelationError> {
        let options = self.options.as_ref();

        let target = resolve_option(options, |o| &o.target_component, &self.url1, &self.url2)
            .ok_or_else(|| RelationError::InvalidComponent("none".to_string()))?;

        let ignored = if resolve(options, |o| &o.ignore_components, &self.url1, &self.url2) {
            resolve(options, |o| &o.components, &self.url1, &self.url2)
        } else {
            Vec::new()
        };

        Ok(self.check(target, &ignored))
    }

    fn check(&self, target: Component, ignored: &[Component]) -> bool {
        let scope = resolve_scope(ignored, Some(target));
        let related = self.relations.all(&scope);

        debug!(%target, ?ignored, related, "checked url relation");
        related
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::view::UrlRecord;
    use url::Url;

    fn parse(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_identical_urls_match() {
        let url = parse("http://www.domain.com:123/dir/file.html?query#hash");
        assert!(UrlRelation::matches(&url, &url, None).unwrap());
    }

    #[test]
    fn test_hash_difference() {
        let url1 = parse("http://www.domain.com:123/dir/file.html?query#hash");
        let url2 = parse("http://www.domain.com:123/dir/file.html?query");

        assert!(!UrlRelation::matches(&url1, &url2, None).unwrap());
        assert!(!UrlRelation::matches(&url2, &url1, None).unwrap());

        let relation = UrlRelation::new(&url1, &url2, None).unwrap();
        assert!(relation.up_to(Some(Component::Path), &[]).unwrap());
        assert!(!relation.up_to(Some(Component::Hash), &[]).unwrap());
        assert!(relation.up_to(Some(Component::Hash), &[Component::Hash]).unwrap());
    }

    #[test]
    fn test_missing_target() {
        let url = parse("http://example.com/");
        let relation = UrlRelation::new(&url, &url, None).unwrap();

        assert_eq!(
            relation.up_to(None, &[]),
            Err(RelationError::InvalidComponent("none".to_string()))
        );
    }

    #[test]
    fn test_invalid_input_names_argument() {
        let url = parse("http://example.com/");
        let incomplete = UrlRecord {
            pathname: None,
            ..UrlRecord::new("http:", "example.com", "/")
        };

        assert_eq!(
            UrlRelation::new(&url, &incomplete, None).unwrap_err(),
            RelationError::InvalidInput(Argument::Second)
        );
        assert_eq!(
            UrlRelation::matches(&incomplete, &url, None).unwrap_err(),
            RelationError::InvalidInput(Argument::First)
        );
    }

    #[test]
    fn test_ignore_components_option() {
        let url1 = parse("http://www.domain.com:1234/dir/file.html?query#hash");
        let url2 = parse("https://www.domain.com/dir/file.html?query#hash");

        let active = Options {
            ignore_components: Some(true.into()),
            components: Some(vec![Component::Port, Component::Protocol].into()),
            ..Options::new()
        };
        assert!(UrlRelation::matches(&url1, &url2, Some(&active)).unwrap());

        let inactive = Options {
            ignore_components: Some(false.into()),
            ..active
        };
        assert!(!UrlRelation::matches(&url1, &url2, Some(&inactive)).unwrap());
    }

    struct NoSuffixes;

    impl SuffixResolver for NoSuffixes {
        fn split(&self, _hostname: &str) -> Option<crate::url::psl::HostLabels> {
            None
        }
    }

    #[test]
    fn test_custom_resolver() {
        let url1 = parse("http://www.example.com/");
        let url2 = parse("http://example.com/");

        let relation = UrlRelation::with_resolver(&url1, &url2, None, &NoSuffixes).unwrap();
        assert!(relation.up_to(Some(Component::Auth), &[]).unwrap());
        assert!(!relation.up_to(Some(Component::Tld), &[]).unwrap());
    }
}
