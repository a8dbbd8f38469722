//! Comparison options, built-in profiles and option resolution.
//!
//! Every option is either a fixed value or a predicate over the URL pair,
//! so rules like "only ignore `www.` for http(s) URLs" can be expressed.
//! Options left unset fall back to [`COMMON_PROFILE`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::types::Component;
use crate::url::pattern::Pattern;
use crate::url::view::UrlView;

/// Predicate over a URL pair.
pub type PairFn<T> = Arc<dyn Fn(&UrlView, &UrlView) -> T + Send + Sync>;

/// An option value: a constant or a function of the compared URLs.
///
/// A `Deferring` predicate may return `None` for a pair, in which case the
/// [`COMMON_PROFILE`] value applies to that pair.
pub enum OptionValue<T> {
    Literal(T),
    Predicate(PairFn<T>),
    Deferring(PairFn<Option<T>>),
}

impl<T: Clone> OptionValue<T> {
    /// Wrap a closure as a predicate option.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&UrlView, &UrlView) -> T + Send + Sync + 'static,
    {
        OptionValue::Predicate(Arc::new(f))
    }

    /// Wrap a closure that may leave the decision to the default profile.
    pub fn deferring<F>(f: F) -> Self
    where
        F: Fn(&UrlView, &UrlView) -> Option<T> + Send + Sync + 'static,
    {
        OptionValue::Deferring(Arc::new(f))
    }

    /// The value of this option for `(url1, url2)`, if it defines one.
    pub fn evaluate(&self, url1: &UrlView, url2: &UrlView) -> Option<T> {
        match self {
            OptionValue::Literal(value) => Some(value.clone()),
            OptionValue::Predicate(f) => Some(f(url1, url2)),
            OptionValue::Deferring(f) => f(url1, url2),
        }
    }
}

impl<T: Clone> Clone for OptionValue<T> {
    fn clone(&self) -> Self {
        match self {
            OptionValue::Literal(value) => OptionValue::Literal(value.clone()),
            OptionValue::Predicate(f) => OptionValue::Predicate(Arc::clone(f)),
            OptionValue::Deferring(f) => OptionValue::Deferring(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            OptionValue::Predicate(_) => f.write_str("Predicate(..)"),
            OptionValue::Deferring(_) => f.write_str("Deferring(..)"),
        }
    }
}

impl<T> From<T> for OptionValue<T> {
    fn from(value: T) -> Self {
        OptionValue::Literal(value)
    }
}

/// Comparison options.
///
/// `None` means "not set": the value from [`COMMON_PROFILE`] is used instead.
/// A set value always wins, including `false` and empty lists.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Protocol (`"http:"`) to default port.
    pub default_ports: Option<OptionValue<HashMap<String, u16>>>,
    /// Filenames equivalent to an empty trailing segment.
    pub index_filenames: Option<OptionValue<Vec<Pattern>>>,
    /// Query names dropped when `ignore_query_names` holds.
    pub query_names: Option<OptionValue<Vec<Pattern>>>,
    pub ignore_default_port: Option<OptionValue<bool>>,
    pub ignore_index_filename: Option<OptionValue<bool>>,
    pub ignore_empty_segment_names: Option<OptionValue<bool>>,
    pub ignore_empty_queries: Option<OptionValue<bool>>,
    pub ignore_query_names: Option<OptionValue<bool>>,
    pub ignore_query_order: Option<OptionValue<bool>>,
    pub ignore_www: Option<OptionValue<bool>>,
    /// Components excluded by [`UrlRelation::matches`](crate::UrlRelation::matches).
    pub components: Option<OptionValue<Vec<Component>>>,
    /// Whether `components` is applied.
    pub ignore_components: Option<OptionValue<bool>>,
    /// Last component checked by [`UrlRelation::matches`](crate::UrlRelation::matches).
    pub target_component: Option<OptionValue<Component>>,
}

impl Options {
    /// Options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every unset option of `self` from `base`.
    pub fn or(mut self, base: &Options) -> Self {
        fn fill<T: Clone>(slot: &mut Option<OptionValue<T>>, base: &Option<OptionValue<T>>) {
            if slot.is_none() {
                *slot = base.clone();
            }
        }

        fill(&mut self.default_ports, &base.default_ports);
        fill(&mut self.index_filenames, &base.index_filenames);
        fill(&mut self.query_names, &base.query_names);
        fill(&mut self.ignore_default_port, &base.ignore_default_port);
        fill(&mut self.ignore_index_filename, &base.ignore_index_filename);
        fill(&mut self.ignore_empty_segment_names, &base.ignore_empty_segment_names);
        fill(&mut self.ignore_empty_queries, &base.ignore_empty_queries);
        fill(&mut self.ignore_query_names, &base.ignore_query_names);
        fill(&mut self.ignore_query_order, &base.ignore_query_order);
        fill(&mut self.ignore_www, &base.ignore_www);
        fill(&mut self.components, &base.components);
        fill(&mut self.ignore_components, &base.ignore_components);
        fill(&mut self.target_component, &base.target_component);
        self
    }
}

/// Both URLs are http(s).
pub fn is_http_pair(url1: &UrlView, url2: &UrlView) -> bool {
    url1.is_http() && url2.is_http()
}

/// Both URLs are http(s), both ws(s), or both mailto.
pub fn is_same_scheme_family(url1: &UrlView, url2: &UrlView) -> bool {
    (url1.is_mailto() && url2.is_mailto())
        || is_http_pair(url1, url2)
        || (url1.is_ws() && url2.is_ws())
}

fn shared_profile() -> Options {
    Options {
        default_ports: Some(OptionValue::Literal(HashMap::new())),
        index_filenames: Some(vec![Pattern::from("index.html")].into()),
        query_names: Some(OptionValue::Literal(Vec::new())),
        ignore_default_port: Some(true.into()),
        ignore_empty_segment_names: Some(false.into()),
        ignore_query_names: Some(false.into()),
        components: Some(OptionValue::Literal(Vec::new())),
        ignore_components: Some(true.into()),
        target_component: Some(Component::Hash.into()),
        ..Options::default()
    }
}

/// Strict profile: no normalization beyond default ports.
pub static CAREFUL_PROFILE: LazyLock<Options> = LazyLock::new(|| Options {
    ignore_index_filename: Some(false.into()),
    ignore_empty_queries: Some(false.into()),
    ignore_query_order: Some(false.into()),
    ignore_www: Some(false.into()),
    ..shared_profile()
});

/// Normalizing profile for web schemes; strict for everything else.
///
/// Index filenames and `www.` are ignored between http(s) URLs. Empty query
/// pairs and query order are ignored between http(s), ws(s) or mailto URLs.
pub static COMMON_PROFILE: LazyLock<Options> = LazyLock::new(|| Options {
    ignore_index_filename: Some(OptionValue::predicate(is_http_pair)),
    ignore_empty_queries: Some(OptionValue::predicate(is_same_scheme_family)),
    ignore_query_order: Some(OptionValue::predicate(is_same_scheme_family)),
    ignore_www: Some(OptionValue::predicate(is_http_pair)),
    ..shared_profile()
});

/// Resolve one option for a URL pair.
///
/// The custom value wins when it is set and evaluates to a value; otherwise
/// the [`COMMON_PROFILE`] value is used. Returns `None` only if neither defines the option.
pub fn resolve_option<T, F>(
    custom: Option<&Options>,
    field: F,
    url1: &UrlView,
    url2: &UrlView,
) -> Option<T>
where
    T: Clone,
    F: Fn(&Options) -> &Option<OptionValue<T>>,
{
    let default = field(&*COMMON_PROFILE)
        .as_ref()
        .and_then(|value| value.evaluate(url1, url2));

    custom
        .and_then(|options| field(options).as_ref())
        .and_then(|value| value.evaluate(url1, url2))
        .or(default)
}

/// [`resolve_option`] for options with a natural empty value.
pub fn resolve<T, F>(custom: Option<&Options>, field: F, url1: &UrlView, url2: &UrlView) -> T
where
    T: Clone + Default,
    F: Fn(&Options) -> &Option<OptionValue<T>>,
{
    resolve_option(custom, field, url1, url2).unwrap_or_default()
}
