//! Per-component relation between two URLs.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::core::options::{resolve, Options};
use crate::types::Component;
use crate::url::pattern::any_match;
use crate::url::psl::SuffixResolver;
use crate::url::view::UrlView;

static MULTIPLE_SLASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/{2,}").unwrap());

/// Which leaf components of two URLs match.
///
/// Composite components are never stored; [`RelationMap::get`] derives
/// them from their leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelationMap {
    pub protocol: bool,
    pub username: bool,
    pub password: bool,
    pub tld: bool,
    pub domain: bool,
    pub subdomain: bool,
    pub port: bool,
    pub segments: bool,
    pub filename: bool,
    pub search: bool,
    pub hash: bool,
}

impl RelationMap {
    /// Whether `component` matches; composites are the AND of their leaves.
    pub fn get(&self, component: Component) -> bool {
        match component {
            Component::Protocol => self.protocol,
            Component::Username => self.username,
            Component::Password => self.password,
            Component::Tld => self.tld,
            Component::Domain => self.domain,
            Component::Subdomain => self.subdomain,
            Component::Port => self.port,
            Component::Segments => self.segments,
            Component::Filename => self.filename,
            Component::Search => self.search,
            Component::Hash => self.hash,
            composite => composite.members().iter().all(|member| self.get(*member)),
        }
    }

    /// Every component with its match flag, in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, bool)> + '_ {
        Component::SEQUENCE
            .into_iter()
            .map(move |component| (component, self.get(component)))
    }

    /// Whether every component in `scope` matches. An empty scope matches.
    pub fn all(&self, scope: &[Component]) -> bool {
        scope.iter().all(|component| self.get(*component))
    }
}

struct HostnameRelation {
    tld: bool,
    domain: bool,
    subdomain: bool,
}

struct PathnameRelation {
    segments: bool,
    filename: bool,
}

/// Compare two validated URLs under `options`.
pub fn evaluate(
    url1: &UrlView,
    url2: &UrlView,
    options: Option<&Options>,
    resolver: &dyn SuffixResolver,
) -> RelationMap {
    let hostname = hostname_relation(url1, url2, options, resolver);
    let pathname = pathname_relation(url1, url2, options);

    let relations = RelationMap {
        protocol: url1.protocol == url2.protocol,
        username: url1.username == url2.username,
        password: url1.password == url2.password,
        tld: hostname.tld,
        domain: hostname.domain,
        subdomain: hostname.subdomain,
        port: port_relation(url1, url2, options),
        segments: pathname.segments,
        filename: pathname.filename,
        search: search_relation(url1, url2, options),
        hash: url1.hash == url2.hash,
    };

    debug!(
        protocol1 = %url1.protocol,
        protocol2 = %url2.protocol,
        ?relations,
        "computed url relation"
    );
    relations
}

fn hostname_relation(
    url1: &UrlView,
    url2: &UrlView,
    options: Option<&Options>,
    resolver: &dyn SuffixResolver,
) -> HostnameRelation {
    if url1.hostname == url2.hostname {
        return HostnameRelation {
            tld: true,
            domain: true,
            subdomain: true,
        };
    }

    let (Some(mut labels1), Some(mut labels2)) =
        (resolver.split(&url1.hostname), resolver.split(&url2.hostname))
    else {
        trace!(
            hostname1 = %url1.hostname,
            hostname2 = %url2.hostname,
            "hostname not resolvable; treating as unrelated"
        );
        return HostnameRelation {
            tld: false,
            domain: false,
            subdomain: false,
        };
    };

    if resolve(options, |o| &o.ignore_www, url1, url2) {
        for labels in [&mut labels1, &mut labels2] {
            if labels.subdomain == ["www"] {
                labels.subdomain.clear();
            }
        }
    }

    HostnameRelation {
        tld: labels1.tld.join(".") == labels2.tld.join("."),
        domain: labels1.domain == labels2.domain,
        subdomain: labels1.subdomain.join(".") == labels2.subdomain.join("."),
    }
}

fn port_relation(url1: &UrlView, url2: &UrlView, options: Option<&Options>) -> bool {
    if url1.port == url2.port {
        return true;
    }

    if !resolve(options, |o| &o.ignore_default_port, url1, url2) {
        return false;
    }

    let default_ports = resolve(options, |o| &o.default_ports, url1, url2);

    // One side has no port, the other has its protocol's default
    let is_default = |url: &UrlView| {
        url.port.parse::<u16>().ok().is_some_and(|port| {
            default_ports.get(&url.protocol) == Some(&port)
        })
    };

    (url1.port.is_empty() && is_default(url2)) || (url2.port.is_empty() && is_default(url1))
}

fn pathname_relation(url1: &UrlView, url2: &UrlView, options: Option<&Options>) -> PathnameRelation {
    if url1.pathname == url2.pathname {
        return PathnameRelation {
            segments: true,
            filename: true,
        };
    }

    let (pathname1, pathname2) = if resolve(options, |o| &o.ignore_empty_segment_names, url1, url2) {
        (
            MULTIPLE_SLASHES.replace_all(&url1.pathname, "/"),
            MULTIPLE_SLASHES.replace_all(&url2.pathname, "/"),
        )
    } else {
        (url1.pathname.as_str().into(), url2.pathname.as_str().into())
    };

    let mut segments1: Vec<&str> = pathname1.split('/').collect();
    let mut segments2: Vec<&str> = pathname2.split('/').collect();

    // split always yields at least one element
    let filename1 = segments1.pop().unwrap_or("");
    let filename2 = segments2.pop().unwrap_or("");

    let mut filename = filename1 == filename2;

    if !filename && resolve(options, |o| &o.ignore_index_filename, url1, url2) {
        let index_filenames = resolve(options, |o| &o.index_filenames, url1, url2);

        // One ends in a trailing slash, the other in an index file
        filename = (filename1.is_empty() && any_match(filename2, &index_filenames))
            || (filename2.is_empty() && any_match(filename1, &index_filenames));
    }

    let segments = segments1 == segments2;

    PathnameRelation { segments, filename }
}

fn search_relation(url1: &UrlView, url2: &UrlView, options: Option<&Options>) -> bool {
    // Normalize encoded spaces before any comparison
    if url1.search.replace("%20", "+") == url2.search.replace("%20", "+") {
        return true;
    }

    let ignore_empty_queries = resolve(options, |o| &o.ignore_empty_queries, url1, url2);
    let ignore_query_names = resolve(options, |o| &o.ignore_query_names, url1, url2);
    let ignore_query_order = resolve(options, |o| &o.ignore_query_order, url1, url2);

    if !ignore_empty_queries && !ignore_query_names && !ignore_query_order {
        return false;
    }

    let (Some(mut params1), Some(mut params2)) =
        (url1.search_params.clone(), url2.search_params.clone())
    else {
        trace!("query pairs unavailable; comparing search strings only");
        return false;
    };

    if ignore_empty_queries {
        let not_empty = |(name, value): &(String, String)| !name.is_empty() || !value.is_empty();
        params1.retain(not_empty);
        params2.retain(not_empty);
    }

    if ignore_query_names {
        let query_names = resolve(options, |o| &o.query_names, url1, url2);
        let not_ignored = |(name, _): &(String, String)| !any_match(name, &query_names);
        params1.retain(not_ignored);
        params2.retain(not_ignored);
    }

    if params1.len() != params2.len() {
        return false;
    }

    if ignore_query_order {
        params1.sort_by(|a, b| a.0.cmp(&b.0));
        params2.sort_by(|a, b| a.0.cmp(&b.0));
    }

    params1 == params2
}
