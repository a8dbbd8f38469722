//! URL component taxonomy.

use std::fmt;
use std::str::FromStr;

use crate::error::RelationError;

/// A structural facet of a URL compared by the relation engine.
///
/// Variants are declared in sequence order, so `Ord` follows the
/// left-to-right precedence of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    /// Scheme including the trailing colon (`http:`)
    Protocol,
    /// User name of the credentials
    Username,
    /// Password of the credentials
    Password,
    /// Credentials as a whole (username and password)
    Auth,
    /// Public suffix labels (`com`, `co.uk`)
    Tld,
    /// Registrable label left of the public suffix
    Domain,
    /// Labels left of the registrable domain
    Subdomain,
    /// Full host name (tld, domain and subdomain)
    Hostname,
    /// Port number
    Port,
    /// Host name and port
    Host,
    /// Path segments before the last slash
    Segments,
    /// Last path segment
    Filename,
    /// Segments and filename
    Pathname,
    /// Query string
    Search,
    /// Pathname and query string
    Path,
    /// Fragment
    Hash,
}

impl Component {
    /// Every component in structural order.
    pub const SEQUENCE: [Component; 16] = [
        Component::Protocol,
        Component::Username,
        Component::Password,
        Component::Auth,
        Component::Tld,
        Component::Domain,
        Component::Subdomain,
        Component::Hostname,
        Component::Port,
        Component::Host,
        Component::Segments,
        Component::Filename,
        Component::Pathname,
        Component::Search,
        Component::Path,
        Component::Hash,
    ];

    /// Components whose value is derived from their members.
    pub const COMPOSITES: [Component; 5] = [
        Component::Auth,
        Component::Hostname,
        Component::Host,
        Component::Pathname,
        Component::Path,
    ];

    /// Direct members of a composite component; empty for leaves.
    pub fn members(self) -> &'static [Component] {
        match self {
            Component::Auth => &[Component::Username, Component::Password],
            Component::Hostname => &[Component::Tld, Component::Domain, Component::Subdomain],
            Component::Host => &[Component::Hostname, Component::Port],
            Component::Pathname => &[Component::Segments, Component::Filename],
            Component::Path => &[Component::Pathname, Component::Search],
            _ => &[],
        }
    }

    /// Whether the component is derived from other components.
    pub fn is_composite(self) -> bool {
        !self.members().is_empty()
    }

    /// Leaf members of a composite, flattened and in sequence order.
    ///
    /// A leaf component is its own single leaf.
    pub fn leaves(self) -> Vec<Component> {
        if !self.is_composite() {
            return vec![self];
        }

        let mut leaves: Vec<Component> = self
            .members()
            .iter()
            .flat_map(|member| member.leaves())
            .collect();
        leaves.sort();
        leaves.dedup();
        leaves
    }

    /// Position of the component within [`Component::SEQUENCE`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase token name (`"hostname"`).
    pub fn name(self) -> &'static str {
        match self {
            Component::Protocol => "protocol",
            Component::Username => "username",
            Component::Password => "password",
            Component::Auth => "auth",
            Component::Tld => "tld",
            Component::Domain => "domain",
            Component::Subdomain => "subdomain",
            Component::Hostname => "hostname",
            Component::Port => "port",
            Component::Host => "host",
            Component::Segments => "segments",
            Component::Filename => "filename",
            Component::Pathname => "pathname",
            Component::Search => "search",
            Component::Path => "path",
            Component::Hash => "hash",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Component {
    type Err = RelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::SEQUENCE
            .iter()
            .copied()
            .find(|component| component.name() == s)
            .ok_or_else(|| RelationError::InvalidComponent(s.to_string()))
    }
}
