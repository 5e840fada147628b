use std::fmt;

/// The addressable entity kinds.
///
/// Each kind maps to one storage partition: records live on the public
/// partition, personals live in the owning organization's private partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A student's academic record aggregate.
    Record,
    /// A student's personal profile.
    Personal,
}

impl EntityKind {
    /// Stable wire tag used as the leading segment of physical keys.
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Record => "record",
            EntityKind::Personal => "personal",
        }
    }

    /// Parse a wire tag back into a kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "record" => Some(EntityKind::Record),
            "personal" => Some(EntityKind::Personal),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The tenant scope an entity is addressed under.
///
/// Every scope carries the owning organization id. Personal records are
/// additionally scoped to the caller's individual identity, giving each
/// identity within an organization its own namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TenantScope {
    org: String,
    identity: Option<String>,
}

impl TenantScope {
    /// Scope addressed by organization alone.
    pub fn org(org: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            identity: None,
        }
    }

    /// Scope addressed by organization plus caller identity.
    pub fn scoped(org: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            identity: Some(identity.into()),
        }
    }

    /// The owning organization id.
    pub fn org_id(&self) -> &str {
        &self.org
    }

    /// The caller identity id, if this scope carries one.
    pub fn identity_id(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// The scope's key segments in composition order: org, then identity.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.org.as_str()).chain(self.identity.as_deref())
    }
}

impl fmt::Display for TenantScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identity {
            Some(identity) => write!(f, "{}/{}", self.org, identity),
            None => f.write_str(&self.org),
        }
    }
}
