use edurec_types::{EntityKind, TenantScope};

use crate::error::{KeyError, KeyResult};

/// Reserved segment delimiter. Also terminates every key, which is what
/// makes `compose_prefix` an exact prefix: no segment may contain the
/// delimiter, so a longer org id can never shadow a shorter one.
const DELIMITER: char = '\u{0}';

/// Derives physical ledger keys from logical (kind, tenant, id) addresses.
///
/// Key layout: `kind \0 org [\0 identity] \0 id \0`. Two distinct logical
/// addresses always produce distinct physical keys, and the prefix for a
/// (kind, tenant) pair is a strict prefix of exactly that pair's keys.
pub struct KeyComposer;

impl KeyComposer {
    /// Compose the physical key for one entity.
    pub fn compose_key(kind: EntityKind, scope: &TenantScope, id: u64) -> KeyResult<String> {
        let mut key = Self::compose_prefix(kind, scope)?;
        push_segment(&mut key, &id.to_string())?;
        Ok(key)
    }

    /// Compose the scan prefix matching every key of `kind` under `scope`.
    pub fn compose_prefix(kind: EntityKind, scope: &TenantScope) -> KeyResult<String> {
        let mut prefix = String::new();
        push_segment(&mut prefix, kind.tag())?;
        for segment in scope.segments() {
            push_segment(&mut prefix, segment)?;
        }
        Ok(prefix)
    }

    /// The half-open `[start, end)` bounds covering exactly the keys with
    /// the given prefix, for stores that scan by range instead of prefix.
    pub fn prefix_range(prefix: &str) -> (String, String) {
        // The prefix always ends with the delimiter; bumping that final
        // byte gives the least key greater than every prefixed key.
        let mut end = String::from(&prefix[..prefix.len() - DELIMITER.len_utf8()]);
        end.push('\u{1}');
        (prefix.to_string(), end)
    }

    /// Inverse of [`Self::compose_key`]: decode the id, verifying that the
    /// kind and tenant segments match the expected address.
    ///
    /// A prefix or range scan over the underlying store can surface a
    /// physically adjacent key that was never ours; this is the defense.
    pub fn split_and_verify(
        physical_key: &str,
        expected_kind: EntityKind,
        expected_scope: &TenantScope,
    ) -> KeyResult<u64> {
        let mut parts: Vec<&str> = physical_key.split(DELIMITER).collect();
        match parts.pop() {
            Some("") => {}
            _ => return Err(KeyError::Malformed("missing key terminator".into())),
        }

        let expected_tenant_len = expected_scope.segments().count();
        if parts.len() != expected_tenant_len + 2 {
            return Err(KeyError::Malformed(format!(
                "expected {} segments, found {}",
                expected_tenant_len + 2,
                parts.len()
            )));
        }

        let found_kind = parts[0];
        if found_kind != expected_kind.tag() {
            return Err(KeyError::KindMismatch {
                expected: expected_kind.tag().to_string(),
                found: found_kind.to_string(),
            });
        }

        let found_tenant = &parts[1..parts.len() - 1];
        let tenant_matches = found_tenant
            .iter()
            .copied()
            .eq(expected_scope.segments());
        if !tenant_matches {
            return Err(KeyError::TenantMismatch {
                expected: expected_scope.to_string(),
                found: found_tenant.join("/"),
            });
        }

        let id_segment = parts[parts.len() - 1];
        id_segment
            .parse::<u64>()
            .map_err(|_| KeyError::InvalidId(id_segment.to_string()))
    }

    /// The private partition holding a tenant's restricted entities.
    /// Partitioning is per organization; the caller identity namespaces
    /// keys inside the partition, not the partition itself.
    pub fn private_partition(scope: &TenantScope) -> String {
        format!("org_{}", scope.org_id())
    }
}

fn push_segment(key: &mut String, segment: &str) -> KeyResult<()> {
    if segment.is_empty() {
        return Err(KeyError::EmptySegment);
    }
    if segment.contains(DELIMITER) {
        return Err(KeyError::DelimiterInSegment {
            segment: segment.to_string(),
        });
    }
    key.push_str(segment);
    key.push(DELIMITER);
    Ok(())
}
