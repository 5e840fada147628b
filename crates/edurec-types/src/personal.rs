use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student's personal profile.
///
/// Stored whole-value in the owning organization's private partition, keyed
/// by student id within the caller identity's namespace. The sex flag is the
/// only structurally required field; every descriptive field is nullable on
/// the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Personal {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub male: bool,
    pub avatar: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub birth_date: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub ethnic: Option<String>,
    pub father_name: Option<String>,
    pub father_job: Option<String>,
    pub mother_name: Option<String>,
    pub mother_job: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_job: Option<String>,
    pub home_town: Option<String>,
}

/// Transient aggregation view over a range scan: student id to personal.
/// Never persisted.
pub type PersonalMap = BTreeMap<u64, Personal>;
