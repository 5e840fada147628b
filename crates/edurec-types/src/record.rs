use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scores for one subject over an enrollment period. Leaf value with no
/// independent identity; the three scores are structurally required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Subject {
    pub name: Option<String>,
    pub first_half_score: f32,
    pub second_half_score: f32,
    pub final_score: f32,
}

/// Classification labels for one enrollment period. Leaf value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Classification {
    pub first_half_classify: Option<String>,
    pub second_half_classify: Option<String>,
    pub final_classify: Option<String>,
}

/// One class enrollment period of a student's record.
///
/// Subject ids are unique within the class. An absent subject map or
/// classification on the wire decodes to the initialized empty value, so
/// consumers never see a missing collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassRecord {
    pub year: i32,
    pub grade: i32,
    pub class_name: Option<String>,
    #[serde(default)]
    pub subjects: BTreeMap<u64, Subject>,
    #[serde(default)]
    pub classification: Classification,
}

/// A student's academic record: the root aggregate stored under the
/// student's public-partition key, mapping class id to [`ClassRecord`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Record {
    #[serde(default)]
    pub class_records: BTreeMap<u64, ClassRecord>,
}

impl Record {
    /// A well-formed empty record with initialized nested collections.
    ///
    /// This is the value the merge path of an upsert starts from when no
    /// record is stored yet, so a first-ever class-record write lands on a
    /// fresh aggregate instead of a not-found failure.
    pub fn fresh() -> Self {
        Self {
            class_records: BTreeMap::new(),
        }
    }

    /// Returns `true` if no class has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.class_records.is_empty()
    }
}

/// Transient aggregation view over a prefix scan: student id to record.
/// Never persisted.
pub type RecordMap = BTreeMap<u64, Record>;
