//! Core entities for group-constrained ordering

use super::errors::ConstraintViolation;
use super::value_objects::{GroupLabel, Sequence, SortWeight};
use serde::{Deserialize, Deserializer, Serialize};

/// Options shared by every payload of a single `add` call.
///
/// `before` and `after` accept either a single label or a list when
/// deserialized, so `{"before": "auth"}` and `{"before": ["auth"]}` are
/// equivalent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOptions {
    /// Groups the new entries must precede
    #[serde(deserialize_with = "one_or_many")]
    pub before: Vec<GroupLabel>,
    /// Groups the new entries must follow
    #[serde(deserialize_with = "one_or_many")]
    pub after: Vec<GroupLabel>,
    /// Group the new entries belong to
    pub group: GroupLabel,
    /// Weight used to interleave entries when engines are merged
    pub sort: SortWeight,
}

impl AddOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: impl Into<GroupLabel>) -> Self {
        self.group = group.into();
        self
    }

    pub fn before(mut self, group: impl Into<GroupLabel>) -> Self {
        self.before.push(group.into());
        self
    }

    pub fn before_all<I, L>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<GroupLabel>,
    {
        self.before.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn after(mut self, group: impl Into<GroupLabel>) -> Self {
        self.after.push(group.into());
        self
    }

    pub fn after_all<I, L>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<GroupLabel>,
    {
        self.after.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn sort(mut self, weight: SortWeight) -> Self {
        self.sort = weight;
        self
    }

    /// Reject constraints that target the entry's own group or the
    /// unassociated sentinel.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        if self.before.contains(&self.group) {
            return Err(ConstraintViolation::BeforeSelf {
                group: self.group.clone(),
            });
        }
        if self.before.iter().any(GroupLabel::is_unassociated) {
            return Err(ConstraintViolation::BeforeUnassociated);
        }
        if self.after.contains(&self.group) {
            return Err(ConstraintViolation::AfterSelf {
                group: self.group.clone(),
            });
        }
        if self.after.iter().any(GroupLabel::is_unassociated) {
            return Err(ConstraintViolation::AfterUnassociated);
        }
        Ok(())
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<GroupLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(GroupLabel),
        Many(Vec<GroupLabel>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(label) => vec![label],
        OneOrMany::Many(labels) => labels,
    })
}

/// One unit being ordered
#[derive(Clone, Debug)]
pub struct Entry<T> {
    /// Graph node identity and final tie-break
    pub sequence: Sequence,
    /// Merge interleaving weight
    pub sort_weight: SortWeight,
    pub group: GroupLabel,
    pub before: Vec<GroupLabel>,
    pub after: Vec<GroupLabel>,
    pub payload: T,
}

impl<T> Entry<T> {
    pub fn new(sequence: Sequence, payload: T, options: &AddOptions) -> Self {
        Self {
            sequence,
            sort_weight: options.sort,
            group: options.group.clone(),
            before: options.before.clone(),
            after: options.after.clone(),
            payload,
        }
    }
}
