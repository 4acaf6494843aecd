//! Shallow partial-update support shared by every entity.

use serde::{Deserialize, Deserializer};

/// Field-by-field merge of a partial payload into an existing record.
///
/// Last write wins per field: a field carried by the patch overwrites the
/// stored value (including overwriting with null for nullable fields), a
/// field absent from the patch is preserved. The merge is shallow and the
/// store does not re-validate the merged record.
pub trait Patch<T> {
    fn apply(self, record: &mut T);
}

/// Deserializer for patch fields that are nullable on the record itself.
///
/// With `#[serde(default)]` on the field, an absent key stays `None` while
/// an explicit `null` becomes `Some(None)`, so the two cases survive
/// deserialization.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
