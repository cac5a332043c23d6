use crate::domain::entities::column::ColumnKey;

/// Active grouping keys. The first key is the outermost group level.
///
/// Equality compares the key sets; order only decides nesting precedence.
#[derive(Debug, Clone, Default)]
pub struct GroupingSelection {
    keys: Vec<ColumnKey>,
}

impl PartialEq for GroupingSelection {
    fn eq(&self, other: &Self) -> bool {
        self.keys.len() == other.keys.len() && self.keys.iter().all(|k| other.contains(*k))
    }
}

impl Eq for GroupingSelection {}

impl GroupingSelection {
    #[cfg(test)]
    pub fn new(keys: impl IntoIterator<Item = ColumnKey>) -> Self {
        keys.into_iter()
            .fold(Self::default(), |selection, key| {
                if selection.contains(key) {
                    selection
                } else {
                    selection.toggled(key)
                }
            })
    }

    pub fn keys(&self) -> &[ColumnKey] {
        &self.keys
    }

    pub fn contains(&self, key: ColumnKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes `key` when present, appends it otherwise.
    pub fn toggled(&self, key: ColumnKey) -> Self {
        let mut keys = self.keys.clone();
        if let Some(pos) = keys.iter().position(|k| *k == key) {
            keys.remove(pos);
        } else {
            keys.push(key);
        }
        Self { keys }
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }
}

pub fn toggle_group(selection: &GroupingSelection, key: ColumnKey) -> GroupingSelection {
    selection.toggled(key)
}

pub fn clear_grouping(selection: &GroupingSelection) -> GroupingSelection {
    selection.cleared()
}
