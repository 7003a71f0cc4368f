use super::Answer;
use ahash::AHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Answers collected during a run, keyed by step id and kept in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    entries: Vec<(String, Answer)>,
    index: AHashMap<String, usize>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `answer` for `step_id`. A later answer for the same step replaces the earlier one.
    pub fn insert(&mut self, step_id: impl Into<String>, answer: Answer) {
        let step_id = step_id.into();
        match self.index.get(&step_id) {
            Some(&position) => self.entries[position].1 = answer,
            None => {
                self.index.insert(step_id.clone(), self.entries.len());
                self.entries.push((step_id, answer));
            }
        }
    }

    pub fn get(&self, step_id: &str) -> Option<&Answer> {
        self.index
            .get(step_id)
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, step_id: &str) -> bool {
        self.index.contains_key(step_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.entries
            .iter()
            .map(|(step_id, answer)| (step_id.as_str(), answer))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Answer)> for Answers {
    fn from_iter<T: IntoIterator<Item = (S, Answer)>>(iter: T) -> Self {
        let mut answers = Answers::new();
        for (step_id, answer) in iter {
            answers.insert(step_id, answer);
        }
        answers
    }
}

impl Serialize for Answers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (step_id, answer) in &self.entries {
            map.serialize_entry(step_id, answer)?;
        }
        map.end()
    }
}
