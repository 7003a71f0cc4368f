use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The value recorded when a step is resolved.
///
/// The shape depends on the step kind: selects produce `Text` or `Choices`,
/// matrices produce `Matrix`, and display steps produce `Null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Null,
    Bool(bool),
    Number(i64),
    Text(String),
    Choices(Vec<String>),
    Matrix(FieldCounts),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }

    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Choices(values.into_iter().map(Into::into).collect())
    }

    pub fn matrix<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Answer::Matrix(entries.into_iter().collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Answer::Null)
    }

    /// Returns the selected options if this answer is a multi-select collection.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Answer::Choices(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Number(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Bool(value)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Null => write!(f, "null"),
            Answer::Bool(b) => write!(f, "{}", b),
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => write!(f, "{}", s),
            Answer::Choices(values) => write!(f, "[{}]", values.join(", ")),
            Answer::Matrix(counts) => {
                write!(f, "{{")?;
                for (i, (field, count)) in counts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field, count)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Integer answers for a matrix step, kept in the order the fields were asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCounts(Vec<(String, i64)>);

impl FieldCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for `field`, replacing any earlier value in place.
    pub fn insert(&mut self, field: impl Into<String>, count: i64) {
        let field = field.into();
        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = count,
            None => self.0.push((field, count)),
        }
    }

    pub fn get(&self, field: &str) -> Option<i64> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for FieldCounts {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        let mut counts = FieldCounts::new();
        for (field, count) in iter {
            counts.insert(field, count);
        }
        counts
    }
}

impl Serialize for FieldCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, count) in &self.0 {
            map.serialize_entry(field, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldCountsVisitor;

        impl<'de> Visitor<'de> for FieldCountsVisitor {
            type Value = FieldCounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of field names to integers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut counts = FieldCounts::new();
                while let Some((field, count)) = access.next_entry::<String, i64>()? {
                    counts.insert(field, count);
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(FieldCountsVisitor)
    }
}
