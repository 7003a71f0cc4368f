use crate::answer::Answer;
use std::fmt;

/// A guard condition on a transition, evaluated against the answers collected so far.
///
/// Predicates are plain data. `All` and `Any` compose other predicates; the
/// primitives compare a single recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// True iff the answer for `step` equals `value`.
    ///
    /// Display steps answer `Null`, which the engine never records, so an
    /// `Equals` on a display step is false even after it was visited. Use
    /// the step's place in the graph to branch on having seen it.
    Equals { step: String, value: Answer },
    /// True iff the answer for `step` is a multi-select collection including `value`.
    Contains { step: String, value: String },
    /// Logical AND. An empty list is true.
    All(Vec<Predicate>),
    /// Logical OR. An empty list is false.
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn equals(step: impl Into<String>, value: impl Into<Answer>) -> Self {
        Predicate::Equals {
            step: step.into(),
            value: value.into(),
        }
    }

    pub fn contains(step: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Contains {
            step: step.into(),
            value: value.into(),
        }
    }

    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::All(predicates.into_iter().collect())
    }

    pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::Any(predicates.into_iter().collect())
    }

    /// Collects the ids of every step this predicate reads from.
    pub fn referenced_steps<'a>(&'a self, steps: &mut Vec<&'a str>) {
        match self {
            Predicate::Equals { step, .. } | Predicate::Contains { step, .. } => {
                steps.push(step.as_str())
            }
            Predicate::All(children) | Predicate::Any(children) => {
                for child in children {
                    child.referenced_steps(steps);
                }
            }
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Predicate::Any(_) => 1,
            Predicate::All(_) => 2,
            Predicate::Equals { .. } | Predicate::Contains { .. } => 3,
        }
    }

    fn fmt_joined(
        &self,
        f: &mut fmt::Formatter<'_>,
        children: &[Predicate],
        op_symbol: &str,
        empty: &str,
    ) -> fmt::Result {
        if children.is_empty() {
            return write!(f, "{}", empty);
        }
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", op_symbol)?;
            }
            if child.precedence() < self.precedence() {
                write!(f, "({})", child)?;
            } else {
                write!(f, "{}", child)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Equals { step, value } => write!(f, "{} == {}", step, value),
            Predicate::Contains { step, value } => write!(f, "{} contains {}", step, value),
            Predicate::All(children) => self.fmt_joined(f, children, "AND", "always"),
            Predicate::Any(children) => self.fmt_joined(f, children, "OR", "never"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_adds_parentheses_only_when_needed() {
        let predicate = Predicate::all([
            Predicate::equals("a", "x"),
            Predicate::any([Predicate::contains("b", "y"), Predicate::equals("c", 3)]),
        ]);
        assert_eq!(predicate.to_string(), "a == x AND (b contains y OR c == 3)");

        let flat = Predicate::any([Predicate::all([Predicate::equals("a", true)])]);
        assert_eq!(flat.to_string(), "a == true");
    }

    #[test]
    fn referenced_steps_walks_nested_predicates() {
        let predicate = Predicate::any([
            Predicate::equals("a", "x"),
            Predicate::all([Predicate::contains("b", "y")]),
        ]);
        let mut steps = Vec::new();
        predicate.referenced_steps(&mut steps);
        assert_eq!(steps, vec!["a", "b"]);
    }
}
