use std::{iter::FromIterator, ops::Deref};

/// One or more list elements, in the order the caller gave them.
#[derive(Default, Clone, Eq, PartialEq, Debug)]
pub struct Values(Vec<String>);

impl Values {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Values {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Values {
    fn from(v: &str) -> Self {
        Values(vec![v.to_owned()])
    }
}

impl From<String> for Values {
    fn from(v: String) -> Self {
        Values(vec![v])
    }
}

impl From<Vec<String>> for Values {
    fn from(vs: Vec<String>) -> Self {
        Values(vs)
    }
}

impl From<Vec<&str>> for Values {
    fn from(vs: Vec<&str>) -> Self {
        vs.into_iter().collect()
    }
}

impl From<&[&str]> for Values {
    fn from(vs: &[&str]) -> Self {
        vs.iter().copied().collect()
    }
}

impl From<&[String]> for Values {
    fn from(vs: &[String]) -> Self {
        Values(vs.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Values {
    fn from(vs: [&str; N]) -> Self {
        vs.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Values {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Values(iter.into_iter().map(Into::into).collect())
    }
}
