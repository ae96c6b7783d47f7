use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{Error, Result};
use crate::list::List;

/// Values in traversal order separated by a single space.
impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for value in iter {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}

// Accepts the rendered form back, any whitespace works as separator
impl FromStr for List {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split_whitespace()
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|e| Error::Parse(format!("invalid value {:?}: {}", token, e)))
            })
            .collect()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<i32>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
