use serde::de::Error;
use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{anyhow, Context};

use crate::WIDTH;

/// A move as adapters see it.
///
/// Holds the 0-based column index. The textual and serialized forms are 1-based, matching
/// the labels printed under the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    DropPiece(usize),
}

impl Action {
    pub fn column(&self) -> usize {
        let Action::DropPiece(column) = self;
        *column
    }

    fn from_label(label: u64) -> Option<Self> {
        let label = usize::try_from(label).ok()?;

        if (1..=WIDTH).contains(&label) {
            Some(Action::DropPiece(label - 1))
        } else {
            None
        }
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s
            .trim()
            .parse::<u64>()
            .with_context(|| format!("'{}' is not a column number", s))?;

        Action::from_label(label)
            .ok_or_else(|| anyhow!("Column number must be between 1 and {}", WIDTH))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.column() + 1)
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.column() as u64 + 1)
    }
}

struct ActionVisitor;

impl<'de> Visitor<'de> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "an integer from 1-{} naming the column a piece was dropped into",
            WIDTH
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Action::from_label(v).ok_or_else(|| E::custom(format!("column {} is out of range", v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        let v = u64::try_from(v).map_err(|_| E::custom(format!("column {} is out of range", v)))?;
        self.visit_u64(v)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_u64(ActionVisitor)
    }
}
