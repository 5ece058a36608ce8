//! Serde support: a pair travels as `[value, error]` with `null` marking the
//! absent slot.
//!
//! Deserialisation routes through [`ResultPair::from_slots`], so sequences
//! with both or neither slot populated are rejected. A success whose value
//! itself serialises to `null` is indistinguishable from an absent value in
//! this form and does not survive the trip back.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ResultPair;

impl<T, E> Serialize for ResultPair<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.slots().serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for ResultPair<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (value, error) = <(Option<T>, Option<E>)>::deserialize(deserializer)?;
        Self::from_slots(value, error).map_err(serde::de::Error::custom)
    }
}
