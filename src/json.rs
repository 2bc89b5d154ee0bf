//! JSON conversion for the containers.
//!
//! Maps encode as JSON objects and decode with an order-preserving visitor, so a
//! round trip keeps insertion order. Sets and slices encode as JSON arrays.

use crate::error::Result;
use crate::ordered_map::{Inner, SafeOrderedMap};
use crate::set::SafeSet;
use crate::slice::SafeSlice;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

impl<V: Serialize> Serialize for SafeOrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let inner = self.read();
        let mut map = serializer.serialize_map(Some(inner.len()))?;
        for (key, value) in inner.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = Inner<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    // Fields are inserted in document order; a repeated key keeps its first
    // position and takes the last value.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Inner<V>, A::Error> {
        let mut inner = Inner::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            inner.insert(key, value);
        }
        Ok(inner)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for SafeOrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer
            .deserialize_map(OrderedMapVisitor {
                marker: PhantomData,
            })
            .map(Self::from_inner)
    }
}

impl<V: Serialize> SafeOrderedMap<V> {
    /// Encodes the map as a JSON object with fields in insertion order
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Json` if a value cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<V: DeserializeOwned> SafeOrderedMap<V> {
    /// Replaces the map's contents with the entries of a JSON object
    ///
    /// Keys take the order in which they appear in the document. The input is
    /// decoded before the lock is taken, so on error the map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collections::SafeOrderedMap;
    ///
    /// let map = SafeOrderedMap::<u32>::new();
    /// map.add("stale", 0);
    ///
    /// map.load_json(r#"{"z": 26, "a": 1}"#)?;
    /// assert_eq!(map.keys(), vec!["z", "a"]);
    ///
    /// assert!(map.load_json(r#"{"z": "not a number"}"#).is_err());
    /// assert_eq!(map.values(), vec![26, 1]);
    /// # Ok::<(), sovran_collections::CollectionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Json` if the input is not a JSON object whose
    /// values decode as `V`.
    pub fn load_json(&self, json: &str) -> Result<()> {
        let decoded: Self = serde_json::from_str(json)?;
        let decoded = decoded.into_inner();
        let entries = decoded.len();
        *self.write() = decoded;
        tracing::debug!(entries, "replaced ordered map contents from JSON");
        Ok(())
    }
}

/// Renders the map as a JSON object string, in insertion order.
impl<V: Serialize> fmt::Display for SafeOrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(error) => {
                tracing::warn!(%error, "failed to render ordered map as JSON");
                Ok(())
            }
        }
    }
}

impl<V: Serialize> Serialize for SafeSet<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let inner = self.map_ref().read();
        let mut seq = serializer.serialize_seq(Some(inner.len()))?;
        for (_, value) in inner.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de, V> Deserialize<'de> for SafeSet<V>
where
    V: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<V>::deserialize(deserializer).map(Self::from)
    }
}

impl<V: Serialize> SafeSet<V> {
    /// Encodes the set as a JSON array in insertion order
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Json` if a value cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<V: DeserializeOwned + Hash + Eq> SafeSet<V> {
    /// Replaces the set's contents with the values of a JSON array
    ///
    /// Repeated values are dropped after their first occurrence. On error the set
    /// is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Json` if the input is not a JSON array whose
    /// elements decode as `V`.
    pub fn load_json(&self, json: &str) -> Result<()> {
        let decoded: Self = serde_json::from_str(json)?;
        let decoded = decoded.into_map().into_inner();
        let values = decoded.len();
        *self.map_ref().write() = decoded;
        tracing::debug!(values, "replaced set contents from JSON");
        Ok(())
    }
}

impl<V: Serialize> Serialize for SafeSlice<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.read().iter())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for SafeSlice<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<V>::deserialize(deserializer).map(Self::from)
    }
}

impl<V: Serialize> SafeSlice<V> {
    /// Encodes the slice as a JSON array
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Json` if an item cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<V: DeserializeOwned> SafeSlice<V> {
    /// Replaces the slice's contents with the items of a JSON array
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Json` if the input is not a JSON array whose
    /// elements decode as `V`. The slice is left unchanged in that case.
    pub fn load_json(&self, json: &str) -> Result<()> {
        let decoded: Vec<V> = serde_json::from_str(json)?;
        let items = decoded.len();
        *self.write() = decoded;
        tracing::debug!(items, "replaced slice contents from JSON");
        Ok(())
    }
}
