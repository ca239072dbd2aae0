/// Calculate the number of tiles in a hexagonal outline of the given size.
/// Size 0 means 1 tile, 1 is 7 tiles, 2 is 19, etc.
pub fn hexagon_len(size: i32) -> usize {
    // Always 3s^2+3s+1 tiles (a reduction of a geometric sum).
    // f(0) = 1, and we add 6s tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let s = size as usize;
    3 * s * s + 3 * s + 1
}

// Serialize a coordinate-keyed map as a list of pairs instead of a map.
// Coordinates shouldn't be used as serialized map keys, since JSON and other
// formats don't support complex keys.
pub mod coord_map_to_pairs_serde {
    use crate::grid::{coord::HexCoord, map::HexCoordIndexMap};
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialize a coordinate map as a list of (coordinate, value) pairs
    pub fn serialize<T, S>(
        map: &HexCoordIndexMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for entry in map.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    /// Deserialize a list of (coordinate, value) pairs back into a map.
    /// Duplicate coordinates collapse silently, keeping the last value.
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<HexCoordIndexMap<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs: Vec<(HexCoord, T)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
