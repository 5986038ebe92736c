use serde_derive::{Deserialize, Serialize};

use crate::cells::Legend;

/// The only edge lengths a square maze may have.
pub const ALLOWED_SIZES: [usize; 5] = [9, 11, 13, 15, 17];

/// Largest edge length any grid is ever built with.
pub const MAX_SIZE: usize = ALLOWED_SIZES[ALLOWED_SIZES.len() - 1];

pub fn is_allowed_size(size: usize) -> bool {
    ALLOWED_SIZES.contains(&size)
}

/// The wire and file form of a maze: one string per row.
///
/// Nothing about a `SerializedMaze` is trusted until `validation::validate` says so.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct SerializedMaze {
    pub name: String,
    pub size: usize,
    pub grid: Vec<String>,
    #[serde(default)]
    pub legend: Legend,
}

impl SerializedMaze {
    pub fn new<S: Into<String>>(name: S, size: usize, grid: Vec<String>) -> SerializedMaze {
        SerializedMaze {
            name: name.into(),
            size,
            grid,
            legend: Legend::standard(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<SerializedMaze> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn allowed_sizes() {
        for size in 0..20 {
            assert_eq!(is_allowed_size(size), size >= 9 && size % 2 == 1 && size <= 17);
        }
    }

    #[test]
    fn missing_legend_defaults_to_standard() {
        let maze = SerializedMaze::from_json("{\"name\":\"n\",\"size\":9,\"grid\":[\"#########\"]}").unwrap();
        assert_eq!(maze.legend, Legend::standard());
        assert_eq!(maze.grid.len(), 1);
    }

    #[test]
    fn foreign_legend_is_kept_verbatim() {
        let json = r##"{"name":"n","size":9,"grid":[],"legend":{"#":"rock"}}"##;
        let maze = SerializedMaze::from_json(json).unwrap();
        let Legend(map) = &maze.legend;
        assert_eq!(map.get("#").map(String::as_str), Some("rock"));
    }

    #[test]
    fn json_round_trip() {
        let maze = SerializedMaze::new("tiny", 9, vec!["#########".to_string(); 9]);
        let json = maze.to_json().unwrap();
        assert_eq!(SerializedMaze::from_json(&json).unwrap(), maze);
    }

    #[test]
    fn negative_size_is_a_json_error() {
        assert!(SerializedMaze::from_json(r#"{"name":"n","size":-9,"grid":[]}"#).is_err());
    }
}
