//! Basename matching between the RGB and thermal listings.

use serde::{Deserialize, Serialize};

use super::discovery::BasenameMap;

/// One matched RGB / thermal pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePair {
    /// Shared basename used as the pairing key.
    pub basename: String,
    /// RGB filename, relative to the RGB directory.
    pub rgb_file: String,
    /// Thermal filename, relative to the thermal directory.
    pub thermal_file: String,
}

/// Outcome of matching two basename maps.
#[derive(Debug, Clone, Default)]
pub struct PairMatch {
    /// Pairs in basename order.
    pub pairs: Vec<ImagePair>,
    /// Basenames present only in the RGB directory.
    pub rgb_only: Vec<String>,
    /// Basenames present only in the thermal directory.
    pub thermal_only: Vec<String>,
}

/// Intersect two basename maps.
///
/// Both maps iterate in sorted key order, so a single merge walk yields the
/// intersection already sorted.
pub fn match_pairs(rgb: &BasenameMap, thermal: &BasenameMap) -> PairMatch {
    let mut result = PairMatch::default();
    let mut rgb_iter = rgb.entries.iter().peekable();
    let mut thermal_iter = thermal.entries.iter().peekable();

    loop {
        match (rgb_iter.peek(), thermal_iter.peek()) {
            (Some((rgb_key, rgb_file)), Some((thermal_key, thermal_file))) => {
                match rgb_key.cmp(thermal_key) {
                    std::cmp::Ordering::Less => {
                        result.rgb_only.push((*rgb_key).clone());
                        rgb_iter.next();
                    }
                    std::cmp::Ordering::Greater => {
                        result.thermal_only.push((*thermal_key).clone());
                        thermal_iter.next();
                    }
                    std::cmp::Ordering::Equal => {
                        result.pairs.push(ImagePair {
                            basename: (*rgb_key).clone(),
                            rgb_file: (*rgb_file).clone(),
                            thermal_file: (*thermal_file).clone(),
                        });
                        rgb_iter.next();
                        thermal_iter.next();
                    }
                }
            }
            (Some(_), None) => {
                result.rgb_only.extend(rgb_iter.map(|(k, _)| k.clone()));
                break;
            }
            (None, Some(_)) => {
                result.thermal_only.extend(thermal_iter.map(|(k, _)| k.clone()));
                break;
            }
            (None, None) => break,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(files: &[&str]) -> BasenameMap {
        let files: Vec<String> = files.iter().map(|s| (*s).to_string()).collect();
        BasenameMap::build(&files)
    }

    #[test]
    fn test_intersection_is_sorted() {
        let rgb = map(&["c.jpg", "a.jpg", "b.jpg"]);
        let thermal = map(&["d.png", "c.png", "b.png"]);
        let matched = match_pairs(&rgb, &thermal);

        let names: Vec<&str> = matched.pairs.iter().map(|p| p.basename.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(matched.pairs[0].rgb_file, "b.jpg");
        assert_eq!(matched.pairs[0].thermal_file, "b.png");
        assert_eq!(matched.rgb_only, vec!["a"]);
        assert_eq!(matched.thermal_only, vec!["d"]);
    }

    #[test]
    fn test_disjoint() {
        let matched = match_pairs(&map(&["a.jpg"]), &map(&["b.png"]));
        assert!(matched.pairs.is_empty());
        assert_eq!(matched.rgb_only, vec!["a"]);
        assert_eq!(matched.thermal_only, vec!["b"]);
    }

    #[test]
    fn test_mixed_extensions() {
        let rgb = map(&["img001.jpg", "img002.png"]);
        let thermal = map(&["img001.png", "img003.jpg"]);
        let matched = match_pairs(&rgb, &thermal);
        assert_eq!(
            matched.pairs,
            vec![ImagePair {
                basename: "img001".to_string(),
                rgb_file: "img001.jpg".to_string(),
                thermal_file: "img001.png".to_string(),
            }]
        );
    }
}
