use ahash::RandomState;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use crate::model::{RoundRecord, competitors};

/// Characters marking an amateur in the name column.
pub const AMATEUR_MARKERS: [char; 2] = ['@', '＠'];

/// Key used to decide whether two name strings denote the same player.
///
/// The name is width-folded (NFKC), amateur markers, dots and every kind of
/// whitespace are removed, and the result is lower-cased. Total: an empty or
/// unusable name gives an empty key.
#[must_use]
pub fn match_key(name: &str) -> String {
    let stripped: String = name
        .nfkc()
        .filter(|c| !c.is_whitespace() && *c != '.' && !AMATEUR_MARKERS.contains(c))
        .collect();
    // Lower-casing can produce decomposed sequences, fold once more so the key is stable.
    stripped.to_lowercase().nfkc().collect()
}

#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    let key = match_key(a);
    !key.is_empty() && key == match_key(b)
}

#[must_use]
pub fn is_amateur(name: &str) -> bool {
    name.contains(AMATEUR_MARKERS)
}

/// Name as shown on the leaderboard: amateur markers removed, trimmed.
#[must_use]
pub fn display_name(name: &str) -> String {
    name.replace(AMATEUR_MARKERS, "").trim().to_string()
}

/// First player row per match key; rows without a usable name are left out.
#[must_use]
pub fn index_by_key(rows: &[RoundRecord]) -> HashMap<String, &RoundRecord, RandomState> {
    let mut index: HashMap<String, &RoundRecord, RandomState> = HashMap::default();
    for row in competitors(rows) {
        let key = match_key(&row.name);
        if !key.is_empty() {
            index.entry(key).or_insert(row);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_width_spacing_and_case() {
        assert_eq!(match_key("山田　太郎"), match_key("山田 太郎"));
        assert_eq!(match_key("ＴＡＲＯ　Ｙａｍａｄａ"), "taroyamada");
        assert_eq!(match_key("@Taro.Yamada\t"), "taroyamada");
        assert_eq!(match_key("＠山田\u{00a0}太郎\n"), match_key("山田太郎"));
    }

    #[test]
    fn empty_names_never_match() {
        assert_eq!(match_key(""), "");
        assert_eq!(match_key(" 　"), "");
        assert!(!names_match("", ""));
        assert!(names_match("Ken Sato", "ken　sato"));
    }

    #[test]
    fn amateur_marker_is_split_out() {
        assert!(is_amateur("@松浦 葵"));
        assert!(is_amateur("松浦 葵＠"));
        assert!(!is_amateur("松浦 葵"));
        assert_eq!(display_name(" @松浦 葵 "), "松浦 葵");
    }
}
