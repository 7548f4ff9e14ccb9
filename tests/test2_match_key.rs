use proptest::prelude::*;
use rusty_golf_results::score::{display_name, is_amateur, match_key, names_match};

/// Full-width form of an ASCII letter or digit.
fn widen(c: char) -> char {
    if c.is_ascii_alphanumeric() {
        char::from_u32(c as u32 - 0x21 + 0xFF01).unwrap_or(c)
    } else {
        c
    }
}

fn variants(given: &str, family: &str) -> Vec<String> {
    let half = format!("{given} {family}");
    let full: String = format!("{given}\u{3000}{family}").chars().map(widen).collect();
    vec![
        half.clone(),
        full,
        format!("{given}{family}"),
        format!("@{given}\u{00a0}{family}"),
        format!("＠{given}.{family}\t"),
        half.to_uppercase(),
        format!("  {given}\n{family}  "),
    ]
}

#[test]
fn test2_variants_of_one_name_share_a_key() {
    let names = variants("Taro", "Yamada");
    let keys: Vec<String> = names.iter().map(|n| match_key(n)).collect();
    assert!(keys.iter().all(|k| k == "taroyamada"), "{keys:?}");
}

#[test]
fn test2_japanese_names_fold_spacing() {
    assert_eq!(match_key("佐藤　健"), match_key("佐藤健"));
    assert_eq!(match_key("@佐藤 健"), match_key("佐藤健"));
    assert_ne!(match_key("佐藤 健"), match_key("佐藤 健二"));
    assert!(names_match("ＫＥＮ ＳＵＺＵＫＩ", "Ken Suzuki"));
}

#[test]
fn test2_amateur_marker_only_changes_display() {
    assert!(is_amateur("＠山田 太郎"));
    assert_eq!(display_name("＠山田 太郎"), "山田 太郎");
    assert_eq!(match_key("＠山田 太郎"), match_key("山田 太郎"));
}

proptest! {
    #[test]
    fn test2_equivalence_over_variants(
        given in "[A-Za-z]{1,8}",
        family in "[A-Za-z]{1,8}",
        other in "[A-Za-z]{1,8}",
    ) {
        let mut names = variants(&given, &family);
        names.extend(variants(&other, &family));
        let keys: Vec<String> = names.iter().map(|n| match_key(n)).collect();

        for a in &keys {
            prop_assert_eq!(a, a);
            for b in &keys {
                prop_assert_eq!(a == b, b == a);
                for c in &keys {
                    if a == b && b == c {
                        prop_assert_eq!(a, c);
                    }
                }
            }
        }
        let same = given.to_lowercase() == other.to_lowercase();
        prop_assert_eq!(keys[0] == keys[keys.len() - 1], same);
    }

    #[test]
    fn test2_key_is_stable(name in "[a-zA-Z0-9 .@＠\u{3000}ａ-ｚＡ-Ｚ０-９山田太郎佐藤健]{0,16}") {
        let key = match_key(&name);
        prop_assert_eq!(match_key(&key), key.clone());
        prop_assert!(!key.chars().any(char::is_whitespace));
    }
}
