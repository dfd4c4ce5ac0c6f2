//! Naming conventions and identifier case conversion

use std::fmt;

/// Naming convention for generated identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    /// `userId`
    #[default]
    Camel,
    /// `UserId`
    Pascal,
    /// `user_id`
    Snake,
}

impl Case {
    /// Accepted configuration values, in allow-list order
    pub const NAMES: [&'static str; 3] = ["camel", "pascal", "snake"];

    /// Parse a configuration value (`camel`, `pascal` or `snake`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "camel" => Some(Case::Camel),
            "pascal" => Some(Case::Pascal),
            "snake" => Some(Case::Snake),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guess the convention an identifier is written in.
///
/// An underscore that is neither the first nor the last character makes it
/// snake case; otherwise an ASCII uppercase first character makes it pascal
/// case.
pub fn infer_case(name: &str) -> Case {
    if let Some(idx) = name.find('_') {
        if idx > 0 && idx + 1 < name.len() {
            return Case::Snake;
        }
    }
    match name.chars().next() {
        Some(first) if first.is_ascii_uppercase() => Case::Pascal,
        _ => Case::Camel,
    }
}

/// Convert `name` to the `target` convention.
///
/// Pascal input always gets its first letter lowered and camel input is
/// always lowercased before it is rebuilt, so converting to the same
/// convention is not a no-op for those two: `convert_case(Case::Camel,
/// "userId")` is `"userid"`.
pub fn convert_case(target: Case, name: &str) -> String {
    convert(target, name, false)
}

/// Like [`convert_case`], but camel input is always raised to pascal case.
///
/// Used for declaration names, which must start uppercase.
pub fn convert_case_up(target: Case, name: &str) -> String {
    convert(target, name, true)
}

fn convert(target: Case, name: &str, move_up: bool) -> String {
    if name.is_empty() {
        return String::new();
    }

    let source = infer_case(name);
    let target = if move_up && source == Case::Camel {
        Case::Pascal
    } else {
        target
    };

    let mut chars: Vec<char> = name.chars().collect();
    match source {
        Case::Pascal => {
            chars[0] = chars[0].to_ascii_lowercase();
            if target == Case::Snake {
                let boundaries = uppercase_positions(&chars);
                lowercase(&mut chars);
                insert_underscores(&mut chars, &boundaries);
            }
        }
        Case::Snake => {
            if target != Case::Snake {
                lowercase(&mut chars);
                chars = join_underscores(&chars);
                if target == Case::Pascal {
                    uppercase_first(&mut chars);
                }
            }
        }
        Case::Camel => {
            let boundaries = uppercase_positions(&chars);
            lowercase(&mut chars);
            match target {
                Case::Snake => insert_underscores(&mut chars, &boundaries),
                Case::Pascal => {
                    for &idx in &boundaries {
                        chars[idx] = chars[idx].to_ascii_uppercase();
                    }
                    uppercase_first(&mut chars);
                }
                Case::Camel => {}
            }
        }
    }
    chars.into_iter().collect()
}

/// Positions of ASCII uppercase letters
fn uppercase_positions(chars: &[char]) -> Vec<usize> {
    chars
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_uppercase())
        .map(|(i, _)| i)
        .collect()
}

fn lowercase(chars: &mut [char]) {
    for c in chars.iter_mut() {
        *c = c.to_ascii_lowercase();
    }
}

fn uppercase_first(chars: &mut [char]) {
    if let Some(first) = chars.first_mut() {
        *first = first.to_ascii_uppercase();
    }
}

/// Insert `_` before each original boundary position (ascending order).
fn insert_underscores(chars: &mut Vec<char>, boundaries: &[usize]) {
    for (shift, &idx) in boundaries.iter().enumerate() {
        chars.insert(idx + shift, '_');
    }
}

/// Drop every `_` and uppercase the character that followed it.
fn join_underscores(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut upper_next = false;
    for &c in chars {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_case() {
        assert_eq!(infer_case("user_id"), Case::Snake);
        assert_eq!(infer_case("UserId"), Case::Pascal);
        assert_eq!(infer_case("userId"), Case::Camel);
        assert_eq!(infer_case("users"), Case::Camel);
        // Leading or trailing underscores alone do not make snake case
        assert_eq!(infer_case("_id"), Case::Camel);
        assert_eq!(infer_case("user_"), Case::Camel);
        assert_eq!(infer_case(""), Case::Camel);
    }

    #[test]
    fn test_snake_to_camel_and_pascal() {
        assert_eq!(convert_case(Case::Camel, "created_at"), "createdAt");
        assert_eq!(convert_case(Case::Pascal, "user_accounts"), "UserAccounts");
        assert_eq!(convert_case(Case::Camel, "USER_ID"), "userId");
        assert_eq!(convert_case(Case::Snake, "user_id"), "user_id");
    }

    #[test]
    fn test_camel_conversions() {
        assert_eq!(convert_case(Case::Snake, "userName"), "user_name");
        assert_eq!(convert_case(Case::Pascal, "userName"), "UserName");
        assert_eq!(convert_case(Case::Snake, "orderItemId"), "order_item_id");
    }

    #[test]
    fn test_pascal_conversions() {
        assert_eq!(convert_case(Case::Snake, "UserName"), "user_name");
        assert_eq!(convert_case(Case::Camel, "UserName"), "userName");
        assert_eq!(convert_case(Case::Snake, "UserID"), "user_i_d");
    }

    #[test]
    fn test_same_convention_normalization() {
        // Camel input is lowercased, pascal input loses its leading capital.
        assert_eq!(convert_case(Case::Camel, "userName"), "username");
        assert_eq!(convert_case(Case::Pascal, "UserName"), "userName");
    }

    #[test]
    fn test_move_up() {
        assert_eq!(convert_case_up(Case::Camel, "model"), "Model");
        assert_eq!(convert_case_up(Case::Snake, "users"), "Users");
        assert_eq!(convert_case_up(Case::Camel, "user_accounts"), "userAccounts");
        assert_eq!(convert_case_up(Case::Pascal, "user_accounts"), "UserAccounts");
    }

    #[test]
    fn test_non_letters_are_inert() {
        assert_eq!(convert_case(Case::Snake, "address2Line"), "address2_line");
        assert_eq!(convert_case(Case::Camel, "line_2"), "line2");
        assert_eq!(convert_case(Case::Pascal, "café_menu"), "CaféMenu");
    }

    #[test]
    fn test_non_ascii_capital_is_not_pascal() {
        assert_eq!(infer_case("Élan"), Case::Camel);
        assert_eq!(convert_case(Case::Snake, "ÉlanVital"), "Élan_vital");
        assert_eq!(convert_case(Case::Pascal, "élan"), "élan");
    }

    #[test]
    fn test_repeated_and_trailing_underscores() {
        assert_eq!(convert_case(Case::Camel, "user__id"), "userId");
        assert_eq!(convert_case(Case::Camel, "user_id_"), "userId");
    }

    #[test]
    fn test_idempotent_for_camel_and_snake() {
        let cases = [
            (Case::Camel, "userId"),
            (Case::Camel, "createdAt"),
            (Case::Camel, "name"),
            (Case::Snake, "order_item_id"),
            (Case::Snake, "user_name"),
            (Case::Snake, "name"),
        ];
        for (case, s) in cases {
            let once = convert_case(case, s);
            assert_eq!(convert_case(case, &once), once, "{} -> {}", s, case);
        }
    }

    #[test]
    fn test_pascal_round_trip() {
        for s in ["User", "UserName", "OrderItemHistory", "A"] {
            let there = convert_case(Case::Snake, &convert_case(Case::Pascal, s));
            assert_eq!(convert_case(Case::Pascal, &there), s);
        }
    }

    #[test]
    fn test_empty_identifier() {
        assert_eq!(convert_case(Case::Pascal, ""), "");
        assert_eq!(convert_case_up(Case::Snake, ""), "");
    }

    #[test]
    fn test_case_names() {
        for name in Case::NAMES {
            assert_eq!(Case::from_name(name).unwrap().as_str(), name);
        }
        assert_eq!(Case::from_name("kebab"), None);
    }
}
