//! CJK-to-pinyin transliteration for identifiers and file stems.
//!
//! YAPI menu names are frequently Chinese; generated file stems and
//! namespace members need ASCII identifiers. The romanization backend is
//! isolated here so it can be swapped without touching any merge or
//! naming logic.

use pinyin::ToPinyin;

use crate::to_pascal_case;

/// Replace every Chinese character with its pinyin, keeping word
/// boundaries as spaces so case conversions can see them
/// (e.g., "用户管理" -> "yong hu guan li", "User中心" -> "User zhong xin").
pub fn transliterate(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        match c.to_pinyin() {
            Some(p) => {
                out.push(' ');
                out.push_str(p.plain());
                out.push(' ');
            }
            None => out.push(c),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derive a file stem from a menu display name: Chinese characters become
/// pinyin run together, everything else is kept as-is.
pub fn file_stem(name: &str) -> String {
    let mut out = String::new();
    for c in name.trim().chars() {
        match c.to_pinyin() {
            Some(p) => out.push_str(p.plain()),
            None => out.push(c),
        }
    }
    out
}

/// Derive a PascalCase identifier from a display name
/// (e.g., "用户管理" -> "YongHuGuanLi", "shop list" -> "ShopList").
///
/// The result is always a valid identifier: leading digits are stripped
/// and a name with nothing usable left falls back to "Module".
pub fn pascal_identifier(name: &str) -> String {
    let pascal = to_pascal_case(&transliterate(name));
    let rest: String = pascal.chars().skip_while(char::is_ascii_digit).collect();
    let mut chars = rest.chars();
    match chars.next() {
        None => "Module".to_string(),
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_chinese() {
        assert_eq!(transliterate("用户管理"), "yong hu guan li");
        assert_eq!(transliterate("商店"), "shang dian");
    }

    #[test]
    fn test_transliterate_mixed() {
        assert_eq!(transliterate("User中心"), "User zhong xin");
        assert_eq!(transliterate("shop list"), "shop list");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("用户管理"), "yonghuguanli");
        assert_eq!(file_stem("shop"), "shop");
        assert_eq!(file_stem(" 订单list "), "dingdanlist");
    }

    #[test]
    fn test_pascal_identifier() {
        assert_eq!(pascal_identifier("用户管理"), "YongHuGuanLi");
        assert_eq!(pascal_identifier("shop list"), "ShopList");
    }

    #[test]
    fn test_pascal_identifier_is_always_valid() {
        assert_eq!(pascal_identifier("3D模型"), "DMoXing");
        assert_eq!(pascal_identifier("3dmoxing"), "Dmoxing");
        assert_eq!(pascal_identifier("###"), "Module");
        assert_eq!(pascal_identifier(""), "Module");
    }
}
