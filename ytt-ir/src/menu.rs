//! A YAPI menu: a named folder of interfaces.

use serde::Deserialize;

use crate::InterfaceDescriptor;

/// One menu with its interfaces, as exported by the fetch step.
///
/// The generator maps each menu to one output module directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuExport {
    /// Display name, possibly Chinese, e.g. "用户管理"
    #[serde(default)]
    pub name: String,

    /// Optional menu description
    #[serde(default)]
    pub desc: String,

    /// Interfaces under this menu
    #[serde(default)]
    pub list: Vec<InterfaceDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_menu_export() {
        let json = r#"[
            {
                "name": "商店",
                "desc": "",
                "list": [
                    { "_id": 1, "path": "/api/shop/list", "method": "GET" }
                ]
            }
        ]"#;

        let menus: Vec<MenuExport> = serde_json::from_str(json).unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].name, "商店");
        assert_eq!(menus[0].list.len(), 1);
    }
}
