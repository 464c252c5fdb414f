//! One documented HTTP endpoint as YAPI describes it.

use serde::Deserialize;

/// How YAPI tagged the example response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ResponseBodyKind {
    /// Body is JSON (either a JSON Schema or a raw example)
    Json,
    /// Anything else (form, raw text, ...)
    #[default]
    Raw,
}

impl From<String> for ResponseBodyKind {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("json") {
            ResponseBodyKind::Json
        } else {
            ResponseBodyKind::Raw
        }
    }
}

/// Interface metadata as returned by YAPI's interface detail endpoint.
///
/// Only the fields the generator reads are modeled; unknown fields in the
/// payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfaceDescriptor {
    /// YAPI's unique interface id, used as an optional naming suffix
    #[serde(rename = "_id", default)]
    pub id: u64,

    /// Human-readable title, emitted into doc comments
    #[serde(default)]
    pub title: String,

    /// Request path, e.g. "/api/shop/shopList"
    #[serde(default)]
    pub path: String,

    /// HTTP method, e.g. "GET" (case varies in the wild)
    #[serde(default)]
    pub method: String,

    /// Query parameters
    #[serde(default)]
    pub req_query: Vec<ParamDescriptor>,

    /// Raw response body: a JSON Schema or an example, as a string
    #[serde(default)]
    pub res_body: String,

    /// Body kind tag ("json" or something else)
    #[serde(rename = "res_body_type", default)]
    pub res_body_kind: ResponseBodyKind,
}

/// One query parameter of an interface.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamDescriptor {
    /// Parameter name, e.g. "date_type"
    #[serde(default)]
    pub name: String,

    /// "1" means required, "0" (or anything else) means optional
    #[serde(default)]
    pub required: String,

    /// Free-text description, may contain HTML
    #[serde(default)]
    pub desc: String,

    /// Example value, e.g. "3"
    #[serde(default)]
    pub example: String,
}

impl ParamDescriptor {
    /// Whether YAPI marked this parameter as required.
    pub fn is_required(&self) -> bool {
        self.required == "1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_yapi_payload() {
        let json = r#"{
            "_id": 4242,
            "title": "商店列表",
            "path": "/api/shop/shopList",
            "method": "GET",
            "req_query": [
                { "name": "page", "required": "1", "desc": "页码", "example": "1" }
            ],
            "res_body": "{\"type\":\"object\"}",
            "res_body_type": "json",
            "status": "done",
            "uid": 7
        }"#;

        let iface: InterfaceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(iface.id, 4242);
        assert_eq!(iface.method, "GET");
        assert_eq!(iface.res_body_kind, ResponseBodyKind::Json);
        assert_eq!(iface.req_query.len(), 1);
        assert!(iface.req_query[0].is_required());
    }

    #[test]
    fn test_missing_fields_default() {
        let iface: InterfaceDescriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(iface.id, 0);
        assert_eq!(iface.res_body_kind, ResponseBodyKind::Raw);
        assert!(iface.req_query.is_empty());
    }

    #[test]
    fn test_body_kind_is_case_insensitive() {
        let kind: ResponseBodyKind = serde_json::from_str("\"JSON\"").unwrap();
        assert_eq!(kind, ResponseBodyKind::Json);
        let kind: ResponseBodyKind = serde_json::from_str("\"form\"").unwrap();
        assert_eq!(kind, ResponseBodyKind::Raw);
    }
}
