//! 사용자 정보 JSON 필드 경로 추출
//!
//! 관리자가 설정한 `data.user.id`, `emails.*.address` 같은 경로로
//! 프로바이더 응답에서 값을 꺼냅니다.
//!
//! | 경로 | 입력 | 결과 |
//! |------|------|------|
//! | `data.name` | `{"data": {"name": "kim"}}` | `"kim"` |
//! | `emails.*.address` | `{"emails": [{"address": "a"}, {}]}` | `["a", null]` |
//! | `emails.*` | `{"emails": ["a", "b"]}` | `["a", "b"]` |
//! | `missing` | `{}` | `None` |

use serde_json::Value;

/// 점(`.`)으로 구분된 경로로 값을 추출합니다.
///
/// - 객체는 키로 따라 내려갑니다.
/// - 배열에 대한 `*`는 나머지 경로를 각 원소에 적용한 배열을 만듭니다.
///   일치하지 않는 원소는 `null`이 됩니다. 나머지 경로가 없으면 배열 자체를 반환합니다.
/// - 배열이 아닌 값에 대한 `*`는 일반 키 `"*"` 조회입니다.
/// - 그 밖의 불일치나 빈 경로는 `None`입니다.
pub fn extract_field(value: &Value, path: &str) -> Option<Value> {
    if path.is_empty() {
        return None;
    }
    let segments: Vec<&str> = path.split('.').collect();
    walk(value, &segments)
}

fn walk(value: &Value, segments: &[&str]) -> Option<Value> {
    let mut current = value;

    for (i, segment) in segments.iter().enumerate() {
        if *segment == "*" {
            if let Value::Array(items) = current {
                let rest = &segments[i + 1..];
                if rest.is_empty() || rest == [""] {
                    return Some(current.clone());
                }
                let mapped = items
                    .iter()
                    .map(|item| walk(item, rest).unwrap_or(Value::Null))
                    .collect();
                return Some(Value::Array(mapped));
            }
        }

        current = current.as_object()?.get(*segment)?;
    }

    Some(current.clone())
}

/// 추출한 값을 문자열로 바꿉니다.
///
/// 문자열은 그대로, 숫자와 불리언은 표시 형식으로, 배열과 객체는 압축 JSON으로,
/// `null`은 빈 문자열이 됩니다.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// 식별자로 쓸 수 없는 값인지 판별합니다. (없음, null, 빈 문자열, 빈 배열, 빈 객체)
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_object_path() {
        let raw = json!({"data": {"info": {"name": "kim", "id": 42}}});

        assert_eq!(extract_field(&raw, "data.info.name"), Some(json!("kim")));
        assert_eq!(extract_field(&raw, "data.info.id"), Some(json!(42)));
        assert_eq!(extract_field(&raw, "data.info"), Some(json!({"name": "kim", "id": 42})));
    }

    #[test]
    fn test_missing_key_is_none() {
        let raw = json!({"data": {"name": "kim"}});

        assert_eq!(extract_field(&raw, "data.email"), None);
        assert_eq!(extract_field(&raw, "data.name.first"), None);
        assert_eq!(extract_field(&raw, "other"), None);
    }

    #[test]
    fn test_wildcard_maps_remaining_path() {
        let raw = json!({
            "emails": [
                {"address": "a@example.com", "primary": true},
                {"primary": false},
                "not-an-object"
            ]
        });

        assert_eq!(
            extract_field(&raw, "emails.*.address"),
            Some(json!(["a@example.com", null, null]))
        );
    }

    #[test]
    fn test_trailing_wildcard_returns_list() {
        let raw = json!({"roles": ["admin", "dev"]});

        assert_eq!(extract_field(&raw, "roles.*"), Some(json!(["admin", "dev"])));
        assert_eq!(extract_field(&raw, "roles.*."), Some(json!(["admin", "dev"])));
    }

    #[test]
    fn test_wildcard_on_object_is_plain_key() {
        let raw = json!({"data": {"*": "star"}});

        assert_eq!(extract_field(&raw, "data.*"), Some(json!("star")));
        assert_eq!(extract_field(&json!({"data": {}}), "data.*"), None);
    }

    #[test]
    fn test_nested_wildcards() {
        let raw = json!({"groups": [{"members": [{"id": 1}, {"id": 2}]}, {"members": []}]});

        assert_eq!(
            extract_field(&raw, "groups.*.members.*.id"),
            Some(json!([[1, 2], []]))
        );
    }

    #[test]
    fn test_empty_path_is_none() {
        assert_eq!(extract_field(&json!({"": "x"}), ""), None);
    }

    #[test]
    fn test_stringify_value() {
        assert_eq!(stringify_value(&json!("kim")), "kim");
        assert_eq!(stringify_value(&json!(12345)), "12345");
        assert_eq!(stringify_value(&json!(true)), "true");
        assert_eq!(stringify_value(&json!(null)), "");
        assert_eq!(stringify_value(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(stringify_value(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(null))));
        assert!(is_blank(Some(&json!(""))));
        assert!(is_blank(Some(&json!([]))));
        assert!(is_blank(Some(&json!({}))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(false))));
        assert!(!is_blank(Some(&json!("u-1"))));
    }
}
