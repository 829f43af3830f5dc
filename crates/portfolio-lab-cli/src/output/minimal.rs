use serde_json::Value;

/// Print just the key answer value from the output.
///
/// A list of scenario results prints one `name: impact` line each; otherwise
/// the first well-known field present is printed, falling back to the first
/// field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Array(items) = result_obj {
        for item in items {
            println!("{}", format_minimal(item));
        }
        return;
    }

    let priority_keys = ["worst_scenario", "risk_score", "impact"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Object(map) => match (map.get("name"), map.get("impact")) {
            (Some(name), Some(impact)) => {
                format!("{}: {}", format_minimal(name), format_minimal(impact))
            }
            _ => serde_json::to_string(value).unwrap_or_default(),
        },
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
