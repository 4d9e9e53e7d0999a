//! Heir list parsing.
//!
//! Accepts either a structured list or the free-text box from the intake
//! form, one heir per line: `name, relationship, age, address`.

use serde_json::Value;

use super::model::Heir;

/// Parse the `heirs_list` value. Never fails; unusable entries are dropped.
pub fn parse_heirs(value: Option<&Value>) -> Vec<Heir> {
    match value {
        Some(Value::String(text)) => parse_heir_text(text),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(heir_from_value)
            .filter(has_name)
            .collect(),
        Some(Value::Object(_)) => value
            .and_then(heir_from_value)
            .filter(has_name)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

/// Split free text into heirs. Lines are separated by newlines, or by `;`
/// when the text is a single line.
pub fn parse_heir_text(text: &str) -> Vec<Heir> {
    let lines: Vec<&str> = if text.contains('\n') {
        text.lines().collect()
    } else {
        text.split(';').collect()
    };

    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            if line.trim().is_empty() {
                return None;
            }
            let heir = parse_heir_line(line);
            if !has_name(&heir) {
                log::debug!("dropping heir line {} without a name", index + 1);
                return None;
            }
            Some(heir)
        })
        .collect()
}

/// Map one comma-separated line onto heir fields by position. Anything past
/// the third comma belongs to the address.
pub fn parse_heir_line(line: &str) -> Heir {
    let mut parts = line.splitn(4, ',').map(str::trim);
    let mut next = || parts.next().unwrap_or_default().to_string();

    Heir {
        name: next(),
        relationship: next(),
        age: next(),
        address: next(),
    }
}

fn heir_from_value(value: &Value) -> Option<Heir> {
    match value {
        Value::String(line) => Some(parse_heir_line(line)),
        Value::Object(fields) => {
            let field = |key: &str| match fields.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            };
            Some(Heir {
                name: field("name"),
                relationship: field("relationship"),
                age: field("age"),
                address: field("address"),
            })
        }
        _ => None,
    }
}

fn has_name(heir: &Heir) -> bool {
    !heir.name.trim().is_empty()
}
