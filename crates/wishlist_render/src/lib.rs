use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map as JsonMap, Value as JsonValue};

use wishlist_core::Wishlist;
use wishlist_core::entry::{Fields, flag_field};
use wishlist_core::wishlist::store_link;

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

/// Projects the wishlist for JSON output: each entry keeps only the
/// requested fields (all of them when none were requested). A requested
/// `link` field is synthesized from the gameid even though no such native
/// field exists.
pub fn project_json(wishlist: &Wishlist, wanted_fields: Option<&[String]>) -> JsonValue {
    let mut output = JsonMap::new();
    for (gameid, fields) in wishlist.iter() {
        let mut projected = JsonMap::new();
        for (name, value) in fields {
            if wanted_fields.is_none_or(|wanted| wanted.iter().any(|w| w == name)) {
                projected.insert(name.clone(), value.clone());
            }
        }
        if wanted_fields.is_some_and(|wanted| wanted.iter().any(|w| w == "link")) {
            projected.insert("link".to_string(), JsonValue::String(store_link(gameid)));
        }
        output.insert(gameid.to_string(), JsonValue::Object(projected));
    }
    JsonValue::Object(output)
}

/// Pretty-prints with a 4-space indent. serde_json leaves non-ASCII
/// characters unescaped, matching the wishlist's localized names.
pub fn render_json_pretty(value: &JsonValue) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ---------------------------------------------------------------------------
// CSV output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// No quoting; separators and line breaks inside fields are
    /// backslash-escaped.
    #[default]
    Never,
    /// Quote only fields containing the separator, a quote, or a line
    /// break.
    Minimal,
    /// Quote every field.
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub separator: String,
    pub quote: QuoteStyle,
    pub sort: Option<String>,
    pub numeric: bool,
    pub reverse: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
            quote: QuoteStyle::Never,
            sort: None,
            numeric: false,
            reverse: false,
        }
    }
}

/// Sort key for CSV ordering. `Numeric` keys compare by value, `Text`
/// keys lexicographically, and every numeric key orders before every text
/// key (the derived variant order).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Numeric(i64),
    Text(String),
}

/// Renders the wishlist as delimited rows in sorted order. The default
/// field list is just the gameid.
pub fn render_csv(
    wishlist: &Wishlist,
    wanted_fields: Option<&[String]>,
    options: &CsvOptions,
) -> String {
    let default_fields = vec!["id".to_string()];
    let field_names: &[String] = wanted_fields.unwrap_or(&default_fields);

    let mut keyed: Vec<(SortKey, &str, &Fields)> = wishlist
        .iter()
        .map(|(gameid, fields)| (sort_key(gameid, fields, options), gameid, fields))
        .collect();
    // Stable sort with a reversed comparator keeps ties in wishlist order
    // under --reverse as well.
    if options.reverse {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let mut out = String::new();
    for (_, gameid, fields) in keyed {
        let row: Vec<String> = field_names
            .iter()
            .map(|field| field_value(gameid, fields, field))
            .collect();
        let encoded: Vec<String> = row
            .iter()
            .map(|cell| encode_field(cell, options))
            .collect();
        out.push_str(&encoded.join(&options.separator));
        out.push('\n');
    }
    out
}

/// Field value for one CSV cell. `id`/`gameid`, `released` and
/// `link`/`url` are synthesized; array values join with `:`; missing
/// fields render empty.
fn field_value(gameid: &str, fields: &Fields, field: &str) -> String {
    match field {
        "id" | "gameid" => gameid.to_string(),
        "released" => {
            if flag_field(fields, "prerelease") {
                String::new()
            } else {
                "1".to_string()
            }
        }
        "link" | "url" => store_link(gameid),
        _ => match fields.get(field) {
            Some(JsonValue::Array(items)) => items
                .iter()
                .map(scalar_string)
                .collect::<Vec<_>>()
                .join(":"),
            Some(value) => scalar_string(value),
            None => String::new(),
        },
    }
}

fn scalar_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn sort_key(gameid: &str, fields: &Fields, options: &CsvOptions) -> SortKey {
    let missing = || {
        if options.numeric {
            JsonValue::from(0)
        } else {
            JsonValue::String(String::new())
        }
    };
    let value = match options.sort.as_deref() {
        Some("id") | Some("gameid") => JsonValue::String(gameid.to_string()),
        Some(field) => fields.get(field).cloned().unwrap_or_else(missing),
        // Default sort field; entries without it get the same defaults as
        // a named field.
        None => fields.get("added").cloned().unwrap_or_else(missing),
    };
    value_key(&value, options.numeric)
}

fn value_key(value: &JsonValue, numeric: bool) -> SortKey {
    match value {
        JsonValue::Number(n) => match n.as_i64() {
            Some(v) => SortKey::Numeric(v),
            None => SortKey::Text(n.to_string()),
        },
        JsonValue::String(s) => {
            let all_digits = !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
            if numeric || all_digits {
                match s.parse::<i64>() {
                    Ok(v) => SortKey::Numeric(v),
                    Err(_) => SortKey::Text(s.clone()),
                }
            } else {
                SortKey::Text(s.clone())
            }
        }
        other => SortKey::Text(scalar_string(other)),
    }
}

fn encode_field(field: &str, options: &CsvOptions) -> String {
    match options.quote {
        QuoteStyle::Never => escape_unquoted(field, &options.separator),
        QuoteStyle::Minimal => {
            if field.contains(&options.separator)
                || field.contains('"')
                || field.contains('\n')
                || field.contains('\r')
            {
                quote(field)
            } else {
                field.to_string()
            }
        }
        QuoteStyle::Always => quote(field),
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Unquoted mode keeps separator occurrences and line breaks in the
/// field, prefixed with a backslash.
fn escape_unquoted(field: &str, separator: &str) -> String {
    let mut escaped = field.to_string();
    if !separator.is_empty() {
        escaped = escaped.replace(separator, &format!("\\{separator}"));
    }
    escaped.replace('\n', "\\\n").replace('\r', "\\\r")
}
