use serde_json::{Value, json};
use wishlist_core::Wishlist;
use wishlist_render::{CsvOptions, QuoteStyle, project_json, render_csv, render_json_pretty};

fn wishlist_from(value: Value) -> Wishlist {
    Wishlist::from_value(value).expect("fixture should be a valid wishlist")
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[test]
fn json_projection_keeps_all_fields_without_selection() {
    let wishlist = wishlist_from(json!({
        "10": {"name": "Foo", "final": 999, "tags": ["RPG"]},
    }));
    let value = project_json(&wishlist, None);
    assert_eq!(
        value,
        json!({"10": {"name": "Foo", "final": 999, "tags": ["RPG"]}})
    );
}

#[test]
fn json_projection_drops_unrequested_fields() {
    let wishlist = wishlist_from(json!({
        "10": {"name": "Foo", "final": 999, "tags": ["RPG"]},
    }));
    let value = project_json(&wishlist, Some(&fields(&["name"])));
    assert_eq!(value, json!({"10": {"name": "Foo"}}));
}

#[test]
fn json_projection_injects_requested_link() {
    let wishlist = wishlist_from(json!({"30": {"name": "Foo"}}));
    let value = project_json(&wishlist, Some(&fields(&["name", "link"])));
    assert_eq!(
        value,
        json!({"30": {"name": "Foo", "link": "https://store.steampowered.com/app/30"}})
    );
}

#[test]
fn json_link_is_not_injected_without_explicit_request() {
    let wishlist = wishlist_from(json!({"30": {"name": "Foo"}}));
    let value = project_json(&wishlist, None);
    assert!(value["30"].get("link").is_none());
}

#[test]
fn json_pretty_uses_four_space_indent_and_literal_unicode() {
    let wishlist = wishlist_from(json!({"10": {"name": "Füß 東京"}}));
    let value = project_json(&wishlist, None);
    let rendered = render_json_pretty(&value).expect("rendering should succeed");

    assert!(rendered.contains("    \"10\": {"));
    assert!(rendered.contains("        \"name\""));
    assert!(rendered.contains("Füß 東京"));
    assert!(!rendered.contains("\\u"));

    let reparsed: Value = serde_json::from_str(&rendered).expect("output should be valid JSON");
    assert_eq!(reparsed, value);
}

#[test]
fn json_empty_wishlist_renders_empty_object() {
    let value = project_json(&Wishlist::new(), None);
    let rendered = render_json_pretty(&value).expect("rendering should succeed");
    assert_eq!(rendered, "{}");
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

#[test]
fn csv_defaults_to_one_gameid_per_line() {
    let wishlist = wishlist_from(json!({"10": {"name": "Foo"}}));
    let out = render_csv(&wishlist, None, &CsvOptions::default());
    assert_eq!(out, "10\n");
}

#[test]
fn csv_synthesizes_id_released_and_link_fields() {
    let wishlist = wishlist_from(json!({
        "10": {"name": "Foo", "prerelease": 1},
        "20": {"name": "Bar"},
    }));
    let options = CsvOptions {
        sort: Some("id".to_string()),
        ..CsvOptions::default()
    };
    let out = render_csv(&wishlist, Some(&fields(&["gameid", "released", "url"])), &options);
    assert_eq!(
        out,
        "10\t\thttps://store.steampowered.com/app/10\n\
         20\t1\thttps://store.steampowered.com/app/20\n"
    );
}

#[test]
fn csv_joins_array_values_with_colon() {
    let wishlist = wishlist_from(json!({
        "10": {"tags": ["RPG", "Indie", "Open World"]},
    }));
    let out = render_csv(&wishlist, Some(&fields(&["tags"])), &CsvOptions::default());
    assert_eq!(out, "RPG:Indie:Open World\n");
}

#[test]
fn csv_missing_field_renders_empty() {
    let wishlist = wishlist_from(json!({"10": {"name": "Foo"}}));
    let out = render_csv(
        &wishlist,
        Some(&fields(&["name", "capsule"])),
        &CsvOptions::default(),
    );
    assert_eq!(out, "Foo\t\n");
}

#[test]
fn csv_never_quoting_escapes_separator_without_removing_it() {
    let wishlist = wishlist_from(json!({"10": {"name": "Foo\tBar"}}));
    let out = render_csv(&wishlist, Some(&fields(&["name"])), &CsvOptions::default());
    assert_eq!(out, "Foo\\\tBar\n");
}

#[test]
fn csv_minimal_quoting_quotes_only_special_fields() {
    let wishlist = wishlist_from(json!({
        "10": {"name": "plain", "review_desc": "Very, Positive"},
    }));
    let options = CsvOptions {
        separator: ",".to_string(),
        quote: QuoteStyle::Minimal,
        ..CsvOptions::default()
    };
    let out = render_csv(&wishlist, Some(&fields(&["name", "review_desc"])), &options);
    assert_eq!(out, "plain,\"Very, Positive\"\n");
}

#[test]
fn csv_always_quoting_quotes_everything_and_doubles_quotes() {
    let wishlist = wishlist_from(json!({"10": {"name": "the \"game\""}}));
    let options = CsvOptions {
        quote: QuoteStyle::Always,
        ..CsvOptions::default()
    };
    let out = render_csv(&wishlist, Some(&fields(&["id", "name"])), &options);
    assert_eq!(out, "\"10\"\t\"the \"\"game\"\"\"\n");
}

#[test]
fn csv_supports_multi_character_separators() {
    let wishlist = wishlist_from(json!({"10": {"name": "Foo"}}));
    let options = CsvOptions {
        separator: " | ".to_string(),
        ..CsvOptions::default()
    };
    let out = render_csv(&wishlist, Some(&fields(&["id", "name"])), &options);
    assert_eq!(out, "10 | Foo\n");
}

#[test]
fn csv_sorts_by_added_by_default() {
    let wishlist = wishlist_from(json!({
        "10": {"added": 300},
        "20": {"added": 100},
        "30": {"added": 200},
    }));
    let out = render_csv(&wishlist, None, &CsvOptions::default());
    assert_eq!(out, "20\n30\n10\n");
}

#[test]
fn csv_sorts_by_named_field() {
    let wishlist = wishlist_from(json!({
        "10": {"name": "Zulu"},
        "20": {"name": "Alpha"},
    }));
    let options = CsvOptions {
        sort: Some("name".to_string()),
        ..CsvOptions::default()
    };
    let out = render_csv(&wishlist, None, &options);
    assert_eq!(out, "20\n10\n");
}

#[test]
fn csv_reverse_inverts_order() {
    let wishlist = wishlist_from(json!({
        "10": {"added": 100},
        "20": {"added": 200},
    }));
    let options = CsvOptions {
        reverse: true,
        ..CsvOptions::default()
    };
    let out = render_csv(&wishlist, None, &options);
    assert_eq!(out, "20\n10\n");
}

#[test]
fn csv_numeric_mode_and_digit_strings_agree() {
    let wishlist = wishlist_from(json!({
        "10": {"rank": "9"},
        "20": {"rank": "10"},
        "30": {"rank": "2"},
    }));
    let natural = CsvOptions {
        sort: Some("rank".to_string()),
        ..CsvOptions::default()
    };
    let numeric = CsvOptions {
        numeric: true,
        ..natural.clone()
    };
    let out_natural = render_csv(&wishlist, None, &natural);
    let out_numeric = render_csv(&wishlist, None, &numeric);
    assert_eq!(out_natural, "30\n10\n20\n");
    assert_eq!(out_natural, out_numeric);
}

#[test]
fn csv_sorts_gameids_numerically_when_requested() {
    let wishlist = wishlist_from(json!({
        "1000": {},
        "200": {},
        "30": {},
    }));
    let options = CsvOptions {
        sort: Some("gameid".to_string()),
        ..CsvOptions::default()
    };
    let out = render_csv(&wishlist, None, &options);
    assert_eq!(out, "30\n200\n1000\n");
}

#[test]
fn csv_numeric_keys_order_before_text_keys() {
    let wishlist = wishlist_from(json!({
        "10": {"release_string": "Coming soon"},
        "20": {"release_string": "2024"},
    }));
    let options = CsvOptions {
        sort: Some("release_string".to_string()),
        ..CsvOptions::default()
    };
    let out = render_csv(&wishlist, None, &options);
    assert_eq!(out, "20\n10\n");
}

#[test]
fn csv_ties_keep_wishlist_order() {
    let wishlist = wishlist_from(json!({
        "30": {"added": 100},
        "10": {"added": 100},
        "20": {"added": 100},
    }));
    let out = render_csv(&wishlist, None, &CsvOptions::default());
    assert_eq!(out, "30\n10\n20\n");
}
