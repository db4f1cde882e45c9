//! Formatter tests: parameter interpolation and the pluralization pass

use phrasebook::{args, table, EnglishPluralizer, Pluralize, TranslationTable, Translator};

fn translator_with(table: TranslationTable) -> Translator {
    let mut translator = Translator::new();
    translator.add_language("en", table);
    translator.set_language("en");
    translator
}

#[test]
fn test_parameter_substitution() {
    let translator = translator_with(table! { "greeting" => "Hello, {{name}}!" });

    let text = translator.translate("greeting", Some(&args! { "name" => "John" }), None);
    assert_eq!(text, "Hello, John!");
}

#[test]
fn test_parameter_replaces_all_occurrences() {
    let translator = translator_with(table! { "echo" => "{{word}} {{word}} {{word}}" });

    let text = translator.translate("echo", Some(&args! { "word" => "ho" }), None);
    assert_eq!(text, "ho ho ho");
}

#[test]
fn test_unmatched_placeholder_stays_literal() {
    let translator = translator_with(table! { "partial" => "Hi {{x}}" });

    assert_eq!(translator.t("partial"), "Hi {{x}}");
    let text = translator.translate("partial", Some(&args! { "y" => "?" }), None);
    assert_eq!(text, "Hi {{x}}");
}

#[test]
fn test_numeric_values_are_coerced() {
    let translator = translator_with(table! { "count" => "{{n}} of {{total}} ({{ratio}})" });

    let params = args! { "n" => 3, "total" => 10i64, "ratio" => 0.3 };
    let text = translator.translate("count", Some(&params), None);
    assert_eq!(text, "3 of 10 (0.3)");
}

#[test]
fn test_params_apply_in_insertion_order() {
    let translator = translator_with(table! { "chained" => "{{a}}" });

    // The first value contains the second placeholder, so it is substituted
    // by the later parameter; the reverse insertion order leaves it literal.
    let forward = args! { "a" => "{{b}}", "b" => "X" };
    assert_eq!(translator.translate("chained", Some(&forward), None), "X");

    let reverse = args! { "b" => "X", "a" => "{{b}}" };
    assert_eq!(
        translator.translate("chained", Some(&reverse), None),
        "{{b}}"
    );
}

#[test]
fn test_set_updates_value_in_place() {
    let mut params = args! { "a" => "1", "b" => "2" };
    params.set("a", "3");

    let collected: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(
        collected,
        vec![("a".into(), "3".into()), ("b".into(), "2".into())]
    );
}

#[test]
fn test_count_triggers_pluralization_of_whole_template() {
    let translator = translator_with(table! {
        "fruit" => "apple",
        "phrase" => "ripe apple",
    });

    assert_eq!(translator.translate("fruit", None, Some(2)), "apples");
    // The whole resolved phrase goes through word rules, verbatim behavior.
    assert_eq!(translator.translate("phrase", None, Some(2)), "ripe apples");
}

#[test]
fn test_count_of_one_keeps_singular() {
    let translator = translator_with(table! { "fruit" => "apple" });

    assert_eq!(translator.translate("fruit", None, Some(1)), "apple");
}

#[test]
fn test_count_applies_before_interpolation() {
    let translator = translator_with(table! { "item" => "box" });

    let text = translator.translate("item", Some(&args! { "n" => 4 }), Some(4));
    assert_eq!(text, "boxes");
}

#[test]
fn test_english_pluralizer_rules() {
    let p = EnglishPluralizer;

    assert_eq!(p.pluralize("apple", 2, false), "apples");
    assert_eq!(p.pluralize("box", 2, false), "boxes");
    assert_eq!(p.pluralize("match", 2, false), "matches");
    assert_eq!(p.pluralize("city", 2, false), "cities");
    assert_eq!(p.pluralize("day", 2, false), "days");
    assert_eq!(p.pluralize("knife", 2, false), "knives");
    assert_eq!(p.pluralize("leaf", 2, false), "leaves");
    assert_eq!(p.pluralize("child", 2, false), "children");
    assert_eq!(p.pluralize("Child", 2, false), "Children");
    assert_eq!(p.pluralize("sheep", 2, false), "sheep");
    assert_eq!(p.pluralize("child", 1, false), "child");
    assert_eq!(p.pluralize("apple", 0, false), "apples");
}

#[test]
fn test_inclusive_pluralization_prefixes_count() {
    let p = EnglishPluralizer;

    assert_eq!(p.pluralize("apple", 3, true), "3 apples");
    assert_eq!(p.pluralize("apple", 1, true), "1 apple");
    assert_eq!(p.pluralize("sheep", 0, true), "0 sheep");
}

#[test]
fn test_custom_pluralizer_is_injectable() {
    struct Shouting;

    impl Pluralize for Shouting {
        fn pluralize(&self, word: &str, count: i64, _inclusive: bool) -> String {
            if count == 1 {
                word.to_string()
            } else {
                format!("{}!!!", word.to_uppercase())
            }
        }
    }

    let translator = translator_with(table! { "fruit" => "apple" }).with_pluralizer(Shouting);
    assert_eq!(translator.translate("fruit", None, Some(2)), "APPLE!!!");
}

#[test]
fn test_tables_deserialize_from_json() {
    let table: TranslationTable = serde_json::from_value(serde_json::json!({
        "greeting": "Hello, {{name}}!",
        "menu": {
            "file": "File",
            "deep": { "nested": "value" }
        }
    }))
    .unwrap();

    let translator = translator_with(table);
    assert_eq!(translator.t("menu.deep.nested"), "value");
    let text = translator.translate("greeting", Some(&args! { "name" => "Ana" }), None);
    assert_eq!(text, "Hello, Ana!");
}
