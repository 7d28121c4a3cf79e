//! Interaction scenarios driven through the public controller API

use std::sync::{Arc, Mutex, OnceLock, Weak};

use weft_core::events::{key_codes, KeyEvent, KeyOutcome};
use weft_core::menu_state::MenuRegistry;

use super::*;
use crate::config::ComboboxSettings;

#[derive(Clone, Debug, PartialEq)]
struct Fruit {
    id: u32,
    name: &'static str,
}

impl ComboboxItem for Fruit {
    fn item_to_string(&self) -> String {
        self.name.to_string()
    }
}

fn fruits() -> Vec<Fruit> {
    vec![
        Fruit { id: 1, name: "Apple" },
        Fruit { id: 2, name: "Banana" },
        Fruit { id: 3, name: "Cherry" },
    ]
}

fn registry() -> Arc<MenuRegistry> {
    Arc::new(MenuRegistry::new())
}

fn key(key_code: u32) -> KeyEvent {
    KeyEvent::new(key_code)
}

type Changes<T> = Arc<Mutex<Vec<ChangeEvent<T>>>>;
type Inputs = Arc<Mutex<Vec<String>>>;

/// Builder over `items` recording every change notification
fn recorded<T: ComboboxItem>(
    items: Vec<T>,
    registry: &Arc<MenuRegistry>,
) -> (ComboboxBuilder<T>, Changes<T>) {
    let changes: Changes<T> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let builder = combobox_with(items)
        .registry(Arc::clone(registry))
        .on_change(move |event| sink.lock().unwrap().push(event.clone()));
    (builder, changes)
}

fn count<T>(changes: &Changes<T>) -> usize {
    changes.lock().unwrap().len()
}

fn last<T: Clone>(changes: &Changes<T>) -> ChangeEvent<T> {
    changes.lock().unwrap().last().cloned().unwrap()
}

fn five_options(registry: &Arc<MenuRegistry>) -> (Combobox<ComboboxOption>, Changes<ComboboxOption>) {
    let changes: Changes<ComboboxOption> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let cb = combobox()
        .option("0", "Item 0")
        .option("1", "Item 1")
        .option_disabled("2", "Item 2")
        .option("3", "Item 3")
        .option("4", "Item 4")
        .registry(Arc::clone(registry))
        .on_change(move |event| sink.lock().unwrap().push(event.clone()))
        .build();
    (cb, changes)
}

// =============================================================================
// Filtering & highlight
// =============================================================================

#[test]
fn test_no_match_has_no_candidates_or_highlight() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    cb.type_text("xyz");

    assert!(cb.is_open());
    assert!(cb.candidates().is_empty());
    assert_eq!(cb.highlighted_index(), None);
    assert!(cb.view().options.is_empty());
}

#[test]
fn test_typing_highlights_first_candidate() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    cb.type_text("an");

    let view = cb.view();
    assert_eq!(view.options.len(), 1);
    assert_eq!(view.options[0].label, "Banana");
    assert_eq!(view.options[0].item_index, 1);
    assert_eq!(view.highlighted_position(), Some(0));
}

#[test]
fn test_custom_filter_drives_candidates() {
    let r = registry();
    let items = vec!["Apple", "Pineapple", "Apricot"];
    let (builder, changes) = recorded(items, &r);
    let cb = builder
        .should_filter_item(|item: &&'static str, query: &str| item.starts_with(query))
        .build();

    cb.focus();
    cb.type_text("Ap");
    let labels: Vec<String> = cb.candidates().into_iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Apple", "Apricot"]);

    assert!(cb.click_option(1));
    assert_eq!(cb.selected_item(), Some("Apricot"));
    assert_eq!(last(&changes).selected_item, Some("Apricot"));
}

#[test]
fn test_home_end_and_arrows() {
    let r = registry();
    let (cb, _) = five_options(&r);

    assert_eq!(cb.key_down(key(key_codes::ARROW_DOWN)), KeyOutcome::Handled);
    assert!(cb.is_open());
    assert_eq!(cb.highlighted_index(), Some(0));

    cb.key_down(key(key_codes::ARROW_DOWN));
    cb.key_down(key(key_codes::ARROW_DOWN));
    // Disabled Item 2 is skipped
    assert_eq!(cb.highlighted_index(), Some(3));

    cb.key_down(key(key_codes::END));
    assert_eq!(cb.highlighted_index(), Some(4));
    cb.key_down(key(key_codes::ARROW_DOWN));
    assert_eq!(cb.highlighted_index(), Some(0));
    cb.key_down(key(key_codes::ARROW_UP));
    assert_eq!(cb.highlighted_index(), Some(4));
    cb.key_down(key(key_codes::HOME));
    assert_eq!(cb.highlighted_index(), Some(0));
}

// =============================================================================
// Commit
// =============================================================================

#[test]
fn test_enter_commits_highlighted_item() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    cb.type_text("an");
    assert_eq!(cb.key_down(key(key_codes::ENTER)), KeyOutcome::Handled);

    assert!(!cb.is_open());
    assert_eq!(cb.input_value(), "Banana");
    let event = last(&changes);
    assert_eq!(event.selected_item, Some(Fruit { id: 2, name: "Banana" }));
    assert_eq!(event.input_value, "Banana");
}

#[test]
fn test_reselecting_does_not_fire() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    assert!(cb.click_option(1));
    assert_eq!(count(&changes), 1);

    cb.click_toggle();
    assert!(cb.click_option(1));
    assert_eq!(count(&changes), 1);

    // Enter on the highlighted selection
    cb.click_toggle();
    assert_eq!(cb.highlighted_index(), Some(1));
    cb.key_down(key(key_codes::ENTER));
    assert_eq!(count(&changes), 1);
    assert_eq!(cb.input_value(), "Banana");
}

#[test]
fn test_item_equals_decides_identity() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder
        .item_equals(|a: &Fruit, b: &Fruit| a.id == b.id)
        .selected_item(Some(Fruit { id: 2, name: "Banana (old)" }))
        .build();
    assert_eq!(cb.input_value(), "Banana (old)");

    cb.focus();
    assert_eq!(cb.highlighted_index(), Some(1));
    cb.click_option(1);
    assert_eq!(count(&changes), 0);
}

#[test]
fn test_selected_item_is_a_caller_item() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.build();
    assert_eq!(cb.selected_item(), None);

    cb.focus();
    cb.click_option(2);
    let selected = cb.selected_item().unwrap();
    assert!(fruits().contains(&selected));

    cb.click_clear();
    assert_eq!(cb.selected_item(), None);
}

#[test]
fn test_disabled_item_cannot_be_committed() {
    let r = registry();
    let (cb, changes) = five_options(&r);

    cb.focus();
    assert!(!cb.click_option(2));
    assert!(cb.is_open());

    cb.type_text("Item 2");
    assert_eq!(cb.candidates().len(), 1);
    assert_eq!(cb.highlighted_index(), None);
    cb.key_down(key(key_codes::ENTER));

    assert!(cb.is_open());
    assert_eq!(count(&changes), 0);
    assert_eq!(cb.selected_item(), None);
}

#[test]
fn test_out_of_range_click_is_ignored() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    assert!(!cb.click_option(7));
    assert!(cb.is_open());
    assert_eq!(count(&changes), 0);
}

#[test]
fn test_enter_without_match_is_noop() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    cb.type_text("Kiwi");
    cb.key_down(key(key_codes::ENTER));

    assert!(cb.is_open());
    assert_eq!(cb.input_value(), "Kiwi");
    assert_eq!(count(&changes), 0);
}

#[test]
fn test_custom_value_commit() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.allow_custom_value(true).build();

    cb.focus();
    cb.type_text("Kiwi");
    cb.key_down(key(key_codes::ENTER));

    assert!(!cb.is_open());
    assert_eq!(cb.custom_value().as_deref(), Some("Kiwi"));
    let event = last(&changes);
    assert_eq!(event.selected_item, None);
    assert_eq!(event.input_value, "Kiwi");

    // Same free text again
    cb.click_toggle();
    cb.key_down(key(key_codes::ENTER));
    assert_eq!(count(&changes), 1);

    // Picking an item after free text notifies
    cb.click_toggle();
    cb.click_option(0);
    assert_eq!(count(&changes), 2);
    assert_eq!(cb.custom_value(), None);
}

// =============================================================================
// Blur, Escape & toggle
// =============================================================================

#[test]
fn test_blur_reverts_without_custom_values() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    cb.type_text("zzz");
    cb.blur();

    assert!(!cb.is_open());
    assert_eq!(cb.input_value(), "");
    assert_eq!(count(&changes), 0);
}

#[test]
fn test_blur_retains_with_custom_values() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.allow_custom_value(true).build();

    cb.focus();
    cb.type_text("zzz");
    cb.blur();

    assert_eq!(cb.input_value(), "zzz");
    assert_eq!(cb.selected_item(), None);
    assert_eq!(count(&changes), 0);
}

#[test]
fn test_blur_reverts_to_selection_label() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.initial_selected_item(fruits()[0].clone()).build();

    cb.focus();
    cb.set_input_value("Ban");
    cb.blur();
    assert_eq!(cb.input_value(), "Apple");
    assert_eq!(cb.selected_item(), Some(fruits()[0].clone()));
}

#[test]
fn test_toggle_close_clears_unmatched_query() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.click_toggle();
    assert!(cb.is_open());
    cb.type_text("zzz");
    cb.click_toggle();

    assert!(!cb.is_open());
    assert_eq!(cb.input_value(), "");
}

#[test]
fn test_escape_closes_and_reverts() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    cb.type_text("zz");
    assert_eq!(cb.key_down(key(key_codes::ESCAPE)), KeyOutcome::Handled);
    assert!(!cb.is_open());
    assert_eq!(cb.input_value(), "");
    assert_eq!(cb.key_down(key(key_codes::ESCAPE)), KeyOutcome::Ignored);
}

#[test]
fn test_click_input_reopens_after_commit() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.build();

    cb.focus();
    cb.type_text("an");
    cb.key_down(key(key_codes::ENTER));
    assert!(!cb.is_open());
    assert!(cb.is_focused());
    assert_eq!(count(&changes), 1);

    cb.click_input();
    assert!(cb.is_open());
    let view = cb.view();
    assert_eq!(view.options.len(), 3);
    assert_eq!(view.highlighted_position(), Some(1));
    assert!(view.options[1].selected);

    // Clicking the open input keeps it open
    cb.click_input();
    assert!(cb.is_open());
}

#[test]
fn test_click_input_ignored_when_disabled() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.disabled(true).build();

    cb.click_input();
    assert!(!cb.is_open());

    cb.set_disabled(false);
    cb.click_input();
    assert!(cb.is_open());
    assert_eq!(r.current(), Some(cb.menu_id()));
}

#[test]
fn test_alt_arrows() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.initial_selected_item(fruits()[1].clone()).build();

    cb.key_down(KeyEvent::alt(key_codes::ARROW_DOWN));
    assert!(cb.is_open());
    assert_eq!(cb.highlighted_index(), Some(1));

    cb.key_down(KeyEvent::alt(key_codes::ARROW_UP));
    assert!(!cb.is_open());
    assert_eq!(cb.input_value(), "Banana");
    assert_eq!(cb.selected_item(), Some(fruits()[1].clone()));
}

// =============================================================================
// Clear & external updates
// =============================================================================

#[test]
fn test_clear_fires_once() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.initial_selected_item(fruits()[1].clone()).build();
    assert!(cb.view().show_clear);

    cb.click_clear();

    assert_eq!(count(&changes), 1);
    assert_eq!(
        last(&changes),
        ChangeEvent {
            selected_item: None,
            input_value: String::new(),
        }
    );
    assert_eq!(cb.selected_item(), None);
    assert_eq!(cb.input_value(), "");
    assert!(!cb.view().show_clear);
}

#[test]
fn test_owner_update_while_open_resets_query_and_highlight() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.initial_selected_item(fruits()[0].clone()).build();

    cb.focus();
    cb.type_text("an");
    assert_eq!(cb.candidates().len(), 1);
    assert_eq!(cb.highlighted_index(), Some(0));

    cb.set_selected_item(None);

    assert_eq!(cb.input_value(), "");
    assert_eq!(count(&changes), 1);
    assert!(cb.is_open());
    assert_eq!(cb.candidates().len(), 3);
    assert_eq!(cb.highlighted_index(), None);
    assert_eq!(r.current(), Some(cb.menu_id()));
}

#[test]
fn test_external_none_clears_once() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.selected_item(Some(fruits()[2].clone())).build();
    assert_eq!(cb.input_value(), "Cherry");

    cb.set_selected_item(None);
    assert_eq!(cb.input_value(), "");
    assert_eq!(count(&changes), 1);

    cb.set_selected_item(None);
    assert_eq!(count(&changes), 1);
}

#[test]
fn test_controlled_echo_does_not_refire() {
    let r = registry();
    let slot: Arc<OnceLock<Weak<Combobox<Fruit>>>> = Arc::new(OnceLock::new());
    let changes: Changes<Fruit> = Arc::new(Mutex::new(Vec::new()));

    let echo_slot = Arc::clone(&slot);
    let sink = Arc::clone(&changes);
    let cb = Arc::new(
        combobox_with(fruits())
            .registry(Arc::clone(&r))
            .selected_item(None)
            .on_change(move |event: &ChangeEvent<Fruit>| {
                sink.lock().unwrap().push(event.clone());
                // Owner feeds the new value straight back in
                if let Some(cb) = echo_slot.get().and_then(Weak::upgrade) {
                    cb.set_selected_item(event.selected_item.clone());
                }
            })
            .build(),
    );
    slot.set(Arc::downgrade(&cb)).unwrap();

    cb.focus();
    cb.click_option(0);
    assert_eq!(count(&changes), 1);
    assert_eq!(cb.input_value(), "Apple");

    cb.set_selected_item(Some(fruits()[1].clone()));
    assert_eq!(count(&changes), 2);
    assert_eq!(cb.input_value(), "Banana");

    cb.click_toggle();
    cb.click_option(2);
    assert_eq!(count(&changes), 3);
    assert_eq!(cb.selected_item(), Some(fruits()[2].clone()));
}

#[test]
fn test_initial_selection_does_not_fire() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.initial_selected_item(fruits()[2].clone()).build();
    assert_eq!(cb.input_value(), "Cherry");
    assert_eq!(count(&changes), 0);

    let (builder, changes) = recorded(vec!["red".to_string(), "green".to_string()], &r);
    let cb = builder.initial_selected_item("green".to_string()).build();
    assert_eq!(cb.input_value(), "green");
    assert_eq!(count(&changes), 0);
}

#[test]
fn test_item_to_string_projector() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder
        .item_to_string(|f: &Fruit| format!("{} #{}", f.name, f.id))
        .build();

    cb.focus();
    cb.type_text("#3");
    cb.key_down(key(key_codes::ENTER));
    assert_eq!(cb.input_value(), "Cherry #3");
    assert_eq!(last(&changes).input_value, "Cherry #3");
}

#[test]
fn test_set_items_replaces_list() {
    let r = registry();
    let (builder, _) = recorded(vec!["Red", "Green"], &r);
    let cb = builder.build();

    cb.focus();
    cb.type_text("bl");
    assert!(cb.candidates().is_empty());

    cb.set_items(vec!["Red", "Green", "Blue"]);
    assert_eq!(cb.candidates().len(), 1);
    assert_eq!(cb.items().len(), 3);
}

// =============================================================================
// Disabled & read-only
// =============================================================================

#[test]
fn test_disabled_ignores_input() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.disabled(true).build();

    cb.focus();
    cb.type_text("a");
    cb.click_toggle();
    assert_eq!(cb.key_down(key(key_codes::ARROW_DOWN)), KeyOutcome::Ignored);

    assert!(!cb.is_open());
    assert_eq!(cb.input_value(), "");
    assert_eq!(count(&changes), 0);
    assert!(cb.view().disabled);
}

#[test]
fn test_read_only_ignores_input_but_accepts_owner_updates() {
    let r = registry();
    let (builder, changes) = recorded(fruits(), &r);
    let cb = builder.read_only(true).build();

    cb.focus();
    cb.type_text("a");
    cb.click_clear();
    assert!(!cb.is_open());
    assert_eq!(cb.input_value(), "");

    cb.set_selected_item(Some(fruits()[0].clone()));
    assert_eq!(cb.input_value(), "Apple");
    assert_eq!(count(&changes), 1);
    assert!(!cb.view().show_clear);
}

// =============================================================================
// Typeahead
// =============================================================================

#[test]
fn test_typeahead_tab_completes_first_match() {
    let r = registry();
    let (builder, changes) = recorded(vec!["Apple", "Application", "Apricot"], &r);
    let inputs: Inputs = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&inputs);
    let cb = builder
        .typeahead(true)
        .on_input_change(move |text| sink.lock().unwrap().push(text.to_string()))
        .build();

    cb.focus();
    cb.type_text("App");
    assert_eq!(cb.view().suggestion.as_deref(), Some("Apple"));

    assert_eq!(cb.key_down(key(key_codes::TAB)), KeyOutcome::MoveFocus);
    assert_eq!(cb.input_value(), "Apple");
    assert_eq!(cb.selected_item(), None);
    assert_eq!(count(&changes), 0);
    assert!(!cb.is_open());
    assert_eq!(inputs.lock().unwrap().last().map(String::as_str), Some("Apple"));
}

#[test]
fn test_typeahead_uses_item_casing() {
    let r = registry();
    let (builder, _) = recorded(vec!["Apple", "Banana"], &r);
    let cb = builder.typeahead(true).build();

    cb.focus();
    cb.type_text("APpl");
    cb.key_down(key(key_codes::TAB));
    assert_eq!(cb.input_value(), "Apple");
}

#[test]
fn test_typeahead_without_match_does_not_complete() {
    let r = registry();
    let (builder, _) = recorded(vec!["Apple", "Banana"], &r);
    let cb = builder.typeahead(true).allow_custom_value(true).build();

    cb.focus();
    cb.type_text("xyz");
    assert_eq!(cb.view().suggestion, None);
    cb.key_down(key(key_codes::TAB));
    assert_eq!(cb.input_value(), "xyz");
}

#[test]
fn test_backspace_suppresses_next_completion() {
    let r = registry();
    let (builder, _) = recorded(vec!["Apple", "Banana"], &r);
    let cb = builder.typeahead(true).allow_custom_value(true).build();

    cb.focus();
    cb.type_text("Appz");
    cb.key_down(key(key_codes::BACKSPACE));
    assert_eq!(cb.input_value(), "App");
    assert_eq!(cb.view().suggestion, None);
    cb.key_down(key(key_codes::TAB));
    assert_eq!(cb.input_value(), "App");

    // Typing again re-arms completion
    cb.focus();
    cb.type_text("l");
    cb.key_down(key(key_codes::TAB));
    assert_eq!(cb.input_value(), "Apple");
}

#[test]
fn test_input_change_reports_user_edits() {
    let r = registry();
    let inputs: Inputs = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&inputs);
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder
        .on_input_change(move |text| sink.lock().unwrap().push(text.to_string()))
        .build();

    cb.focus();
    cb.type_text("ab");
    cb.key_down(key(key_codes::BACKSPACE));
    cb.click_clear();
    // Owner updates are not user edits
    cb.set_selected_item(Some(fruits()[0].clone()));

    assert_eq!(*inputs.lock().unwrap(), vec!["a", "ab", "a", ""]);
}

// =============================================================================
// Menu registry
// =============================================================================

#[test]
fn test_opening_one_closes_the_other() {
    let r = registry();
    let (a, _) = recorded(fruits(), &r);
    let (b, _) = recorded(fruits(), &r);
    let a = a.build();
    let b = b.build();

    a.focus();
    a.type_text("zz");
    assert!(a.is_open());
    assert_eq!(r.current(), Some(a.menu_id()));

    b.focus();
    assert!(b.is_open());
    assert!(!a.is_open());
    assert!(!a.is_focused());
    assert_eq!(a.input_value(), "");
    assert_eq!(r.current(), Some(b.menu_id()));

    b.blur();
    assert_eq!(r.current(), None);
}

#[test]
fn test_drop_unregisters() {
    let r = registry();
    {
        let (builder, _) = recorded(fruits(), &r);
        let cb = builder.build();
        cb.focus();
        assert_eq!(r.len(), 1);
        assert_eq!(r.current(), Some(cb.menu_id()));
    }
    assert!(r.is_empty());
    assert_eq!(r.current(), None);
}

// =============================================================================
// View & settings
// =============================================================================

#[test]
fn test_view_snapshot() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder
        .placeholder("Pick a fruit")
        .title_text("Fruit")
        .helper_text("Seasonal only")
        .size(ComboboxSize::Small)
        .initial_selected_item(fruits()[1].clone())
        .build();

    let closed = cb.view();
    assert!(!closed.is_open);
    assert!(closed.options.is_empty());
    assert_eq!(closed.placeholder.as_deref(), Some("Pick a fruit"));
    assert_eq!(closed.size, ComboboxSize::Small);
    assert_eq!(closed.height, 32.0);
    assert_eq!(closed.font_size, 13.0);
    assert_eq!(closed.padding, 8.0);

    cb.focus();
    let open = cb.view();
    assert_eq!(open.options.len(), 3);
    assert!(open.options[1].selected);
    assert!(open.options[1].highlighted);
    assert_eq!(open.validation, Validation::None);
}

#[test]
fn test_validation_states() {
    let r = registry();
    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.invalid("Required").warn("Unusual").build();
    assert_eq!(cb.view().validation, Validation::Invalid("Required".into()));

    cb.set_disabled(true);
    assert_eq!(cb.view().validation, Validation::None);

    let (builder, _) = recorded(fruits(), &r);
    let cb = builder.warn("Unusual").read_only(true).build();
    assert_eq!(cb.view().validation, Validation::None);
}

#[test]
fn test_from_settings() {
    let r = registry();
    let settings = ComboboxSettings::from_toml_str(
        r#"
title_text = "Country"
size = "large"
selected = "uk"

[[option]]
value = "us"
label = "United States"

[[option]]
value = "uk"
label = "United Kingdom"
"#,
    )
    .unwrap();

    let cb = ComboboxBuilder::<ComboboxOption>::from_settings(&settings)
        .unwrap()
        .registry(Arc::clone(&r))
        .build();
    assert_eq!(cb.input_value(), "United Kingdom");
    assert_eq!(cb.view().title_text.as_deref(), Some("Country"));
    assert_eq!(cb.view().size, ComboboxSize::Large);
    assert_eq!(cb.items().len(), 2);
}
