//! Combobox Demo
//!
//! Drives two comboboxes through a scripted interaction and prints the view
//! snapshot after each step:
//! - A country picker declared in TOML (pass a settings file path to use your own)
//! - A fruit picker with typeahead and custom values
//!
//! Run with: RUST_LOG=weft_cn=debug cargo run -p weft_cn --example combobox_demo

use std::sync::Arc;

use weft_cn::prelude::*;
use weft_core::Result;

const COUNTRIES: &str = r#"
placeholder = "Search countries..."
title_text = "Country"
helper_text = "Where do you live?"
selected = "uk"

[[option]]
value = "us"
label = "United States"

[[option]]
value = "uk"
label = "United Kingdom"

[[option]]
value = "de"
label = "Germany"
disabled = true

[[option]]
value = "fr"
label = "France"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => ComboboxSettings::load(path)?,
        None => ComboboxSettings::from_toml_str(COUNTRIES)?,
    };

    let registry = Arc::new(MenuRegistry::new());

    let country = ComboboxBuilder::<ComboboxOption>::from_settings(&settings)?
        .registry(Arc::clone(&registry))
        .on_change(|event| {
            let value = event.selected_item.as_ref().map(|o| o.value.as_str());
            println!("  -> country changed: {:?} ({:?})", value, event.input_value);
        })
        .build();

    let fruit = cn::combobox_with(vec!["Apple", "Application", "Apricot", "Banana"])
        .placeholder("Pick a fruit")
        .typeahead(true)
        .allow_custom_value(true)
        .registry(Arc::clone(&registry))
        .on_change(|event| println!("  -> fruit changed: {:?}", event))
        .on_input_change(|text| println!("  -> fruit input: {text:?}"))
        .build();

    step("country: focus", &country, |c| c.focus());
    step("country: type \"fr\"", &country, |c| c.type_text("fr"));
    step("country: Enter", &country, |c| {
        c.key_down(KeyEvent::new(key_codes::ENTER));
    });

    step("fruit: focus (closes country)", &fruit, |c| c.focus());
    println!("  country open: {}", country.is_open());
    step("fruit: type \"APp\"", &fruit, |c| c.type_text("APp"));
    step("fruit: Tab", &fruit, |c| {
        c.key_down(KeyEvent::new(key_codes::TAB));
    });
    step("fruit: type \"Kiwi\" + Enter", &fruit, |c| {
        c.focus();
        c.click_clear();
        c.type_text("Kiwi");
        c.key_down(KeyEvent::new(key_codes::ENTER));
    });

    Ok(())
}

fn step<T: ComboboxItem>(title: &str, combobox: &Combobox<T>, action: impl FnOnce(&Combobox<T>)) {
    println!("{title}");
    action(combobox);
    print_view(&combobox.view());
}

fn print_view(view: &ComboboxView) {
    let marker = if view.is_open { "v" } else { ">" };
    let suggestion = view.suggestion.as_deref().unwrap_or("");
    println!("  [{marker}] {:?} (suggest: {suggestion:?})", view.input_value);
    for option in &view.options {
        let cursor = if option.highlighted { '*' } else { ' ' };
        let state = match (option.selected, option.disabled) {
            (true, _) => " (selected)",
            (_, true) => " (disabled)",
            _ => "",
        };
        println!("   {cursor} {}{state}", option.label);
    }
    match &view.validation {
        Validation::Invalid(text) => println!("  ! {text}"),
        Validation::Warn(text) => println!("  ~ {text}"),
        Validation::None => {}
    }
}
