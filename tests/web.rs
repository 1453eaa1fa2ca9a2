#![cfg(target_arch = "wasm32")]

use frontend::{App, AppConfig, MountError};
use leptos::{mount::mount_to, prelude::*};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn test_wrapper() -> HtmlElement {
    let document = document();
    let wrapper = document.create_element("section").unwrap();
    _ = document.body().unwrap().append_child(&wrapper);
    wrapper.unchecked_into()
}

fn config() -> AppConfig {
    AppConfig::builder().devtools(false).build()
}

fn button(wrapper: &HtmlElement) -> HtmlElement {
    wrapper
        .query_selector("button")
        .unwrap()
        .unwrap()
        .unchecked_into()
}

#[wasm_bindgen_test]
fn renders_heading_and_zero() {
    let wrapper = test_wrapper();
    let _handle = mount_to(wrapper.clone(), || view! { <App config=config()/> });

    assert_eq!(wrapper.query_selector_all("div").unwrap().length(), 1);
    assert_eq!(wrapper.query_selector_all("h1").unwrap().length(), 1);
    assert_eq!(wrapper.query_selector_all("button").unwrap().length(), 1);
    assert_eq!(
        wrapper.query_selector("h1").unwrap().unwrap().text_content(),
        Some(AppConfig::default().title)
    );
    assert_eq!(button(&wrapper).text_content(), Some("count: 0".to_string()));
}

#[wasm_bindgen_test]
fn clicks_increment() {
    let wrapper = test_wrapper();
    let _handle = mount_to(wrapper.clone(), || view! { <App config=config()/> });
    let button = button(&wrapper);

    button.click();
    assert_eq!(button.text_content(), Some("count: 1".to_string()));

    for _ in 0..4 {
        button.click();
    }
    assert_eq!(button.text_content(), Some("count: 5".to_string()));
}

#[wasm_bindgen_test]
fn remount_starts_over() {
    let wrapper = test_wrapper();
    let handle = mount_to(wrapper.clone(), || view! { <App config=config()/> });
    button(&wrapper).click();
    button(&wrapper).click();
    assert_eq!(
        button(&wrapper).text_content(),
        Some("count: 2".to_string())
    );

    drop(handle);
    assert!(wrapper.query_selector("button").unwrap().is_none());

    let _handle = mount_to(wrapper.clone(), || view! { <App config=config()/> });
    assert_eq!(
        button(&wrapper).text_content(),
        Some("count: 0".to_string())
    );
}

#[wasm_bindgen_test]
fn devtools_render_when_enabled() {
    let wrapper = test_wrapper();
    let config = AppConfig::builder().devtools(true).build();
    let _handle = mount_to(wrapper.clone(), move || view! { <App config/> });

    let router = wrapper
        .query_selector("[data-devtools=router]")
        .unwrap()
        .unwrap();
    assert!(router.text_content().unwrap().starts_with("route: /"));
    let query = wrapper
        .query_selector("[data-devtools=query]")
        .unwrap()
        .unwrap();
    assert_eq!(query.text_content(), Some("queries: 0".to_string()));
}

#[wasm_bindgen_test]
fn mount_without_root_fails() {
    let config = AppConfig::builder().root_id("no-such-element").build();
    assert_eq!(
        frontend::mount(config),
        Err(MountError::MissingRoot {
            id: "no-such-element".to_string()
        })
    );
}
