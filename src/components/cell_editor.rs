use leptos::prelude::*;
use wasm_bindgen::JsCast;
use crate::app::{TableCtx, FONT};

#[component]
pub fn CellEditor(initial: String) -> impl IntoView {
    let ctx = use_context::<TableCtx>().unwrap();

    let on_blur = move |ev: web_sys::FocusEvent| {
        if let Some(target) = ev.target() {
            if let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() {
                ctx.commit_edit(&input.value());
            }
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" => {
                if let Some(target) = ev.target() {
                    if let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() {
                        ctx.commit_edit(&input.value());
                    }
                }
            }
            "Escape" => ctx.cancel_edit(),
            _ => {}
        }
    };

    view! {
        <input
            type="text"
            value=initial
            autofocus=true
            style=format!(
                "width: 100%; box-sizing: border-box; background: #020202; color: #ccffdd; \
                 border: 1px solid #aaffbb; outline: none; font-family: {}; font-size: 13px; \
                 padding: 2px 4px; text-shadow: 0 0 6px #aaffbb;",
                FONT
            )
            on:blur=on_blur
            on:keydown=on_keydown
        />
    }
}
