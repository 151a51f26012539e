use super::utils::{debounce, first_file};
use crate::{Model, Msg};
use gloo_file::File as GlooFile;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn describe_file(file: &GlooFile) -> String {
    format!("{} ({}, {} bytes)", file.name(), file.raw_mime_type(), file.size())
}

pub fn render_upload_section(ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let selected = input.files().as_ref().and_then(first_file);

        // Allows picking the same file again.
        input.set_value("");

        selected.map(Msg::FileSelected)
    });

    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("upload-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="upload-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <button
                id="upload-button"
                class="analyze-btn"
                onclick={debounce(300, move || trigger_file_input.emit(()))}
            >
                <i class="fa-solid fa-upload"></i> {" Upload Image"}
            </button>
            <p class="file-types">{"JPG, PNG, WEBP or GIF, up to 1 MiB"}</p>
        </div>
    }
}
