use crate::Model;
use yew::prelude::*;

pub fn render_preview_area(model: &Model) -> Html {
    html! {
        <div id="preview-container">
            {
                match &model.view.preview {
                    Some(image) => html! {
                        <img id="imagePreview" src={image.to_string()} alt="Submitted sample" />
                    },
                    None => html! {
                        <div class="select-preview">
                            <p>{"The analysed image will appear here"}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}
