use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-flask"></i> {" Milk Adulteration Scanner"}</h1>
            <p class="subtitle">{"Point the camera at a sample or upload a photo"}</p>
        </header>
    }
}
