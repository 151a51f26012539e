mod api;
mod camera;
mod canvas;
mod components;
mod config;
mod error;
mod prediction;
mod presenter;
#[cfg(test)]
mod testing;
mod view_state;

use api::HttpPredictionClient;
use camera::browser::BrowserCamera;
use camera::session::CaptureSession;
use components::camera_panel::render_camera_panel;
use components::handlers;
use components::header::render_header;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::theme_toggle::{render_theme_toggle, Theme};
use components::toast::render_toast;
use components::upload_section::render_upload_section;
use config::ClientConfig;
use futures::lock::Mutex;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use prediction::pipeline::PredictionPipeline;
use presenter::{ViewUpdate, YewPresenter};
use std::rc::Rc;
use view_state::ViewState;
use yew::prelude::*;

type Session = CaptureSession<BrowserCamera, YewPresenter>;
type Pipeline = PredictionPipeline<HttpPredictionClient, YewPresenter>;

// Yew msg components
enum Msg {
    // Camera operations
    ToggleCamera,
    SwitchCamera,
    Capture,

    // Upload
    FileSelected(GlooFile),

    // UI states
    Present(ViewUpdate),
    HideToast,
    ToggleTheme,
}

// Main component
struct Model {
    config: ClientConfig,
    // Camera operations queue on this lock and run one at a time.
    session: Rc<Mutex<Session>>,
    pipeline: Rc<Pipeline>,
    view: ViewState,
    video_ref: NodeRef,
    canvas_ref: NodeRef,
    theme: Theme,
    toast_timeout: Option<Timeout>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ClientConfig::load();
        log::info!(
            "Predictions go to {} (upload limit {} bytes)",
            config.predict_endpoint,
            config.upload.max_bytes
        );

        let presenter = YewPresenter::new(ctx.link().clone());
        let video_ref = NodeRef::default();
        let canvas_ref = NodeRef::default();

        let session = CaptureSession::new(
            BrowserCamera::new(video_ref.clone(), canvas_ref.clone()),
            presenter.clone(),
            config.default_facing,
            config.ideal_width,
            config.ideal_height,
        );
        let pipeline = PredictionPipeline::new(
            HttpPredictionClient::new(config.predict_endpoint.clone()),
            presenter,
            config.upload.clone(),
            config.clean_classes.clone(),
        );

        let theme = Theme::load();
        theme.apply();

        Self {
            config,
            session: Rc::new(Mutex::new(session)),
            pipeline: Rc::new(pipeline),
            view: ViewState::default(),
            video_ref,
            canvas_ref,
            theme,
            toast_timeout: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.config.autostart_camera {
            ctx.link().send_message(Msg::ToggleCamera);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Camera operations
            Msg::ToggleCamera => handlers::handle_toggle_camera(self),
            Msg::SwitchCamera => handlers::handle_switch_camera(self),
            Msg::Capture => handlers::handle_capture(self),

            // Upload
            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),

            // UI states
            Msg::Present(update) => handlers::handle_present(self, ctx, update),
            Msg::HideToast => handlers::handle_hide_toast(self),
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                <div class="top-right">
                    { render_theme_toggle(self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                    { render_camera_panel(self, ctx) }
                    { render_upload_section(ctx) }
                    { render_preview_area(self) }
                    { render_results(self) }
                </main>

                { render_toast(self) }

                <footer class="app-footer">
                    <p>{"Milk Scan | Rust WASM client"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
