use crate::components::upload_section::describe_file;
use crate::presenter::ViewUpdate;
use crate::prediction::upload::BrowserUpload;
use crate::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_toggle_camera(model: &mut Model) -> bool {
    let session = model.session.clone();
    spawn_local(async move {
        session.lock().await.toggle_camera().await;
    });
    false
}

pub fn handle_switch_camera(model: &mut Model) -> bool {
    let session = model.session.clone();
    spawn_local(async move {
        session.lock().await.switch_camera().await;
    });
    false
}

pub fn handle_capture(model: &mut Model) -> bool {
    let session = model.session.clone();
    let pipeline = model.pipeline.clone();
    spawn_local(async move {
        // The session lock is released before the request goes out.
        let frame = session.lock().await.grab_frame();
        pipeline.submit_frame(frame).await;
    });
    false
}

pub fn handle_file_selected(model: &mut Model, file: GlooFile) -> bool {
    log::info!("Upload selected: {}", describe_file(&file));
    let upload = BrowserUpload::new(file, model.canvas_ref.clone());
    let pipeline = model.pipeline.clone();
    spawn_local(async move {
        pipeline.submit_upload(&upload).await;
    });
    false
}

pub fn handle_present(model: &mut Model, ctx: &Context<Model>, update: ViewUpdate) -> bool {
    let is_notice = matches!(update, ViewUpdate::Notify(_));
    model.view.apply(update);

    if is_notice {
        if let Some(timeout) = model.toast_timeout.take() {
            timeout.cancel();
        }
        let link = ctx.link().clone();
        model.toast_timeout = Some(Timeout::new(model.config.toast_millis, move || {
            link.send_message(Msg::HideToast);
        }));
    }

    true
}

pub fn handle_hide_toast(model: &mut Model) -> bool {
    model.view.hide_toast();
    model.toast_timeout = None;
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = model.theme.toggled();
    model.theme.apply();
    model.theme.store();
    true
}
