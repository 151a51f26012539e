use super::utils::debounce;
use crate::presenter::CameraStatus;
use crate::{Model, Msg};
use yew::prelude::*;

pub fn render_camera_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let view = &model.view;
    let active = view.camera_active();
    let starting = matches!(view.camera, CameraStatus::Starting(_));

    html! {
        <section class="camera-section">
            <div class="camera-frame">
                <video
                    id="camera"
                    ref={model.video_ref.clone()}
                    class={classes!("camera-feed", (!active).then_some("camera-off"))}
                ></video>
                { render_camera_status(view.camera) }
            </div>
            <canvas id="canvas" ref={model.canvas_ref.clone()} style="display: none;"></canvas>

            <div class="button-container">
                <button
                    id="toggle-camera-btn"
                    class="analyze-btn"
                    disabled={starting}
                    onclick={debounce(250, {
                        let link = link.clone();
                        move || link.send_message(Msg::ToggleCamera)
                    })}
                >
                    if active {
                        <i class="fa-solid fa-video-slash"></i>{" Stop Camera"}
                    } else {
                        <i class="fa-solid fa-video"></i>{" Start Camera"}
                    }
                </button>
                <button
                    id="switch-camera-btn"
                    class="analyze-btn"
                    disabled={!view.switch_enabled}
                    onclick={debounce(250, {
                        let link = link.clone();
                        move || link.send_message(Msg::SwitchCamera)
                    })}
                >
                    <i class="fa-solid fa-camera-rotate"></i>{" Switch Camera"}
                </button>
                <button
                    id="capture-btn"
                    class="analyze-btn"
                    style="background-color: var(--primary-color);"
                    disabled={!view.capture_enabled}
                    onclick={debounce(250, {
                        let link = link.clone();
                        move || link.send_message(Msg::Capture)
                    })}
                >
                    if view.capture_enabled {
                        <i class="fa-solid fa-camera"></i>{" Capture"}
                    } else {
                        <i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}
                    }
                </button>
            </div>
        </section>
    }
}

fn render_camera_status(status: CameraStatus) -> Html {
    match status {
        CameraStatus::Active(facing) => html! {
            <span class="camera-badge">{ format!("{} camera", facing.label()) }</span>
        },
        CameraStatus::Starting(_) => html! {
            <div class="camera-placeholder">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Starting camera..."}</p>
            </div>
        },
        CameraStatus::Stopped => html! {
            <div class="camera-placeholder">
                <p>{"Camera is off"}</p>
            </div>
        },
    }
}
