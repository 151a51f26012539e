use crate::Model;
use yew::prelude::*;

pub fn render_toast(model: &Model) -> Html {
    if let Some(notice) = &model.view.toast {
        let (severity, icon) = if notice.is_success {
            ("toast-success", "fa-circle-check")
        } else {
            ("toast-failure", "fa-circle-exclamation")
        };
        html! {
            <div id="toast" class={classes!("toast", "visible", severity)} role="status">
                <i class={classes!("fa-solid", icon)}></i>
                <p>{ &notice.message }</p>
            </div>
        }
    } else {
        html! {}
    }
}
