use crate::Model;
use crate::prediction::PredictionView;
use crate::view_state::{ResultText, LOADING_TEXT};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let view = &model.view;
    html! {
        <div id="result" class={classes!("results-container", view.verdict_class())}>
            {
                match &view.result {
                    ResultText::Idle => html! {
                        <p class="no-results-message">{"Capture or upload a sample to analyse it."}</p>
                    },
                    ResultText::Loading => html! {
                        <p id="predictionText"><i class="fa-solid fa-spinner fa-spin"></i>{ format!(" {}", LOADING_TEXT) }</p>
                    },
                    ResultText::Prediction(prediction) => render_prediction(prediction),
                    ResultText::Failed(message) => html! {
                        <p id="predictionText" class="prediction-failed">{ message }</p>
                    },
                }
            }
        </div>
    }
}

fn render_prediction(prediction: &PredictionView) -> Html {
    let verdict = prediction.verdict.css_class();
    html! {
        <>
            <div class="result-header">
                <p id="predictionText" class={classes!("prediction-text", verdict)}>
                    {"Predicted Class: "}<strong>{ &prediction.predicted_class }</strong>
                    <br />
                    {"Confidence: "}<strong>{ prediction.confidence_label() }</strong>
                </p>
                <div class="confidence-meter">
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", prediction.confidence.clamp(0.0, 100.0))}></div>
                    </div>
                </div>
            </div>
            <img
                id="croppedImage"
                src={prediction.cropped_image.to_string()}
                alt={format!("Cropped sample classified as {}", prediction.predicted_class)}
            />
        </>
    }
}
