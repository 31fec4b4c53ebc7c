use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::forms::panel::{PanelView, SuccessBehavior};
use crate::forms::revert::{schedule_revert, TimeoutScheduler};
use crate::forms::submission::{Submission, WebhookTransport};
use crate::forms::template::{FormField, FormTemplate};

#[derive(Properties, PartialEq)]
pub struct SubmissionPanelProps {
    pub title: AttrValue,
    pub action_label: AttrValue,
    pub form: FormTemplate,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SubmissionPanel)]
pub fn submission_panel(props: &SubmissionPanelProps) -> Html {
    let view = use_state(PanelView::default);
    let behavior = SuccessBehavior::for_title(&props.title);

    // Cleanup drops the timer, so a panel that unmounts or leaves the
    // success view early is never reverted afterwards.
    {
        let view = view.clone();
        let shown = *view;
        use_effect_with_deps(
            move |shown: &PanelView| {
                let timeout = schedule_revert(*shown, behavior, &TimeoutScheduler, move |next| view.set(next));
                move || drop(timeout)
            },
            shown,
        );
    }

    let show_form = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set((*view).show_form()))
    };

    let cancel = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set((*view).cancel()))
    };

    let onsubmit = {
        let view = view.clone();
        let form = props.form.clone();
        let action_label = props.action_label.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let element: HtmlFormElement = e.target_unchecked_into();
            let data = match FormData::new_with_form(&element) {
                Ok(data) => Some(data),
                Err(err) => {
                    log::warn!("Could not read form fields: {:?}", err);
                    None
                }
            };
            let values = form.collect(|name| data.as_ref().and_then(|d| d.get(name).as_string()));
            let submission = Submission::new(&action_label, &values);
            spawn_local(submission.deliver(&WebhookTransport));
            view.set((*view).submit());
        })
    };

    let content = match *view {
        PanelView::Summary => html! {
            <div>
                { for props.children.iter() }
                <button class="panel-action" onclick={show_form}>
                    { props.action_label.clone() }
                </button>
            </div>
        },
        PanelView::Form => html! {
            <div>
                <form class="panel-form" onsubmit={onsubmit}>
                    { for props.form.fields().iter().map(|field| render_field(&props.form, field)) }
                    <button type="submit" class="panel-button">{"Submit"}</button>
                </form>
                <button class="panel-button" onclick={cancel}>{"Back"}</button>
            </div>
        },
        PanelView::Success => match behavior.call_link() {
            Some((url, target)) => {
                let schedule = Callback::from(move |_: MouseEvent| {
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.open_with_url_and_target(url, target) {
                            log::error!("Failed to open scheduling link: {:?}", e);
                        }
                    }
                });
                html! {
                    <div>
                        <p>{"Success! Your submission has been received. To learn more..."}</p>
                        <button class="panel-button" onclick={schedule}>{"Schedule a Call"}</button>
                    </div>
                }
            }
            None => html! {
                <p>{"Success! Your submission has been received."}</p>
            },
        },
    };

    html! {
        <div class={classes!("submission-panel", (*view).is_expanded().then(|| "expanded"))}>
            <style>
                {r#"
                .submission-panel {
                    background: rgba(99, 102, 241, 0.05);
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    margin-bottom: 1rem;
                }
                .submission-panel.expanded {
                    background: rgba(99, 102, 241, 0.2);
                }
                .submission-panel h3 {
                    font-size: 1.2rem;
                    color: #ffffff;
                    margin-bottom: 0.5rem;
                }
                .panel-action {
                    margin-top: 1rem;
                    display: inline-block;
                    padding: 1rem 2rem;
                    background-color: #DC66FF;
                    font-size: 1.125rem;
                    border-radius: 8px;
                    color: #ffffff;
                    border: none;
                    cursor: pointer;
                }
                .panel-button {
                    margin-top: 1rem;
                    background-color: #DC66FF;
                    color: #ffffff;
                    font-size: 1rem;
                    border: none;
                    padding: 0.8rem 1.5rem;
                    border-radius: 8px;
                    cursor: pointer;
                    width: 90%;
                }
                .panel-form {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    width: 100%;
                }
                .panel-field {
                    color: #ffffff;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    width: 80%;
                    margin: 0 auto;
                    text-align: left;
                }
                .panel-field input,
                .panel-field textarea {
                    font-size: 1rem;
                    width: calc(100% - 1rem - 2px);
                    padding: 0.5rem;
                    margin-top: 0.5rem;
                    border-radius: 5px;
                    border: 1px solid #ccc;
                }
                .panel-field textarea {
                    resize: none;
                    height: 100px;
                }
                "#}
            </style>
            <h3>{ props.title.clone() }</h3>
            { content }
        </div>
    }
}

fn render_field(form: &FormTemplate, field: &FormField) -> Html {
    let input = match field.kind.input_type() {
        Some(kind) => html! {
            <input type={kind} name={field.name} placeholder={field.placeholder} required={field.required} />
        },
        None => html! {
            <textarea name={field.name} placeholder={field.placeholder} required={field.required} />
        },
    };
    html! {
        <label class="panel-field">
            { form.label_for(field) }
            { input }
        </label>
    }
}
