use crate::model::{AppAction, AppState};
use crate::util::{clog, rand_between};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const PULSE_DELAY_MS: u32 = 500;
const PULSE_HOLD_MS: u32 = 1_000;

#[derive(Properties, PartialEq, Clone)]
pub struct ParticipationFormProps {
    pub state: UseReducerHandle<AppState>,
}

#[function_component(ParticipationForm)]
pub fn participation_form(props: &ParticipationFormProps) -> Html {
    let name = use_state(String::new);
    let group_choice = use_state(String::new);
    let message = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_group = {
        let group_choice = group_choice.clone();
        Callback::from(move |e: Event| {
            group_choice.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let state = props.state.clone();
        let name = name.clone();
        let group_choice = group_choice.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Bad input drops the submit silently, no error UI.
            let helper = (*name).clone();
            if helper.is_empty() {
                return;
            }
            let Ok(group_id) = (*group_choice).parse::<u32>() else {
                return;
            };
            if !state.groups.iter().any(|g| g.id == group_id) {
                return;
            }
            if !message.is_empty() {
                clog(&format!("help message for group {}: {}", group_id, *message));
            }
            state.dispatch(AppAction::Participate {
                name: helper,
                group_id,
                boost: rand_between(1, 3),
            });
            name.set(String::new());
            group_choice.set(String::new());
            message.set(String::new());
            // Let the re-sorted board settle before the pulse lands on the row.
            let pulse_state = state.clone();
            Timeout::new(PULSE_DELAY_MS, move || {
                pulse_state.dispatch(AppAction::HighlightGroup { id: group_id });
                let clear_state = pulse_state.clone();
                Timeout::new(PULSE_HOLD_MS, move || {
                    clear_state.dispatch(AppAction::ClearHighlight { id: group_id });
                })
                .forget();
            })
            .forget();
        })
    };

    let field_style = "padding:9px 12px; background:#0e1116; border:1px solid #30363d; border-radius:8px; color:#e6edf3; font-size:14px;";
    let label_style = "display:flex; flex-direction:column; gap:4px; font-size:13px; opacity:0.9;";

    html! {<form {onsubmit} style="display:flex; flex-direction:column; gap:12px; max-width:460px; margin:0 auto;">
        <label style={label_style}>
            {"Your Name"}
            <input type="text" value={(*name).clone()} oninput={on_name} placeholder="Jane Doe" style={field_style} />
        </label>
        <label style={label_style}>
            {"Choose a Group"}
            <select onchange={on_group} value={(*group_choice).clone()} style={field_style}>
                <option value="">{"Select a group"}</option>
                { for props.state.groups.iter().map(|g| html! {
                    <option value={g.id.to_string()}>{ format!("{} ({} chain)", g.name, g.chain_length) }</option>
                }) }
            </select>
        </label>
        <label style={label_style}>
            {"Message (optional)"}
            <textarea value={(*message).clone()} oninput={on_message} rows="3" placeholder="Say something kind" style={field_style} />
        </label>
        <button type="submit" style="padding:11px 18px; background:#6366f1; border:1px solid #4f46e5; border-radius:8px; color:#fff; font-weight:600; font-size:15px;">{"Add to the Chain"}</button>
    </form>}
}
