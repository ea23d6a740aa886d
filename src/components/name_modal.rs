use crate::config::{NAME_MAX_CHARS, NAME_MIN_CHARS};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NameModalProps {
    pub show: bool,
    pub current_name: String,
    pub on_submit: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn NameModal(props: &NameModalProps) -> Html {
    let draft = use_state(|| props.current_name.clone());
    // Effect: start from the current name each time the modal opens
    {
        let draft = draft.clone();
        let current = props.current_name.clone();
        use_effect_with(props.show, move |show| {
            if *show {
                draft.set(current);
            }
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let submit_cb = {
        let cb = props.on_submit.clone();
        let draft = draft.clone();
        Callback::from(move |_| cb.emit((*draft).clone()))
    };
    let onkeydown = {
        let cb = props.on_submit.clone();
        let draft = draft.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                cb.emit((*draft).clone());
            }
        })
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #a371f7; border-radius:12px; padding:16px 20px; min-width:320px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Enter your nickname"}</h3>
                <button onclick={close_cb} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="font-size:12px; opacity:0.7;">{"This name is shown on the leaderboard."}</div>
            <input
                type="text"
                value={(*draft).clone()}
                maxlength={NAME_MAX_CHARS.to_string()}
                placeholder="Nickname"
                {oninput}
                {onkeydown}
                style="padding:8px 10px; background:#0d1117; border:1px solid #30363d; border-radius:6px; color:#e6edf3;"
            />
            <div style="font-size:11px; opacity:0.6;">{ format!("{}-{} characters", NAME_MIN_CHARS, NAME_MAX_CHARS) }</div>
            <button onclick={submit_cb} style="background:#a371f7; border:1px solid #a371f7; color:#0d1117; font-weight:700;">{"Save"}</button>
        </div>
    </div>}
}
