use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SuccessModalProps {
    /// None keeps the modal off the page entirely.
    pub message: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px 24px; min-width:320px; max-width:460px; display:flex; flex-direction:column; gap:14px; text-align:center;">
            <h3 style="margin:0; font-size:20px;">{"Chain Extended! 🎉"}</h3>
            <p style="margin:0; line-height:1.5;">{ message }</p>
            <button onclick={close_cb} style="align-self:center; padding:8px 18px; background:#6366f1; border:1px solid #4f46e5; border-radius:8px; color:#fff; font-weight:600;">{"Keep Going"}</button>
        </div>
    </div>}
}
