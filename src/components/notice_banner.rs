use crate::session::{Notice, NoticeKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let color = match notice.kind {
        NoticeKind::Info => "#58a6ff",
        NoticeKind::Success => "#3fb950",
        NoticeKind::Error => "#f85149",
    };
    let dismiss = {
        let cb = props.on_dismiss.clone();
        let id = notice.id;
        Callback::from(move |_| cb.emit(id))
    };
    html! {
        <div onclick={dismiss} style={format!("position:fixed; bottom:16px; right:16px; background:rgba(0,0,0,0.87); border:1px solid {}; border-left:4px solid {}; padding:10px 14px; border-radius:8px; max-width:320px; cursor:pointer; z-index:300; font-size:14px;", color, color)}>
            <div style="font-weight:700; margin-bottom:2px;">{ notice.title.clone() }</div>
            <div style="opacity:0.85;">{ notice.body.clone() }</div>
        </div>
    }
}
