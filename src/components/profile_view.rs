use super::stats_panel::StatsPanel;
use crate::session::{Session, SessionAction};
use crate::state::Screen;
use crate::storage::{self, LocalStore};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileViewProps {
    pub session: UseReducerHandle<Session>,
}

#[function_component(ProfileView)]
pub fn profile_view(props: &ProfileViewProps) -> Html {
    let back = {
        let session = props.session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Navigate(Screen::Menu)))
    };
    let edit_name = {
        let session = props.session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::OpenNamePrompt))
    };
    let hard_reset = {
        let session = props.session.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .map(|win| {
                    win.confirm_with_message(
                        "This will WIPE all progress (level, score, endings) and start fresh. Are you sure?",
                    )
                    .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                storage::wipe(&LocalStore);
                session.dispatch(SessionAction::ResetProgress);
            }
        })
    };

    let p = &props.session.player;
    let endings = if p.endings.is_empty() {
        html! { <p style="text-align:center; opacity:0.6; font-size:13px;">{"Finish a story to unlock endings!"}</p> }
    } else {
        html! {<div style="display:flex; flex-direction:column; gap:4px;">
            { for p.endings.iter().map(|e| html! {
                <div style="padding:6px 10px; background:rgba(210,153,34,0.12); border:1px solid #30363d; border-radius:6px;">{ format!("🏆 {}", e) }</div>
            }) }
        </div>}
    };

    html! {<div style="max-width:420px; margin:32px auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px; display:flex; flex-direction:column; gap:14px;">
        <div style="display:flex; align-items:center; gap:12px;">
            <button onclick={back} style="padding:4px 10px;">{"←"}</button>
            <span style="display:inline-flex; width:56px; height:56px; border-radius:50%; align-items:center; justify-content:center; font-size:24px; font-weight:800; background:#a371f7; color:#0d1117;">{ p.level }</span>
            <div style="display:flex; flex-direction:column;">
                <h2 style="margin:0; color:#f778ba;">{ p.name.clone() }</h2>
                <span style="font-size:12px; opacity:0.7;">{"Explorer of the neon world"}</span>
            </div>
        </div>
        <StatsPanel player={p.clone()} show_clicks={p.clicks > 0} />
        <div style="display:flex; justify-content:space-between; font-size:13px;">
            <span>{"Story progress"}</span>
            <span>{ format!("node {}", p.story_progress) }</span>
        </div>
        <h3 style="margin:0; text-align:center;">{ format!("Endings ({} / {})", p.endings.len(), props.session.ending_total()) }</h3>
        { endings }
        <div style="display:flex; gap:8px;">
            <button onclick={edit_name} style="flex:1;">{"Change name"}</button>
            <button onclick={hard_reset} style="flex:1; background:#3b1d1d; border:1px solid #5d2d2d;">{"Reset Progress"}</button>
        </div>
    </div>}
}
