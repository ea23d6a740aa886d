use super::stats_panel::StatsPanel;
use crate::session::{GameVariant, Session, SessionAction};
use crate::state::Screen;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuViewProps {
    pub session: UseReducerHandle<Session>,
}

#[function_component]
pub fn MenuView(props: &MenuViewProps) -> Html {
    let go = |to: Screen| {
        let session = props.session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Navigate(to)))
    };
    let pick = |variant: GameVariant| {
        let session = props.session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::SetVariant(variant)))
    };
    let edit_name = {
        let session = props.session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::OpenNamePrompt))
    };
    let variant = props.session.variant;
    let tab_style = |v: GameVariant| {
        if v == variant {
            "flex:1; background:#a371f7; border:1px solid #a371f7; color:#0d1117; font-weight:600;"
        } else {
            "flex:1; background:transparent; border:1px solid #30363d;"
        }
    };
    let subtitle = match variant {
        GameVariant::Story => "Choose • Explore • Unlock endings",
        GameVariant::Clicker => "Click fast • Chain combos • Climb the ranks",
    };

    html! {<div style="max-width:420px; margin:40px auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px; display:flex; flex-direction:column; gap:14px;">
        <h1 style="margin:0; text-align:center; font-size:40px; color:#a371f7; text-shadow:0 0 12px #a371f7;">{"NEON STORY"}</h1>
        <p style="margin:0; text-align:center; opacity:0.75;">{ subtitle }</p>
        <div style="display:flex; gap:8px;">
            <button onclick={pick(GameVariant::Story)} style={tab_style(GameVariant::Story)}>{ GameVariant::Story.label() }</button>
            <button onclick={pick(GameVariant::Clicker)} style={tab_style(GameVariant::Clicker)}>{ GameVariant::Clicker.label() }</button>
        </div>
        <button onclick={go(Screen::Playing)} style="height:48px; font-size:18px; font-weight:700;">{"▶ PLAY"}</button>
        <div style="display:flex; gap:8px;">
            <button onclick={go(Screen::Leaderboard)} style="flex:1;">{"🏆 Leaderboard"}</button>
            <button onclick={go(Screen::Profile)} style="flex:1;">{"👤 Profile"}</button>
        </div>
        <button onclick={go(Screen::Shop)} style="height:44px; background:linear-gradient(90deg,#d29922,#f0883e); border:1px solid #d29922; color:#0d1117; font-weight:700;">{"BUY LEVELS 💎"}</button>
        <StatsPanel player={props.session.player.clone()} show_clicks={variant == GameVariant::Clicker} />
        <div style="text-align:center; font-size:13px; opacity:0.8;">
            {"Playing as "}
            <button onclick={edit_name} style="background:none; border:none; color:#f778ba; font-weight:700; cursor:pointer;">{ format!("{} ✎", props.session.player.name) }</button>
        </div>
    </div>}
}
