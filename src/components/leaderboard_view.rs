use super::leaderboard_row::LeaderboardRow;
use crate::leaderboard::{player_rank, project, static_entries};
use crate::session::{Session, SessionAction};
use crate::state::Screen;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardViewProps {
    pub session: UseReducerHandle<Session>,
}

#[function_component]
pub fn LeaderboardView(props: &LeaderboardViewProps) -> Html {
    let back = {
        let session = props.session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Navigate(Screen::Menu)))
    };
    let ranked = project(&props.session.player, &static_entries());
    let rank = player_rank(&ranked).unwrap_or(ranked.len());
    html! {<div style="max-width:420px; margin:32px auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px;">
        <div style="display:flex; align-items:center; gap:12px; margin-bottom:12px;">
            <button onclick={back} style="padding:4px 10px;">{"←"}</button>
            <h2 style="margin:0; color:#39c5cf;">{ Screen::Leaderboard.title() }</h2>
        </div>
        { for ranked.into_iter().enumerate().map(|(i, entry)| html! {
            <LeaderboardRow key={i} rank={i + 1} {entry} />
        }) }
        <div style="margin-top:12px; text-align:center; font-size:12px; opacity:0.7;">{ format!("Your rank: #{}", rank) }</div>
    </div>}
}
