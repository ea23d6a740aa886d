use crate::leaderboard::{LeaderboardEntry, rank_color};
use crate::util::format_score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardRowProps {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

#[function_component(LeaderboardRow)]
pub fn leaderboard_row(props: &LeaderboardRowProps) -> Html {
    let e = &props.entry;
    let (bg, border) = if e.is_player {
        ("rgba(163,113,247,0.2)", "#a371f7")
    } else {
        ("rgba(48,54,61,0.3)", "#30363d")
    };
    html! { <div style={format!("display:flex; align-items:center; gap:12px; padding:10px 14px; margin:4px 0; background:{}; border:1px solid {}; border-radius:8px;", bg, border)}>
        <span style={format!("width:36px; font-size:20px; font-weight:800; color:{};", rank_color(props.rank))}>{ format!("#{}", props.rank) }</span>
        <span style="flex:1; display:flex; flex-direction:column;">
            <span style="font-weight:700;">{ e.name.clone() }</span>
            <span style="font-size:12px; opacity:0.7;">{ format!("Level {}", e.level) }</span>
        </span>
        <span style="font-variant-numeric:tabular-nums; font-weight:700; color:#39c5cf;">{ format_score(e.score) }</span>
    </div> }
}
