use crate::model::{PlayerRecord, xp_percent};
use crate::util::format_score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub player: PlayerRecord,
    #[prop_or(false)]
    pub show_clicks: bool,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let p = &props.player;
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#a371f7;", icon_style)}>{"⭐"}</span>
                <span style={format!("{} color:#a371f7;", label_style)}>{"Level"}</span>
                <span style={format!("{} color:#a371f7;", value_style)}>{ p.level }</span>
            </div>
            <XpBar xp={p.xp} xp_to_next_level={p.xp_to_next_level} />
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🏆"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Score"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ format_score(p.score) }</span>
            </div>
            if props.show_clicks {
                <div style={row_style}>
                    <span style={format!("{} color:#58a6ff;", icon_style)}>{"👆"}</span>
                    <span style={format!("{} color:#58a6ff;", label_style)}>{"Clicks"}</span>
                    <span style={format!("{} color:#58a6ff;", value_style)}>{ p.clicks }</span>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct XpBarProps {
    pub xp: u64,
    pub xp_to_next_level: u64,
}

#[function_component(XpBar)]
pub fn xp_bar(props: &XpBarProps) -> Html {
    let pct = xp_percent(props.xp, props.xp_to_next_level);
    html! {<div style="display:flex; flex-direction:column; gap:4px;">
        <div style="display:flex; justify-content:space-between; font-size:12px; opacity:0.8;">
            <span>{"XP"}</span>
            <span>{ format!("{} / {}", props.xp, props.xp_to_next_level) }</span>
        </div>
        <div style="height:10px; background:#21262d; border-radius:5px; overflow:hidden;">
            <div style={format!("height:100%; width:{:.1}%; background:linear-gradient(90deg,#a371f7,#58a6ff); transition:width 0.3s;", pct)}></div>
        </div>
    </div>}
}
