use yew::prelude::*;

use super::{stats_panel::StatsPanel, timeout::Timeout};
use crate::config::COMBO_WINDOW_MS;
use crate::session::{Session, SessionAction};
use crate::state::Screen;

#[derive(Properties, PartialEq, Clone)]
pub struct ClickerViewProps {
    pub session: UseReducerHandle<Session>,
}

#[function_component(ClickerView)]
pub fn clicker_view(props: &ClickerViewProps) -> Html {
    // Effect: end the round once the combo window passes without a click
    {
        let session = props.session.clone();
        let last_click = props.session.combo.last_click_ms;
        use_effect_with(last_click, move |last_click| {
            let timer = last_click.map(|_| {
                Timeout::start(COMBO_WINDOW_MS as u32 + 1, move || {
                    session.dispatch(SessionAction::ResetRound)
                })
            });
            move || drop(timer)
        });
    }

    let click = {
        let session = props.session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Click {
                now_ms: js_sys::Date::now(),
            })
        })
    };
    let back = {
        let session = props.session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Navigate(Screen::Menu)))
    };
    let combo = props.session.combo;

    html! {<div style="max-width:420px; margin:32px auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px; display:flex; flex-direction:column; gap:16px; align-items:stretch;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <button onclick={back} style="padding:4px 10px;">{"← Menu"}</button>
            <span style="font-size:12px; opacity:0.7;">{ format!("Best combo: {}", combo.best) }</span>
        </div>
        <button onclick={click} style="align-self:center; width:180px; height:180px; border-radius:50%; font-size:48px; background:radial-gradient(circle,#a371f7,#1f6feb); border:2px solid #a371f7; box-shadow:0 0 24px #a371f7; cursor:pointer;">{"⚡"}</button>
        <div style="text-align:center; font-size:22px; font-weight:700; color:#39c5cf;">
            { if combo.combo > 1 { format!("Combo x{} (score x{})", combo.combo, combo.multiplier()) } else { "Tap to start a combo".to_string() } }
        </div>
        <StatsPanel player={props.session.player.clone()} show_clicks={true} />
    </div>}
}
