use yew::prelude::*;

use super::{ending_overlay::EndingOverlay, stats_panel::XpBar, timeout::Timeout};
use crate::config::{CONSEQUENCE_DELAY_MS, ENDING_RETURN_DELAY_MS};
use crate::session::{Session, SessionAction};
use crate::state::{Screen, StoryPhase};
use crate::util::format_reward;

#[derive(Properties, PartialEq, Clone)]
pub struct StoryViewProps {
    pub session: UseReducerHandle<Session>,
}

#[function_component(StoryView)]
pub fn story_view(props: &StoryViewProps) -> Html {
    // Effect: schedule the next step of the run. Dropping the timer on
    // phase change or unmount cancels it.
    {
        let session = props.session.clone();
        let phase = props.session.cursor.phase.clone();
        use_effect_with(phase, move |phase| {
            let timer = match phase {
                StoryPhase::Choosing => None,
                StoryPhase::Consequence(_) => Some(Timeout::start(CONSEQUENCE_DELAY_MS, move || {
                    session.dispatch(SessionAction::ConsequenceElapsed)
                })),
                StoryPhase::Finished(_) => Some(Timeout::start(ENDING_RETURN_DELAY_MS, move || {
                    session.dispatch(SessionAction::RunFinished)
                })),
            };
            move || drop(timer)
        });
    }

    let session = &props.session;
    let Some(current) = session.current_node() else {
        return html! {};
    };
    // Once a run is finished, show the ending node it led to
    let node = match &session.cursor.phase {
        StoryPhase::Finished(outcome) if outcome.next_node >= 0 => session
            .story
            .as_ref()
            .and_then(|s| s.node(outcome.next_node).ok())
            .unwrap_or(current),
        _ => current,
    };
    let back = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Navigate(Screen::Menu)))
    };

    let body = match &session.cursor.phase {
        StoryPhase::Choosing => {
            let buttons = node.choices.iter().enumerate().map(|(i, choice)| {
                let onclick = {
                    let session = session.clone();
                    Callback::from(move |_| session.dispatch(SessionAction::Choose(i)))
                };
                html! {
                    <button key={i} {onclick} style="text-align:left; padding:12px 16px; display:flex; flex-direction:column; gap:4px; background:rgba(163,113,247,0.12); border:1px solid #30363d; border-radius:8px;">
                        <span style="font-weight:600;">{ choice.label.clone() }</span>
                        <span style="font-size:12px; opacity:0.7;">{ format_reward(choice.xp, choice.score) }</span>
                    </button>
                }
            });
            html! {<div style="display:flex; flex-direction:column; gap:8px;">{ for buttons }</div>}
        }
        StoryPhase::Consequence(outcome) => html! {
            <div style="padding:16px; border:1px solid #39c5cf; border-radius:8px; text-align:center;">
                <p style="margin:0; color:#39c5cf; font-weight:700;">{ format!("💫 {}", outcome.flavor) }</p>
                <p style="margin:6px 0 0 0; font-size:12px; opacity:0.7;">{ format_reward(outcome.xp_reward, outcome.score_reward) }</p>
            </div>
        },
        StoryPhase::Finished(outcome) => html! {
            <EndingOverlay
                ending={outcome.ending.clone()}
                tag={node.ending_tag}
                xp={outcome.xp_reward}
                score={outcome.score_reward}
            />
        },
    };

    html! {<div style="max-width:640px; margin:32px auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px; display:flex; flex-direction:column; gap:16px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <button onclick={back} style="padding:4px 10px;">{"← Menu"}</button>
            <span style="font-size:12px; opacity:0.7;">{ format!("Level {}", session.player.level) }</span>
        </div>
        <h2 style="margin:0; color:#a371f7;">{ node.title.clone() }</h2>
        <XpBar xp={session.player.xp} xp_to_next_level={session.player.xp_to_next_level} />
        <p style="margin:0; font-size:17px; line-height:1.5;">{ node.text.clone() }</p>
        { body }
        <div style="text-align:center; font-size:12px; opacity:0.6;">
            { format!("Endings discovered: {} / {}", session.player.endings.len(), session.ending_total()) }
        </div>
    </div>}
}
