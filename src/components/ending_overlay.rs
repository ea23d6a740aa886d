use crate::story::EndingTag;
use crate::util::format_reward;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EndingOverlayProps {
    pub ending: Option<String>,
    pub tag: Option<EndingTag>,
    pub xp: i64,
    pub score: i64,
}

#[function_component]
pub fn EndingOverlay(props: &EndingOverlayProps) -> Html {
    let color = props.tag.map_or("#58a6ff", |t| t.color());
    let heading = if props.ending.is_some() {
        "🏆 Ending reached!"
    } else {
        "✨ Story complete!"
    };
    html! {
        <div style={format!("background:rgba(0,0,0,0.85); border:2px solid {}; padding:20px 28px; border-radius:12px; text-align:center;", color)}>
            <h2 style={format!("margin:0 0 10px 0; color:{};", color)}>{ heading }</h2>
            if let Some(name) = &props.ending {
                <p style="margin:4px 0; font-size:18px; font-weight:700;">{ name.clone() }</p>
            }
            if let Some(tag) = props.tag {
                <p style="margin:4px 0; font-size:12px; opacity:0.8;">{ tag.label() }</p>
            }
            <p style="margin:4px 0; font-size:13px;">{ format_reward(props.xp, props.score) }</p>
            <p style="margin:10px 0 0 0; font-size:11px; opacity:0.6;">{"Returning to the menu..."}</p>
        </div>
    }
}
