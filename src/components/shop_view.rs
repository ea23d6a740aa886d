use crate::session::{Session, SessionAction};
use crate::shop::PACKAGES;
use crate::state::Screen;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopViewProps {
    pub session: UseReducerHandle<Session>,
}

#[function_component(ShopView)]
pub fn shop_view(props: &ShopViewProps) -> Html {
    let back = {
        let session = props.session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Navigate(Screen::Menu)))
    };

    let cards = PACKAGES.iter().enumerate().map(|(i, pkg)| {
        let buy = {
            let session = props.session.clone();
            Callback::from(move |_| session.dispatch(SessionAction::SelectPackage(i)))
        };
        let (bg, border) = if pkg.popular {
            ("rgba(163,113,247,0.2)", "#a371f7")
        } else {
            ("rgba(48,54,61,0.3)", "#d29922")
        };
        html! {
            <div key={i} style={format!("position:relative; display:flex; align-items:center; justify-content:space-between; padding:16px; background:{}; border:2px solid {}; border-radius:10px;", bg, border)}>
                if pkg.popular {
                    <span style="position:absolute; top:-10px; right:12px; font-size:11px; font-weight:700; background:#f0883e; color:#0d1117; padding:2px 8px; border-radius:10px;">{"🔥 POPULAR"}</span>
                }
                <div style="display:flex; flex-direction:column;">
                    <span style="font-size:22px; font-weight:800;">{ format!("+{} levels", pkg.levels) }</span>
                    <span style="font-size:12px; opacity:0.7;">{"Instant level-up"}</span>
                </div>
                <button onclick={buy} style="background:linear-gradient(90deg,#d29922,#f0883e); border:1px solid #d29922; color:#0d1117; font-weight:700; min-width:90px;">{ format!("{} ₽", pkg.price) }</button>
            </div>
        }
    });

    // Confirmation modal for the selected package
    let confirm_modal = if let Some(pkg) = props.session.pending_package {
        let cancel = {
            let session = props.session.clone();
            Callback::from(move |_| session.dispatch(SessionAction::CancelPurchase))
        };
        let pay = {
            let session = props.session.clone();
            Callback::from(move |_| {
                // Payment runs outside the game; the player reports the result.
                let confirmed = web_sys::window()
                    .map(|win| {
                        win.confirm_with_message(&format!(
                            "Confirm the purchase of {} levels. Did the payment go through?",
                            pkg.levels
                        ))
                        .unwrap_or(false)
                    })
                    .unwrap_or(false);
                session.dispatch(SessionAction::ConfirmPurchase(confirmed));
            })
        };
        let level = props.session.player.level;
        html! {
            <div style="position:fixed; inset:0; background:rgba(0,0,0,0.55); display:flex; align-items:center; justify-content:center; z-index:200;">
                <div style="width:360px; max-width:90%; background:#161b22; border:1px solid #d29922; border-radius:12px; padding:18px 20px 16px 20px; display:flex; flex-direction:column; gap:14px;">
                    <div style="font-size:18px; font-weight:700; color:#d29922; text-align:center;">{"Confirm purchase"}</div>
                    <div style="display:flex; justify-content:space-between; font-size:14px;"><span>{"Package"}</span><span>{ format!("+{} levels", pkg.levels) }</span></div>
                    <div style="display:flex; justify-content:space-between; font-size:14px;"><span>{"Price"}</span><span>{ format!("{} ₽", pkg.price) }</span></div>
                    <div style="display:flex; justify-content:space-between; font-size:14px;"><span>{"New level"}</span><span>{ level.saturating_add(pkg.levels) }</span></div>
                    <div style="display:flex; gap:10px; justify-content:flex-end;">
                        <button onclick={cancel} style="min-width:90px;">{"Cancel"}</button>
                        <button onclick={pay} style="min-width:110px; background:#d29922; border:1px solid #d29922; color:#0d1117; font-weight:700;">{"💳 Pay"}</button>
                    </div>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {<div style="max-width:420px; margin:32px auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px; display:flex; flex-direction:column; gap:14px;">
        <div style="display:flex; align-items:center; gap:12px;">
            <button onclick={back} style="padding:4px 10px;">{"←"}</button>
            <div style="display:flex; flex-direction:column;">
                <h2 style="margin:0; color:#d29922;">{ Screen::Shop.title() }</h2>
                <span style="font-size:12px; opacity:0.7;">{"Level up instantly!"}</span>
            </div>
        </div>
        { for cards }
        <ul style="margin:0; padding-left:18px; font-size:12px; opacity:0.75; display:flex; flex-direction:column; gap:4px;">
            <li>{"Levels are added right after payment"}</li>
            <li>{"Your score and endings are kept"}</li>
            <li>{"Progress is saved on this device"}</li>
        </ul>
        { confirm_modal }
    </div>}
}
