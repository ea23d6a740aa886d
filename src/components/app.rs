use super::{
    clicker_view::ClickerView, leaderboard_view::LeaderboardView, menu_view::MenuView,
    name_modal::NameModal, notice_banner::NoticeBanner, profile_view::ProfileView,
    shop_view::ShopView, story_view::StoryView, timeout::Timeout,
};
use crate::config::NOTICE_DURATION_MS;
use crate::session::{GameVariant, Session, SessionAction};
use crate::state::Screen;
use crate::storage::{self, LocalStore};
use crate::story::StoryGraph;
use crate::util::{clog, cwarn};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(|| {
        let loaded = storage::load_player(&LocalStore);
        let variant = storage::load_variant(&LocalStore);
        clog(&format!(
            "session start: {} (level {}), first run: {}",
            loaded.record.name, loaded.record.level, loaded.first_run
        ));
        Session::new(loaded, variant, StoryGraph::bundled())
    });

    // Persist the player record after every change
    {
        let player = session.player.clone();
        use_effect_with(player, move |player| {
            if let Err(e) = storage::save_player(&LocalStore, player) {
                cwarn(&format!("saving player failed: {e}"));
            }
            || ()
        });
    }
    // Persist the chosen game variant
    use_effect_with(session.variant, move |variant| {
        if let Err(e) = storage::save_variant(&LocalStore, *variant) {
            cwarn(&format!("saving variant failed: {e}"));
        }
        || ()
    });
    // Auto-hide the front notice; the next queued one gets its own timer
    {
        let handle = session.clone();
        let id = session.notice().map(|n| n.id);
        use_effect_with(id, move |id| {
            let timer = id.map(|id| {
                Timeout::start(NOTICE_DURATION_MS, move || {
                    handle.dispatch(SessionAction::DismissNotice(id))
                })
            });
            move || drop(timer)
        });
    }

    if let Some(fault) = &session.fault {
        return html! {
            <div style="max-width:420px; margin:64px auto; padding:24px; background:#3b1d1d; border:1px solid #f85149; border-radius:12px; color:#e6edf3; font-family:sans-serif;">
                <h2 style="margin:0 0 8px 0; color:#f85149;">{"Something went wrong"}</h2>
                <p style="margin:0 0 8px 0;">{"The game cannot continue. Reload the page to start again."}</p>
                <code style="font-size:12px; opacity:0.8;">{ fault.clone() }</code>
            </div>
        };
    }

    let content = match session.screen() {
        Screen::Menu => html! { <MenuView session={session.clone()} /> },
        Screen::Playing => match session.variant {
            GameVariant::Story => html! { <StoryView session={session.clone()} /> },
            GameVariant::Clicker => html! { <ClickerView session={session.clone()} /> },
        },
        Screen::Leaderboard => html! { <LeaderboardView session={session.clone()} /> },
        Screen::Profile => html! { <ProfileView session={session.clone()} /> },
        Screen::Shop => html! { <ShopView session={session.clone()} /> },
    };

    let rename = {
        let session = session.clone();
        Callback::from(move |name: String| session.dispatch(SessionAction::Rename(name)))
    };
    let close_prompt = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::CloseNamePrompt))
    };
    let dismiss = {
        let session = session.clone();
        Callback::from(move |id: u32| session.dispatch(SessionAction::DismissNotice(id)))
    };

    html! {
        <div style="min-height:100vh; background:radial-gradient(circle at top, #1f1147, #0d1117 70%); color:#e6edf3; font-family:sans-serif;">
            { content }
            <NameModal
                show={session.name_prompt}
                current_name={session.player.name.clone()}
                on_submit={rename}
                on_close={close_prompt}
            />
            <NoticeBanner notice={session.notice().cloned()} on_dismiss={dismiss} />
        </div>
    }
}
