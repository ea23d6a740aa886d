mod components;
mod config;
mod error;
mod leaderboard;
mod model;
mod session;
mod shop;
mod state;
mod storage;
mod story;
mod util;

fn main() {
    yew::Renderer::<components::app::App>::new().render();
}
