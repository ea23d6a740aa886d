//! The running game session: owns the player record and all screen state,
//! and turns user intents into new state. Persisting the record is left to
//! the caller, which saves it after every change.

use std::collections::VecDeque;
use std::rc::Rc;

use yew::Reducible;

use crate::error::{GameError, Result};
use crate::model::PlayerRecord;
use crate::shop::{self, Package, Purchase};
use crate::state::{ComboState, Navigator, Screen, StoryCursor};
use crate::storage::LoadedPlayer;
use crate::story::{StoryGraph, StoryNode};
use crate::util::{cerror, clog, cwarn, format_reward};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameVariant {
    #[default]
    Story,
    Clicker,
}

impl GameVariant {
    pub fn key(&self) -> &'static str {
        match self {
            GameVariant::Story => "story",
            GameVariant::Clicker => "clicker",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameVariant::Story => "Story",
            GameVariant::Clicker => "Clicker",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    Navigate(Screen),
    Choose(usize),
    /// The consequence display delay ran out.
    ConsequenceElapsed,
    /// The ending display delay ran out.
    RunFinished,
    Click { now_ms: f64 },
    ResetRound,
    SetVariant(GameVariant),
    OpenNamePrompt,
    CloseNamePrompt,
    Rename(String),
    SelectPackage(usize),
    ConfirmPurchase(bool),
    CancelPurchase,
    DismissNotice(u32),
    ResetProgress,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub player: PlayerRecord,
    pub navigator: Navigator,
    pub variant: GameVariant,
    pub cursor: StoryCursor,
    pub combo: ComboState,
    /// `None` only when the bundled story failed to load, see `fault`.
    pub story: Option<Rc<StoryGraph>>,
    /// Pending notices, oldest first; the front one is on screen.
    pub notices: VecDeque<Notice>,
    pub name_prompt: bool,
    pub pending_package: Option<Package>,
    /// Unrecoverable data defect; the game stops and shows it.
    pub fault: Option<String>,
    notice_seq: u32,
}

impl Session {
    pub fn new(loaded: LoadedPlayer, variant: GameVariant, story: Result<StoryGraph>) -> Self {
        let (story, fault) = match story {
            Ok(graph) => (Some(Rc::new(graph)), None),
            Err(e) => {
                cerror(&format!("story failed to load: {e}"));
                (None, Some(e.to_string()))
            }
        };
        Self {
            player: loaded.record,
            navigator: Navigator::default(),
            variant,
            cursor: StoryCursor::default(),
            combo: ComboState::default(),
            story,
            notices: VecDeque::new(),
            name_prompt: loaded.first_run,
            pending_package: None,
            fault,
            notice_seq: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn current_node(&self) -> Option<&StoryNode> {
        self.story.as_ref()?.node(self.cursor.node).ok()
    }

    /// The notice currently on screen.
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn ending_total(&self) -> usize {
        self.story.as_ref().map_or(0, |s| s.ending_count())
    }

    fn notify(&mut self, kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) {
        self.notice_seq = self.notice_seq.wrapping_add(1);
        self.notices.push_back(Notice {
            id: self.notice_seq,
            kind,
            title: title.into(),
            body: body.into(),
        });
    }

    fn reject(&mut self, err: GameError) {
        if err.is_fatal() {
            cerror(&format!("fatal: {err}"));
            self.fault = Some(err.to_string());
        } else {
            cwarn(&format!("rejected: {err}"));
            self.notify(NoticeKind::Error, "Error", err.to_string());
        }
    }

    /// Swap in a new record, announcing a level-up if one happened.
    fn commit_player(&mut self, next: PlayerRecord) {
        if next.level > self.player.level {
            clog(&format!("level up: {} -> {}", self.player.level, next.level));
            self.notify(
                NoticeKind::Success,
                "🎉 Level up!",
                format!("You are now level {}!", next.level),
            );
        }
        self.player = next;
    }

    pub fn apply(&mut self, action: SessionAction) {
        use SessionAction::*;
        if self.fault.is_some() {
            return;
        }
        match action {
            Navigate(to) => self.navigate(to),
            Choose(index) => self.choose(index),
            ConsequenceElapsed => {
                if self.screen() == Screen::Playing {
                    self.cursor.advance();
                }
            }
            RunFinished => {
                if self.screen() == Screen::Playing && self.cursor.is_finished() {
                    self.navigator.finish_run();
                    self.cursor.restart();
                }
            }
            Click { now_ms } => self.click(now_ms),
            ResetRound => self.combo.reset_round(),
            SetVariant(variant) => {
                if self.screen() == Screen::Menu {
                    self.variant = variant;
                }
            }
            OpenNamePrompt => self.name_prompt = true,
            CloseNamePrompt => self.name_prompt = false,
            Rename(name) => match self.player.rename_profile(&name) {
                Ok(next) => {
                    clog(&format!("renamed to {}", next.name));
                    self.notify(
                        NoticeKind::Success,
                        "🎮 Welcome!",
                        format!("Hi, {}! Let's play!", next.name),
                    );
                    self.player = next;
                    self.name_prompt = false;
                }
                Err(e) => self.reject(e),
            },
            SelectPackage(index) => match shop::package(index) {
                Ok(pkg) => self.pending_package = Some(pkg),
                Err(e) => self.reject(e),
            },
            ConfirmPurchase(confirmed) => self.confirm_purchase(confirmed),
            CancelPurchase => self.pending_package = None,
            DismissNotice(id) => {
                self.notices.retain(|n| n.id != id);
            }
            ResetProgress => {
                clog("progress wiped");
                self.player = PlayerRecord::default();
                self.navigator = Navigator::default();
                self.variant = GameVariant::default();
                self.cursor.restart();
                self.combo = ComboState::default();
                self.pending_package = None;
                self.name_prompt = true;
            }
        }
    }

    fn navigate(&mut self, to: Screen) {
        let from = self.screen();
        match self.navigator.navigate(to) {
            Ok(_) => {
                if from == Screen::Playing || to == Screen::Playing {
                    self.cursor.restart();
                    self.combo.reset_round();
                }
                if from == Screen::Shop {
                    self.pending_package = None;
                }
            }
            Err(e) => self.reject(e),
        }
    }

    fn choose(&mut self, index: usize) {
        if self.screen() != Screen::Playing
            || self.variant != GameVariant::Story
            || !self.cursor.is_choosing()
        {
            return;
        }
        let Some(story) = self.story.clone() else {
            return;
        };
        let outcome = match story.resolve_choice(self.cursor.node, index) {
            Ok(outcome) => outcome,
            Err(e) => return self.reject(e),
        };

        let mut next = self
            .player
            .apply_reward(outcome.xp_reward, outcome.score_reward);
        if outcome.next_node >= 0 {
            next = next.visit_node(outcome.next_node);
        }
        let new_ending = outcome
            .ending
            .as_ref()
            .filter(|name| !next.has_ending(name))
            .cloned();
        if let Some(name) = &new_ending {
            next = next.record_ending(name);
        }
        self.commit_player(next);

        if let Some(name) = new_ending {
            clog(&format!("ending unlocked: {name}"));
            self.notify(
                NoticeKind::Success,
                "🏆 Ending unlocked!",
                format!(
                    "{name} • {}",
                    format_reward(outcome.xp_reward, outcome.score_reward)
                ),
            );
        }
        self.cursor.show_consequence(outcome);
    }

    fn click(&mut self, now_ms: f64) {
        if self.screen() != Screen::Playing || self.variant != GameVariant::Clicker {
            return;
        }
        let reward = self.combo.register_click(now_ms);
        let next = self
            .player
            .count_click()
            .apply_reward(reward.xp, reward.score);
        self.commit_player(next);
    }

    fn confirm_purchase(&mut self, confirmed: bool) {
        let Some(pkg) = self.pending_package.take() else {
            return;
        };
        match shop::complete_purchase(&self.player, pkg, confirmed) {
            Purchase::Completed { record, levels } => {
                clog(&format!("purchase confirmed: +{levels} levels"));
                self.player = record;
                self.notify(
                    NoticeKind::Success,
                    "🎉 Purchase complete!",
                    format!("+{levels} levels! New level: {}", self.player.level),
                );
                self.navigator.to_menu();
            }
            Purchase::Declined => {
                self.notify(NoticeKind::Info, "Purchase cancelled", "No levels were added.");
            }
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}
