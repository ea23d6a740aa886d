//! Screen navigator: one active screen, menu in the middle.

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    Leaderboard,
    Profile,
    Shop,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::Playing => "Play",
            Screen::Leaderboard => "Leaderboard",
            Screen::Profile => "Profile",
            Screen::Shop => "Level Shop",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn can_navigate(&self, to: Screen) -> bool {
        to == Screen::Menu || self.current == Screen::Menu
    }

    /// Menu reaches every screen; every screen can go back to the menu.
    pub fn navigate(&mut self, to: Screen) -> Result<Screen> {
        if !self.can_navigate(to) {
            return Err(GameError::InvalidTransition {
                from: self.current,
                to,
            });
        }
        self.current = to;
        Ok(to)
    }

    /// Back to the menu from wherever we are.
    pub fn to_menu(&mut self) {
        self.current = Screen::Menu;
    }

    /// Automatic return once a story run has finished.
    pub fn finish_run(&mut self) {
        if self.current == Screen::Playing {
            self.current = Screen::Menu;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_menu() {
        assert_eq!(Navigator::default().current(), Screen::Menu);
    }

    #[test]
    fn menu_reaches_every_screen_and_back() {
        for to in [
            Screen::Playing,
            Screen::Leaderboard,
            Screen::Profile,
            Screen::Shop,
        ] {
            let mut nav = Navigator::default();
            assert_eq!(nav.navigate(to).unwrap(), to);
            assert_eq!(nav.navigate(Screen::Menu).unwrap(), Screen::Menu);
        }
    }

    #[test]
    fn side_screens_cannot_jump_to_each_other() {
        let mut nav = Navigator::default();
        nav.navigate(Screen::Shop).unwrap();
        let err = nav.navigate(Screen::Leaderboard).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidTransition {
                from: Screen::Shop,
                to: Screen::Leaderboard
            }
        ));
        assert_eq!(nav.current(), Screen::Shop);
    }

    #[test]
    fn to_menu_works_from_any_screen() {
        let mut nav = Navigator::default();
        nav.navigate(Screen::Shop).unwrap();
        nav.to_menu();
        assert_eq!(nav.current(), Screen::Menu);
        nav.to_menu();
        assert_eq!(nav.current(), Screen::Menu);
    }

    #[test]
    fn finish_run_only_leaves_playing() {
        let mut nav = Navigator::default();
        nav.navigate(Screen::Profile).unwrap();
        nav.finish_run();
        assert_eq!(nav.current(), Screen::Profile);

        nav.navigate(Screen::Menu).unwrap();
        nav.navigate(Screen::Playing).unwrap();
        nav.finish_run();
        assert_eq!(nav.current(), Screen::Menu);
    }
}
