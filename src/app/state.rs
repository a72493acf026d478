//! Application state management
//!
//! Handles screen transitions and maps keyboard events to navigation
//! actions for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Title screen with Start Quiz / Quit
    #[default]
    Start,
    /// Question on screen
    Quiz,
    /// Final score and tier message
    Results,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Pick an answer directly (1-4, a-d)
    Choose(usize),
    /// Play again (r)
    Restart,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the title screen
    pub fn new() -> Self {
        Self {
            current_state: AppState::Start,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        self.current_state = new_state;
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            KeyCode::Char(c @ '1'..='4') => NavigationAction::Choose(c as usize - '1' as usize),
            KeyCode::Char(c @ 'a'..='d') => NavigationAction::Choose(c as usize - 'a' as usize),

            KeyCode::Char('r') | KeyCode::Char('R') => NavigationAction::Restart,

            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(state_manager.current_state(), AppState::Start);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_state_transitions() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Quiz);
        assert_eq!(state_manager.current_state(), AppState::Quiz);

        state_manager.transition_to(AppState::Results);
        assert_eq!(state_manager.current_state(), AppState::Results);

        state_manager.transition_to(AppState::Results);
        assert_eq!(state_manager.current_state(), AppState::Results);

        state_manager.transition_to(AppState::Start);
        assert_eq!(state_manager.current_state(), AppState::Start);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_quit_handling() {
        let mut state_manager = StateManager::new();
        state_manager.quit();
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('q'))), NavigationAction::Quit);
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Up)), NavigationAction::Up);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('j'))), NavigationAction::Down);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Enter)), NavigationAction::Select);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Esc)), NavigationAction::Back);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('r'))), NavigationAction::Restart);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('x'))), NavigationAction::None);
    }

    #[test]
    fn test_answer_keys() {
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('1'))), NavigationAction::Choose(0));
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('4'))), NavigationAction::Choose(3));
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('a'))), NavigationAction::Choose(0));
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('d'))), NavigationAction::Choose(3));
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('5'))), NavigationAction::None);
    }
}
