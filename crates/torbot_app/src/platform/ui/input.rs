use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use torbot_core::{AppViewModel, Msg, OperationStep, ScreenView};

const PAGE: isize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Scroll(isize),
    Quit,
    Ignore,
}

/// Maps a key press to an action for the current screen.
pub fn map_key(view: &AppViewModel, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return KeyAction::Quit;
    }

    if view.notification.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                KeyAction::Dispatch(Msg::NotificationDismissed)
            }
            _ => KeyAction::Ignore,
        };
    }

    match &view.screen {
        ScreenView::Form(form) => match key.code {
            KeyCode::Enter => KeyAction::Dispatch(Msg::SubmitClicked),
            KeyCode::Tab | KeyCode::Down => {
                KeyAction::Dispatch(Msg::OperationStepped(OperationStep::Next))
            }
            KeyCode::BackTab | KeyCode::Up => {
                KeyAction::Dispatch(Msg::OperationStepped(OperationStep::Previous))
            }
            KeyCode::Backspace => {
                let mut text = form.target_url.clone();
                match text.pop() {
                    Some(_) => KeyAction::Dispatch(Msg::TargetUrlChanged(text)),
                    None => KeyAction::Ignore,
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut text = form.target_url.clone();
                text.push(c);
                KeyAction::Dispatch(Msg::TargetUrlChanged(text))
            }
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::Ignore,
        },
        ScreenView::Results(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                KeyAction::Dispatch(Msg::BackClicked)
            }
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Scroll(1),
            KeyCode::PageUp => KeyAction::Scroll(-PAGE),
            KeyCode::PageDown => KeyAction::Scroll(PAGE),
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        },
    }
}
