//! Window event filtering

use rs9x_core::EmuActions;
use sdl2::event::{Event, WindowEvent};

/// Translates window events the display layer cares about into emulator
/// actions. Returns `None` for events the caller should handle itself.
pub fn filter_window_event(event: &Event) -> Option<EmuActions> {
    match event {
        // We lost focus: pop the menu, which also pauses.
        Event::Window {
            win_event: WindowEvent::FocusLost,
            ..
        } => Some(EmuActions::MENU),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_event(win_event: WindowEvent) -> Event {
        Event::Window {
            timestamp: 0,
            window_id: 0,
            win_event,
        }
    }

    #[test]
    fn test_focus_loss_raises_menu() {
        assert_eq!(
            filter_window_event(&window_event(WindowEvent::FocusLost)),
            Some(EmuActions::MENU)
        );
    }

    #[test]
    fn test_other_window_events_pass_through() {
        assert_eq!(
            filter_window_event(&window_event(WindowEvent::FocusGained)),
            None
        );
        assert_eq!(
            filter_window_event(&window_event(WindowEvent::Minimized)),
            None
        );
    }

    #[test]
    fn test_non_window_events_pass_through() {
        assert_eq!(filter_window_event(&Event::Quit { timestamp: 0 }), None);
    }
}
