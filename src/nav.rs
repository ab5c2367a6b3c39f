use crate::gesture::{Direction, Fling, Gate, SwipeConfig};
use derive_more::Display;

/// The screens of the application. `Display` yields the stable route id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Screen {
    #[display(fmt = "main_view")]
    Index,
    #[display(fmt = "perfil_mode")]
    Perfil,
    #[display(fmt = "focus_mode_selector")]
    FocusSelector,
    #[display(fmt = "focus_mode_session")]
    FocusSession,
    #[display(fmt = "calendar")]
    Calendar,
}

/// A completed pointer gesture, as seen by the screen router.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Fling(Fling),
    DoubleTap,
}

struct Transition {
    screen: Screen,
    gate: Gate,
    direction: Direction,
    target: Screen,
}

/// Screen transition table; first matching row wins. The index screen
/// branches on the dominant axis, the other screens gate a single axis.
const TRANSITIONS: &[Transition] = &[
    Transition {
        screen: Screen::Index,
        gate: Gate::DominantHorizontal,
        direction: Direction::East,
        target: Screen::FocusSelector,
    },
    Transition {
        screen: Screen::Index,
        gate: Gate::DominantHorizontal,
        direction: Direction::West,
        target: Screen::Calendar,
    },
    Transition {
        screen: Screen::Index,
        gate: Gate::DominantVertical,
        direction: Direction::South,
        target: Screen::Index,
    },
    Transition {
        screen: Screen::Index,
        gate: Gate::DominantVertical,
        direction: Direction::North,
        target: Screen::Perfil,
    },
    Transition {
        screen: Screen::Perfil,
        gate: Gate::Vertical,
        direction: Direction::South,
        target: Screen::Index,
    },
    // Gate and sign read different axes on the selector screen.
    // TODO: clarify with product whether this should be East/West instead.
    Transition {
        screen: Screen::FocusSelector,
        gate: Gate::Horizontal,
        direction: Direction::South,
        target: Screen::Index,
    },
];

/// Routes a gesture on `current` to its target screen, if any.
///
/// A double tap opens the profile from anywhere; flings are matched against
/// the transition table. The caller owns the screen state and decides what
/// to do with the result.
pub fn dispatch(current: Screen, gesture: &Gesture, cfg: &SwipeConfig) -> Option<Screen> {
    let target = match gesture {
        Gesture::DoubleTap => Some(Screen::Perfil),
        Gesture::Fling(fling) => TRANSITIONS
            .iter()
            .filter(|t| t.screen == current)
            .find(|t| fling.passes(t.gate, cfg) && fling.heads(t.direction))
            .map(|t| t.target),
    };

    if let Some(target) = target {
        log::debug!("gesture on {} routes to {}", current, target);
    }

    target
}
