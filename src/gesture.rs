use serde::Deserialize;
use std::time::Duration;

/// Thresholds a completed pointer gesture has to clear before it counts as
/// an intentional swipe rather than passive touch movement.
///
/// The defaults match the values the product shipped with; configs driving
/// a cell-based terminal are expected to lower them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub threshold: f64,
    pub velocity_threshold: f64,
    pub month_trigger_velocity: f64,
}

impl Default for SwipeConfig {
    fn default() -> SwipeConfig {
        SwipeConfig {
            threshold: 100.0,
            velocity_threshold: 100.0,
            month_trigger_velocity: 300.0,
        }
    }
}

/// Displacement and end velocity of a finished pointer gesture.
///
/// `dx`/`dy` are end minus start; positive `dy` points down the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling {
    pub dx: f64,
    pub dy: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

/// Which axis a transition is gated on. The `Dominant*` gates additionally
/// require that axis to carry the larger displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Horizontal,
    Vertical,
    DominantHorizontal,
    DominantVertical,
}

impl Fling {
    pub fn between(start: (f64, f64), end: (f64, f64), elapsed: Duration) -> Fling {
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        let secs = elapsed.as_secs_f64().max(1e-3);

        Fling {
            dx,
            dy,
            vx: dx / secs,
            vy: dy / secs,
        }
    }

    fn clears_horizontal(&self, cfg: &SwipeConfig) -> bool {
        self.dx.abs() > cfg.threshold && self.vx.abs() > cfg.velocity_threshold
    }

    fn clears_vertical(&self, cfg: &SwipeConfig) -> bool {
        self.dy.abs() > cfg.threshold && self.vy.abs() > cfg.velocity_threshold
    }

    /// Evaluates a gate against this fling.
    pub fn passes(&self, gate: Gate, cfg: &SwipeConfig) -> bool {
        match gate {
            Gate::Horizontal => self.clears_horizontal(cfg),
            Gate::Vertical => self.clears_vertical(cfg),
            Gate::DominantHorizontal => {
                self.dx.abs() > self.dy.abs() && self.clears_horizontal(cfg)
            }
            Gate::DominantVertical => self.dy.abs() >= self.dx.abs() && self.clears_vertical(cfg),
        }
    }

    /// Sign check only; magnitude gating is the gate's job.
    pub fn heads(&self, direction: Direction) -> bool {
        match direction {
            Direction::East => self.dx > 0.0,
            Direction::West => self.dx < 0.0,
            Direction::North => self.dy < 0.0,
            Direction::South => self.dy > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSwipe {
    Previous,
    Next,
}

/// The month pane's own swipe gate: a rightward drag above the trigger
/// velocity goes to the previous month, a leftward one to the next.
pub fn month_swipe(velocity: f64, cfg: &SwipeConfig) -> Option<MonthSwipe> {
    if velocity > cfg.month_trigger_velocity {
        Some(MonthSwipe::Previous)
    } else if velocity < -cfg.month_trigger_velocity {
        Some(MonthSwipe::Next)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fling(dx: f64, dy: f64) -> Fling {
        // One-second gestures, so velocity equals displacement.
        Fling::between((0.0, 0.0), (dx, dy), Duration::from_secs(1))
    }

    #[test]
    fn below_threshold_is_not_a_swipe() {
        let cfg = SwipeConfig::default();
        assert!(!fling(99.0, 0.0).passes(Gate::Horizontal, &cfg));
        assert!(!fling(0.0, 99.0).passes(Gate::Vertical, &cfg));
    }

    #[test]
    fn slow_drag_is_not_a_swipe() {
        let cfg = SwipeConfig::default();
        let slow = Fling::between((0.0, 0.0), (150.0, 0.0), Duration::from_secs(10));
        assert!(!slow.passes(Gate::Horizontal, &cfg));
    }

    #[test]
    fn dominant_gates_require_the_larger_axis() {
        let cfg = SwipeConfig::default();
        let diagonal = fling(150.0, 200.0);
        assert!(!diagonal.passes(Gate::DominantHorizontal, &cfg));
        assert!(diagonal.passes(Gate::DominantVertical, &cfg));
        // The plain gates ignore dominance.
        assert!(diagonal.passes(Gate::Horizontal, &cfg));
    }

    #[test]
    fn direction_follows_the_sign() {
        let east = fling(120.0, 10.0);
        assert!(east.heads(Direction::East));
        assert!(!east.heads(Direction::West));

        let north = fling(0.0, -120.0);
        assert!(north.heads(Direction::North));
        assert!(!north.heads(Direction::South));
    }

    #[test]
    fn month_swipe_needs_the_trigger_velocity() {
        let cfg = SwipeConfig::default();
        assert_eq!(month_swipe(301.0, &cfg), Some(MonthSwipe::Previous));
        assert_eq!(month_swipe(-301.0, &cfg), Some(MonthSwipe::Next));
        assert_eq!(month_swipe(299.0, &cfg), None);
        assert_eq!(month_swipe(-299.0, &cfg), None);
    }
}
