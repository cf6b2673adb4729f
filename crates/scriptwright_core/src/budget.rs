//! Scene budget derived from a target duration.

use serde::{Deserialize, Serialize};

/// Screen time represented by one scene, in seconds.
pub const SECONDS_PER_SCENE: u32 = 8;

/// Permitted total scene count for a script of a given length.
///
/// `target` is the scene count for the requested duration, `min` the count for one
/// minute less (never below one minute) and `max` the count for one minute more.
///
/// # Examples
///
/// ```
/// use scriptwright_core::SceneBudget;
///
/// let budget = SceneBudget::for_minutes(5);
/// assert_eq!(budget.target(), 38);
/// assert_eq!(budget.min(), 30);
/// assert_eq!(budget.max(), 45);
/// assert!(budget.contains(40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneBudget {
    target: u32,
    min: u32,
    max: u32,
}

impl SceneBudget {
    /// Computes the budget for a duration in whole minutes.
    ///
    /// Zero is treated as one minute so `min <= target <= max` holds for every input.
    pub fn for_minutes(minutes: u32) -> Self {
        let minutes = minutes.max(1);
        let min_minutes = minutes.saturating_sub(1).max(1);
        let max_minutes = minutes.saturating_add(1);

        Self {
            target: scenes_for(minutes),
            min: scenes_for(min_minutes),
            max: scenes_for(max_minutes),
        }
    }

    /// Scene count matching the requested duration exactly.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Fewest scenes an acceptable script may contain.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Most scenes an acceptable script may contain.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether a total scene count falls inside `[min, max]`.
    pub fn contains(&self, scenes: usize) -> bool {
        scenes >= self.min as usize && scenes <= self.max as usize
    }
}

/// round(minutes * 60 / 8), halves rounding up.
fn scenes_for(minutes: u32) -> u32 {
    (minutes as f64 * 60.0 / SECONDS_PER_SCENE as f64).round() as u32
}
