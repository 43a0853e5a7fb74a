use common::config::Validate;
use serde::{Deserialize, Serialize};

const MIN_WINDOW_SIDE: f32 = 200.0;
const MAX_WINDOW_SIDE: f32 = 4000.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        let range = MIN_WINDOW_SIDE..=MAX_WINDOW_SIDE;
        if !range.contains(&self.width) || !range.contains(&self.height) {
            return Err(format!(
                "window size must be between {} and {} on each side",
                MIN_WINDOW_SIDE, MAX_WINDOW_SIDE
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 520.0,
        }
    }
}
