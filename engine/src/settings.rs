use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub rows: u32,
    pub columns: u32,
    pub tick_interval_ms: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: 15,
            columns: 15,
            tick_interval_ms: 120,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.rows < 1 {
            return Err("rows must be at least 1".to_string());
        }
        if self.rows > 100 {
            return Err("rows must not exceed 100".to_string());
        }
        if self.columns < 4 {
            return Err("columns must be at least 4 to fit the initial snake".to_string());
        }
        if self.columns > 100 {
            return Err("columns must not exceed 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must be between 50 and 5000".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let settings = GameSettings {
            rows: 0,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_too_few_columns_rejected() {
        let settings = GameSettings {
            columns: 3,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_tick_interval_bounds() {
        let too_fast = GameSettings {
            tick_interval_ms: 10,
            ..GameSettings::default()
        };
        assert!(too_fast.validate().is_err());

        let too_slow = GameSettings {
            tick_interval_ms: 5001,
            ..GameSettings::default()
        };
        assert!(too_slow.validate().is_err());

        let reference = GameSettings {
            tick_interval_ms: 120,
            ..GameSettings::default()
        };
        assert!(reference.validate().is_ok());
    }
}
