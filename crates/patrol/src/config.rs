//! Simulation configuration loaded from the environment.

use std::env;

/// Settings for one patrol run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatrolConfig {
    /// Number of times the tree is ticked.
    pub ticks: u32,
    /// Waypoints on the patrol route.
    pub waypoints: usize,
    /// Ticks a walk between two waypoints takes.
    pub steps_per_leg: u32,
    /// Tick on which an intruder shows up, if any.
    pub alert_tick: Option<u32>,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            ticks: 12,
            waypoints: 3,
            steps_per_leg: 2,
            alert_tick: None,
        }
    }
}

impl PatrolConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PATROL_TICKS` - Ticks to run (default: 12)
    /// - `PATROL_WAYPOINTS` - Waypoints on the route (default: 3)
    /// - `PATROL_STEPS_PER_LEG` - Ticks per walk (default: 2)
    /// - `PATROL_ALERT_TICK` - Tick an intruder appears on (default: never)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ticks) = parse::<u32>(&lookup, "PATROL_TICKS") {
            config.ticks = ticks.max(1);
        }
        if let Some(waypoints) = parse::<usize>(&lookup, "PATROL_WAYPOINTS") {
            config.waypoints = waypoints.max(1);
        }
        if let Some(steps) = parse::<u32>(&lookup, "PATROL_STEPS_PER_LEG") {
            config.steps_per_leg = steps.max(1);
        }
        if let Some(tick) = parse::<u32>(&lookup, "PATROL_ALERT_TICK") {
            config.alert_tick = Some(tick);
        }

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> PatrolConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PatrolConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), PatrolConfig::default());
    }

    #[test]
    fn reads_values_and_clamps_to_one() {
        let config = config_from(&[
            ("PATROL_TICKS", "0"),
            ("PATROL_WAYPOINTS", "5"),
            ("PATROL_STEPS_PER_LEG", " 4 "),
            ("PATROL_ALERT_TICK", "7"),
        ]);
        assert_eq!(config.ticks, 1);
        assert_eq!(config.waypoints, 5);
        assert_eq!(config.steps_per_leg, 4);
        assert_eq!(config.alert_tick, Some(7));
    }

    #[test]
    fn ignores_unparsable_values() {
        let config = config_from(&[("PATROL_TICKS", "many")]);
        assert_eq!(config.ticks, PatrolConfig::default().ticks);
    }
}
