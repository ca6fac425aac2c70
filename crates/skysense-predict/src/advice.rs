use serde::{Deserialize, Serialize};

use crate::estimator::RainDistribution;

/// Binary recommendation derived from a rain distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    CarryUmbrella,
    NoUmbrellaNeeded,
}

impl Advice {
    /// Carry an umbrella only when rain is strictly more likely than not.
    pub fn from_distribution(distribution: &RainDistribution) -> Self {
        if distribution.rain > distribution.no_rain {
            Self::CarryUmbrella
        } else {
            Self::NoUmbrellaNeeded
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::CarryUmbrella => {
                "It is likely to rain today. You might want to carry an umbrella."
            }
            Self::NoUmbrellaNeeded => {
                "It is not likely to rain today. You can proceed with your plans without worrying about rain."
            }
        }
    }
}
