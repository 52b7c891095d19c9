//! Desktop configuration
//!
//! Every tunable constant lives in one of the sub-configs. Hosts may pass a
//! partial JSON document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::icons::IconLayoutConfig;
use crate::input::GestureConfig;
use crate::placement::PlacementConfig;

/// Aggregated desktop configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    pub placement: PlacementConfig,
    pub gestures: GestureConfig,
    pub icons: IconLayoutConfig,
}

impl DesktopConfig {
    /// Parse and validate a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DesktopResult<()> {
        self.placement.validate()?;
        self.gestures.validate()?;
        self.icons.validate()
    }
}
