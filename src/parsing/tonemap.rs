use serde::Deserialize;

use crate::tonemap::{Clamp, Tonemapper, Wrap};

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TonemapSettings {
    // clamp all channels to 0 to 1, multiplying by 10^exposure beforehand (exposure defaults to 0, not changing anything)
    Clamp { exposure: Option<f32> },
    // keep the low byte of each channel, overbright values wrap around
    Wrap,
}

pub fn parse_tonemapper(settings: TonemapSettings) -> Box<dyn Tonemapper> {
    match settings {
        TonemapSettings::Clamp { exposure } => Box::new(Clamp::new(exposure.unwrap_or(0.0))),
        TonemapSettings::Wrap => Box::new(Wrap),
    }
}
