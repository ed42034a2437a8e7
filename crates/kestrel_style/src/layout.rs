//! Layout configuration per device and orientation

use kestrel_context::{DeviceType, InterfaceOrientation, KeyboardContext};
use kestrel_core::EdgeInsets;
use serde::Serialize;

/// Key geometry shared by every row
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayoutConfiguration {
    pub button_corner_radius: f32,
    pub button_insets: EdgeInsets,
    pub row_height: f32,
}

impl LayoutConfiguration {
    pub const fn new(button_corner_radius: f32, button_insets: EdgeInsets, row_height: f32) -> Self {
        Self {
            button_corner_radius,
            button_insets,
            row_height,
        }
    }

    /// Native keyboard geometry. Devices other than pads use phone values.
    pub fn standard(device_type: DeviceType, orientation: InterfaceOrientation) -> Self {
        let landscape = orientation.is_landscape();
        match (device_type, landscape) {
            (DeviceType::Pad, true) => Self::new(7.0, EdgeInsets::symmetric(7.0, 6.0), 86.0),
            (DeviceType::Pad, false) => Self::new(6.0, EdgeInsets::symmetric(6.0, 4.0), 64.0),
            (_, true) => Self::new(5.0, EdgeInsets::symmetric(3.0, 4.0), 40.0),
            (_, false) => Self::new(5.0, EdgeInsets::symmetric(3.0, 6.0), 56.0),
        }
    }

    pub fn for_context(context: &KeyboardContext) -> Self {
        Self::standard(context.device_type, context.interface_orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone() {
        let portrait = LayoutConfiguration::standard(DeviceType::Phone, InterfaceOrientation::Portrait);
        assert_eq!(portrait.button_corner_radius, 5.0);
        assert_eq!(portrait.row_height, 56.0);

        let landscape =
            LayoutConfiguration::standard(DeviceType::Phone, InterfaceOrientation::LandscapeLeft);
        assert_eq!(landscape.row_height, 40.0);
        assert_eq!(landscape.button_insets, EdgeInsets::symmetric(3.0, 4.0));
    }

    #[test]
    fn test_pad() {
        let landscape =
            LayoutConfiguration::standard(DeviceType::Pad, InterfaceOrientation::LandscapeRight);
        assert_eq!(landscape.button_corner_radius, 7.0);
        assert_eq!(landscape.row_height, 86.0);
        assert_eq!(
            LayoutConfiguration::standard(DeviceType::Pad, InterfaceOrientation::Unknown).row_height,
            64.0
        );
    }
}
