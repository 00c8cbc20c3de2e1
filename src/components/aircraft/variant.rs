use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

const WHITE: u32 = 0xFFFFFF;
const NAVY: u32 = 0x2C3E50;
const SILVER: u32 = 0x95A5A6;
const SKY_BLUE: u32 = 0x4A90E2;
const RED: u32 = 0xE74C3C;
const GREEN: u32 = 0x27AE60;

/// Airplane model chosen at session start. Variants differ only in geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirplaneVariant {
    #[default]
    Airbus,
    Bimotor,
    Jet,
    Glider,
    Default,
}

/// One box of an airplane model, in the airplane's local frame (+Z is the nose).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirplanePart {
    pub size: [f32; 3],
    pub offset: [f32; 3],
    /// Euler XYZ rotation [rad].
    pub rotation: [f32; 3],
    /// 0xRRGGBB
    pub color: u32,
}

impl AirplanePart {
    const fn new(size: [f32; 3], offset: [f32; 3], color: u32) -> Self {
        Self {
            size,
            offset,
            rotation: [0.0; 3],
            color,
        }
    }

    const fn rotated(mut self, rotation: [f32; 3]) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Fuselage made of `count` unit-length boxes lined up along Z from `first_z`.
fn fuselage(count: usize, width: f32, first_z: f32, color: u32) -> impl Iterator<Item = AirplanePart> {
    (0..count).map(move |i| {
        AirplanePart::new([width, width, 1.0], [0.0, 0.0, first_z + i as f32], color)
    })
}

impl AirplaneVariant {
    pub const ALL: [AirplaneVariant; 5] = [
        AirplaneVariant::Airbus,
        AirplaneVariant::Bimotor,
        AirplaneVariant::Jet,
        AirplaneVariant::Glider,
        AirplaneVariant::Default,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AirplaneVariant::Airbus => "Airbus A320",
            AirplaneVariant::Bimotor => "Bimotor",
            AirplaneVariant::Jet => "Jet",
            AirplaneVariant::Glider => "Glider",
            AirplaneVariant::Default => "Default",
        }
    }

    pub fn parts(&self) -> Vec<AirplanePart> {
        match self {
            AirplaneVariant::Airbus => fuselage(7, 1.5, -3.0, WHITE)
                .chain((0..5).map(|i| {
                    AirplanePart::new([1.6, 0.4, 0.8], [0.0, 0.2, i as f32 - 2.0], SILVER)
                }))
                .chain([AirplanePart::new([8.0, 0.2, 2.0], [0.0, -0.2, 0.0], NAVY)])
                .collect(),
            AirplaneVariant::Bimotor => fuselage(4, 1.0, -1.5, RED)
                .chain([
                    AirplanePart::new([1.0, 1.0, 1.5], [-2.0, -0.2, 0.0], NAVY),
                    AirplanePart::new([1.0, 1.0, 1.5], [2.0, -0.2, 0.0], NAVY),
                    AirplanePart::new([5.0, 0.2, 1.5], [0.0, 0.0, 0.0], NAVY),
                ])
                .collect(),
            AirplaneVariant::Jet => fuselage(6, 0.8, -2.0, GREEN)
                .chain([
                    AirplanePart::new([4.0, 0.2, 2.0], [0.0, 0.0, 0.0], NAVY)
                        .rotated([0.0, PI * 0.15, 0.0]),
                    AirplanePart::new([2.0, 1.0, 1.0], [0.0, 0.5, -2.0], NAVY)
                        .rotated([0.0, 0.0, PI * 0.25]),
                ])
                .collect(),
            AirplaneVariant::Glider => fuselage(5, 0.6, -2.0, WHITE)
                .chain([
                    AirplanePart::new([10.0, 0.1, 1.0], [0.0, 0.2, 0.0], SKY_BLUE),
                    AirplanePart::new([0.1, 1.0, 1.0], [0.0, 0.5, -2.0], SKY_BLUE),
                    AirplanePart::new([2.0, 0.1, 0.5], [0.0, 1.0, -2.0], SKY_BLUE),
                ])
                .collect(),
            AirplaneVariant::Default => {
                vec![AirplanePart::new([1.0, 1.0, 3.0], [0.0, 0.0, 0.0], SKY_BLUE)]
            }
        }
    }

    /// Full wingspan: the widest extent of any part along X.
    pub fn wingspan(&self) -> f32 {
        self.parts()
            .iter()
            .map(|p| 2.0 * p.offset[0].abs() + p.size[0])
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_solid_parts() {
        for variant in AirplaneVariant::ALL {
            let parts = variant.parts();
            assert!(!parts.is_empty(), "{variant:?} has no parts");
            for part in parts {
                assert!(part.size.iter().all(|s| *s > 0.0), "{variant:?}: {part:?}");
            }
        }
    }

    #[test]
    fn test_part_counts() {
        assert_eq!(AirplaneVariant::Airbus.parts().len(), 13);
        assert_eq!(AirplaneVariant::Bimotor.parts().len(), 7);
        assert_eq!(AirplaneVariant::Jet.parts().len(), 8);
        assert_eq!(AirplaneVariant::Glider.parts().len(), 8);
        assert_eq!(AirplaneVariant::Default.parts().len(), 1);
    }

    #[test]
    fn test_glider_has_the_widest_wing() {
        assert_eq!(AirplaneVariant::Glider.wingspan(), 10.0);
        assert!(AirplaneVariant::ALL
            .iter()
            .all(|v| v.wingspan() <= AirplaneVariant::Glider.wingspan()));
    }

    #[test]
    fn test_variant_names_parse_from_yaml() {
        let variant: AirplaneVariant = serde_yaml::from_str("glider").unwrap();
        assert_eq!(variant, AirplaneVariant::Glider);
    }
}
