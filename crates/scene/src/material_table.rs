//! Static car part material table
//!
//! Maps glTF node names of the car model to the surface they are painted
//! with. The table is built once and never changes; only entries marked
//! [`Paint::Body`] follow the user's color choice.

use std::collections::HashMap;

use bevy::prelude::*;

/// Where an entry takes its base color from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// The current car body color
    Body,
    /// A fixed sRGB color packed as 0xRRGGBB
    Fixed(u32),
}

/// Surface parameters for one named car part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSpec {
    pub paint: Paint,
    pub roughness: f32,
    pub metalness: f32,
    pub transparent: bool,
    pub opacity: f32,
    /// Emission color packed as 0xRRGGBB; `None` emits nothing
    pub emissive: Option<u32>,
    pub emissive_intensity: f32,
}

impl MaterialSpec {
    /// Opaque, non-emissive surface
    pub const fn solid(paint: Paint, roughness: f32, metalness: f32) -> Self {
        Self {
            paint,
            roughness,
            metalness,
            transparent: false,
            opacity: 1.0,
            emissive: None,
            emissive_intensity: 0.0,
        }
    }

    /// Alpha-blended surface with the given opacity
    pub const fn glass(color: u32, opacity: f32) -> Self {
        Self {
            paint: Paint::Fixed(color),
            roughness: 0.1,
            metalness: 0.0,
            transparent: true,
            opacity,
            emissive: None,
            emissive_intensity: 0.0,
        }
    }

    /// Surface glowing in its own color
    pub const fn light(color: u32, roughness: f32, intensity: f32) -> Self {
        Self {
            paint: Paint::Fixed(color),
            roughness,
            metalness: 0.0,
            transparent: false,
            opacity: 1.0,
            emissive: Some(color),
            emissive_intensity: intensity,
        }
    }

    /// Base color with the body color substituted for [`Paint::Body`]
    pub fn base_color(&self, body: Srgba) -> Srgba {
        match self.paint {
            Paint::Body => body,
            Paint::Fixed(hex) => srgb_from_hex(hex),
        }
    }

    /// Emission color, black when the part does not glow
    pub fn emissive_color(&self) -> Srgba {
        self.emissive.map(srgb_from_hex).unwrap_or(Srgba::BLACK)
    }
}

/// Unpack a 0xRRGGBB value
pub fn srgb_from_hex(hex: u32) -> Srgba {
    Srgba::rgb_u8(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

const BODY: MaterialSpec = MaterialSpec::solid(Paint::Body, 0.2, 0.9);
const CARBON: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0x0a0a0a), 0.8, 0.1);
const WHEEL: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0x1a1a1a), 0.3, 0.7);
const TYRE: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0x0a0a0a), 0.9, 0.0);
const BRAKE_CALIPER: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0xff0000), 0.4, 0.3);
const BRAKE_DISC: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0x666666), 0.5, 0.8);
const GLASS_BLUE: u32 = 0x88ccff;
const LOGO_CHROME: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0xcccccc), 0.1, 0.9);
const EXHAUST: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0x2a2a2a), 0.4, 0.8);
const HONEYCOMB: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0x1a1a1a), 0.6, 0.3);
const AIR_INPUT: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0x1a1a1a), 0.5, 0.4);
const NUMBER_PLATE: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0xffffff), 0.7, 0.0);
const V10_TEXT: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0xff6600), 0.3, 0.7);
const BOLT: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0x888888), 0.3, 0.8);
const WHEEL_CENTRE: MaterialSpec = MaterialSpec::solid(Paint::Fixed(0xcccccc), 0.2, 0.9);

/// Every recolorable part of the car model, keyed by glTF node name
pub const CAR_PARTS: &[(&str, MaterialSpec)] = &[
    // Body panels follow the picked color
    ("o_Body_Plane", BODY),
    ("o_Doors_Plane004", BODY),
    ("o_Roof_Plane021", BODY),
    ("o_Mirrors_Plane016", BODY),
    // Carbon fiber
    ("o_CarbonTop_Plane014", CARBON),
    ("o_CarbonBack_Plane019", CARBON),
    ("o_CarbonFront_Plane010", CARBON),
    // Wheels
    ("o_Wheel_Circle004", WHEEL),
    ("o_Wheel001_Circle009", WHEEL),
    ("o_Wheel002_Circle012", WHEEL),
    ("o_Wheel003_Circle019", WHEEL),
    // Tyres
    ("o_Tyre(Front)_Circle", TYRE),
    ("o_Tyre(Front)001_Circle010", TYRE),
    ("o_Tyre(Front)002_Circle011", TYRE),
    ("o_Tyre(Front)003_Circle020", TYRE),
    // Brakes
    ("o_Brake_Plane006", BRAKE_CALIPER),
    ("o_Brake001_Plane009", BRAKE_CALIPER),
    ("o_Brake002_Plane011", BRAKE_CALIPER),
    ("o_Brake003_Plane012", BRAKE_CALIPER),
    ("o_BrakeDisc_Cylinder001", BRAKE_DISC),
    ("o_BrakeDisc001_Cylinder000", BRAKE_DISC),
    ("o_BrakeDisc002_Cylinder002", BRAKE_DISC),
    ("o_BrakeDisc003_Cylinder003", BRAKE_DISC),
    // Glass
    ("o_Windscreen(Front)_Plane023", MaterialSpec::glass(GLASS_BLUE, 0.7)),
    ("o_Windscreen(Back)_Plane022", MaterialSpec::glass(GLASS_BLUE, 0.3)),
    ("o_GlassFrontHighlight_Plane007", MaterialSpec::glass(GLASS_BLUE, 0.2)),
    ("o_GlassBackHighlight_Plane015", MaterialSpec::glass(GLASS_BLUE, 0.2)),
    ("o_MirrorsGlass_Plane017", MaterialSpec::glass(GLASS_BLUE, 0.3)),
    ("o_MirrorsLightGlass_Plane018", MaterialSpec::glass(GLASS_BLUE, 0.3)),
    ("o_Doors001_Plane026", MaterialSpec::glass(GLASS_BLUE, 0.3)),
    // Lights
    ("o_LightFrontHighlight_Plane008", MaterialSpec::light(0xffffaa, 0.2, 1.5)),
    ("o_LightBackHighlight_Plane028", MaterialSpec::light(0xff4444, 0.2, 1.5)),
    ("o_FarLightBall_Icosphere001", MaterialSpec::light(0xffffff, 0.1, 2.0)),
    ("o_MirrorsLED_Icosphere", MaterialSpec::light(0x00ff00, 0.1, 1.5)),
    // Logos
    ("o_AudiLogo(Front)_Circle007", LOGO_CHROME),
    ("o_AudiLogo(Back)_Circle021", LOGO_CHROME),
    ("o_AudiLogo(Wheel)_Circle008", LOGO_CHROME),
    ("o_AudiLogo(Wheel)001_Circle001", LOGO_CHROME),
    ("o_AudiLogo(Wheel)002_Circle015", LOGO_CHROME),
    ("o_AudiLogo(Wheel)003_Circle016", LOGO_CHROME),
    ("o_ExhaustSystem_Plane024", EXHAUST),
    // Grilles and intakes
    ("o_Honeycomb(front)_honeycomb001", HONEYCOMB),
    ("o_Honeycomb(ModdleBack)_honeycomb002", HONEYCOMB),
    ("o_Honeycomb(TopBack)_honeycomb003", HONEYCOMB),
    ("o_Honeycomb(BottomBack)_honeycomb004", HONEYCOMB),
    ("o_Honeycomb(Top)_honeycomb006", HONEYCOMB),
    ("o_Honeycomb(FrontSide)_honeycomb007", HONEYCOMB),
    ("o_HoneycombAirInput_honeycomb008", HONEYCOMB),
    ("o_AirInput_Plane013", AIR_INPUT),
    ("o_AirInputFrontDetail_Plane025", AIR_INPUT),
    ("o_AirBackOutput_Plane020", AIR_INPUT),
    // Details
    ("o_NumbrePlateAudiR8(Font)_NumernSchildAudiR8", NUMBER_PLATE),
    ("o_NumbrePlateAudiR8(Back)_NumernSchildAudiR8001", NUMBER_PLATE),
    ("o_v10_Text", V10_TEXT),
    ("o_Bolt_Circle005", BOLT),
    ("o_Bolt001_Circle003", BOLT),
    ("o_Bolt002_Circle013", BOLT),
    ("o_Bolt003_Circle018", BOLT),
    ("o_WheelCentre_Circle006", WHEEL_CENTRE),
    ("o_WheelCentre001_Circle002", WHEEL_CENTRE),
    ("o_WheelCentre002_Circle014", WHEEL_CENTRE),
    ("o_WheelCentre003_Circle017", WHEEL_CENTRE),
];

/// Immutable name-to-material lookup
#[derive(Debug, Clone)]
pub struct MaterialTable {
    entries: HashMap<&'static str, MaterialSpec>,
}

impl MaterialTable {
    /// Build a table from `(node name, spec)` pairs
    pub fn from_entries(entries: &[(&'static str, MaterialSpec)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// The car model table
    pub fn car() -> Self {
        Self::from_entries(CAR_PARTS)
    }

    pub fn get(&self, name: &str) -> Option<&MaterialSpec> {
        self.entries.get(name)
    }

    /// Look up a renderable node: its own name first, then its group's name
    pub fn resolve(&self, node_name: Option<&str>, group_name: Option<&str>) -> Option<&MaterialSpec> {
        node_name
            .and_then(|name| self.get(name))
            .or_else(|| group_name.and_then(|name| self.get(name)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resource holding the car material table, built once at startup
#[derive(Resource, Debug, Clone)]
pub struct CarMaterialTable(pub MaterialTable);

impl Default for CarMaterialTable {
    fn default() -> Self {
        Self(MaterialTable::car())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_table_has_unique_names() {
        let table = MaterialTable::car();
        assert_eq!(table.len(), CAR_PARTS.len());
        assert!(table.len() >= 60);
    }

    #[test]
    fn test_body_parts_are_dynamic() {
        let table = MaterialTable::car();
        for name in ["o_Body_Plane", "o_Doors_Plane004", "o_Roof_Plane021", "o_Mirrors_Plane016"] {
            assert_eq!(table.get(name).unwrap().paint, Paint::Body, "{name}");
        }
        let dynamic = CAR_PARTS.iter().filter(|(_, spec)| spec.paint == Paint::Body).count();
        assert_eq!(dynamic, 4);
    }

    #[test]
    fn test_resolve_prefers_node_name() {
        let table = MaterialTable::car();
        let spec = table.resolve(Some("o_Wheel_Circle004"), Some("o_Body_Plane")).unwrap();
        assert_eq!(spec.paint, Paint::Fixed(0x1a1a1a));
    }

    #[test]
    fn test_resolve_falls_back_to_group() {
        let table = MaterialTable::car();
        let spec = table.resolve(Some("Mesh.017"), Some("o_Body_Plane")).unwrap();
        assert_eq!(spec.paint, Paint::Body);
        assert!(table.resolve(Some("Mesh.017"), None).is_none());
        assert!(table.resolve(None, Some("o_UnknownPart")).is_none());
    }

    #[test]
    fn test_base_color_substitution() {
        let red = Srgba::rgb(1.0, 0.0, 0.0);
        assert_eq!(BODY.base_color(red), red);
        assert_eq!(WHEEL.base_color(red), srgb_from_hex(0x1a1a1a));
    }

    #[test]
    fn test_light_emits_its_own_color() {
        let table = MaterialTable::car();
        let spec = table.get("o_MirrorsLED_Icosphere").unwrap();
        assert_eq!(spec.emissive_color(), Srgba::rgb_u8(0, 255, 0));
        assert_eq!(spec.emissive_intensity, 1.5);
        assert_eq!(CARBON.emissive_color(), Srgba::BLACK);
    }

    #[test]
    fn test_srgb_from_hex() {
        assert_eq!(srgb_from_hex(0xff6600), Srgba::rgb_u8(0xff, 0x66, 0x00));
    }
}
