//! Surface materials.

use pk_math::Vector3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vector3;

/// A diffuse emissive material.
///
/// `roughness` and `metallic` are carried for scene descriptions but the
/// shading model only reads `albedo` and the emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse reflectance, components in [0, 1]
    pub albedo: Color,
    pub roughness: f64,
    pub metallic: f64,
    pub emission_color: Color,
    pub emission_power: f64,
}

impl Material {
    /// Create a new material.
    pub fn new(
        albedo: Color,
        roughness: f64,
        metallic: f64,
        emission_color: Color,
        emission_power: f64,
    ) -> Self {
        Self {
            albedo,
            roughness,
            metallic,
            emission_color,
            emission_power,
        }
    }

    /// A non-emissive material with the given albedo.
    pub fn diffuse(albedo: Color) -> Self {
        Self::new(albedo, 0.0, 0.0, Color::ZERO, 0.0)
    }

    /// Radiance emitted by the surface.
    #[inline]
    pub fn emission(&self) -> Color {
        self.emission_color * self.emission_power
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission().length_squared() > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission() {
        let light = Material::new(
            Color::new(0.8, 0.8, 0.8),
            0.1,
            0.1,
            Color::new(0.8, 0.4, 0.2),
            5.0,
        );
        assert_eq!(light.emission(), Color::new(4.0, 2.0, 1.0));
        assert!(light.is_emissive());
    }

    #[test]
    fn test_zero_power_does_not_emit() {
        // Emission color without power stays dark
        let red = Material::new(Color::new(0.85, 0.0, 0.0), 0.1, 0.1, Color::new(0.35, 0.0, 0.0), 0.0);
        assert_eq!(red.emission(), Color::ZERO);
        assert!(!red.is_emissive());
        assert!(!Material::default().is_emissive());
    }
}
