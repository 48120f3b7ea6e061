use bevy::prelude::*;

/// Surface looks used by the scenery, described independently of any asset handle.
#[derive(Debug, Clone, PartialEq)]
pub enum TMaterial {
    /// Diffuse only, lit by the scene lights.
    Matte {
        color: Srgba,
    },
    /// Ignores lighting entirely.
    Unlit {
        color: Srgba,
        double_sided: bool,
    },
    /// Lit with a noticeable specular highlight.
    Glossy {
        color: Srgba,
    },
    /// Unlit, alpha blended and drawn on top of coplanar ground.
    Decal {
        color: Srgba,
    },
}

impl TMaterial {
    pub fn to_standard_material(&self) -> StandardMaterial {
        match self {
            TMaterial::Matte { color } => StandardMaterial {
                base_color: Color::Srgba(*color),
                perceptual_roughness: 1.0,
                metallic: 0.0,
                reflectance: 0.0,
                ..default()
            },
            TMaterial::Unlit { color, double_sided } => StandardMaterial {
                base_color: Color::Srgba(*color),
                unlit: true,
                double_sided: *double_sided,
                cull_mode: if *double_sided { None } else { Some(bevy::render::render_resource::Face::Back) },
                ..default()
            },
            TMaterial::Glossy { color } => StandardMaterial {
                base_color: Color::Srgba(*color),
                perceptual_roughness: 0.3,
                reflectance: 0.5,
                ..default()
            },
            TMaterial::Decal { color } => StandardMaterial {
                base_color: Color::Srgba(*color),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                depth_bias: 10.0,
                ..default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlit_double_sided_disables_culling() {
        let material = TMaterial::Unlit { color: Srgba::WHITE, double_sided: true }.to_standard_material();
        assert!(material.unlit);
        assert!(material.double_sided);
        assert!(material.cull_mode.is_none());
    }

    #[test]
    fn decal_blends() {
        let material = TMaterial::Decal { color: Srgba::hex("305000").unwrap() }.to_standard_material();
        assert_eq!(material.alpha_mode, AlphaMode::Blend);
    }
}
