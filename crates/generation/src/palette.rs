//! Material stage tables.
//!
//! Every graph the generators build comes from one of these factories, so
//! the stage wiring lives in one place and the landmark generators stay
//! declarative. Shared graphs (tier basics, interiors) are keyed by fixed
//! names; per-instance graphs (randomized holo-ad hues) get an index
//! suffix.

use engine::{RampStop, StageKind, StageSpec};

use crate::config::Tier;

// ---------------------------------------------------------------------------
// Tier-wide basics
// ---------------------------------------------------------------------------

pub fn tier_graph_name(tier: Tier) -> &'static str {
    match tier {
        Tier::Upper => "Tier_Upper",
        Tier::Mid => "Tier_Mid",
        Tier::Lower => "Tier_Lower",
    }
}

/// Flat tier look: dark glossy chrome up top, matte grime down low.
pub fn tier_stages(tier: Tier) -> Vec<StageSpec> {
    let (rgba, metallic, roughness) = match tier {
        Tier::Upper => ([0.05, 0.05, 0.1, 1.0], 0.9, 0.1),
        Tier::Mid => ([0.1, 0.1, 0.12, 1.0], 0.5, 0.4),
        Tier::Lower => ([0.15, 0.14, 0.13, 1.0], 0.2, 0.8),
    };
    metal_panel_stages(rgba, metallic, roughness)
}

// ---------------------------------------------------------------------------
// Weathering ramps
// ---------------------------------------------------------------------------

/// Noise-driven two-stop weathering: the noise factor picks between a decay
/// color and the intact surface, and the same ramp drives roughness.
pub fn weathered_stages(
    scale: f32,
    detail: f32,
    gain: f32,
    decay_stop: RampStop,
    intact_stop: RampStop,
) -> Vec<StageSpec> {
    vec![
        StageSpec::new(
            "grime",
            StageKind::ProceduralNoise {
                scale,
                detail,
                roughness: gain,
            },
        ),
        StageSpec::with_inputs(
            "wear_ramp",
            StageKind::ColorRamp {
                stops: vec![decay_stop, intact_stop],
            },
            &["grime"],
        ),
        StageSpec::with_inputs("rough", StageKind::Roughness { value: 0.5 }, &["wear_ramp"]),
        StageSpec::new("metal", StageKind::Metallic { value: 0.6 }),
        StageSpec::with_inputs(
            "out",
            StageKind::SurfaceOutput,
            &["wear_ramp", "rough", "metal"],
        ),
    ]
}

/// Specter station hull: rust patches over scratched metal.
pub fn specter_weathered_stages() -> Vec<StageSpec> {
    weathered_stages(
        10.0,
        6.0,
        0.7,
        RampStop::new(0.4, [0.3, 0.15, 0.1, 1.0]),
        RampStop::new(0.6, [0.5, 0.5, 0.55, 1.0]),
    )
}

/// Rust Vault shell: heavier corrosion, coarser noise.
pub fn rust_vault_stages() -> Vec<StageSpec> {
    weathered_stages(
        15.0,
        10.0,
        0.5,
        RampStop::new(0.3, [0.35, 0.12, 0.05, 1.0]),
        RampStop::new(0.7, [0.45, 0.42, 0.4, 1.0]),
    )
}

// ---------------------------------------------------------------------------
// Emissives and glass
// ---------------------------------------------------------------------------

pub fn emission_stages(rgba: [f32; 4], strength: f32) -> Vec<StageSpec> {
    vec![
        StageSpec::new("glow", StageKind::Emission { rgba, strength }),
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["glow"]),
    ]
}

/// Cyan hologram panes (strength 3).
pub fn hologram_stages() -> Vec<StageSpec> {
    emission_stages([0.0, 0.9, 1.0, 1.0], 3.0)
}

/// Hot pink neon tubing (strength 5).
pub fn neon_light_stages() -> Vec<StageSpec> {
    emission_stages([1.0, 0.1, 0.6, 1.0], 5.0)
}

/// Transmissive pane, optionally glowing (vat fluid, acid streaks).
pub fn glass_stages(rgba: [f32; 4], weight: f32, emission_strength: f32) -> Vec<StageSpec> {
    let mut stages = vec![
        StageSpec::new("tint", StageKind::ConstantColor { rgba }),
        StageSpec::new(
            "pass",
            StageKind::Transmission {
                weight,
                ior: 1.45,
            },
        ),
    ];
    let mut inputs = vec!["tint", "pass"];
    if emission_strength > 0.0 {
        stages.push(StageSpec::new(
            "glow",
            StageKind::Emission {
                rgba,
                strength: emission_strength,
            },
        ));
        inputs.push("glow");
    }
    stages.push(StageSpec::with_inputs(
        "out",
        StageKind::SurfaceOutput,
        &inputs,
    ));
    stages
}

/// Plain window glass.
pub fn window_glass_stages() -> Vec<StageSpec> {
    glass_stages([0.6, 0.75, 0.8, 1.0], 0.9, 0.0)
}

/// Flat metal panel (window covers, shutters).
pub fn metal_panel_stages(rgba: [f32; 4], metallic: f32, roughness: f32) -> Vec<StageSpec> {
    vec![
        StageSpec::new("base", StageKind::ConstantColor { rgba }),
        StageSpec::new("metal", StageKind::Metallic { value: metallic }),
        StageSpec::new("rough", StageKind::Roughness { value: roughness }),
        StageSpec::with_inputs(
            "out",
            StageKind::SurfaceOutput,
            &["base", "metal", "rough"],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Interiors
// ---------------------------------------------------------------------------

/// Matte interior surface with a fixed roughness.
pub fn interior_stages(rgba: [f32; 4], roughness: f32) -> Vec<StageSpec> {
    vec![
        StageSpec::new("base", StageKind::ConstantColor { rgba }),
        StageSpec::new("rough", StageKind::Roughness { value: roughness }),
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["base", "rough"]),
    ]
}

/// Per-landmark interior wall color, named `<landmark>_Interior`.
pub fn interior_wall_stages(kind: crate::config::LandmarkKind) -> Vec<StageSpec> {
    use crate::config::LandmarkKind as K;
    let (rgba, roughness) = match kind {
        K::NeoTech => ([0.12, 0.12, 0.18, 1.0], 0.25),
        K::Specter => ([0.25, 0.22, 0.2, 1.0], 0.7),
        K::BlackNexus => ([0.08, 0.08, 0.09, 1.0], 0.85),
        K::WireNest => ([0.2, 0.17, 0.12, 1.0], 0.9),
        K::RustVault => ([0.3, 0.15, 0.08, 1.0], 0.8),
        K::Militech => ([0.15, 0.16, 0.15, 1.0], 0.5),
        K::Biotechnica => ([0.9, 0.92, 0.95, 1.0], 0.3),
    };
    interior_stages(rgba, roughness)
}
