//! Declarative shading-stage descriptions.

use serde::{Deserialize, Serialize};

/// One color stop of a [`StageKind::ColorRamp`]. Positions are in [0, 1]
/// and must be strictly increasing across the stop list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampStop {
    pub position: f32,
    pub rgba: [f32; 4],
}

impl RampStop {
    pub const fn new(position: f32, rgba: [f32; 4]) -> Self {
        Self { position, rgba }
    }
}

/// Typed shading stage. Parameters live inline; data dependencies are
/// declared separately on [`StageSpec::inputs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StageKind {
    ConstantColor {
        rgba: [f32; 4],
    },
    /// fBm noise factor in [0, 1], sampled in the object's local space.
    ProceduralNoise {
        scale: f32,
        detail: f32,
        roughness: f32,
    },
    /// Remap a scalar factor through color stops (weathering ramps).
    ColorRamp {
        stops: Vec<RampStop>,
    },
    /// Metalness; a scalar input, when connected, overrides `value`.
    Metallic {
        value: f32,
    },
    /// Surface roughness; a scalar input, when connected, overrides `value`.
    Roughness {
        value: f32,
    },
    Emission {
        rgba: [f32; 4],
        strength: f32,
    },
    Transmission {
        weight: f32,
        ior: f32,
    },
    /// The single terminal node every graph must have exactly one of.
    SurfaceOutput,
}

impl StageKind {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            StageKind::ConstantColor { .. } => "ConstantColor",
            StageKind::ProceduralNoise { .. } => "ProceduralNoise",
            StageKind::ColorRamp { .. } => "ColorRamp",
            StageKind::Metallic { .. } => "Metallic",
            StageKind::Roughness { .. } => "Roughness",
            StageKind::Emission { .. } => "Emission",
            StageKind::Transmission { .. } => "Transmission",
            StageKind::SurfaceOutput => "SurfaceOutput",
        }
    }
}

/// One node of a material graph: a unique id, the typed stage, and the ids
/// of the stages feeding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSpec {
    pub id: String,
    pub kind: StageKind,
    pub inputs: Vec<String>,
}

impl StageSpec {
    pub fn new(id: impl Into<String>, kind: StageKind) -> Self {
        Self {
            id: id.into(),
            kind,
            inputs: Vec::new(),
        }
    }

    pub fn with_inputs(id: impl Into<String>, kind: StageKind, inputs: &[&str]) -> Self {
        Self {
            id: id.into(),
            kind,
            inputs: inputs.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
