//! Validated material graphs and their point-sampled evaluation.

use std::collections::{HashMap, HashSet};

use bevy::math::Vec3;
use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use crate::error::EngineError;

use super::stage::{RampStop, StageKind, StageSpec};

/// Fully evaluated surface parameters at one sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    pub emission_color: [f32; 4],
    pub emission_strength: f32,
    pub transmission: f32,
    pub ior: f32,
}

impl Default for SurfaceSample {
    fn default() -> Self {
        Self {
            base_color: [0.8, 0.8, 0.8, 1.0],
            metallic: 0.0,
            roughness: 0.5,
            emission_color: [0.0, 0.0, 0.0, 1.0],
            emission_strength: 0.0,
            transmission: 0.0,
            ior: 1.45,
        }
    }
}

/// Immutable DAG of shading stages. Built once through
/// [`MaterialGraph::build`], validated up front, then shared by any number
/// of generated objects via `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialGraph {
    name: String,
    stages: Vec<StageSpec>,
    /// Topological evaluation order (indices into `stages`).
    order: Vec<usize>,
    /// Index of the single `SurfaceOutput` stage.
    output: usize,
    noise_seed: i32,
}

#[derive(Debug, Clone, Copy)]
enum StageValue {
    Scalar(f32),
    Color([f32; 4]),
}

impl StageValue {
    fn as_scalar(self) -> f32 {
        match self {
            StageValue::Scalar(s) => s,
            // perceptual luminance, for ramps wired into scalar sockets
            StageValue::Color([r, g, b, _]) => 0.2126 * r + 0.7152 * g + 0.0722 * b,
        }
    }

    fn as_color(self) -> [f32; 4] {
        match self {
            StageValue::Color(c) => c,
            StageValue::Scalar(s) => [s, s, s, 1.0],
        }
    }
}

impl MaterialGraph {
    /// Validate `stages` and assemble the graph.
    ///
    /// Rejected shapes (all [`EngineError::InvalidGraph`]): duplicate or
    /// unknown stage ids, duplicate inputs on one stage, dependency cycles,
    /// wrong input arity for a stage kind, more or fewer than one
    /// consumer-less stage, or a terminal stage that is not
    /// `SurfaceOutput`. Malformed ramp stop lists are reported separately
    /// as [`EngineError::InvalidRamp`].
    pub fn build(name: &str, stages: Vec<StageSpec>) -> Result<Self, EngineError> {
        let invalid = |reason: String| EngineError::InvalidGraph {
            graph: name.to_string(),
            reason,
        };
        if stages.is_empty() {
            return Err(invalid("graph has no stages".into()));
        }

        let mut index_of: HashMap<&str, usize> = HashMap::new();
        for (i, stage) in stages.iter().enumerate() {
            if index_of.insert(stage.id.as_str(), i).is_some() {
                return Err(invalid(format!("duplicate stage id `{}`", stage.id)));
            }
        }

        let mut consumers = vec![0usize; stages.len()];
        for stage in &stages {
            let mut seen = HashSet::new();
            for input in &stage.inputs {
                let Some(&src) = index_of.get(input.as_str()) else {
                    return Err(invalid(format!(
                        "stage `{}` references unknown input `{input}`",
                        stage.id
                    )));
                };
                // duplicate edges would double-count topo indegrees
                if !seen.insert(input.as_str()) {
                    return Err(invalid(format!(
                        "stage `{}` lists input `{input}` more than once",
                        stage.id
                    )));
                }
                consumers[src] += 1;
            }
        }

        let terminals: Vec<usize> = (0..stages.len()).filter(|&i| consumers[i] == 0).collect();
        let &[output] = terminals.as_slice() else {
            return Err(invalid(format!(
                "expected exactly one terminal stage, found {}",
                terminals.len()
            )));
        };
        if stages[output].kind != StageKind::SurfaceOutput {
            return Err(invalid(format!(
                "terminal stage `{}` is {}, not SurfaceOutput",
                stages[output].id,
                stages[output].kind.label()
            )));
        }

        for stage in &stages {
            Self::check_arity(name, stage, &stages, &index_of)?;
        }

        let order = Self::topo_order(name, &stages, &index_of)?;

        Ok(Self {
            name: name.to_string(),
            noise_seed: name_seed(name),
            stages,
            order,
            output,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    fn check_arity(
        name: &str,
        stage: &StageSpec,
        stages: &[StageSpec],
        index_of: &HashMap<&str, usize>,
    ) -> Result<(), EngineError> {
        let invalid = |reason: String| EngineError::InvalidGraph {
            graph: name.to_string(),
            reason,
        };
        let arity = stage.inputs.len();
        let input_kind =
            |i: usize| -> &StageKind { &stages[index_of[stage.inputs[i].as_str()]].kind };
        match &stage.kind {
            StageKind::ConstantColor { .. }
            | StageKind::ProceduralNoise { .. }
            | StageKind::Emission { .. }
            | StageKind::Transmission { .. } => {
                if arity != 0 {
                    return Err(invalid(format!(
                        "{} stage `{}` takes no inputs, got {arity}",
                        stage.kind.label(),
                        stage.id
                    )));
                }
            }
            StageKind::ColorRamp { stops } => {
                if arity != 1 {
                    return Err(invalid(format!(
                        "ColorRamp stage `{}` needs exactly one input, got {arity}",
                        stage.id
                    )));
                }
                if !matches!(input_kind(0), StageKind::ProceduralNoise { .. }) {
                    return Err(invalid(format!(
                        "ColorRamp stage `{}` must be fed by ProceduralNoise",
                        stage.id
                    )));
                }
                validate_stops(name, &stage.id, stops)?;
            }
            StageKind::Metallic { .. } | StageKind::Roughness { .. } => {
                if arity > 1 {
                    return Err(invalid(format!(
                        "{} stage `{}` takes at most one input, got {arity}",
                        stage.kind.label(),
                        stage.id
                    )));
                }
                if arity == 1
                    && !matches!(
                        input_kind(0),
                        StageKind::ProceduralNoise { .. } | StageKind::ColorRamp { .. }
                    )
                {
                    return Err(invalid(format!(
                        "{} stage `{}` accepts only noise or ramp inputs",
                        stage.kind.label(),
                        stage.id
                    )));
                }
            }
            StageKind::SurfaceOutput => {
                if arity == 0 {
                    return Err(invalid(format!(
                        "SurfaceOutput stage `{}` has no inputs",
                        stage.id
                    )));
                }
                for i in 0..arity {
                    if matches!(
                        input_kind(i),
                        StageKind::ProceduralNoise { .. } | StageKind::SurfaceOutput
                    ) {
                        return Err(invalid(format!(
                            "SurfaceOutput stage `{}` cannot consume {} directly",
                            stage.id,
                            input_kind(i).label()
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Kahn's algorithm; leftover nodes mean a cycle.
    fn topo_order(
        name: &str,
        stages: &[StageSpec],
        index_of: &HashMap<&str, usize>,
    ) -> Result<Vec<usize>, EngineError> {
        let mut in_degree = vec![0usize; stages.len()];
        for stage in stages {
            in_degree[index_of[stage.id.as_str()]] = stage.inputs.len();
        }
        let mut ready: Vec<usize> = (0..stages.len()).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(stages.len());
        while let Some(i) = ready.pop() {
            order.push(i);
            for (j, stage) in stages.iter().enumerate() {
                if stage.inputs.iter().any(|inp| inp == &stages[i].id) {
                    in_degree[j] -= 1;
                    if in_degree[j] == 0 {
                        ready.push(j);
                    }
                }
            }
        }
        if order.len() != stages.len() {
            return Err(EngineError::InvalidGraph {
                graph: name.to_string(),
                reason: "dependency cycle detected".into(),
            });
        }
        Ok(order)
    }

    /// Evaluate every stage at `point` (object-local space) and return the
    /// terminal surface parameters. Deterministic: noise seeds derive from
    /// the graph name and stage position.
    pub fn sample(&self, point: Vec3) -> SurfaceSample {
        let mut values: Vec<Option<StageValue>> = vec![None; self.stages.len()];
        let index_of: HashMap<&str, usize> = self
            .stages
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.as_str(), i))
            .collect();
        let mut out = SurfaceSample::default();

        for &i in &self.order {
            let stage = &self.stages[i];
            let input = |k: usize| values[index_of[stage.inputs[k].as_str()]];
            let next = match &stage.kind {
                StageKind::ConstantColor { rgba } => Some(StageValue::Color(*rgba)),
                StageKind::ProceduralNoise {
                    scale,
                    detail,
                    roughness,
                } => {
                    let noise = self.noise_sampler(i, *scale, *detail, *roughness);
                    let raw = noise.get_noise_3d(point.x, point.y, point.z);
                    Some(StageValue::Scalar(((raw + 1.0) * 0.5).clamp(0.0, 1.0)))
                }
                StageKind::ColorRamp { stops } => {
                    let fac = input(0).map(StageValue::as_scalar).unwrap_or(0.0);
                    Some(StageValue::Color(evaluate_ramp(stops, fac)))
                }
                StageKind::Metallic { value } => Some(StageValue::Scalar(
                    input_or(stage, &input, 0, *value),
                )),
                StageKind::Roughness { value } => Some(StageValue::Scalar(
                    input_or(stage, &input, 0, *value),
                )),
                StageKind::Emission { rgba, .. } => Some(StageValue::Color(*rgba)),
                StageKind::Transmission { weight, .. } => Some(StageValue::Scalar(*weight)),
                StageKind::SurfaceOutput => {
                    // slot routing by input kind; the last write to a slot wins
                    for (k, input_id) in stage.inputs.iter().enumerate() {
                        let src = index_of[input_id.as_str()];
                        let Some(value) = input(k) else { continue };
                        match &self.stages[src].kind {
                            StageKind::ConstantColor { .. } | StageKind::ColorRamp { .. } => {
                                out.base_color = value.as_color();
                            }
                            StageKind::Metallic { .. } => out.metallic = value.as_scalar(),
                            StageKind::Roughness { .. } => out.roughness = value.as_scalar(),
                            StageKind::Emission { strength, .. } => {
                                out.emission_color = value.as_color();
                                out.emission_strength = *strength;
                            }
                            StageKind::Transmission { ior, .. } => {
                                out.transmission = value.as_scalar();
                                out.ior = *ior;
                            }
                            // unreachable past validation
                            StageKind::ProceduralNoise { .. } | StageKind::SurfaceOutput => {}
                        }
                    }
                    None
                }
            };
            values[i] = next;
        }
        out
    }

    fn noise_sampler(&self, stage_index: usize, scale: f32, detail: f32, gain: f32) -> FastNoiseLite {
        let mut noise =
            FastNoiseLite::with_seed(self.noise_seed.wrapping_add(stage_index as i32 * 131));
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(scale * 0.01));
        noise.set_fractal_type(Some(FractalType::FBm));
        noise.set_fractal_octaves(Some((detail.round() as i32).max(1)));
        noise.set_fractal_gain(Some(gain));
        noise
    }
}

fn input_or(
    stage: &StageSpec,
    input: &impl Fn(usize) -> Option<StageValue>,
    k: usize,
    fallback: f32,
) -> f32 {
    if stage.inputs.len() > k {
        input(k).map(StageValue::as_scalar).unwrap_or(fallback)
    } else {
        fallback
    }
}

fn validate_stops(name: &str, stage_id: &str, stops: &[RampStop]) -> Result<(), EngineError> {
    let invalid = |reason: String| EngineError::InvalidRamp {
        graph: name.to_string(),
        reason,
    };
    if stops.len() < 2 {
        return Err(invalid(format!(
            "ramp `{stage_id}` needs at least two stops, got {}",
            stops.len()
        )));
    }
    for stop in stops {
        if !(0.0..=1.0).contains(&stop.position) {
            return Err(invalid(format!(
                "ramp `{stage_id}` stop position {} outside [0, 1]",
                stop.position
            )));
        }
    }
    for pair in stops.windows(2) {
        if pair[1].position <= pair[0].position {
            return Err(invalid(format!(
                "ramp `{stage_id}` stop positions not strictly increasing ({} then {})",
                pair[0].position, pair[1].position
            )));
        }
    }
    Ok(())
}

/// Piecewise-linear interpolation through validated stops; the factor is
/// clamped to the outermost stop colors.
fn evaluate_ramp(stops: &[RampStop], fac: f32) -> [f32; 4] {
    let first = stops[0];
    let last = stops[stops.len() - 1];
    if fac <= first.position {
        return first.rgba;
    }
    if fac >= last.position {
        return last.rgba;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if fac <= b.position {
            let t = (fac - a.position) / (b.position - a.position);
            let mut rgba = [0.0; 4];
            for (c, out) in rgba.iter_mut().enumerate() {
                *out = a.rgba[c] + (b.rgba[c] - a.rgba[c]) * t;
            }
            return rgba;
        }
    }
    last.rgba
}

/// FNV-1a over the graph name, so equal names always reseed identically.
fn name_seed(name: &str) -> i32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in name.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash as i32
}
