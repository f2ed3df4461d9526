use std::sync::Arc;

use bevy::math::Vec3;

use crate::error::EngineError;
use crate::material::{MaterialGraph, MaterialLibrary, RampStop, StageKind, StageSpec};

fn weathered_metal_stages() -> Vec<StageSpec> {
    vec![
        StageSpec::new(
            "grime",
            StageKind::ProceduralNoise {
                scale: 10.0,
                detail: 6.0,
                roughness: 0.7,
            },
        ),
        StageSpec::with_inputs(
            "wear_ramp",
            StageKind::ColorRamp {
                stops: vec![
                    RampStop::new(0.4, [0.3, 0.15, 0.1, 1.0]),
                    RampStop::new(0.6, [0.5, 0.5, 0.55, 1.0]),
                ],
            },
            &["grime"],
        ),
        StageSpec::with_inputs("rough", StageKind::Roughness { value: 0.5 }, &["wear_ramp"]),
        StageSpec::new("metal", StageKind::Metallic { value: 0.8 }),
        StageSpec::with_inputs(
            "out",
            StageKind::SurfaceOutput,
            &["wear_ramp", "rough", "metal"],
        ),
    ]
}

fn flat_color_stages(rgba: [f32; 4]) -> Vec<StageSpec> {
    vec![
        StageSpec::new("base", StageKind::ConstantColor { rgba }),
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["base"]),
    ]
}

#[test]
fn test_build_graph_caches_by_name() {
    let mut library = MaterialLibrary::new();
    let first = library
        .build_graph("Specter_Weathered", weathered_metal_stages())
        .unwrap();
    // second build with the same name: identical graph instance, stages ignored
    let second = library
        .build_graph("Specter_Weathered", flat_color_stages([1.0, 0.0, 0.0, 1.0]))
        .unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(library.len(), 1);
    assert_eq!(second.stage_count(), 5);
}

#[test]
fn test_distinct_names_build_distinct_graphs() {
    let mut library = MaterialLibrary::new();
    let a = library
        .build_graph("Tier_Upper", flat_color_stages([0.05, 0.05, 0.1, 1.0]))
        .unwrap();
    let b = library
        .build_graph("Tier_Lower", flat_color_stages([0.15, 0.14, 0.13, 1.0]))
        .unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(library.len(), 2);
}

#[test]
fn test_cycle_is_rejected() {
    let stages = vec![
        StageSpec::with_inputs("a", StageKind::Roughness { value: 0.5 }, &["b"]),
        StageSpec::with_inputs("b", StageKind::Metallic { value: 0.5 }, &["a"]),
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["a", "b"]),
    ];
    let err = MaterialGraph::build("cyclic", stages).unwrap_err();
    assert!(matches!(err, EngineError::InvalidGraph { .. }), "{err}");
}

#[test]
fn test_two_terminals_rejected() {
    let stages = vec![
        StageSpec::new("base", StageKind::ConstantColor { rgba: [1.0; 4] }),
        StageSpec::new(
            "stray",
            StageKind::Emission {
                rgba: [1.0, 0.0, 1.0, 1.0],
                strength: 3.0,
            },
        ),
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["base"]),
    ];
    let err = MaterialGraph::build("dangling", stages).unwrap_err();
    assert!(matches!(err, EngineError::InvalidGraph { .. }), "{err}");
}

#[test]
fn test_terminal_must_be_surface_output() {
    let stages = vec![
        StageSpec::new(
            "noise",
            StageKind::ProceduralNoise {
                scale: 5.0,
                detail: 2.0,
                roughness: 0.5,
            },
        ),
        StageSpec::with_inputs(
            "ramp",
            StageKind::ColorRamp {
                stops: vec![
                    RampStop::new(0.0, [0.0; 4]),
                    RampStop::new(1.0, [1.0; 4]),
                ],
            },
            &["noise"],
        ),
    ];
    let err = MaterialGraph::build("headless", stages).unwrap_err();
    assert!(matches!(err, EngineError::InvalidGraph { .. }), "{err}");
}

#[test]
fn test_unknown_input_rejected() {
    let stages = vec![
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["nope"]),
    ];
    let err = MaterialGraph::build("broken", stages).unwrap_err();
    assert!(matches!(err, EngineError::InvalidGraph { .. }), "{err}");
}

#[test]
fn test_duplicate_input_on_one_stage_rejected() {
    let stages = vec![
        StageSpec::new("base", StageKind::ConstantColor { rgba: [1.0; 4] }),
        StageSpec::new("metal", StageKind::Metallic { value: 0.5 }),
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["base", "metal", "base"]),
    ];
    let err = MaterialGraph::build("doubled", stages).unwrap_err();
    assert!(matches!(err, EngineError::InvalidGraph { .. }), "{err}");
    assert!(err.to_string().contains("more than once"), "{err}");
}

#[test]
fn test_non_increasing_ramp_rejected() {
    let stages = vec![
        StageSpec::new(
            "noise",
            StageKind::ProceduralNoise {
                scale: 15.0,
                detail: 10.0,
                roughness: 0.5,
            },
        ),
        StageSpec::with_inputs(
            "ramp",
            StageKind::ColorRamp {
                stops: vec![
                    RampStop::new(0.7, [0.3, 0.1, 0.05, 1.0]),
                    RampStop::new(0.3, [0.6, 0.6, 0.6, 1.0]),
                ],
            },
            &["noise"],
        ),
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["ramp"]),
    ];
    let err = MaterialGraph::build("rust_ramp", stages).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRamp { .. }), "{err}");
}

#[test]
fn test_sample_flat_color() {
    let graph = MaterialGraph::build("flat", flat_color_stages([0.1, 0.1, 0.12, 1.0])).unwrap();
    let s = graph.sample(Vec3::new(3.0, -2.0, 7.0));
    assert_eq!(s.base_color, [0.1, 0.1, 0.12, 1.0]);
    assert_eq!(s.emission_strength, 0.0);
}

#[test]
fn test_sample_ramp_stays_within_stop_colors() {
    let graph = MaterialGraph::build("weathered", weathered_metal_stages()).unwrap();
    for i in 0..20 {
        let p = Vec3::new(i as f32 * 1.7, i as f32 * -0.9, i as f32 * 0.3);
        let s = graph.sample(p);
        // every channel interpolates between the two stop colors
        assert!(s.base_color[0] >= 0.3 - 1e-6 && s.base_color[0] <= 0.5 + 1e-6);
        assert!(s.base_color[2] >= 0.1 - 1e-6 && s.base_color[2] <= 0.55 + 1e-6);
        assert!((0.0..=1.0).contains(&s.roughness));
        assert_eq!(s.metallic, 0.8);
    }
}

#[test]
fn test_sample_is_deterministic() {
    let a = MaterialGraph::build("weathered", weathered_metal_stages()).unwrap();
    let b = MaterialGraph::build("weathered", weathered_metal_stages()).unwrap();
    let p = Vec3::new(12.5, -4.0, 33.0);
    assert_eq!(a.sample(p), b.sample(p));
}

#[test]
fn test_emission_and_transmission_route_to_slots() {
    let stages = vec![
        StageSpec::new(
            "glow",
            StageKind::Emission {
                rgba: [0.0, 1.0, 0.8, 1.0],
                strength: 3.0,
            },
        ),
        StageSpec::new(
            "glass",
            StageKind::Transmission {
                weight: 0.9,
                ior: 1.45,
            },
        ),
        StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["glow", "glass"]),
    ];
    let graph = MaterialGraph::build("vat_glass", stages).unwrap();
    let s = graph.sample(Vec3::ZERO);
    assert_eq!(s.emission_color, [0.0, 1.0, 0.8, 1.0]);
    assert_eq!(s.emission_strength, 3.0);
    assert_eq!(s.transmission, 0.9);
    assert_eq!(s.ior, 1.45);
}
