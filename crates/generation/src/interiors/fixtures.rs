//! Interior fixture builders.
//!
//! Each builder spawns one small assembly (a few cubes and cylinders)
//! centered on a given point, skins it, files every piece into the given
//! group, and returns the spawned ids. Sizes are in world units and sit
//! on the fixture's local floor (`center.z` is the floor height).

use std::sync::Arc;

use bevy::math::Vec3;
use bevy::prelude::Transform;
use engine::{EngineError, GroupId, MaterialGraph, ObjectId, PrimitiveSpec, Vec3Spec};
use rand::Rng;

use crate::palette;
use crate::GenContext;

fn spawn_box(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    size: Vec3,
    material: &Arc<MaterialGraph>,
) -> ObjectId {
    let id = ctx.scene.spawn(
        name,
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(size.x, size.y, size.z),
        },
        Transform::from_translation(center),
        group,
    );
    ctx.scene.assign_material(id, Arc::clone(material));
    id
}

/// Horizontal slab (floors, ceilings, desktops).
pub fn slab(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    footprint: (f32, f32),
    thickness: f32,
    material: &Arc<MaterialGraph>,
) -> ObjectId {
    spawn_box(
        ctx,
        group,
        name,
        center,
        Vec3::new(footprint.0, footprint.1, thickness),
        material,
    )
}

/// Axis-aligned wall between two floor points. The wall runs along
/// whichever axis separates `start` and `end` the most; `thickness` fills
/// the other.
pub fn wall(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    start: Vec3,
    end: Vec3,
    height: f32,
    thickness: f32,
    material: &Arc<MaterialGraph>,
) -> ObjectId {
    let delta = end - start;
    let size = if delta.x.abs() >= delta.y.abs() {
        Vec3::new(delta.x.abs().max(thickness), thickness, height)
    } else {
        Vec3::new(thickness, delta.y.abs().max(thickness), height)
    };
    let center = (start + end) * 0.5 + Vec3::Z * (height * 0.5);
    spawn_box(ctx, group, name, center, size, material)
}

/// Door assembly: frame posts, lintel, and the sliding panel.
pub fn door(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    width: f32,
    height: f32,
    material: &Arc<MaterialGraph>,
) -> Vec<ObjectId> {
    let post = Vec3::new(0.15, 0.3, height);
    let mut ids = vec![
        spawn_box(
            ctx,
            group,
            &format!("{name}_PostL"),
            center + Vec3::new(-width * 0.5, 0.0, height * 0.5),
            post,
            material,
        ),
        spawn_box(
            ctx,
            group,
            &format!("{name}_PostR"),
            center + Vec3::new(width * 0.5, 0.0, height * 0.5),
            post,
            material,
        ),
        spawn_box(
            ctx,
            group,
            &format!("{name}_Lintel"),
            center + Vec3::new(0.0, 0.0, height + 0.1),
            Vec3::new(width + 0.3, 0.3, 0.2),
            material,
        ),
    ];
    ids.push(spawn_box(
        ctx,
        group,
        &format!("{name}_Panel"),
        center + Vec3::new(0.0, 0.0, height * 0.5),
        Vec3::new(width - 0.1, 0.08, height - 0.05),
        material,
    ));
    ids
}

/// Interior window: frame plus glass pane.
pub fn window(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    width: f32,
    height: f32,
    frame_material: &Arc<MaterialGraph>,
) -> Result<Vec<ObjectId>, EngineError> {
    let glass = ctx
        .materials
        .build_graph("Window_Glass", palette::window_glass_stages())?;
    Ok(vec![
        spawn_box(
            ctx,
            group,
            &format!("{name}_Frame"),
            center,
            Vec3::new(width, 0.12, height),
            frame_material,
        ),
        spawn_box(
            ctx,
            group,
            &format!("{name}_Glass"),
            center,
            Vec3::new(width - 0.2, 0.05, height - 0.2),
            &glass,
        ),
    ])
}

/// Desk: top slab and four legs.
pub fn desk(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    material: &Arc<MaterialGraph>,
) -> Vec<ObjectId> {
    let mut ids = vec![spawn_box(
        ctx,
        group,
        &format!("{name}_Top"),
        center + Vec3::Z * 0.75,
        Vec3::new(1.6, 0.8, 0.06),
        material,
    )];
    for (i, (sx, sy)) in [(1.0_f32, 1.0_f32), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)]
        .iter()
        .enumerate()
    {
        ids.push(spawn_box(
            ctx,
            group,
            &format!("{name}_Leg_{i}"),
            center + Vec3::new(sx * 0.7, sy * 0.32, 0.36),
            Vec3::new(0.06, 0.06, 0.72),
            material,
        ));
    }
    ids
}

/// Chair: seat, backrest, four legs.
pub fn chair(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    material: &Arc<MaterialGraph>,
) -> Vec<ObjectId> {
    let mut ids = vec![
        spawn_box(
            ctx,
            group,
            &format!("{name}_Seat"),
            center + Vec3::Z * 0.45,
            Vec3::new(0.45, 0.45, 0.05),
            material,
        ),
        spawn_box(
            ctx,
            group,
            &format!("{name}_Back"),
            center + Vec3::new(0.0, -0.2, 0.7),
            Vec3::new(0.45, 0.05, 0.5),
            material,
        ),
    ];
    for (i, (sx, sy)) in [(1.0_f32, 1.0_f32), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)]
        .iter()
        .enumerate()
    {
        ids.push(spawn_box(
            ctx,
            group,
            &format!("{name}_Leg_{i}"),
            center + Vec3::new(sx * 0.18, sy * 0.18, 0.21),
            Vec3::new(0.04, 0.04, 0.42),
            material,
        ));
    }
    ids
}

/// Workstation: base unit, stand, screen, keyboard. The screen glows.
pub fn computer(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    material: &Arc<MaterialGraph>,
) -> Result<Vec<ObjectId>, EngineError> {
    let screen_glow = ctx
        .materials
        .build_graph("Hologram", palette::hologram_stages())?;
    Ok(vec![
        spawn_box(
            ctx,
            group,
            &format!("{name}_Base"),
            center + Vec3::Z * 0.03,
            Vec3::new(0.4, 0.3, 0.06),
            material,
        ),
        spawn_box(
            ctx,
            group,
            &format!("{name}_Stand"),
            center + Vec3::Z * 0.15,
            Vec3::new(0.05, 0.05, 0.2),
            material,
        ),
        spawn_box(
            ctx,
            group,
            &format!("{name}_Screen"),
            center + Vec3::new(0.0, 0.02, 0.4),
            Vec3::new(0.55, 0.03, 0.32),
            &screen_glow,
        ),
        spawn_box(
            ctx,
            group,
            &format!("{name}_Keyboard"),
            center + Vec3::new(0.0, 0.25, 0.02),
            Vec3::new(0.4, 0.15, 0.03),
            material,
        ),
    ])
}

/// Server rack: cabinet, five server units, and a random scatter of
/// status lights.
pub fn server_rack(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    material: &Arc<MaterialGraph>,
) -> Result<Vec<ObjectId>, EngineError> {
    let mut ids = vec![spawn_box(
        ctx,
        group,
        &format!("{name}_Cabinet"),
        center + Vec3::Z * 1.0,
        Vec3::new(0.6, 0.8, 2.0),
        material,
    )];
    for i in 0..5 {
        ids.push(spawn_box(
            ctx,
            group,
            &format!("{name}_Unit_{i}"),
            center + Vec3::new(0.0, -0.42, 0.3 + i as f32 * 0.35),
            Vec3::new(0.5, 0.05, 0.25),
            material,
        ));
    }
    let green = ctx.materials.build_graph(
        "Status_Light_Green",
        palette::emission_stages([0.1, 1.0, 0.2, 1.0], 1.5),
    )?;
    let red = ctx.materials.build_graph(
        "Status_Light_Red",
        palette::emission_stages([1.0, 0.1, 0.1, 1.0], 1.5),
    )?;
    for i in 0..10 {
        let lit = ctx.rng.0.gen_bool(0.7);
        let x = ctx.rng.0.gen_range(-0.2..0.2_f32);
        let z = ctx.rng.0.gen_range(0.3..1.9_f32);
        ids.push(spawn_box(
            ctx,
            group,
            &format!("{name}_Light_{i}"),
            center + Vec3::new(x, -0.45, z),
            Vec3::splat(0.03),
            if lit { &green } else { &red },
        ));
    }
    Ok(ids)
}

/// Free-standing hologram projection: emitter puck plus the floating pane.
pub fn hologram(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    material: &Arc<MaterialGraph>,
) -> Result<Vec<ObjectId>, EngineError> {
    let glow = ctx
        .materials
        .build_graph("Hologram", palette::hologram_stages())?;
    let puck = ctx.scene.spawn(
        &format!("{name}_Emitter"),
        &PrimitiveSpec::Cylinder {
            segments: 12,
            radius: 0.2,
            depth: 0.08,
        },
        Transform::from_translation(center + Vec3::Z * 0.04),
        group,
    );
    ctx.scene.assign_material(puck, Arc::clone(material));
    let pane = ctx.scene.spawn(
        &format!("{name}_Projection"),
        &PrimitiveSpec::Plane { size: 0.8 },
        Transform::from_translation(center + Vec3::Z * 1.0)
            .with_rotation(bevy::math::Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        group,
    );
    ctx.scene.assign_material(pane, glow);
    Ok(vec![puck, pane])
}

/// Bunk bed for quarters.
pub fn bed(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    center: Vec3,
    material: &Arc<MaterialGraph>,
) -> Vec<ObjectId> {
    vec![
        spawn_box(
            ctx,
            group,
            &format!("{name}_Frame"),
            center + Vec3::Z * 0.25,
            Vec3::new(0.9, 2.0, 0.5),
            material,
        ),
        spawn_box(
            ctx,
            group,
            &format!("{name}_Mattress"),
            center + Vec3::Z * 0.56,
            Vec3::new(0.85, 1.9, 0.12),
            material,
        ),
    ]
}
