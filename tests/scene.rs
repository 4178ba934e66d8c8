use sphsim::visualization::geometry::ROOM_TRIANGLES;
use sphsim::{BodyInstance, Scenario, SceneBuilder, SceneGeometry, SimError, Vec3, Vertex, MAX_TRIANGLES};

/// One unit sphere at `position`
pub fn instance(position: [f32; 3]) -> BodyInstance {
    BodyInstance {
        position: Vec3::from(position),
        radius: 0.8,
        color: Vec3::new(0.2, 0.4, 0.6),
    }
}

/// Corner positions of triangle `t`
pub fn triangle(scene: &SceneGeometry, t: usize) -> [Vec3; 3] {
    [0, 1, 2].map(|k| Vec3::from(scene.vertices[scene.indices[3 * t + k] as usize].position))
}

// ==================================================================================
// Room
// ==================================================================================

#[test]
fn empty_scene_is_just_the_room() {
    let scene = SceneBuilder::new(5.0).build(&[]).expect("room fits");

    assert_eq!(scene.triangle_count(), ROOM_TRIANGLES);
    assert_eq!(scene.vertices.len(), 24);
    for v in &scene.vertices {
        assert!(v.position.iter().all(|c| c.abs() <= 5.0));
        assert!(v.position.iter().any(|c| c.abs() == 5.0));
    }
}

#[test]
fn room_faces_point_inwards() {
    let scene = SceneBuilder::new(5.0).build(&[]).expect("room fits");

    for t in 0..scene.triangle_count() {
        let [a, b, c] = triangle(&scene, t);
        let face = (b - a).cross(&(c - a));
        let normal = Vec3::from(scene.vertices[scene.indices[3 * t] as usize].normal);

        // winding agrees with the stored normal, which faces the centre
        assert!(face.dot(&normal) > 0.0, "triangle {} winds the wrong way", t);
        assert!(normal.dot(&(-a)) > 0.0);
    }
}

// ==================================================================================
// Spheres
// ==================================================================================

#[test]
fn sphere_triangle_count_matches_tessellation() {
    let builder = SceneBuilder::new(5.0);
    let bodies = [instance([0.0, 0.0, 0.0]), instance([2.0, 0.0, 0.0])];
    let scene = builder.build(&bodies).expect("fits");

    assert_eq!(builder.sphere_triangles(), 24 * 22);
    assert_eq!(scene.triangle_count(), builder.triangle_count(2));
    assert_eq!(scene.vertices.len(), 24 + 2 * 25 * 13);
}

#[test]
fn sphere_vertices_sit_on_the_surface() {
    let b = instance([1.0, -2.0, 0.5]);
    let scene = SceneBuilder::new(5.0).build(&[b]).expect("fits");

    for v in &scene.vertices[24..] {
        let p = Vec3::from(v.position);
        let n = Vec3::from(v.normal);
        assert!(((p - b.position).norm() - b.radius).abs() < 1e-5);
        assert!((n.norm() - 1.0).abs() < 1e-5);
        assert_eq!(v.color, [0.2, 0.4, 0.6]);
    }
}

#[test]
fn sphere_faces_point_outwards() {
    let b = instance([0.0, 0.0, 0.0]);
    let builder = SceneBuilder {
        segments: 8,
        rings: 6,
        ..SceneBuilder::new(5.0)
    };
    let scene = builder.build(&[b]).expect("fits");

    for t in ROOM_TRIANGLES..scene.triangle_count() {
        let [p0, p1, p2] = triangle(&scene, t);
        let face = (p1 - p0).cross(&(p2 - p0));
        let centroid = (p0 + p1 + p2) / 3.0;
        assert!(face.dot(&(centroid - b.position)) > 0.0, "triangle {} faces inwards", t);
    }
}

#[test]
fn indices_stay_in_bounds() {
    let scenario = Scenario::initialize(2022);
    let scene = SceneBuilder::new(5.0).build(&scenario.body_instances()).expect("fits");

    let n = scene.vertices.len() as u32;
    assert!(scene.indices.iter().all(|&i| i < n));
    assert_eq!(scene.indices.len() % 3, 0);
}

// ==================================================================================
// Capacity and reuse
// ==================================================================================

#[test]
fn over_budget_scene_is_refused() {
    let builder = SceneBuilder {
        segments: 64,
        rings: 64,
        ..SceneBuilder::new(50.0)
    };
    let per_sphere = builder.sphere_triangles();
    let count = MAX_TRIANGLES / per_sphere + 1;
    let bodies = vec![instance([0.0, 0.0, 0.0]); count];

    match builder.build(&bodies) {
        Err(SimError::SceneCapacity { requested, capacity }) => {
            assert_eq!(capacity, MAX_TRIANGLES);
            assert!(requested > capacity);
        }
        other => panic!("expected capacity error, got {:?}", other.map(|s| s.triangle_count())),
    }
}

#[test]
fn build_into_replaces_previous_frame() {
    let builder = SceneBuilder::new(5.0);
    let mut scene = SceneGeometry::default();

    builder.build_into(&[instance([0.0, 0.0, 0.0]); 3], &mut scene).expect("fits");
    builder.build_into(&[instance([1.0, 1.0, 1.0])], &mut scene).expect("fits");

    assert_eq!(scene.triangle_count(), builder.triangle_count(1));
}

#[test]
fn byte_views_match_buffer_sizes() {
    let scene = SceneBuilder::new(5.0).build(&[instance([0.0, 0.0, 0.0])]).expect("fits");

    assert_eq!(scene.vertex_bytes().len(), scene.vertices.len() * std::mem::size_of::<Vertex>());
    assert_eq!(scene.index_bytes().len(), scene.indices.len() * 4);
    assert_eq!(std::mem::size_of::<Vertex>(), 36);
}

// ==================================================================================
// Frame data
// ==================================================================================

#[test]
fn frame_reports_every_body() {
    let scenario = Scenario::initialize(2022);
    let frame = scenario.frame(16.0 / 9.0);

    assert_eq!(frame.bodies.len(), 64);
    for (inst, body) in frame.bodies.iter().zip(scenario.system.bodies.iter()) {
        assert_eq!(inst.position, body.x);
        assert_eq!(inst.color, body.color);
        assert_eq!(inst.radius, scenario.parameters.radius);
    }

    // w = z column of the projection
    assert_eq!(frame.projection[11], 1.0);
    assert_eq!(frame.projection[15], 0.0);
    assert_eq!(frame.view[15], 1.0);
}

#[test]
fn degenerate_tessellation_is_refused() {
    for (segments, rings) in [(24, 0), (24, 1), (2, 12), (0, 0)] {
        let builder = SceneBuilder {
            segments,
            rings,
            ..SceneBuilder::new(5.0)
        };
        assert!(
            matches!(builder.build(&[instance([0.0, 0.0, 0.0])]), Err(SimError::InvalidConfig(_))),
            "{} x {} should be refused",
            segments,
            rings
        );
    }

    let flat = SceneBuilder {
        rings: 0,
        ..SceneBuilder::new(5.0)
    };
    assert_eq!(flat.sphere_triangles(), 0);
    assert_eq!(flat.triangle_count(3), ROOM_TRIANGLES);
}
