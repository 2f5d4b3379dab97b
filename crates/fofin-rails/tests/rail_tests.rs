use std::collections::HashSet;

use fofin_core::traits::{MeshTopology, Validate};
use fofin_rails::batch;
use fofin_rails::{continuous_edge_line, face_strip, parallel_edges};
use fofin_topology::{FaceId, Mesh, Point3, VertexId};

struct Fixture {
    mesh: Mesh,
    v: Vec<VertexId>,
    f: Vec<FaceId>,
}

fn build(positions: Vec<Point3>, faces: Vec<Vec<usize>>) -> Fixture {
    let mesh = Mesh::from_vertices_and_faces(&positions, &faces).unwrap();
    mesh.validate().unwrap();
    let v = mesh.vertices.keys().collect();
    let f = mesh.faces.keys().collect();
    Fixture { mesh, v, f }
}

/// `nx` by `ny` quads; vertex `(i, j)` at index `j * (nx + 1) + i`, faces row by row.
fn grid(nx: usize, ny: usize) -> Fixture {
    let positions = (0..=ny)
        .flat_map(|j| (0..=nx).map(move |i| Point3::new(i as f64, j as f64, 0.0)))
        .collect();
    let id = |i: usize, j: usize| j * (nx + 1) + i;
    let faces = (0..ny)
        .flat_map(|j| (0..nx).map(move |i| vec![id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1)]))
        .collect();
    build(positions, faces)
}

/// Quad mesh wrapped in `u` (`around` quads per ring) and, optionally, in `v`.
fn wrapped(around: usize, rows: usize, torus: bool) -> Fixture {
    let rings = if torus { rows } else { rows + 1 };
    let positions = (0..rings)
        .flat_map(|j| {
            (0..around).map(move |i| {
                let t = i as f64 / around as f64 * std::f64::consts::TAU;
                Point3::new(t.cos(), t.sin(), j as f64)
            })
        })
        .collect();
    let id = move |i: usize, j: usize| (j % rings) * around + i % around;
    let faces = (0..rows)
        .flat_map(|j| (0..around).map(move |i| vec![id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1)]))
        .collect();
    build(positions, faces)
}

fn unordered(rail: &[(VertexId, VertexId)]) -> HashSet<(VertexId, VertexId)> {
    rail.iter().map(|&(a, b)| if a < b { (a, b) } else { (b, a) }).collect()
}

#[test]
fn test_center_horizontal_line_of_3x3_grid() {
    let Fixture { mesh, v, .. } = grid(3, 3);
    let line = continuous_edge_line(&mesh, (v[5], v[6]), true).unwrap();

    // Left to right along row j = 1, each edge in its registered orientation
    assert_eq!(line, vec![(v[5], v[4]), (v[6], v[5]), (v[7], v[6])]);
}

#[test]
fn test_corner_face_strip_of_3x3_grid() {
    let Fixture { mesh, f, .. } = grid(3, 3);
    let strip = face_strip(&mesh, f[0]).unwrap();
    assert_eq!(strip, vec![f[0], f[3], f[6]]);
}

#[test]
fn test_line_symmetry_under_seed_reversal() {
    let Fixture { mesh, .. } = grid(4, 3);
    for (a, b) in mesh.canonical_edges() {
        for directed in [false, true] {
            let forward = continuous_edge_line(&mesh, (a, b), directed).unwrap();
            let backward = continuous_edge_line(&mesh, (b, a), directed).unwrap();
            assert_eq!(unordered(&forward), unordered(&backward));
        }
    }
}

#[test]
fn test_valence_gate_on_triangle_fan() {
    // Hexagonal fan: the only interior vertex has degree 6
    let mut positions = vec![Point3::ZERO];
    for k in 0..6 {
        let t = k as f64 / 6.0 * std::f64::consts::TAU;
        positions.push(Point3::new(t.cos(), t.sin(), 0.0));
    }
    let faces = (0..6).map(|k| vec![0, 1 + k, 1 + (k + 1) % 6]).collect();
    let Fixture { mesh, .. } = build(positions, faces);

    for seed in mesh.canonical_edges() {
        assert_eq!(continuous_edge_line(&mesh, seed, false).unwrap(), vec![seed]);
    }
}

#[test]
fn test_quad_gate_for_parallel_edges() {
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.5, 2.0, 0.0),
    ];
    let Fixture { mesh, v, .. } = build(positions, vec![vec![0, 1, 2, 3], vec![3, 2, 4]]);

    let rail = parallel_edges(&mesh, (v[0], v[1])).unwrap();
    assert_eq!(rail, vec![(v[2], v[3]), (v[0], v[1])]);
}

#[test]
fn test_parallel_edges_of_grid_column() {
    let Fixture { mesh, v, .. } = grid(3, 3);
    let rail = parallel_edges(&mesh, (v[1], v[2])).unwrap();
    assert_eq!(
        rail,
        vec![(v[14], v[13]), (v[10], v[9]), (v[6], v[5]), (v[1], v[2])]
    );
}

#[test]
fn test_cylinder_face_strip_covers_every_row_once() {
    let rows = 5;
    let Fixture { mesh, f, .. } = wrapped(6, rows, false);

    let strip = face_strip(&mesh, f[0]).unwrap();
    assert_eq!(strip.len(), rows);
    assert_eq!(strip.iter().collect::<HashSet<_>>().len(), rows);
    assert_eq!(*strip.last().unwrap(), f[(rows - 1) * 6]);
    assert!(mesh.boundary_faces().contains(strip.last().unwrap()));
}

#[test]
fn test_torus_rails_close_without_repeats() {
    let Fixture { mesh, v, f } = wrapped(4, 4, true);
    assert!(mesh.boundary_vertices().is_empty());

    let line = continuous_edge_line(&mesh, (v[0], v[1]), false).unwrap();
    assert_eq!(line.len(), 4);
    assert_eq!(unordered(&line).len(), 4);

    let rail = parallel_edges(&mesh, (v[0], v[1])).unwrap();
    assert_eq!(rail.len(), 4);
    assert_eq!(unordered(&rail).len(), 4);

    // No boundary, so no strip can be anchored
    assert!(face_strip(&mesh, f[0]).unwrap().is_empty());
}

#[test]
fn test_directed_results_are_registered_edges() {
    let Fixture { mesh, .. } = grid(4, 3);
    let edges = mesh.canonical_edges();
    for &seed in &edges {
        let line = continuous_edge_line(&mesh, seed, true).unwrap();
        assert!(line.iter().all(|e| edges.contains(e)));
        let rail = parallel_edges(&mesh, seed).unwrap();
        assert!(rail.iter().all(|e| edges.contains(e)));
    }
}

#[test]
fn test_invalid_seeds_fail_fast() {
    let Fixture { mut mesh, v, f } = grid(2, 2);
    assert!(continuous_edge_line(&mesh, (v[0], v[8]), true).is_err());
    assert!(parallel_edges(&mesh, (v[0], v[4])).is_err());

    mesh.faces.remove(f[0]);
    assert!(face_strip(&mesh, f[0]).is_err());
}

#[test]
fn test_batch_queries_on_shared_mesh() {
    let Fixture { mesh, f, .. } = grid(3, 3);
    let seeds: Vec<_> = mesh.canonical_edges().into_iter().collect();

    let lines = batch::continuous_edge_lines(&mesh, &seeds, true);
    let parallels = batch::parallel_edge_sets(&mesh, &seeds);
    for ((seed, line), rail) in seeds.iter().zip(&lines).zip(&parallels) {
        assert!(unordered(&[*seed]).is_subset(&unordered(line.as_ref().unwrap())));
        assert_eq!(rail.as_ref().unwrap().len(), 4);
    }

    let strips = batch::face_strips(&mesh, &f);
    let lengths: Vec<usize> = strips.into_iter().map(|s| s.unwrap().len()).collect();
    assert_eq!(lengths, vec![3, 3, 3, 3, 0, 3, 3, 3, 3]);
}
