// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use serde_json::json;
use topojson_lite_topology::{Error, Geometry, TopoGeometry, Topology, Transform};

fn unit_topology(arcs: serde_json::Value) -> Topology {
    Topology::from_value(json!({
        "type": "Topology",
        "transform": {"scale": [1, 1], "translate": [0, 0]},
        "arcs": arcs,
        "objects": {}
    }))
    .unwrap()
}

#[test]
fn forward_line_accumulates_deltas() {
    let topology = unit_topology(json!([[[0, 0], [1, 1], [1, 0]]]));
    let g = topology
        .to_geometry(&TopoGeometry::line_string(vec![0]))
        .unwrap();
    assert_eq!(
        g,
        Some(Geometry::LineString(vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![2.0, 1.0],
        ]))
    );
}

#[test]
fn complemented_line_runs_backwards() {
    let topology = unit_topology(json!([[[0, 0], [1, 1], [1, 0]]]));
    let g = topology
        .to_geometry(&TopoGeometry::line_string(vec![!0]))
        .unwrap();
    assert_eq!(
        g,
        Some(Geometry::LineString(vec![
            vec![2.0, 1.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ]))
    );
}

#[test]
fn two_point_polygon_ring_is_padded_and_closed() {
    let topology = unit_topology(json!([[[0, 0], [1, 0]]]));
    let g = topology
        .to_geometry(&TopoGeometry::polygon(vec![vec![0]]))
        .unwrap();
    assert_eq!(
        g,
        Some(Geometry::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
        ]]))
    );
}

#[test]
fn collection_of_two_lines_nests_one_level() {
    let topology = unit_topology(json!([[[0, 0], [1, 1]], [[5, 5], [0, 1]]]));
    let object = TopoGeometry::collection(vec![
        TopoGeometry::line_string(vec![1]),
        TopoGeometry::line_string(vec![0]),
    ]);

    let Some(Geometry::GeometryCollection(children)) = topology.to_geometry(&object).unwrap()
    else {
        panic!("expected collection");
    };
    assert_eq!(children.len(), 2);
    assert!(children
        .iter()
        .all(|child| matches!(child, Geometry::LineString(_))));
    assert_eq!(
        children[0],
        Geometry::LineString(vec![vec![5.0, 5.0], vec![5.0, 6.0]])
    );
    assert_eq!(
        children[1],
        Geometry::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0]])
    );

    let empty = topology
        .to_geometry(&TopoGeometry::collection(Vec::new()))
        .unwrap();
    assert_eq!(empty, Some(Geometry::GeometryCollection(Vec::new())));
}

#[test]
fn shared_boundary_between_two_polygons() {
    // Two unit squares side by side sharing the edge x = 1.
    let mut topology = Topology::new().with_transform(Transform::new([0.5, 0.5], [10.0, 20.0]));
    // 0: shared edge (1,0) -> (1,1), quantized as (2,0) -> (2,2)
    topology.add_arc(vec![vec![2.0, 0.0], vec![0.0, 2.0]]);
    // 1: left square remainder (1,1) -> (0,1) -> (0,0) -> (1,0)
    topology.add_arc(vec![
        vec![2.0, 2.0],
        vec![-2.0, 0.0],
        vec![0.0, -2.0],
        vec![2.0, 0.0],
    ]);
    // 2: right square remainder (1,0) -> (2,0) -> (2,1) -> (1,1)
    topology.add_arc(vec![
        vec![2.0, 0.0],
        vec![2.0, 0.0],
        vec![0.0, 2.0],
        vec![-2.0, 0.0],
    ]);
    topology.add_object("left", TopoGeometry::polygon(vec![vec![0, 1]]));
    topology.add_object("right", TopoGeometry::polygon(vec![vec![2, !0]]));

    let collection = topology.to_feature_collection().unwrap();
    let rings: Vec<&Vec<Vec<f64>>> = collection
        .iter()
        .map(|feature| match &feature.geometry {
            Some(Geometry::Polygon(rings)) => &rings[0],
            other => panic!("expected polygon, got {other:?}"),
        })
        .collect();

    for ring in &rings {
        assert_eq!(ring.first(), ring.last());
        assert!(ring.len() >= 4);
    }

    // The shared edge appears forward in one ring and reversed in the other.
    assert_relative_eq!(rings[0][0][0], 11.0);
    assert_relative_eq!(rings[0][0][1], 20.0);
    assert_relative_eq!(rings[0][1][1], 21.0);
    let right = rings[1];
    let n = right.len();
    assert_relative_eq!(right[n - 2][0], 11.0);
    assert_relative_eq!(right[n - 2][1], 21.0);
    assert_relative_eq!(right[n - 1][0], 11.0);
    assert_relative_eq!(right[n - 1][1], 20.0);
}

#[test]
fn unquantized_topology_uses_absolute_arcs() {
    let topology = Topology::from_json(
        r#"{
            "type": "Topology",
            "arcs": [[[102.5, 0.5], [103.5, 1.5]]],
            "objects": {
                "coast": {"type": "MultiLineString", "arcs": [[0], [-1]]},
                "city": {"type": "MultiPoint", "coordinates": [[102.0, 0.5], [104.0, 1.0, 12.0]]}
            }
        }"#,
    )
    .unwrap();

    let coast = topology.to_feature("coast").unwrap().unwrap();
    assert_eq!(
        coast.geometry,
        Some(Geometry::MultiLineString(vec![
            vec![vec![102.5, 0.5], vec![103.5, 1.5]],
            vec![vec![103.5, 1.5], vec![102.5, 0.5]],
        ]))
    );

    let city = topology.to_feature("city").unwrap().unwrap();
    assert_eq!(
        city.geometry,
        Some(Geometry::MultiPoint(vec![
            vec![102.0, 0.5],
            vec![104.0, 1.0, 12.0],
        ]))
    );
}

#[test]
fn unsupported_object_type_fails_the_document() {
    let topology = Topology::from_json(
        r#"{"arcs": [], "objects": {"blob": {"type": "Blob", "arcs": [0]}}}"#,
    )
    .unwrap();

    assert_eq!(
        topology.to_feature_collection(),
        Err(Error::UnsupportedGeometryType("Blob".to_string()))
    );
}
