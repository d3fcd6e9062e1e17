#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use cspace2d::cspace::{
        BOUNDARY_FACES, CIRCLE_TESSELLATION, CSpace, CSpaceConfig, Metric, Obstacle,
        ObstacleCollection, ObstacleKind,
    };
    use cspace2d::geometry::Transformation;
    use cspace2d::geometry::geo_traits::DistanceTo;
    use cspace2d::geometry::primitives::{Circle, Edge, OrientedRect, Point, Rect, Triangle};
    use cspace2d::planning::{EdgeStatus, check_edges_parallel};

    fn mixed_collection() -> ObstacleCollection {
        let mut collection = ObstacleCollection::new();
        collection.add(Rect::try_new(0.0, 0.0, 1.0, 1.0).unwrap());
        collection.add(Rect::try_new(3.0, 3.0, 4.0, 4.0).unwrap());
        collection.add(
            OrientedRect::try_new(Point(2.0, 0.0), Point(1.0, 1.0), 1.0, 0.5).unwrap(),
        );
        collection
            .add(Triangle::try_new(Point(0.0, 2.0), Point(1.0, 2.0), Point(0.0, 3.0)).unwrap());
        collection
            .add(Triangle::try_new(Point(4.0, 0.0), Point(5.0, 0.0), Point(4.0, 1.0)).unwrap());
        collection.add(Circle::new(Point(2.0, 2.0), 0.5));
        collection
    }

    fn unit_space_with_circle() -> CSpace {
        let mut space = CSpace::new(Rect::try_new(0.0, 0.0, 1.0, 1.0).unwrap(), Metric::Euclidean);
        space.obstacles.add(Circle::new(Point(0.5, 0.5), 0.2));
        space
    }

    #[test]
    fn flattened_index_is_total_and_stable() {
        let collection = mixed_collection();
        assert_eq!(collection.num_obstacles(), 6);

        let expected_kinds = [
            ObstacleKind::Rect,
            ObstacleKind::Rect,
            ObstacleKind::OrientedRect,
            ObstacleKind::Triangle,
            ObstacleKind::Triangle,
            ObstacleKind::Circle,
        ];
        let expected_locals = [0, 1, 0, 0, 1, 0];

        for k in 0..collection.num_obstacles() {
            assert_eq!(collection.kind(k), expected_kinds[k]);
            assert_eq!(collection.local_index(k), expected_locals[k]);
        }

        //the flattened accessor must reproduce direct bucket access
        assert_eq!(collection.obstacle(1), Obstacle::Rect(collection.rects()[1]));
        assert_eq!(
            collection.obstacle(2),
            Obstacle::OrientedRect(collection.boxes()[0])
        );
        assert_eq!(
            collection.obstacle(4),
            Obstacle::Triangle(collection.triangles()[1])
        );
        assert_eq!(
            collection.obstacle(5),
            Obstacle::Circle(collection.circles()[0])
        );
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_is_a_programming_error() {
        let collection = mixed_collection();
        collection.kind(collection.num_obstacles());
    }

    #[test]
    fn distance_is_zero_iff_colliding() {
        let collection = mixed_collection();
        let mut x = -1.0_f32;
        while x <= 5.0 {
            let mut y = -1.0_f32;
            while y <= 5.0 {
                let p = Point(x, y);
                assert_eq!(
                    collection.distance(&p) == 0.0,
                    collection.collides_point(&p),
                    "disagreement at {p:?}"
                );
                y += 0.25;
            }
            x += 0.25;
        }
    }

    #[test]
    fn circle_clearance_subtracts_the_radius() {
        let collection = mixed_collection();
        for circle in [
            Circle::new(Point(2.0, 4.0), 0.3),
            Circle::new(Point(-1.0, -1.0), 0.5),
            Circle::new(Point(0.5, 0.5), 0.1), //center inside an obstacle
        ] {
            let expected = (collection.distance(&circle.center) - circle.radius).max(0.0);
            assert!(approx_eq!(
                f32,
                collection.distance_to_circle(&circle),
                expected,
                epsilon = 1e-6
            ));
        }
    }

    #[test]
    fn aggregate_distance_equals_minimum_over_obstacles() {
        let collection = mixed_collection();
        for p in [
            Point(1.5, 1.5),
            Point(-0.5, 0.5),
            Point(2.5, 3.5),
            Point(0.5, 0.5),
        ] {
            let min_at = (0..collection.num_obstacles())
                .map(|k| collection.distance_at(&p, k))
                .fold(f32::INFINITY, f32::min);
            assert!(approx_eq!(
                f32,
                collection.distance(&p),
                min_at,
                epsilon = 1e-5
            ));
        }
    }

    #[test]
    fn transform_roundtrip_preserves_collision_behavior() {
        let original = mixed_collection();
        let mut transformed = original.clone();

        let t = Transformation::empty().rotate_translate(0.7, (0.3, -0.2));
        transformed.transform(&t);

        //axis-aligned rects migrate to the oriented bucket, their indices are not preserved
        assert!(transformed.rects().is_empty());
        assert_eq!(transformed.boxes().len(), original.boxes().len() + 2);
        //triangles and circles stay put at a stable index
        assert_eq!(transformed.triangles().len(), original.triangles().len());
        assert_eq!(transformed.circles().len(), original.circles().len());

        transformed.transform(&t.clone().inverse());

        let mut x = -1.0_f32;
        while x <= 5.0 {
            let mut y = -1.0_f32;
            while y <= 5.0 {
                let p = Point(x, y);
                //the roundtrip is only exact up to fp error, so distances are compared with a
                //tolerance and collision verdicts only for points with clearance
                assert!(approx_eq!(
                    f32,
                    original.distance(&p),
                    transformed.distance(&p),
                    epsilon = 1e-3
                ));
                if original.distance(&p) > 1e-3 {
                    assert!(!transformed.collides_point(&p), "false positive at {p:?}");
                }
                y += 0.25;
            }
            x += 0.25;
        }
    }

    #[test]
    fn bulk_merge_and_clear() {
        let mut a = ObstacleCollection::new();
        a.add(Circle::new(Point(0.0, 0.0), 1.0));
        let b = mixed_collection();

        a.extend(&b);
        assert_eq!(a.num_obstacles(), 1 + b.num_obstacles());
        //merged buckets keep the fixed kind order: rects of `b` come before the pre-existing circle
        assert_eq!(a.kind(0), ObstacleKind::Rect);
        assert_eq!(a.kind(a.num_obstacles() - 1), ObstacleKind::Circle);

        a.clear();
        assert_eq!(a.num_obstacles(), 0);
        assert!(a.is_empty());
    }

    #[test]
    fn polygon_export_follows_the_flattened_index() {
        let collection = mixed_collection();
        let polygons = collection.to_polygons();
        assert_eq!(polygons.len(), collection.num_obstacles());

        let expected_vertex_counts = [4, 4, 4, 3, 3, CIRCLE_TESSELLATION];
        for (polygon, expected) in polygons.iter().zip(expected_vertex_counts) {
            assert_eq!(polygon.len(), expected);
        }

        //all tessellated circle vertices lie on the circle itself
        let circle = collection.circles()[0];
        for vertex in polygons.last().unwrap() {
            assert!(approx_eq!(
                f32,
                vertex.distance_to(&circle.center),
                circle.radius,
                epsilon = 1e-5
            ));
        }
    }

    #[test]
    fn unit_domain_scenario() {
        let space = unit_space_with_circle();

        assert!(!space.is_feasible(Point(0.5, 0.5)));
        assert!(space.is_feasible(Point(0.0, 0.0)));
        assert_eq!(space.num_obstacles(), BOUNDARY_FACES + 1);
        assert_eq!(space.obstacle_name(4), "circle[0]");
        assert_eq!(space.obstacle_name(0), "xmin");
        assert_eq!(space.obstacle_name(3), "ymax");

        //the diagonal crosses the circle, the left boundary edge does not
        assert!(!space.edge_plan(Point(0.0, 0.0), Point(1.0, 1.0)).is_visible());
        assert!(space.edge_plan(Point(0.0, 0.0), Point(0.0, 1.0)).is_visible());
    }

    #[test]
    fn per_obstacle_feasibility_addresses_faces_then_obstacles() {
        let space = unit_space_with_circle();
        let outside_left = Point(-0.5, 0.5);

        assert!(!space.is_feasible_at(outside_left, 0)); //xmin violated
        assert!(space.is_feasible_at(outside_left, 1));
        assert!(space.is_feasible_at(outside_left, 2));
        assert!(space.is_feasible_at(outside_left, 3));
        assert!(space.is_feasible_at(outside_left, 4)); //not inside the circle

        assert!(!space.is_feasible_at(Point(0.5, 0.5), 4));
    }

    #[test]
    fn per_obstacle_edge_overlap_tests_one_face_only() {
        let space = unit_space_with_circle();
        let edge = Edge {
            start: Point(-1.0, 0.9),
            end: Point(0.5, 0.9),
        };

        assert!(space.obstacle_overlap_edge_at(&edge, 0));
        assert!(!space.obstacle_overlap_edge_at(&edge, 1));
        assert!(!space.obstacle_overlap_edge_at(&edge, 2));
        assert!(!space.obstacle_overlap_edge_at(&edge, 3));
        assert!(!space.obstacle_overlap_edge_at(&edge, 4));
        //but the aggregate test sees the domain violation
        assert!(space.obstacle_overlap_edge(&edge));
    }

    #[test]
    fn check_visible_matches_per_obstacle_queries() {
        let space = unit_space_with_circle();
        let planner = space.edge_plan(Point(0.0, 0.0), Point(1.0, 1.0));

        let visible = planner.check_visible();
        assert_eq!(visible.len(), space.num_obstacles());
        for (i, &v) in visible.iter().enumerate() {
            assert_eq!(v, planner.is_visible_at(i));
        }
        //only the circle blocks the diagonal
        assert_eq!(visible, vec![true, true, true, true, false]);
    }

    #[test]
    fn incremental_planning_resolves_exactly_once() {
        let space = unit_space_with_circle();

        let mut blocked = space.edge_plan(Point(0.0, 0.0), Point(1.0, 1.0));
        assert_eq!(blocked.status(), EdgeStatus::Pending);
        assert!(!blocked.done());
        assert!(approx_eq!(f32, blocked.priority(), 2.0, epsilon = 1e-6));

        assert!(!blocked.plan());
        assert!(blocked.done());
        assert!(blocked.failed());
        assert_eq!(blocked.status(), EdgeStatus::Blocked);
        //repeated planning returns the recorded outcome
        assert!(!blocked.plan());

        let mut visible = space.edge_plan(Point(0.0, 0.0), Point(0.0, 1.0));
        assert!(visible.plan());
        assert!(visible.done());
        assert!(!visible.failed());

        let reversed = blocked.reversed();
        assert!(!reversed.done());
        assert!(!reversed.is_visible());
    }

    #[test]
    fn pre_resolved_planner_consults_a_single_obstacle() {
        let space = unit_space_with_circle();

        //the diagonal is blocked by the circle (index 4) but clears every face
        let against_circle = space.edge_plan_at(Point(0.0, 0.0), Point(1.0, 1.0), 4);
        assert!(against_circle.done());
        assert!(against_circle.failed());

        let against_face = space.edge_plan_at(Point(0.0, 0.0), Point(1.0, 1.0), 0);
        assert!(against_face.done());
        assert!(!against_face.failed());
    }

    #[test]
    fn parallel_batch_matches_sequential_evaluation() {
        let space = unit_space_with_circle();
        let edges = vec![
            (Point(0.0, 0.0), Point(1.0, 1.0)),
            (Point(0.0, 0.0), Point(0.0, 1.0)),
            (Point(0.1, 0.1), Point(0.9, 0.1)),
            (Point(-0.5, 0.5), Point(0.5, 0.5)),
        ];

        let parallel = check_edges_parallel(&space, &edges);
        let sequential: Vec<bool> = edges
            .iter()
            .map(|&(a, b)| space.edge_plan(a, b).is_visible())
            .collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn obstacle_distance_saturates_outside_the_domain() {
        let space = unit_space_with_circle();

        assert_eq!(space.obstacle_distance(&Point(-0.1, 0.5)), 0.0);
        assert_eq!(space.obstacle_distance(&Point(0.5, 1.5)), 0.0);

        //clearance of the corner is limited by the faces, not the circle
        let d = space.obstacle_distance(&Point(0.05, 0.05));
        assert!(approx_eq!(f32, d, 0.05, epsilon = 1e-6));

        //near the circle the obstacle clearance dominates
        let d = space.obstacle_distance(&Point(0.5, 0.25));
        assert!(approx_eq!(f32, d, 0.05, epsilon = 1e-6));
    }

    #[test]
    fn circle_clearance_respects_the_domain_faces() {
        let space = unit_space_with_circle();

        //poking outside the domain saturates to 0
        assert_eq!(
            space.obstacle_distance_to_circle(&Circle::new(Point(0.05, 0.5), 0.1)),
            0.0
        );
        let d = space.obstacle_distance_to_circle(&Circle::new(Point(0.15, 0.15), 0.1));
        assert!(approx_eq!(f32, d, 0.05, epsilon = 1e-6));
    }

    #[test]
    fn shape_overlap_includes_the_domain_boundary() {
        let space = unit_space_with_circle();

        let inside = Triangle::try_new(Point(0.05, 0.05), Point(0.2, 0.05), Point(0.05, 0.2))
            .unwrap();
        assert!(!space.obstacle_overlap_triangle(&inside));

        let poking_out =
            Triangle::try_new(Point(-0.1, 0.1), Point(0.2, 0.1), Point(0.1, 0.3)).unwrap();
        assert!(space.obstacle_overlap_triangle(&poking_out));

        let through_circle =
            OrientedRect::try_new(Point(0.3, 0.45), Point(1.0, 0.0), 0.4, 0.1).unwrap();
        assert!(space.obstacle_overlap_oriented_rect(&through_circle));

        let clear = OrientedRect::try_new(Point(0.05, 0.05), Point(1.0, 0.0), 0.1, 0.1).unwrap();
        assert!(!space.obstacle_overlap_oriented_rect(&clear));
    }

    #[test_case(Point(0.0, 0.0), Point(3.0, 0.0) ; "single axis")]
    #[test_case(Point(1.0, 1.0), Point(4.0, 5.0) ; "general position")]
    #[test_case(Point(-1.0, 2.0), Point(1.0, -2.0) ; "mixed signs")]
    fn euclidean_and_chebyshev_metrics_are_consistently_ordered(a: Point, b: Point) {
        let euclidean = Metric::Euclidean.distance(a, b);
        let chebyshev = Metric::Chebyshev.distance(a, b);

        assert!(chebyshev <= euclidean + 1e-6);
        assert!(euclidean <= chebyshev * std::f32::consts::SQRT_2 + 1e-6);

        let single_axis = a.0 == b.0 || a.1 == b.1;
        if single_axis {
            assert!(approx_eq!(f32, euclidean, chebyshev, epsilon = 1e-6));
        }
    }

    #[test]
    fn sampling_respects_domain_and_neighborhood_metric() {
        let mut rng = SmallRng::seed_from_u64(0);

        let euclidean = CSpace::new(
            Rect::try_new(-2.0, 1.0, 3.0, 4.0).unwrap(),
            Metric::Euclidean,
        );
        for _ in 0..200 {
            let p = euclidean.sample(&mut rng);
            assert!(p.0 >= -2.0 && p.0 <= 3.0 && p.1 >= 1.0 && p.1 <= 4.0);
        }

        let center = Point(0.5, 2.5);
        for _ in 0..200 {
            let p = euclidean.sample_neighborhood(center, 0.5, &mut rng);
            assert!(euclidean.distance(center, p) <= 0.5 + 1e-5);
        }

        let chebyshev = CSpace::new(
            Rect::try_new(-2.0, 1.0, 3.0, 4.0).unwrap(),
            Metric::Chebyshev,
        );
        for _ in 0..200 {
            let p = chebyshev.sample_neighborhood(center, 0.5, &mut rng);
            assert!(chebyshev.distance(center, p) <= 0.5 + 1e-5);
        }
    }

    #[test]
    fn properties_expose_the_domain_and_metric() {
        let space = unit_space_with_circle();
        let properties = space.properties();

        assert_eq!(properties["cartesian"], 1);
        assert_eq!(properties["geodesic"], 1);
        assert_eq!(properties["metric"], "euclidean");
        assert!(approx_eq!(
            f32,
            properties["volume"].as_f64().unwrap() as f32,
            1.0,
            epsilon = 1e-6
        ));
        assert!(approx_eq!(
            f32,
            properties["diameter"].as_f64().unwrap() as f32,
            std::f32::consts::SQRT_2,
            epsilon = 1e-6
        ));
        assert_eq!(properties["minimum"], serde_json::json!([0.0, 0.0]));
        assert_eq!(properties["maximum"], serde_json::json!([1.0, 1.0]));
    }

    #[test]
    fn config_roundtrips_through_serde() {
        let config = CSpaceConfig {
            domain_min: (-1.0, -1.0),
            domain_max: (2.0, 3.0),
            metric: Metric::Chebyshev,
            visibility_eps: 0.05,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"Linf\""));
        let parsed: CSpaceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let space = CSpace::from_config(config).unwrap();
        assert_eq!(space.metric, Metric::Chebyshev);
        assert_eq!(space.domain, Rect::try_new(-1.0, -1.0, 2.0, 3.0).unwrap());

        //an empty domain is rejected
        let degenerate = CSpaceConfig {
            domain_min: (1.0, 1.0),
            domain_max: (1.0, 2.0),
            ..CSpaceConfig::default()
        };
        assert!(CSpace::from_config(degenerate).is_err());
    }

    #[test]
    fn svg_export_renders_every_obstacle() {
        let space = unit_space_with_circle();
        let document =
            cspace2d::io::svg_export::cspace_to_svg(&space, Default::default()).to_string();
        assert!(document.contains("<svg"));
        assert!(document.contains("circle[0]"));
    }
}
