//! Triangle grouping
//!
//! The group table stores triangles partitioned into runs that share one
//! collision key. Partitioning is stable both ways: groups appear in the
//! order their key first occurs in the input, and triangles keep their
//! relative order inside each group.

use super::Triangle;

/// An ordered run of triangles sharing one grouping key. The in-memory
/// counterpart of a [`ColGroup`](super::ColGroup) table entry before offsets
/// are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleGroup {
    pub collision_type: u16,
    pub has_col_parameter: bool,
    pub triangles: Vec<Triangle>,
}

impl TriangleGroup {
    fn matches(&self, triangle: &Triangle) -> bool {
        self.collision_type == triangle.col_type
            && self.has_col_parameter == triangle.has_col_parameter()
    }
}

/// Partition `triangles` into type-homogeneous groups.
///
/// The key is the pair (collision type, parameter presence): a triangle whose
/// parameter presence differs from every existing group of its collision type
/// starts a new group rather than being coerced to another group's flag, so
/// no parameter value is ever dropped and no zero parameter is invented.
///
/// Group lookup is a linear scan in creation order; group counts stay in the
/// tens for real meshes.
pub fn group_triangles(triangles: &[Triangle]) -> Vec<TriangleGroup> {
    let mut groups: Vec<TriangleGroup> = Vec::new();

    for triangle in triangles {
        match groups.iter_mut().find(|group| group.matches(triangle)) {
            Some(group) => group.triangles.push(triangle.clone()),
            None => groups.push(TriangleGroup {
                collision_type: triangle.col_type,
                has_col_parameter: triangle.has_col_parameter(),
                triangles: vec![triangle.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(col_type: u16, col_parameter: Option<u16>) -> Triangle {
        Triangle {
            vertex_indices: [0, 1, 2],
            col_type,
            terrain_type: 0,
            unknown: 0,
            col_parameter,
        }
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let triangles = [
            triangle(2, None),
            triangle(1, None),
            triangle(2, None),
            triangle(1, None),
        ];
        let groups = group_triangles(&triangles);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].collision_type, 2);
        assert_eq!(groups[1].collision_type, 1);
        assert_eq!(groups[0].triangles.len(), 2);
        assert_eq!(groups[1].triangles.len(), 2);
    }

    #[test]
    fn test_intra_group_order_is_input_order() {
        let mut triangles = Vec::new();
        for terrain in 0..4 {
            let mut t = triangle(5, None);
            t.terrain_type = terrain;
            triangles.push(t);
            triangles.push(triangle(9, None));
        }

        let groups = group_triangles(&triangles);
        let terrains: Vec<u8> = groups[0]
            .triangles
            .iter()
            .map(|t| t.terrain_type)
            .collect();
        assert_eq!(terrains, [0, 1, 2, 3]);
    }

    #[test]
    fn test_parameter_presence_splits_groups() {
        let triangles = [
            triangle(5, None),
            triangle(5, Some(8000)),
            triangle(5, None),
        ];
        let groups = group_triangles(&triangles);

        assert_eq!(groups.len(), 2);
        assert!(!groups[0].has_col_parameter);
        assert_eq!(groups[0].triangles.len(), 2);
        assert!(groups[1].has_col_parameter);
        assert_eq!(groups[1].triangles[0].col_parameter, Some(8000));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_triangles(&[]).is_empty());
    }
}
