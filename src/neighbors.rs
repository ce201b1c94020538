/*
 * Neighbor Query Module
 *
 * Flat pairwise scan: every boid is checked against every other boid. This is
 * O(n²) per tick, which is fine for flocks of tens to a few hundred boids.
 * Distances are plain Euclidean on the field; the query does not look across
 * the wrapped edges.
 */

use crate::boid::Boid;

/// All boids strictly closer than `radius` to `boid`, excluding `boid` itself.
pub fn neighbors_of<'a>(boids: &'a [Boid], boid: &Boid, radius: f32) -> Vec<&'a Boid> {
    boids
        .iter()
        .filter(|other| other.id() != boid.id() && boid.position.distance(other.position) < radius)
        .collect()
}

/// Number of neighbors each boid sees, in flock order.
pub fn neighbor_counts(boids: &[Boid], radius: f32) -> Vec<usize> {
    boids
        .iter()
        .map(|boid| neighbors_of(boids, boid, radius).len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boid::BoidId;
    use glam::Vec2;

    fn boid(id: u32, x: f32, y: f32) -> Boid {
        Boid::new(BoidId(id), Vec2::new(x, y), Vec2::ZERO)
    }

    #[test]
    fn excludes_self_and_far_boids() {
        let boids = vec![boid(0, 0.0, 0.0), boid(1, 30.0, 0.0), boid(2, 100.0, 0.0)];
        let found: Vec<BoidId> = neighbors_of(&boids, &boids[0], 60.0)
            .iter()
            .map(|b| b.id())
            .collect();
        assert_eq!(found, vec![BoidId(1)]);
    }

    #[test]
    fn boundary_distance_is_excluded() {
        let boids = vec![boid(0, 0.0, 0.0), boid(1, 60.0, 0.0)];
        assert!(neighbors_of(&boids, &boids[0], 60.0).is_empty());
        assert!(neighbors_of(&boids, &boids[1], 60.0).is_empty());
    }

    #[test]
    fn coincident_boids_are_neighbors() {
        let boids = vec![boid(0, 5.0, 5.0), boid(1, 5.0, 5.0)];
        assert_eq!(neighbors_of(&boids, &boids[0], 60.0).len(), 1);
    }

    #[test]
    fn no_wrap_across_edges() {
        let boids = vec![boid(0, 1.0, 200.0), boid(1, 599.0, 200.0)];
        assert_eq!(neighbor_counts(&boids, 60.0), vec![0, 0]);
    }

    #[test]
    fn counts_are_symmetric_for_pairs() {
        let boids = vec![boid(0, 0.0, 0.0), boid(1, 10.0, 0.0), boid(2, 20.0, 0.0)];
        assert_eq!(neighbor_counts(&boids, 15.0), vec![1, 2, 1]);
    }
}
