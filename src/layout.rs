use eframe::egui::{Vec2, vec2};
use rand::Rng;

/// Overlap relaxation runs a fixed number of passes rather than iterating
/// until the layout settles.
pub const RELAX_PASSES: usize = 10;

/// Coincident centers have no separating axis; distances are floored at
/// this epsilon and the pair is pushed apart along +x.
const MIN_DISTANCE: f32 = 0.1;

/// Positions are bounding-box origins, parallel to `sizes`. `sizes` are
/// bubble diameters.
pub fn bubble_layout<R: Rng>(sizes: &[f32], canvas: Vec2, rng: &mut R) -> Vec<Vec2> {
    let mut positions = scatter(sizes, canvas, rng);
    relax_overlaps(&mut positions, sizes, canvas, RELAX_PASSES);
    positions
}

pub fn scatter<R: Rng>(sizes: &[f32], canvas: Vec2, rng: &mut R) -> Vec<Vec2> {
    sizes
        .iter()
        .map(|&size| {
            vec2(
                rng.random_range(0.0..=(canvas.x - size).max(0.0)),
                rng.random_range(0.0..=(canvas.y - size).max(0.0)),
            )
        })
        .collect()
}

pub fn relax_overlaps(positions: &mut [Vec2], sizes: &[f32], canvas: Vec2, passes: usize) {
    let n = positions.len().min(sizes.len());
    if n < 2 {
        return;
    }

    let mut push = vec![Vec2::ZERO; n];

    for _ in 0..passes {
        push.fill(Vec2::ZERO);

        for i in 0..n {
            for j in (i + 1)..n {
                let center_i = positions[i] + Vec2::splat(sizes[i] * 0.5);
                let center_j = positions[j] + Vec2::splat(sizes[j] * 0.5);
                let delta = center_i - center_j;

                let length = delta.length();
                let distance = length.max(MIN_DISTANCE);
                let min_distance = (sizes[i] + sizes[j]) * 0.5;
                if distance >= min_distance {
                    continue;
                }

                let direction = if length > MIN_DISTANCE {
                    delta / length
                } else {
                    vec2(1.0, 0.0)
                };

                let force = (min_distance - distance) / distance;
                let shift = direction * (distance * force * 0.5);
                push[i] += shift;
                push[j] -= shift;
            }
        }

        for i in 0..n {
            if push[i] == Vec2::ZERO {
                continue;
            }
            positions[i] = clamp_to_canvas(positions[i] + push[i], sizes[i], canvas);
        }
    }
}

pub fn clamp_to_canvas(position: Vec2, size: f32, canvas: Vec2) -> Vec2 {
    vec2(
        position.x.clamp(0.0, (canvas.x - size).max(0.0)),
        position.y.clamp(0.0, (canvas.y - size).max(0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn center(position: Vec2, size: f32) -> Vec2 {
        position + Vec2::splat(size * 0.5)
    }

    #[test]
    fn empty_input_produces_empty_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(bubble_layout(&[], vec2(640.0, 480.0), &mut rng).is_empty());
    }

    #[test]
    fn layout_stays_inside_canvas() {
        let canvas = vec2(640.0, 480.0);
        let sizes = [75.0, 90.0, 105.0, 120.0, 135.0, 75.0, 90.0, 105.0, 120.0, 135.0, 75.0, 90.0];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let positions = bubble_layout(&sizes, canvas, &mut rng);

        for (position, size) in positions.iter().zip(sizes.iter()) {
            assert!(position.x >= 0.0 && position.x <= canvas.x - size);
            assert!(position.y >= 0.0 && position.y <= canvas.y - size);
        }
    }

    #[test]
    fn same_seed_reproduces_layout() {
        let canvas = vec2(500.0, 400.0);
        let sizes = [75.0, 105.0, 135.0, 90.0];

        let mut first_rng = ChaCha8Rng::seed_from_u64(7);
        let mut second_rng = ChaCha8Rng::seed_from_u64(7);
        let first = bubble_layout(&sizes, canvas, &mut first_rng);
        let second = bubble_layout(&sizes, canvas, &mut second_rng);

        assert_eq!(first, second);
    }

    #[test]
    fn overlapping_pair_separates() {
        let canvas = vec2(800.0, 600.0);
        let sizes = [100.0, 100.0];
        // Centers 10 units apart, fully overlapping.
        let mut positions = vec![vec2(200.0, 200.0), vec2(210.0, 200.0)];

        relax_overlaps(&mut positions, &sizes, canvas, RELAX_PASSES);

        let distance = (center(positions[0], 100.0) - center(positions[1], 100.0)).length();
        assert!(distance >= 100.0 - 0.5, "distance was {distance}");
    }

    #[test]
    fn coincident_centers_split_along_x() {
        let canvas = vec2(800.0, 600.0);
        let sizes = [80.0, 80.0];
        let mut positions = vec![vec2(300.0, 300.0), vec2(300.0, 300.0)];

        relax_overlaps(&mut positions, &sizes, canvas, RELAX_PASSES);

        assert!(positions[0].x != positions[1].x);
        assert_eq!(positions[0].y, positions[1].y);
    }

    #[test]
    fn oversized_bubble_pins_at_origin() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let positions = bubble_layout(&[100.0], vec2(50.0, 50.0), &mut rng);
        assert_eq!(positions, vec![Vec2::ZERO]);
    }

    #[test]
    fn nonoverlapping_bubbles_do_not_move() {
        let canvas = vec2(800.0, 600.0);
        let sizes = [80.0, 80.0];
        let mut positions = vec![vec2(100.0, 100.0), vec2(400.0, 400.0)];
        let before = positions.clone();

        relax_overlaps(&mut positions, &sizes, canvas, RELAX_PASSES);

        assert_eq!(positions, before);
    }
}
