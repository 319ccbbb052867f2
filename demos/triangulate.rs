use std::iter::repeat_with;
use sweephull::{Point, Triangulation};

const N: usize = 1_000_000;

fn main() {
    let points: Vec<Point> = repeat_with(rand::random)
        .map(|(x, y): (f64, f64)| Point::new(x, y))
        .take(N)
        .collect();

    let now = std::time::Instant::now();
    let result = Triangulation::new(&points).expect("no triangulation exists for this input");
    let elapsed = now.elapsed();

    println!(
        "Triangulated {} points in {}.{:03}s.\nGenerated {} triangles. Convex hull size: {}",
        N,
        elapsed.as_secs(),
        elapsed.subsec_millis(),
        result.num_triangles(),
        result.hull.len()
    );
}
