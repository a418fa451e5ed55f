use glam::DVec2;

/// Center of the planet disc for a texture of the given side
pub fn center(side: u32) -> DVec2 {
    let half = side as f64 / 2.0;
    DVec2::new(half, half)
}

/// Check whether pixel `(x, y)` lies strictly inside the disc inscribed in a
/// `side` x `side` texture
///
/// # Arguments
/// * `x` - Pixel column
/// * `y` - Pixel row
/// * `side` - Texture size; the disc has center `(side / 2, side / 2)` and radius `side / 2`
///
/// # Returns
/// * `bool` - True when the squared distance to the center is below the squared radius
pub fn contains(x: u32, y: u32, side: u32) -> bool {
    let radius = side as f64 / 2.0;
    let point = DVec2::new(x as f64, y as f64);
    point.distance_squared(center(side)) < radius * radius
}
