/// 2D paint-time transformation of a view.
///
/// Scale and rotation pivot around the view's center; translation is applied
/// last, in parent coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation in x and y
    pub translate: (f32, f32),
    /// Scale in x and y (1.0 = no scale)
    pub scale: (f32, f32),
    /// Rotation in degrees (clockwise)
    pub rotation: f32,
}

impl Transform {
    /// Identity transform (no transformation)
    pub const IDENTITY: Self = Self {
        translate: (0.0, 0.0),
        scale: (1.0, 1.0),
        rotation: 0.0,
    };

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: (x, y),
            ..Self::IDENTITY
        }
    }

    /// Create a uniform scale transform
    pub fn scale_uniform(scale: f32) -> Self {
        Self {
            scale: (scale, scale),
            ..Self::IDENTITY
        }
    }

    /// Create a rotation transform (in degrees)
    pub fn rotate(degrees: f32) -> Self {
        Self {
            rotation: degrees,
            ..Self::IDENTITY
        }
    }

    /// Apply this transform to a point relative to a bounding box
    pub fn apply_to_point(&self, x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
        let origin_x = width * 0.5;
        let origin_y = height * 0.5;

        let mut tx = (x - origin_x) * self.scale.0;
        let mut ty = (y - origin_y) * self.scale.1;

        if self.rotation.abs() > 1e-6 {
            let (sin, cos) = self.rotation.to_radians().sin_cos();
            let rx = tx * cos - ty * sin;
            let ry = tx * sin + ty * cos;
            tx = rx;
            ty = ry;
        }

        (
            tx + origin_x + self.translate.0,
            ty + origin_y + self.translate.1,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let t = Transform::IDENTITY;
        let (x, y) = t.apply_to_point(10.0, 20.0, 100.0, 100.0);
        assert_eq!(x, 10.0);
        assert_eq!(y, 20.0);
    }

    #[test]
    fn test_translate() {
        let t = Transform::translate(5.0, 10.0);
        let (x, y) = t.apply_to_point(10.0, 20.0, 100.0, 100.0);
        assert_eq!(x, 15.0);
        assert_eq!(y, 30.0);
    }

    #[test]
    fn test_scale_around_center() {
        let t = Transform::scale_uniform(2.0);
        let (x, y) = t.apply_to_point(10.0, 10.0, 100.0, 100.0);
        assert!((x - (-30.0)).abs() < 0.1);
        assert!((y - (-30.0)).abs() < 0.1);
    }

    #[test]
    fn test_quarter_turn() {
        let t = Transform::rotate(90.0);
        // Right-middle edge rotates clockwise to bottom-middle
        let (x, y) = t.apply_to_point(100.0, 50.0, 100.0, 100.0);
        assert!((x - 50.0).abs() < 1e-3);
        assert!((y - 100.0).abs() < 1e-3);
    }
}
