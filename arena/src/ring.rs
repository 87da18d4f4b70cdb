use bevy_math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Ring interior and the floor around the ring.
    White,
    /// Boundary band.
    Black,
}

/// Circular ring centered on the origin, with a dark band along its rim.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    pub radius: f32,
    pub border_width: f32,
}

impl Ring {
    pub fn surface_at(&self, point: Vec2) -> Surface {
        let r = point.length();
        if r > self.radius - self.border_width && r <= self.radius {
            Surface::Black
        } else {
            Surface::White
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.length() <= self.radius
    }

    /// Inside the band, clear of the boundary.
    pub fn inside_band(&self, point: Vec2) -> bool {
        point.length() <= self.radius - self.border_width
    }
}
