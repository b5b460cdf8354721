/// Punkt auf der Zeichenfläche, relativ zur linken oberen Ecke.
///
/// Beide Koordinaten sind nicht-negativ; negative Eingaben werden beim
/// Erstellen auf 0 geklemmt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    x: f32,
    y: f32,
}

impl Position {
    /// Erstellt eine neue Position (negative Komponenten → 0).
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.max(0.0),
            y: y.max(0.0),
        }
    }

    /// X-Koordinate in Pixeln
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Y-Koordinate in Pixeln
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Liefert die Position als `glam::Vec2`.
    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }
}

impl From<glam::Vec2> for Position {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
