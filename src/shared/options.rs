//! Zentrale Konfiguration für den Circle Drawer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Durchmesser-Regler ──────────────────────────────────────────────

/// Start-Durchmesser eines neu platzierten Kreises (Pixel).
pub const DIAMETER_DEFAULT: f32 = 10.0;
/// Kleinster einstellbarer Durchmesser.
pub const DIAMETER_MIN: f32 = 1.0;
/// Größter einstellbarer Durchmesser.
pub const DIAMETER_MAX: f32 = 50.0;

// ── Kreis-Rendering ────────────────────────────────────────────────

/// Linienstärke der Kreis-Umrisse in Pixeln.
pub const STROKE_WIDTH: f32 = 1.0;
/// Umrissfarbe (RGBA: Schwarz).
pub const STROKE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Füllfarbe des gerade bearbeiteten Kreises (RGBA: Hellgrau).
pub const HIGHLIGHT_COLOR: [f32; 4] = [0.827, 0.827, 0.827, 1.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Fenster ─────────────────────────────────────────────────────────

/// Initiale Fenstergröße [Breite, Höhe].
pub const WINDOW_SIZE: [f32; 2] = [960.0, 640.0];

/// Wertebereich des Durchmesser-Reglers im Bearbeitungspanel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiameterRange {
    /// Startwert für neue Kreise
    pub default: f32,
    /// Untergrenze
    pub min: f32,
    /// Obergrenze
    pub max: f32,
}

impl Default for DiameterRange {
    fn default() -> Self {
        Self {
            default: DIAMETER_DEFAULT,
            min: DIAMETER_MIN,
            max: DIAMETER_MAX,
        }
    }
}

impl DiameterRange {
    /// Klemmt einen Reglerwert in den gültigen Bereich.
    pub fn clamp(&self, diameter: f32) -> f32 {
        if diameter.is_nan() {
            return self.default;
        }
        diameter.clamp(self.min, self.max)
    }

    /// Prüft ob `min <= default <= max` und `min > 0` gilt.
    pub fn is_consistent(&self) -> bool {
        self.min > 0.0 && self.min <= self.default && self.default <= self.max
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `circle_drawer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Linienstärke der Umrisse
    pub stroke_width: f32,
    /// Umrissfarbe (RGBA)
    pub stroke_color: [f32; 4],
    /// Füllfarbe des offenen Kreises (RGBA)
    pub highlight_color: [f32; 4],
    /// Hintergrundfarbe der Zeichenfläche
    #[serde(default = "default_background_color")]
    pub background_color: [f32; 4],
    /// Initiale Fenstergröße
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    /// Wertebereich des Durchmesser-Reglers (TOML-Tabelle, steht nach den Einzelwerten)
    #[serde(default)]
    pub diameter: DiameterRange,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            stroke_width: STROKE_WIDTH,
            stroke_color: STROKE_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
            background_color: BACKGROUND_COLOR,
            window_size: WINDOW_SIZE,
            diameter: DiameterRange::default(),
        }
    }
}

/// Serde-Default für `background_color` (Abwärtskompatibilität).
fn default_background_color() -> [f32; 4] {
    BACKGROUND_COLOR
}

/// Serde-Default für `window_size` (Abwärtskompatibilität).
fn default_window_size() -> [f32; 2] {
    WINDOW_SIZE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML und repariert einen inkonsistenten Durchmesser-Bereich.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.validated())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("circle_drawer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("circle_drawer.toml")
    }

    /// Ersetzt einen unbrauchbaren Durchmesser-Bereich durch den Standard.
    pub fn validated(mut self) -> Self {
        if !self.diameter.is_consistent() {
            log::warn!(
                "Durchmesser-Bereich ungültig ({:?}), verwende Standardwerte",
                self.diameter
            );
            self.diameter = DiameterRange::default();
        }
        if !(self.stroke_width > 0.0) {
            self.stroke_width = STROKE_WIDTH;
        }
        self
    }
}
