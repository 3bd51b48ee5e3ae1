slotmap::new_key_type! {
    /// Unique identifier for a document in the layout store.
    pub struct DocumentId;
}

/// Data associated with a cut-layout document.
///
/// A document owns a board (the sheet being cut) and, via back-references,
/// the nodes, edges and shapes sketched on it.
#[derive(Debug, Clone)]
pub struct DocumentData {
    /// Display name of the document.
    pub name: String,
    /// Board width in centimeters.
    pub width_cm: f64,
    /// Board height in centimeters.
    pub height_cm: f64,
    /// Saw kerf in millimeters.
    pub kerf_mm: f64,
}

impl DocumentData {
    /// Creates a document with the default board (244×122 cm, 3 mm kerf).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width_cm: 244.0,
            height_cm: 122.0,
            kerf_mm: 3.0,
        }
    }

    /// Sets the board dimensions.
    #[must_use]
    pub fn with_board(mut self, width_cm: f64, height_cm: f64) -> Self {
        self.width_cm = width_cm;
        self.height_cm = height_cm;
        self
    }

    /// Sets the saw kerf.
    #[must_use]
    pub fn with_kerf(mut self, kerf_mm: f64) -> Self {
        self.kerf_mm = kerf_mm;
        self
    }
}
