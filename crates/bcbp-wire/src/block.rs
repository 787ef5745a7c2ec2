/// Declared width of a catalog field.
///
/// Almost every BCBP field is fixed-width; the two exceptions (the
/// airline-use item and the security data item) take whatever span the
/// surrounding structure assigns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldWidth {
    Fixed(usize),
    Variable,
}

/// A closed catalog of fields for one block kind.
///
/// Each block kind (mandatory unique, mandatory repeated, conditional
/// unique, conditional repeated, airline use, security) supplies one
/// implementing enum. The enum is the field identifier: it is impossible
/// to reference a field the block does not declare, and `FIELDS` fixes
/// the on-wire order the walkers follow.
pub trait FieldSpec: Copy + Eq + std::fmt::Debug + 'static {
    /// Every field of this block kind, in on-wire order.
    const FIELDS: &'static [Self];

    /// The IATA Resolution 792 item number for this field.
    fn item(self) -> u16;

    /// The declared width of this field.
    fn width(self) -> FieldWidth;
}

/// An ordered field → raw value mapping covering one contiguous span of
/// the input.
///
/// Entries appear in parse order. Values are the raw extracted text,
/// never semantically interpreted (padding spaces included); the few
/// control fields that drive parsing are re-read by the walkers and the
/// decoder where needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldBlock<F: FieldSpec> {
    entries: Vec<(F, String)>,
}

impl<F: FieldSpec> FieldBlock<F> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a field value. Parsers only ever push in on-wire order.
    pub fn push(&mut self, field: F, value: &str) {
        self.entries.push((field, value.to_string()));
    }

    /// Look up a field's raw value.
    ///
    /// Linear scan — a block holds at most a dozen entries.
    pub fn get(&self, field: F) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in parse order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl<F: FieldSpec> Default for FieldBlock<F> {
    fn default() -> Self {
        Self::new()
    }
}
