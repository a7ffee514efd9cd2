use good_lp::Constraint;

/// A constraint paired with the human-readable description the `debug`
/// trace prints for it, in the spirit of the originating project's
/// `add_dbg` helper.
#[derive(Default)]
pub struct ConstraintSet {
    pub constraints: Vec<Constraint>,
    pub descriptions: Vec<String>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, description: impl Into<String>, c: Constraint) {
        self.descriptions.push(description.into());
        self.constraints.push(c);
    }

    pub fn extend(&mut self, other: ConstraintSet) {
        self.constraints.extend(other.constraints);
        self.descriptions.extend(other.descriptions);
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
