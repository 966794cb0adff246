use glam::DVec3;

use super::matrix::Matrix4;

/// Push/pop accumulator for composing chained transforms.
///
/// Owned by the caller and dropped once the composed matrix has been read
/// out. The top entry is the current accumulated transform; entries are only
/// ever added or removed at the end.
#[derive(Debug, Clone)]
pub struct TransformStack {
    entries: Vec<Matrix4>,
}

impl TransformStack {
    /// A stack holding a single identity entry.
    pub fn new() -> Self {
        Self::with_base(Matrix4::IDENTITY)
    }

    pub fn with_base(base: Matrix4) -> Self {
        Self {
            entries: vec![base],
        }
    }

    /// Current accumulated transform.
    pub fn current(&self) -> Matrix4 {
        // The base entry is never popped.
        self.entries[self.entries.len() - 1]
    }

    pub fn into_current(self) -> Matrix4 {
        self.current()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Open a new scope starting from the current transform.
    pub fn push(&mut self) -> &mut Self {
        let top = self.current();
        self.entries.push(top);
        self
    }

    /// Close the innermost scope, returning its transform.
    ///
    /// Returns `None` and leaves the stack untouched when only the base
    /// entry remains.
    pub fn pop(&mut self) -> Option<Matrix4> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop()
    }

    /// Replace the top entry.
    pub fn load(&mut self, m: Matrix4) -> &mut Self {
        let last = self.entries.len() - 1;
        self.entries[last] = m;
        self
    }

    /// Post-multiply the top entry: `top = top · m`, so `m` acts on points
    /// before everything already accumulated.
    pub fn apply(&mut self, m: Matrix4) -> &mut Self {
        let top = self.current() * m;
        self.load(top)
    }

    pub fn translate(&mut self, t: DVec3) -> &mut Self {
        self.apply(Matrix4::from_translation(t))
    }

    pub fn scale(&mut self, s: DVec3) -> &mut Self {
        self.apply(Matrix4::from_scale(s))
    }

    pub fn rotate_x(&mut self, radians: f64) -> &mut Self {
        self.apply(Matrix4::from_rotation_x(radians))
    }

    pub fn rotate_y(&mut self, radians: f64) -> &mut Self {
        self.apply(Matrix4::from_rotation_y(radians))
    }

    pub fn rotate_z(&mut self, radians: f64) -> &mut Self {
        self.apply(Matrix4::from_rotation_z(radians))
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
