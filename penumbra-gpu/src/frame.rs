use bytemuck::{Pod, Zeroable};

/// Monotonic frame counter.
///
/// Its parity selects which half of each double-buffered resource is the
/// current frame's write target; see `DoubleBuffered` in the host crate.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Pod, Zeroable,
)]
pub struct Frame(u32);

impl Frame {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn is_alternate(self) -> bool {
        self.0 % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        let target = Frame::default();

        assert!(!target.is_alternate());
        assert!(target.next().is_alternate());
        assert!(!target.next().next().is_alternate());
    }
}
