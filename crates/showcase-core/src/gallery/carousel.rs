use crate::{Error, Result};

/// Index over an ordered, non-empty list of image frames with wraparound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    frames: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Start at the first frame. Fails when `frames` is empty.
    pub fn new(owner_id: &str, frames: Vec<String>) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::EmptyGallery(owner_id.to_string()));
        }
        Ok(Self { frames, index: 0 })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; a carousel never holds zero frames
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// A single-frame carousel ignores next/previous
    #[inline]
    pub fn is_single_frame(&self) -> bool {
        self.frames.len() == 1
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn current(&self) -> &str {
        &self.frames[self.index]
    }

    /// Advance one frame, wrapping from the last to the first
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.frames.len();
        self.index
    }

    /// Go back one frame, wrapping from the first to the last
    pub fn previous(&mut self) -> usize {
        let n = self.frames.len();
        self.index = (self.index + n - 1) % n;
        self.index
    }

    /// Jump to frame `k`; out-of-range requests fail and keep the index
    pub fn jump_to(&mut self, k: usize) -> Result<usize> {
        if k >= self.frames.len() {
            return Err(Error::OutOfRange {
                index: k,
                len: self.frames.len(),
            });
        }
        self.index = k;
        Ok(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        Carousel::new("p", (0..n).map(|i| format!("frame-{}", i)).collect()).unwrap()
    }

    #[test]
    fn test_next_sequence_wraps() {
        let mut c = Carousel::new("p", vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(c.index(), 0);
        assert_eq!(c.current(), "a");
        let seq: Vec<usize> = (0..3).map(|_| c.next()).collect();
        assert_eq!(seq, [1, 2, 0]);
        assert_eq!(c.current(), "a");
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut c = carousel(3);
        assert_eq!(c.previous(), 2);
        assert_eq!(c.previous(), 1);
    }

    #[test]
    fn test_n_steps_cycle_back() {
        for n in 1..=6 {
            for start in 0..n {
                let mut c = carousel(n);
                c.jump_to(start).unwrap();
                for _ in 0..n {
                    c.next();
                }
                assert_eq!(c.index(), start, "next n={} start={}", n, start);
                for _ in 0..n {
                    c.previous();
                }
                assert_eq!(c.index(), start, "previous n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_jump_out_of_range_fails_and_keeps_index() {
        let mut c = carousel(3);
        c.jump_to(1).unwrap();
        assert!(matches!(
            c.jump_to(3),
            Err(Error::OutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(c.index(), 1);
        assert!(c.jump_to(usize::MAX).is_err());
        assert!(c.index() < c.len());
    }

    #[test]
    fn test_single_frame_is_fixed() {
        let mut c = carousel(1);
        assert!(c.is_single_frame());
        assert_eq!(c.next(), 0);
        assert_eq!(c.previous(), 0);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            Carousel::new("p", vec![]),
            Err(Error::EmptyGallery(_))
        ));
    }
}
