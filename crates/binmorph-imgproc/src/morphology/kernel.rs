/// A morphological structuring element.
///
/// The element is the fixed 3x3 box centred on the origin pixel: erosion and
/// dilation look at a pixel together with its eight neighbours.
///
/// # Example
///
/// ```rust
/// use binmorph_imgproc::morphology::StructuringElement;
///
/// let kernel = StructuringElement::square3();
/// assert_eq!(kernel.offsets().len(), 9);
/// assert!(kernel.offsets().contains(&(0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    offsets: [(isize, isize); 9],
}

impl StructuringElement {
    /// The 3x3 all-ones structuring element.
    pub fn square3() -> Self {
        let mut offsets = [(0isize, 0isize); 9];
        for (i, offset) in offsets.iter_mut().enumerate() {
            *offset = ((i % 3) as isize - 1, (i / 3) as isize - 1);
        }
        Self { offsets }
    }

    /// The `(dx, dy)` offsets of the active elements relative to the origin.
    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }
}

impl Default for StructuringElement {
    fn default() -> Self {
        Self::square3()
    }
}
