//! Tests for border padding and ring wrapping

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use stimgrid::spatial::extension::{Padding, pad_array_2d, wrap_ring};

    // Tests uniform padding construction
    // Verified by returning false from is_empty
    #[test]
    fn test_padding_uniform() {
        assert!(Padding::uniform(0).is_empty());
        let padding = Padding::uniform(2);
        assert!(!padding.is_empty());
        assert_eq!(padding.left, 2);
        assert_eq!(padding.bottom, 2);
    }

    // Tests asymmetric padding places the original correctly
    // Verified by swapping top and left offsets
    #[test]
    fn test_pad_array_2d_asymmetric() {
        let source = array![[5, 6]];
        let padding = Padding {
            top: 1,
            bottom: 0,
            left: 2,
            right: 1,
        };
        let padded = pad_array_2d(&source, &padding, 0);

        assert_eq!(padded.dim(), (2, 5));
        assert_eq!(padded, array![[0, 0, 0, 0, 0], [0, 0, 5, 6, 0]]);
    }

    // Tests that empty padding returns an equal array
    // Verified by padding with one ring regardless
    #[test]
    fn test_pad_array_2d_no_padding() {
        let source = Array2::from_elem((2, 3), 1.0);
        let padded = pad_array_2d(&source, &Padding::uniform(0), 0.0);
        assert_eq!(padded, source);
    }

    // Tests one ring around a 1x2 block
    // Verified by wrapping with width 2
    #[test]
    fn test_wrap_ring() {
        let wrapped = wrap_ring(&array![[1, 1]], 9);
        assert_eq!(wrapped, array![[9, 9, 9, 9], [9, 1, 1, 9], [9, 9, 9, 9]]);
    }
}
