use dimmat_core::{
    matrices_equal, submatrix, transpose, DenseMatrix, Factory, Matrix, MatrixError, Shape,
    ShapeMismatch,
};
use dimmat_testgen::strategy::{arb_shape, arb_sized_matrix, arb_window, small_int_elems};
use dimmat_testgen::{small_ints, MatrixGen};
use proptest::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// A shape together with exactly `rows * cols` row-major elements.
fn arb_shape_and_elements() -> impl Strategy<Value = (Shape, Vec<i64>)> {
    arb_shape(6, 6).prop_flat_map(|shape| {
        (
            Just(shape),
            proptest::collection::vec(small_int_elems(), shape.len()),
        )
    })
}

type Corner = (usize, usize);

// A matrix together with a valid window inside it.
fn arb_matrix_and_window() -> impl Strategy<Value = (DenseMatrix<i64>, Corner, Corner)> {
    arb_sized_matrix(6, 6, small_int_elems()).prop_flat_map(|m| {
        let shape = m.shape();
        (Just(m), arb_window(shape))
            .prop_map(|(m, (top_left, bottom_right))| (m, top_left, bottom_right))
    })
}

proptest! {
    #[test]
    fn prop_row_major_places_every_element((shape, elements) in arb_shape_and_elements()) {
        init_logger();
        let m = Factory::with_shape(shape).row_major(elements.clone()).unwrap();
        for r in 0..shape.rows() {
            for c in 0..shape.cols() {
                prop_assert_eq!(m.get(r, c).unwrap(), elements[r * shape.cols() + c]);
            }
        }
    }

    #[test]
    fn prop_row_major_rejects_wrong_lengths(shape in arb_shape(6, 6), grow in any::<bool>()) {
        let len = if grow { shape.len() + 1 } else { shape.len() - 1 };
        prop_assert_eq!(
            Factory::<i64>::with_shape(shape).row_major(vec![0; len]).unwrap_err(),
            MatrixError::ShapeMismatch(ShapeMismatch::ElementCount {
                expected: shape.len(),
                actual: len
            })
        );
    }

    #[test]
    fn prop_double_transpose_is_identity(m in arb_sized_matrix(6, 6, small_int_elems())) {
        let tt = transpose(transpose(&m));
        prop_assert!(matrices_equal(&tt, &m).unwrap());
    }

    #[test]
    fn prop_transpose_swaps_indices(m in arb_sized_matrix(6, 6, small_int_elems())) {
        let t = transpose(&m);
        prop_assert_eq!(t.shape(), m.shape().transposed());
        for r in 0..m.rows() {
            for c in 0..m.cols() {
                prop_assert_eq!(t.get(c, r).unwrap(), m.get(r, c).unwrap());
            }
        }
    }

    #[test]
    fn prop_full_window_matches_source(m in arb_sized_matrix(6, 6, small_int_elems())) {
        let window = submatrix(&m, (0, 0), (m.rows() - 1, m.cols() - 1)).unwrap();
        prop_assert!(matrices_equal(&window, &m).unwrap());
    }

    #[test]
    fn prop_windows_read_through((m, top_left, bottom_right) in arb_matrix_and_window()) {
        let (r0, c0) = top_left;
        let (r1, c1) = bottom_right;
        let window = submatrix(&m, top_left, bottom_right).unwrap();
        prop_assert_eq!(window.shape(), Shape::new(r1 - r0 + 1, c1 - c0 + 1).unwrap());
        for r in 0..window.rows() {
            for c in 0..window.cols() {
                prop_assert_eq!(window.get(r, c).unwrap(), m.get(r + r0, c + c0).unwrap());
            }
        }
    }

    #[test]
    fn prop_identity_diagonal(n in 1usize..=8) {
        let eye = Factory::<i64>::square(n).unwrap().identity().unwrap();
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1 } else { 0 };
                prop_assert_eq!(eye.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn prop_zeros_ones_and_non_square_identity(shape in arb_shape(6, 6)) {
        let factory = Factory::<f64>::with_shape(shape);
        prop_assert!(factory.zeros().unwrap().iter().all(|x| x.unwrap() == 0.0));
        prop_assert!(factory.ones().unwrap().iter().all(|x| x.unwrap() == 1.0));
        if !shape.is_square() {
            prop_assert_eq!(factory.identity(), Err(MatrixError::NotSquare(shape)));
        }
    }

    #[test]
    fn prop_out_of_range_reads_always_fail(shape in arb_shape(6, 6), extra in 0usize..4) {
        let m = Factory::<i64>::with_shape(shape).zeros().unwrap();
        let t = transpose(&m);
        for (row, col) in [
            (shape.rows() + extra, 0),
            (0, shape.cols() + extra),
            (shape.rows(), shape.cols()),
            (usize::MAX, 0),
        ] {
            prop_assert!(matches!(m.get(row, col), Err(MatrixError::OutOfBounds { .. })), "expected OutOfBounds for m.get({}, {})", row, col);
            prop_assert!(matches!(t.get(col, row), Err(MatrixError::OutOfBounds { .. })), "expected OutOfBounds for t.get({}, {})", col, row);
        }
    }
}

#[test]
fn test_views_over_shared_matrix_across_threads() {
    init_logger();
    let m = std::sync::Arc::new(
        MatrixGen::new(Factory::new(8, 8).unwrap(), 9)
            .generate(small_ints)
            .unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let m = std::sync::Arc::clone(&m);
            std::thread::spawn(move || {
                let window = submatrix(transpose(m), (i, i), (i + 3, i + 3)).unwrap();
                window.to_row_major().unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = submatrix(transpose(&*m), (i, i), (i + 3, i + 3))
            .unwrap()
            .to_row_major()
            .unwrap();
        assert_eq!(handle.join().unwrap(), expected);
    }
}
