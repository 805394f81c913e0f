//! Randomized checks of algebraic identities that must hold for every input.

use dense_linalg::*;
use fastrand::Rng;

const ROUNDS: usize = 50;

fn init() -> Rng {
    let _ = env_logger::builder().is_test(true).try_init();
    Rng::with_seed(0x6c69_6e61_6c67)
}

fn random_int<const R: usize, const C: usize>(rng: &mut Rng) -> Matrix<i64, R, C> {
    Matrix::from_fn(|_, _| rng.i64(-9..=9))
}

fn random_float<const R: usize, const C: usize>(rng: &mut Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 2.0 - 1.0)
}

/// A strictly diagonally dominant, and therefore invertible, matrix.
fn random_invertible<const N: usize>(rng: &mut Rng) -> Matrix<f64, N, N> {
    let m = random_float::<N, N>(rng);
    &m + &Matrix::from_diagonal(Vector::<f64, N>::splat(N as f64))
}

/// A 3x3 matrix whose last row repeats the first one.
///
/// The first row starts with 1.0, so eliminating the copy is exact.
fn random_singular(rng: &mut Rng) -> Matrix<f64, 3, 3> {
    let first = [1.0, rng.f64() * 2.0 - 1.0, rng.f64() * 2.0 - 1.0];
    let second = [rng.f64() * 2.0 - 1.0, rng.f64() + 1.0, rng.f64() * 2.0 - 1.0];
    Matrix::from_rows([first, second, first])
}

#[test]
fn multiplication_is_associative() {
    let mut rng = init();
    for _ in 0..ROUNDS {
        let a = random_int::<2, 3>(&mut rng);
        let b = random_int::<3, 4>(&mut rng);
        let c = random_int::<4, 2>(&mut rng);
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }
}

#[test]
fn chain_matches_fold() {
    let mut rng = init();
    for _ in 0..ROUNDS {
        let a = random_int::<5, 1>(&mut rng);
        let b = random_int::<1, 6>(&mut rng);
        let c = random_int::<6, 2>(&mut rng);
        let d = random_int::<2, 7>(&mut rng);
        let e = random_int::<7, 3>(&mut rng);

        let fold = &(&(&(&a * &b) * &c) * &d) * &e;
        let chain = a.chain() * &b * &c * &d * &e;
        assert!(chain.plan().cost() <= chain.plan().naive_cost());
        assert_eq!(chain.evaluate(), fold);

        let parallel = Config::default().with_parallelism(Parallelism::Threshold(0));
        assert_eq!(chain.evaluate_with(&parallel), fold);

        let split = (a.chain() * &b) * (c.chain() * &d * &e);
        assert_eq!(Matrix::from(split), fold);
    }
}

#[test]
fn transpose_round_trip() {
    let mut rng = init();
    for _ in 0..ROUNDS {
        let a = random_int::<3, 5>(&mut rng);
        let b = random_int::<5, 4>(&mut rng);
        assert_eq!(a.transposed().transposed(), a);
        assert_eq!((&a * &b).transposed(), &b.transposed() * &a.transposed());
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    let mut rng = init();
    for _ in 0..ROUNDS {
        let m = random_invertible::<4>(&mut rng);
        let inv = m.inverted().unwrap();
        assert_approx_eq!(&inv * &m, *Mat4::identity()).abs(1e-12);
        assert_approx_eq!(&m * &inv, *Mat4::identity()).abs(1e-12);
        assert_approx_eq!(inv.determinant() * m.determinant(), 1.0).abs(1e-12);
    }

    // Large enough to live on the heap.
    let m = random_invertible::<6>(&mut rng);
    assert!(!m.is_inline());
    let inv = m.inverted().unwrap();
    assert_approx_eq!(&inv * &m, *Matrix::<f64, 6, 6>::identity()).abs(1e-12);
}

#[test]
fn zero_determinant_iff_singular() {
    let mut rng = init();
    for _ in 0..ROUNDS {
        let singular = random_singular(&mut rng);
        assert_eq!(singular.determinant(), 0.0);
        assert_eq!(singular.inverted(), Err(LinalgError::SingularMatrix));
        assert_eq!(singular.rank(), 2);

        let regular = random_invertible::<3>(&mut rng);
        assert_ne!(regular.determinant(), 0.0);
        assert!(regular.inverted().is_ok());
        assert_eq!(regular.rank(), 3);
    }
}

#[test]
fn rank_bounds() {
    let mut rng = init();
    for _ in 0..ROUNDS {
        let wide = random_float::<3, 5>(&mut rng);
        let tall = random_float::<5, 2>(&mut rng);
        assert!(wide.rank() <= 3);
        assert!(tall.rank() <= 2);
        assert_eq!(wide.rank(), wide.transposed().rank());
    }

    assert_eq!(Mat4d::identity().rank(), 4);
    assert_eq!(Matrix::<f64, 3, 7>::zero().rank(), 0);
    assert_eq!(Matrix::<f64, 7, 3>::zero().rank(), 0);
}

#[test]
fn solve_recovers_solution() {
    let mut rng = init();
    for _ in 0..ROUNDS {
        let a = random_invertible::<4>(&mut rng);
        let x = Vector::<f64, 4>::from_fn(|_| rng.f64() * 10.0 - 5.0);
        let b = &a * &x;

        assert_approx_eq!(a.solve(&b), Solution::Determinate(x)).abs(1e-9);
    }
}

#[test]
fn solve_spans_solution_set() {
    let mut rng = init();
    for _ in 0..ROUNDS {
        let singular = random_singular(&mut rng);
        let x = vec3(rng.f64(), rng.f64(), rng.f64());
        let b = &singular * &x;

        let solution = singular.solve_with(&b, &Config::tolerant());
        assert_eq!(solution.kind(), SolutionKind::Indeterminate);
        assert_eq!(solution.directions().len(), 1);
        for t in [-1.0, 0.0, 2.5] {
            let point = solution.point(&[t]).unwrap();
            assert_approx_eq!(&singular * &point, b).abs(1e-9);
        }
    }
}

#[test]
fn solver_examples() {
    init();
    let a = Matrix::from_rows([[1.0, 1.0], [2.0, 2.0]]);
    let solution = a.solve(&vec2(3.0, 6.0));
    assert_eq!(
        solution,
        Solution::Indeterminate {
            constant: vec2(3.0, 0.0),
            directions: vec![vec2(-1.0, 1.0)],
        }
    );

    assert_eq!(
        Mat2d::identity().solve(&vec2(5.0, 7.0)),
        Solution::Determinate(vec2(5.0, 7.0))
    );

    let contradictory = Mat2d::zero().solve(&vec2(1.0, 0.0));
    assert_eq!(contradictory, Solution::Contradictory);
    assert_eq!(
        contradictory.into_result(),
        Err(LinalgError::ContradictorySystem)
    );
}

#[test]
fn three_by_three_example() {
    init();
    let m = Matrix::from_rows([[1.0, 9.0, 1.0], [1.0, 1.0, -3.0], [0.0, 1.0, 1.0]]);
    assert_eq!(m.determinant(), -4.0);
    assert_eq!(m.rank(), 3);

    let inv = m.inverted().unwrap();
    let expected = Matrix::from_rows([
        [-1.0, 2.0, 7.0],
        [0.25, -0.25, -1.0],
        [-0.25, 0.25, 2.0],
    ]);
    assert_approx_eq!(inv, expected).abs(1e-12);
    assert_approx_eq!(&inv * &m, *Mat3::identity()).abs(1e-12);
}

#[test]
fn mixed_dimensions() {
    let a = vec2(1, 2);
    let b = vec4(10, 20, 30, 40);
    assert_eq!(a.add_padded::<4, 4>(&b), vec4(11, 22, 30, 40));
    assert_eq!(b.resize::<2>(), vec2(10, 20));
    assert_eq!(a.convert_resize::<f64, 3>(), vec3(1.0, 2.0, 0.0));

    let m = Matrix::<i32, 5, 5>::from_fn(|r, c| (r * 5 + c) as i32);
    let small: Mat2<i32> = m.resize();
    assert_eq!(small, Matrix::from_rows([[0, 1], [5, 6]]));
    assert_eq!(small.resize::<5, 5>().resize::<2, 2>(), small);
}
