// Thin SVD of a small non-symmetric matrix.
// Prints U, the singular values and V, then the absolute and relative
// reconstruction error of U · diag(σ) · Vᵗ and the solver's convergence report.

use jacobi_svd::DynMatrix;

fn main() {
    let a = DynMatrix::from_rows(3, 3, &[
        3.0_f64, 1.0, 1.0,
        -1.0, 3.0, 1.0,
        0.0, 0.0, 2.0,
    ])
    .expect("3x3 buffer");

    let svd = a.svd().expect("SVD failed");

    println!("A =\n{:.4}\n", a);
    println!("U =\n{:.6}\n", svd.u());
    let sigma: Vec<String> = svd
        .singular_values()
        .iter()
        .map(|s| format!("{s:.6}"))
        .collect();
    println!("S = [{}]\n", sigma.join(", "));
    println!("V =\n{:.6}\n", svd.v());

    let residual = &svd.reconstruct() - &a;
    let report = svd.report();
    println!("max |U·S·Vᵗ - A| = {:.3e}", residual.max_abs());
    println!(
        "‖U·S·Vᵗ - A‖ / ‖A‖ = {:.3e}",
        residual.frobenius_norm() / a.frobenius_norm()
    );
    println!(
        "sweeps = {}, converged = {}, off-diagonal = {:.3e}",
        report.sweeps, report.converged, report.off_diagonal
    );
}
