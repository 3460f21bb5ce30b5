//! Solve the worked exercises and print the results
//!
//! ```bash
//! cargo run -p matgeo-algos --example exercises
//! RUST_LOG=debug cargo run -p matgeo-algos --example exercises
//! ```

use matgeo_algos::{
    calculate_rank, classify_vectors, eigenvalue_product, find_eigenvalues, inner_product,
    normal_to_hyperbola, spanning_plane_normal, AlgoResult, Dependence,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> AlgoResult<()> {
    // 10.4.3
    let normal = normal_to_hyperbola(3.0, -4.0)?;
    let [x, y] = normal.contact;
    println!("10.4.3  normal to x² − xy + 1 = 0 perpendicular to 3x − 4y − 7 = 0");
    println!("        point of contact ({x:.1}, {y:.2})");
    if let Some(slope) = normal.slope() {
        println!("        normal slope {slope:.4}");
    }

    // 12.353
    let (v1, v2, v3) = ([1.0, 0.0, 1.0], [2.0, 3.0, 1.0], [5.0, 6.0, 4.0]);
    println!("12.353  v1 = {v1:?}, v2 = {v2:?}, v3 = {v3:?}");
    match classify_vectors(&v1, &v2, &v3) {
        Dependence::Dependent => {
            println!("        linearly dependent (coplanar)");
            if let Some(n) = spanning_plane_normal(&v1, &v2, &v3) {
                println!("        plane normal {n:?}");
            }
        }
        Dependence::Independent => println!("        linearly independent"),
    }

    // 12.561
    let a = [[2.0, -1.0, -1.0], [-1.0, 2.0, -1.0], [-1.0, -1.0, 2.0]];
    let rank = calculate_rank(&a);
    println!("12.561  ρ(A) = {rank}, n = 3");
    if rank < 3 {
        println!("        ρ(A) < n: infinitely many solutions");
    } else {
        println!("        ρ(A) = n: only the trivial solution");
    }

    // 12.665
    let a = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];
    let values = find_eigenvalues(&a);
    println!("12.665  eigenvalues {values:?}");
    println!("        product {}", eigenvalue_product(&a));

    // 12.873
    let r2 = std::f64::consts::SQRT_2;
    let (a, b) = ([r2, 1.0 / r2, 1.0], [1.0 / r2, r2, -1.0]);
    println!("12.873  a·b = {}", inner_product(&a, &b));

    Ok(())
}
