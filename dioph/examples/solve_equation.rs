use dioph::solver;

// Find non-negative solutions of two small linear diophantine equations.
fn main() {
    // 3x + 11y + 17z = 71
    match solver::solve(71u32, &[3, 11, 17]) {
        Ok(solution) => println!("Solution: {solution:?}"),
        Err(e) => println!("{e}"),
    }

    // 2x + 4y = 7 has none.
    match solver::solve(7u32, &[2, 4]) {
        Ok(solution) => println!("Solution: {solution:?}"),
        Err(e) => println!("{e}"),
    }
}
