use matrixkit::{ColMajorMatrix, DenseMatrix, MatError, Matrix, MatrixOps, RenderOptions};

fn main() -> Result<(), MatError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 3x2 numbered column by column, 2x3 numbered row by row
    let mut a = DenseMatrix::<i64>::create(3, 2)?;
    a.fill_col_wise();
    let mut b = ColMajorMatrix::<i64>::create(2, 3)?;
    b.fill_row_wise();

    println!("A =\n{a}");
    println!("B =\n{b}");

    let p = a.multiply(&b)?;
    println!("A * B =\n{}", p.render(&RenderOptions::with_width(5))?);

    let id = DenseMatrix::<i64>::identity(3)?;
    println!("(A * B) * I == A * B: {}", p.multiply(&id)?.equals(&p));
    println!("A^T =\n{}", a.transpose());

    match a.add(&b) {
        Ok(_) => println!("unexpected: 3x2 + 2x3 succeeded"),
        Err(e) => println!("A + B rejected: {e}"),
    }
    Ok(())
}
