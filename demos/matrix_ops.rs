use cachemat::{Matrix, Vector, chain_multiply, cross, dot};

fn main() -> Result<(), cachemat::MatError> {
    let a = Matrix::<f64>::identity(3)?;
    let b = Matrix::from_vec(3, 3, vec![0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0])?;
    let c = Matrix::from_vec(3, 3, vec![2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0])?;
    let p1 = Vector::from_vec(vec![1.0, 2.0, 3.0])?;
    let p2 = Vector::from_vec(vec![4.0, 5.0, 6.0])?;

    println!("A (identity):\n{a}");
    println!("B (rotation):\n{b}");
    println!("p1 = {:?}\np2 = {:?}", p1.as_slice(), p2.as_slice());

    println!("\nAB:\n{}", a.multiply(&b)?);
    println!("A p1 = {:?}", a.multiply(&p1)?.as_slice());
    println!("A^T p1 = {:?}", a.transpose().multiply(&p1)?.as_slice());
    match a.inverse().and_then(|inv| inv.multiply(&p1)) {
        Ok(x) => println!("A^-1 p1 = {:?}", x.as_slice()),
        Err(e) => println!("A^-1 p1 failed: {e}"),
    }
    println!("p1 x p2 = {:?}", cross(&p1, &p2)?.as_slice());
    println!("p1^T p2 = {}", dot(&p1, &p2)?);
    println!("\nABC:\n{}", chain_multiply(&[&a, &b, &c])?);
    println!("\nB^-1:\n{}", b.inverse()?);
    println!("\nB^T:\n{}", b.transpose());
    println!("\ndet(B) = {:.2}", b.determinant()?);
    Ok(())
}
