use redeem_vector::{vector, Vector, VectorError};

fn main() -> Result<(), VectorError> {
    env_logger::init();

    let mut v1 = vector![1, 2, 3];
    let mut v2 = vector![4, 5, 6];

    println!("v1 + v2 = {}", &v1 + &v2); // (5, 7, 9)
    println!("v1 * 2 = {}", &v1 * 2); // (2, 4, 6)
    println!("v1 * v2 = {}", v1.dot(&v2)?); // 32
    println!("v1[1] = {}", v1.get(1)?); // 2

    v1.swap(&mut v2)?;
    println!("Swapped v1 = {}", v1); // (4, 5, 6)
    println!("Swapped v2 = {}", v2); // (1, 2, 3)

    v1.clear();
    println!("v1 is empty: {}", v1.is_empty());
    if let Err(err) = v1.pop_back() {
        println!("pop_back on empty vector: {}", err);
    }

    // Run with RUST_LOG=trace to see capacity growth.
    let mut grown: Vector<f64> = Vector::empty();
    for i in 0..20 {
        grown.push_back(i as f64 * 0.5)?;
    }
    println!(
        "{} pushes: capacity {}, {} growth events, |v| = {:.3}",
        grown.len(),
        grown.capacity(),
        grown.growth_events(),
        grown.magnitude()
    );

    Ok(())
}
