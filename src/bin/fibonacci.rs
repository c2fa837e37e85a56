use dp_algos::cs::dynamic::{
    fibonacci_big, fibonacci_memoized, fibonacci_tabulated, FibonacciMemo,
};

fn main() -> dp_algos::Result<()> {
    let how_many = 10;
    println!("Calculating the first {how_many} Fibonacci numbers:\n");

    println!("Using memoization (fresh cache per call):");
    for i in 0..how_many {
        println!("F({i}) = {}", fibonacci_memoized(i)?);
    }

    println!("\nUsing memoization (one cache shared across calls):");
    let mut memo = FibonacciMemo::new();
    for i in 0..how_many {
        println!("F({i}) = {}", memo.get(i)?);
    }
    println!("cached terms: {}", memo.len());

    println!("\nUsing tabulation:");
    for i in 0..how_many {
        let tabulated = fibonacci_tabulated(i)?;
        assert_eq!(tabulated, fibonacci_memoized(i)?);
        println!("F({i}) = {tabulated}");
    }

    println!("\nBoth methods give the same results!");
    println!("\nF(150) = {}", fibonacci_tabulated(150)?);
    println!("F(300) = {}", fibonacci_big(300));
    Ok(())
}
