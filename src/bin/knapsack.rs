use dp_algos::cs::dynamic::knapsack_01_solution;

fn show(weights: &[usize], values: &[u64], capacity: usize) -> dp_algos::Result<u64> {
    println!("Items available:");
    for (i, (weight, value)) in weights.iter().zip(values).enumerate() {
        let label = char::from(b'A' + i as u8);
        println!("  - Item {label}: weight = {weight}, value = {value}");
    }
    println!("Knapsack capacity: {capacity}");

    let solution = knapsack_01_solution(weights, values, capacity)?;
    let picked: Vec<char> = solution
        .items
        .iter()
        .map(|&i| char::from(b'A' + i as u8))
        .collect();
    println!(
        "\nMaximum value that can be carried: {} (items {:?}, total weight {})",
        solution.value, picked, solution.weight
    );
    Ok(solution.value)
}

fn main() -> dp_algos::Result<()> {
    println!("Solving the 0/1 Knapsack Problem!\n");
    assert_eq!(show(&[10, 20, 30], &[60, 100, 120], 50)?, 220);

    println!("\n--- Another Example ---\n");
    assert_eq!(show(&[5, 4, 6, 3], &[10, 40, 30, 50], 10)?, 90);

    println!("\n--- Mismatched input ---\n");
    match knapsack_01_solution(&[1, 2, 3], &[10, 20], 5) {
        Ok(solution) => println!("unexpected solution: {solution:?}"),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}
