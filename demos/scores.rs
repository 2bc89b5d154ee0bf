use sovran_collections::{statistics, CollectionError, SafeSlice};

/// Demonstrates descriptive statistics over a shared slice of scores
fn main() -> Result<(), CollectionError> {
    tracing_subscriber::fmt::init();

    let scores = SafeSlice::from(vec![72, 88, 95, 61, 88, 79, 88, 54, 91]);
    scores.add(67).add(79);

    let values = scores.values();
    println!("Scores: {}", scores);
    println!("Median: {}", statistics::median(&values)?);
    println!("Mean: {:.2}", statistics::mean(&values)?);
    println!("Std dev: {:.2}", statistics::standard_deviation(&values)?);

    let (low, high) = statistics::range(&values)?;
    println!("Range: {} - {}", low, high);
    println!("90th percentile: {}", statistics::percentile(&values, 0.9)?);
    println!("Mode: {:?}", scores.mode());

    let passing = scores.filter(|score| *score >= 70);
    println!("Passing: {} of {}", passing.len(), scores.len());

    let distinct = scores.unique();
    println!("Distinct scores: {}", distinct);

    // Statistics report errors instead of sentinel values
    let empty = SafeSlice::<f64>::new();
    match statistics::mean(&empty.values()) {
        Ok(mean) => println!("Mean of nothing: {}", mean),
        Err(e) => println!("Expected error: {}", e),
    }

    Ok(())
}
