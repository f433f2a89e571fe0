use cleanse::{cleanse_batch, CleanseConfig};

fn main() {
    let fixtures: [Option<&str>; 7] = [
        Some("AWWWwwwThis ppPPPP AA"),
        Some("This $$$ is the $"),
        Some("A-444-is-the-44"),
        None,
        Some("4444"),
        Some(""),
        Some("String C"),
    ];

    match cleanse_batch(&fixtures, &CleanseConfig::default()) {
        Ok(batch) => {
            println!("input entries: {}", batch.input_count);
            println!("dropped:       {}", batch.dropped);
            println!("unique:        {}", batch.values.len());
            for value in &batch.values {
                println!("cleansed -> \"{value}\"");
            }
        }
        Err(err) => eprintln!("cleanse failed: {err}"),
    }
}
