use harris_cli::HarrisPipeline;
use harris_detect::{DetectorBuilder, DetectorConfig, HarrisParams};
use image::{GrayImage, Luma};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Harris Configuration Serialization Demo");
    println!("=======================================\n");

    let dir = std::env::temp_dir().join("harris_config_demo");
    std::fs::create_dir_all(&dir)?;

    // Demo 1: Create configurations
    println!("Demo 1: Creating Configurations");
    let default_config = DetectorConfig::default().with_metadata("Default", "Stock detector settings");
    let sparse_config = DetectorBuilder::new()
        .threshold(0.2)
        .min_distance(25.0)
        .to_config()
        .with_metadata("Sparse", "Only the strongest, well separated corners");
    let dense_config = DetectorConfig::new(HarrisParams {
        window_size: 3,
        max_corners: 2000,
        min_distance: 3.0,
        ..HarrisParams::default()
    })
    .with_metadata("Dense", "Small window and short spacing");

    for config in [&default_config, &sparse_config, &dense_config] {
        println!("   - {}", config.summary());
    }

    // Demo 2: JSON
    println!("\nDemo 2: JSON Serialization");
    println!("{}", sparse_config.to_json()?);
    let json_path = dir.join("sparse.json");
    sparse_config.save_json(&json_path)?;
    println!("   Saved {}", json_path.display());

    // Demo 3: TOML, the format the `harris` binary reads
    println!("\nDemo 3: TOML Serialization");
    println!("{}", dense_config.to_toml()?);
    let toml_path = dir.join("dense.toml");
    dense_config.save_toml(&toml_path)?;
    println!("   Saved {}", toml_path.display());

    // Demo 4: Load, validate and run
    println!("\nDemo 4: Loading and Detection");
    let loaded_json = DetectorConfig::load_json(&json_path)?;
    let loaded_toml = DetectorConfig::load_toml(&toml_path)?;
    assert_eq!(loaded_json, sparse_config);
    assert_eq!(loaded_toml, dense_config);

    let input = dir.join("square.png");
    GrayImage::from_fn(64, 64, |x, y| {
        if (16..48).contains(&x) && (16..48).contains(&y) { Luma([200]) } else { Luma([40]) }
    })
    .save(&input)?;

    for (label, config) in [("JSON", &loaded_json), ("TOML", &loaded_toml)] {
        let pipeline = HarrisPipeline::from_config(config)?;
        let output = dir.join(format!("corners_{}.png", label.to_lowercase()));
        let corners = pipeline.run(&input, &output)?;
        println!("   {}: {} corners -> {}", label, corners.len(), output.display());
    }

    // Demo 5: Invalid configurations are rejected on load
    println!("\nDemo 5: Validation");
    let bad = "[params]\nwindow_size = 4\n";
    match DetectorConfig::from_toml(bad) {
        Ok(_) => println!("   unexpected: even window accepted"),
        Err(e) => println!("   rejected: {}", e),
    }

    // Missing fields fall back to defaults
    let partial = DetectorConfig::from_toml("[params]\nthreshold = 0.05\n")?;
    println!("   partial TOML -> {}", partial.summary());

    println!("\nConfiguration demo completed!");
    Ok(())
}
