//! Queries the park-boundary feature service and prints the sorted park
//! list, the way the park selection combobox would be populated.

use waymark::parks::{ParkSelect, RestParkSource};
use waymark::scene::SceneConfig;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = SceneConfig::default();
    let source = RestParkSource::new(config.park_boundaries.url.as_str());

    let mut select = ParkSelect::new();
    println!("{}", select.placeholder());

    if let Err(error) = select.load_from(&source).await {
        eprintln!("park query failed: {error}");
        return;
    }

    println!("{}", select.placeholder());
    for option in select.options().iter().take(20) {
        println!("{:>4}  {}", option.value(), option.label());
    }
}
