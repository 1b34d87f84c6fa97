use std::env;

use recipe_extractor::extract_from_url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let recipe = extract_from_url(url).await?;
    println!("{}", recipe.to_plain_text());

    Ok(())
}
