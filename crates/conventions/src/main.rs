use std::process;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = conventions_cli::main(&args).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
