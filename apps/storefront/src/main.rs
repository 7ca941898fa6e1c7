//! Storefront binary entry point.
//!
//! Runs the scripted ordering walkthrough in `ovenfresh_storefront::run`.

#[tokio::main]
async fn main() {
    if let Err(err) = ovenfresh_storefront::run().await {
        eprintln!("storefront error: {err}");
        std::process::exit(1);
    }
}
