use gdrive_api::{ClientConfig, DriveApi, DriveClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::args()
        .nth(1)
        .expect("usage: list_files <access-token>");

    let client = DriveClient::new(ClientConfig::new(), token);

    println!("Listing files...");
    let files = client.list_all_files().await?;
    println!("Found {} files:", files.len());

    for file in &files {
        println!(
            "  {}  {}  {}",
            file.id,
            file.mime_type,
            file.name
        );
    }

    Ok(())
}
